#[cfg(test)]
mod tests {
    use cosmwasm_std::{coin, coins, Addr, Uint128};
    use cw_multi_test::{App, BankSudo, Executor, SudoMsg};
    use lottery::{error::ContractError, state::LotteryState};

    use crate::{
        common_setup::{
            constants::{ENTRANCE_FEE, INTERVAL, NATIVE_DENOM, NOIS_AMOUNT, NOIS_DENOM, OWNER_ADDR},
            contract_boxes::custom_mock_app,
            helpers::{assert_error, event_attribute, plus_block_seconds, setup_block_time},
            msg::LotteryContracts,
            setup_accounts_and_block::setup_lottery_participants,
            setup_lottery::{
                default_instantiate_msg, instantiate_nois, lottery_code_ids,
                proper_lottery_instantiate, GENESIS_TIME,
            },
        },
        lottery::setup::{
            execute_msg::{enter_template, trigger_draw},
            helpers::{draw_due, lottery_state, pending_request, proxy_requests, round_info},
            test_msgs::EnterParams,
        },
    };

    fn enter_one(app: &mut App, contracts: &LotteryContracts, player: Addr) {
        enter_template(EnterParams {
            app,
            lottery_contract_addr: contracts.lottery.clone(),
            msg_senders: vec![player],
            funds_send: coins(ENTRANCE_FEE, NATIVE_DENOM),
        })
        .unwrap();
    }

    /// Lottery wired to a proxy charging `proxy_fee`, the lottery holding no proxy fee coins
    fn unfunded_lottery(proxy_fee: cosmwasm_std::Coin) -> (App, LotteryContracts) {
        let mut app = custom_mock_app();
        setup_block_time(&mut app, GENESIS_TIME, Some(10000));
        let code_ids = lottery_code_ids(&mut app);
        let nois = instantiate_nois(&mut app, &code_ids, proxy_fee.clone());
        let mut msg = default_instantiate_msg(&nois);
        msg.nois_proxy_coin = proxy_fee;
        let lottery = app
            .instantiate_contract(
                code_ids.lottery_code_id,
                Addr::unchecked(OWNER_ADDR),
                &msg,
                &[],
                "lottery",
                None,
            )
            .unwrap();
        (app, LotteryContracts { lottery, nois })
    }

    #[test]
    fn draw_is_not_due_before_the_interval() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, _, _, _, _, _) = setup_lottery_participants(&mut app);
        enter_one(&mut app, &contracts, one);

        plus_block_seconds(&mut app, 10);
        assert!(!draw_due(&app, &contracts));
        assert_error(
            trigger_draw(&mut app, &contracts.lottery),
            ContractError::UpkeepNotNeeded {
                balance: Uint128::new(ENTRANCE_FEE),
                players: 1,
                state: LotteryState::Open,
            }
            .to_string(),
        );
        assert_eq!(lottery_state(&app, &contracts), LotteryState::Open);

        // the interval is inclusive
        plus_block_seconds(&mut app, INTERVAL - 10);
        assert!(draw_due(&app, &contracts));
    }

    #[test]
    fn draw_is_not_due_without_players() {
        let (mut app, contracts) = proper_lottery_instantiate();
        plus_block_seconds(&mut app, INTERVAL * 10);
        assert!(!draw_due(&app, &contracts));
        assert_error(
            trigger_draw(&mut app, &contracts.lottery),
            ContractError::UpkeepNotNeeded {
                balance: Uint128::zero(),
                players: 0,
                state: LotteryState::Open,
            }
            .to_string(),
        );

        // a donation alone doesn't make a round
        app.sudo(SudoMsg::Bank(BankSudo::Mint {
            to_address: contracts.lottery.to_string(),
            amount: coins(ENTRANCE_FEE, NATIVE_DENOM),
        }))
        .unwrap();
        assert!(!draw_due(&app, &contracts));
    }

    #[test]
    fn trigger_requests_randomness_once() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, _, _, _, _, _) = setup_lottery_participants(&mut app);
        enter_one(&mut app, &contracts, one);
        plus_block_seconds(&mut app, INTERVAL + 1);
        let nois_before = app
            .wrap()
            .query_balance(&contracts.lottery, NOIS_DENOM)
            .unwrap()
            .amount;

        let res = trigger_draw(&mut app, &contracts.lottery).unwrap();
        assert_eq!(
            event_attribute(&res, "requested_draw", "request_id"),
            Some("lottery-round-0".to_string())
        );
        assert_eq!(
            event_attribute(&res, "requested_draw", "num_words"),
            Some("1".to_string())
        );
        assert_eq!(
            event_attribute(&res, "requested_draw", "request_confirmations"),
            Some("3".to_string())
        );
        assert_eq!(
            event_attribute(&res, "requested_draw", "callback_gas_limit"),
            Some("500000".to_string())
        );

        assert_eq!(lottery_state(&app, &contracts), LotteryState::Calculating);
        assert_eq!(
            pending_request(&app, &contracts),
            Some("lottery-round-0".to_string())
        );
        assert_eq!(proxy_requests(&app, &contracts), vec!["lottery-round-0"]);
        // the proxy was paid from the fee coins, not the pool
        let nois_after = app
            .wrap()
            .query_balance(&contracts.lottery, NOIS_DENOM)
            .unwrap()
            .amount;
        assert_eq!(nois_before - nois_after, Uint128::new(NOIS_AMOUNT));

        // at most one request in flight
        assert!(!draw_due(&app, &contracts));
        assert_error(
            trigger_draw(&mut app, &contracts.lottery),
            ContractError::UpkeepNotNeeded {
                balance: Uint128::new(ENTRANCE_FEE),
                players: 1,
                state: LotteryState::Calculating,
            }
            .to_string(),
        );
        plus_block_seconds(&mut app, INTERVAL * 100);
        trigger_draw(&mut app, &contracts.lottery).unwrap_err();
        assert_eq!(proxy_requests(&app, &contracts).len(), 1);
    }

    #[test]
    fn rejected_request_keeps_the_round_open() {
        let (mut app, contracts) = unfunded_lottery(coin(NOIS_AMOUNT, NOIS_DENOM));
        let (one, _, _, _, _, _) = setup_lottery_participants(&mut app);
        enter_one(&mut app, &contracts, one);
        plus_block_seconds(&mut app, INTERVAL + 1);

        let err = trigger_draw(&mut app, &contracts.lottery).unwrap_err();
        let expected = ContractError::RandomnessRequestFailed {
            reason: String::new(),
        }
        .to_string();
        assert!(err.root_cause().to_string().starts_with(&expected));

        let round = round_info(&app, &contracts);
        assert_eq!(round.state, LotteryState::Open);
        assert_eq!(round.pending_request, None);
        assert_eq!(round.player_count, 1);
        assert!(proxy_requests(&app, &contracts).is_empty());
        // still due, a keeper can try again once the fee coins arrive
        assert!(draw_due(&app, &contracts));
    }

    #[test]
    fn free_proxy_gets_no_funds() {
        let (mut app, contracts) = unfunded_lottery(coin(0, NATIVE_DENOM));
        let (one, _, _, _, _, _) = setup_lottery_participants(&mut app);
        enter_one(&mut app, &contracts, one);
        plus_block_seconds(&mut app, INTERVAL);

        // the fake proxy refuses any funds when its fee is zero
        trigger_draw(&mut app, &contracts.lottery).unwrap();
        assert_eq!(lottery_state(&app, &contracts), LotteryState::Calculating);
        assert_eq!(proxy_requests(&app, &contracts), vec!["lottery-round-0"]);
    }
}
