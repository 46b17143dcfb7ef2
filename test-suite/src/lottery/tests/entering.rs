#[cfg(test)]
mod tests {
    use cosmwasm_std::{coin, coins, Uint128};
    use cw_multi_test::Executor;
    use lottery::{error::ContractError, msg::ExecuteMsg as LotteryExecuteMsg};
    use utils::payment::PaymentError;

    use crate::{
        common_setup::{
            constants::{ENTRANCE_FEE, INTERVAL, NATIVE_DENOM},
            helpers::{assert_error, event_attribute, plus_block_seconds},
            setup_accounts_and_block::{
                setup_foreign_account, setup_lottery_participants, INITIAL_BALANCE,
            },
            setup_lottery::proper_lottery_instantiate,
        },
        lottery::setup::{
            execute_msg::{enter_template, trigger_draw},
            helpers::{native_balance, number_of_players, players, pool_balance},
            test_msgs::EnterParams,
        },
    };

    #[test]
    fn enter_the_current_round() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, two, _, _, _, _) = setup_lottery_participants(&mut app);

        let res = enter_template(EnterParams {
            app: &mut app,
            lottery_contract_addr: contracts.lottery.clone(),
            msg_senders: vec![one.clone()],
            funds_send: coins(ENTRANCE_FEE, NATIVE_DENOM),
        })
        .unwrap();
        assert_eq!(
            event_attribute(&res, "entered", "player"),
            Some(one.to_string())
        );
        assert_eq!(event_attribute(&res, "entered", "slot"), Some("0".to_string()));
        assert_eq!(event_attribute(&res, "entered", "round"), Some("0".to_string()));

        let res = enter_template(EnterParams {
            app: &mut app,
            lottery_contract_addr: contracts.lottery.clone(),
            msg_senders: vec![two.clone()],
            funds_send: coins(ENTRANCE_FEE, NATIVE_DENOM),
        })
        .unwrap();
        assert_eq!(event_attribute(&res, "entered", "slot"), Some("1".to_string()));

        assert_eq!(number_of_players(&app, &contracts), 2);
        assert_eq!(
            players(&app, &contracts, None),
            vec![one.to_string(), two.to_string()]
        );
        assert_eq!(pool_balance(&app, &contracts), Uint128::new(2 * ENTRANCE_FEE));
        assert_eq!(native_balance(&app, &one), INITIAL_BALANCE - ENTRANCE_FEE);
    }

    #[test]
    fn overpayment_goes_to_the_pool() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, _, _, _, _, _) = setup_lottery_participants(&mut app);

        enter_template(EnterParams {
            app: &mut app,
            lottery_contract_addr: contracts.lottery.clone(),
            msg_senders: vec![one.clone()],
            funds_send: coins(ENTRANCE_FEE * 3 + 7, NATIVE_DENOM),
        })
        .unwrap();
        assert_eq!(number_of_players(&app, &contracts), 1);
        assert_eq!(
            pool_balance(&app, &contracts),
            Uint128::new(ENTRANCE_FEE * 3 + 7)
        );
    }

    #[test]
    fn insufficient_fee_is_rejected() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, _, _, _, _, _) = setup_lottery_participants(&mut app);

        let res = enter_template(EnterParams {
            app: &mut app,
            lottery_contract_addr: contracts.lottery.clone(),
            msg_senders: vec![one.clone()],
            funds_send: coins(ENTRANCE_FEE - 1, NATIVE_DENOM),
        });
        assert_error(
            res,
            ContractError::InsufficientFee {
                required: coin(ENTRANCE_FEE, NATIVE_DENOM),
                received: Uint128::new(ENTRANCE_FEE - 1),
            }
            .to_string(),
        );

        // no funds at all
        let res = enter_template(EnterParams {
            app: &mut app,
            lottery_contract_addr: contracts.lottery.clone(),
            msg_senders: vec![one.clone()],
            funds_send: vec![],
        });
        assert_error(
            res,
            ContractError::InsufficientFee {
                required: coin(ENTRANCE_FEE, NATIVE_DENOM),
                received: Uint128::zero(),
            }
            .to_string(),
        );

        // registry and pool untouched, the player keeps their funds
        assert_eq!(number_of_players(&app, &contracts), 0);
        assert!(pool_balance(&app, &contracts).is_zero());
        assert_eq!(native_balance(&app, &one), INITIAL_BALANCE);
    }

    #[test]
    fn foreign_denoms_are_refused() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let stranger = setup_foreign_account(&mut app, "uatom");

        let res = app.execute_contract(
            stranger.clone(),
            contracts.lottery.clone(),
            &LotteryExecuteMsg::Enter {},
            &coins(ENTRANCE_FEE, "uatom"),
        );
        let reason = PaymentError::UnexpectedDenom {
            denom: "uatom".to_string(),
            expected_denom: NATIVE_DENOM.to_string(),
        }
        .to_string();
        assert_error(
            res,
            ContractError::TransferFailed {
                reason: reason.clone(),
            }
            .to_string(),
        );

        // enough of the right denom doesn't make up for the extra coin
        let res = app.execute_contract(
            stranger,
            contracts.lottery.clone(),
            &LotteryExecuteMsg::Enter {},
            &[coin(ENTRANCE_FEE, "uatom"), coin(ENTRANCE_FEE, NATIVE_DENOM)],
        );
        assert_error(res, ContractError::TransferFailed { reason }.to_string());
        assert_eq!(number_of_players(&app, &contracts), 0);
    }

    #[test]
    fn same_player_can_enter_several_times() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, two, _, _, _, _) = setup_lottery_participants(&mut app);

        enter_template(EnterParams {
            app: &mut app,
            lottery_contract_addr: contracts.lottery.clone(),
            msg_senders: vec![one.clone(), two.clone(), one.clone()],
            funds_send: coins(ENTRANCE_FEE, NATIVE_DENOM),
        })
        .unwrap();
        assert_eq!(number_of_players(&app, &contracts), 3);
        assert_eq!(
            players(&app, &contracts, None),
            vec![one.to_string(), two.to_string(), one.to_string()]
        );
        assert_eq!(native_balance(&app, &one), INITIAL_BALANCE - 2 * ENTRANCE_FEE);
    }

    #[test]
    fn cannot_enter_while_calculating() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, two, _, _, _, _) = setup_lottery_participants(&mut app);

        enter_template(EnterParams {
            app: &mut app,
            lottery_contract_addr: contracts.lottery.clone(),
            msg_senders: vec![one],
            funds_send: coins(ENTRANCE_FEE, NATIVE_DENOM),
        })
        .unwrap();
        plus_block_seconds(&mut app, INTERVAL + 1);
        trigger_draw(&mut app, &contracts.lottery).unwrap();

        let res = enter_template(EnterParams {
            app: &mut app,
            lottery_contract_addr: contracts.lottery.clone(),
            msg_senders: vec![two.clone()],
            funds_send: coins(ENTRANCE_FEE, NATIVE_DENOM),
        });
        assert_error(res, ContractError::NotOpen {}.to_string());

        // the fee is checked before the state
        let res = enter_template(EnterParams {
            app: &mut app,
            lottery_contract_addr: contracts.lottery.clone(),
            msg_senders: vec![two.clone()],
            funds_send: coins(1, NATIVE_DENOM),
        });
        assert_error(
            res,
            ContractError::InsufficientFee {
                required: coin(ENTRANCE_FEE, NATIVE_DENOM),
                received: Uint128::one(),
            }
            .to_string(),
        );

        assert_eq!(number_of_players(&app, &contracts), 1);
        assert_eq!(native_balance(&app, &two), INITIAL_BALANCE);
    }
}
