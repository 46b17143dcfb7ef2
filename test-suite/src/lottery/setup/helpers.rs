use cosmwasm_std::{Addr, Coin, Uint128};
use cw_multi_test::App;
use lottery::{
    msg::{DrawDueResponse, QueryMsg},
    state::{DrawResult, LotteryState, RoundInfo},
};

use crate::common_setup::{constants::NATIVE_DENOM, msg::LotteryContracts, nois_proxy};

pub fn round_info(app: &App, contracts: &LotteryContracts) -> RoundInfo {
    app.wrap()
        .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::Round {})
        .unwrap()
}

pub fn lottery_state(app: &App, contracts: &LotteryContracts) -> LotteryState {
    app.wrap()
        .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::State {})
        .unwrap()
}

pub fn number_of_players(app: &App, contracts: &LotteryContracts) -> u32 {
    app.wrap()
        .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::NumberOfPlayers {})
        .unwrap()
}

pub fn players(app: &App, contracts: &LotteryContracts, round: Option<u64>) -> Vec<String> {
    app.wrap()
        .query_wasm_smart(
            contracts.lottery.clone(),
            &QueryMsg::Players {
                round,
                start_after: None,
                limit: Some(100),
            },
        )
        .unwrap()
}

pub fn draw_due(app: &App, contracts: &LotteryContracts) -> bool {
    let res: DrawDueResponse = app
        .wrap()
        .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::CheckDrawDue {})
        .unwrap();
    assert!(res.perform_data.is_empty());
    res.draw_due
}

pub fn pending_request(app: &App, contracts: &LotteryContracts) -> Option<String> {
    app.wrap()
        .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::PendingRequest {})
        .unwrap()
}

pub fn recent_winner(app: &App, contracts: &LotteryContracts) -> Option<Addr> {
    app.wrap()
        .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::RecentWinner {})
        .unwrap()
}

pub fn last_payout(app: &App, contracts: &LotteryContracts) -> Option<Coin> {
    app.wrap()
        .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::LastPayout {})
        .unwrap()
}

pub fn draw_result(app: &App, contracts: &LotteryContracts, round: u64) -> Option<DrawResult> {
    app.wrap()
        .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::DrawResult { round })
        .unwrap()
}

pub fn pool_balance(app: &App, contracts: &LotteryContracts) -> Uint128 {
    let pool: Coin = app
        .wrap()
        .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::PoolBalance {})
        .unwrap();
    assert_eq!(pool.denom, NATIVE_DENOM);
    pool.amount
}

pub fn native_balance(app: &App, addr: &Addr) -> u128 {
    app.wrap()
        .query_balance(addr, NATIVE_DENOM)
        .unwrap()
        .amount
        .u128()
}

/// Jobs the fake proxy still has to answer for the lottery
pub fn proxy_requests(app: &App, contracts: &LotteryContracts) -> Vec<String> {
    app.wrap()
        .query_wasm_smart(
            contracts.nois.clone(),
            &nois_proxy::QueryMsg::Requests {
                requester: contracts.lottery.to_string(),
            },
        )
        .unwrap()
}
