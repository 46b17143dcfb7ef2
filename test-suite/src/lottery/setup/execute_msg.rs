use anyhow::Error as anyhow_error;
use cosmwasm_std::{Addr, HexBinary};
use cw_multi_test::{App, AppResponse, Executor};
use lottery::msg::ExecuteMsg as LotteryExecuteMsg;
use nois::NoisCallback;

use crate::common_setup::{constants::KEEPER_ADDR, nois_proxy};

use super::test_msgs::{DeliverRandomnessParams, EnterParams};

// Template for entering the lottery, every sender enters once with the same funds
pub fn enter_template(params: EnterParams) -> Result<AppResponse, anyhow_error> {
    let mut last = None;
    for sender in params.msg_senders {
        last = Some(params.app.execute_contract(
            sender,
            params.lottery_contract_addr.clone(),
            &LotteryExecuteMsg::Enter {},
            &params.funds_send,
        )?);
    }
    last.ok_or_else(|| anyhow::anyhow!("no sender to enter with"))
}

pub fn trigger_draw(app: &mut App, lottery: &Addr) -> Result<AppResponse, anyhow_error> {
    app.execute_contract(
        Addr::unchecked(KEEPER_ADDR),
        lottery.clone(),
        &LotteryExecuteMsg::TriggerDraw {},
        &[],
    )
}

// The beacon goes through the fake proxy, which calls the lottery back
pub fn deliver_randomness(params: DeliverRandomnessParams) -> Result<AppResponse, anyhow_error> {
    params.app.execute_contract(
        Addr::unchecked(KEEPER_ADDR),
        params.nois_contract_addr,
        &nois_proxy::ExecuteMsg::Deliver {
            requester: params.lottery_contract_addr.to_string(),
            job_id: params.job_id,
            randomness: params.randomness,
        },
        &[],
    )
}

// Calls the lottery callback directly, as `sender`
pub fn nois_receive_from(
    app: &mut App,
    sender: &Addr,
    lottery: &Addr,
    job_id: &str,
    randomness: HexBinary,
) -> Result<AppResponse, anyhow_error> {
    let published = app.block_info().time;
    app.execute_contract(
        sender.clone(),
        lottery.clone(),
        &LotteryExecuteMsg::NoisReceive {
            callback: NoisCallback {
                job_id: job_id.to_string(),
                published,
                randomness,
            },
        },
        &[],
    )
}
