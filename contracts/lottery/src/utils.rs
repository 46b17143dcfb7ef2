use cosmwasm_std::{BankMsg, Coin, Deps, Env, MessageInfo, StdResult, Uint128};
use utils::payment::{assert_payment, PaymentError};

use crate::{
    error::ContractError,
    state::{Config, LotteryState, RoundInfo},
};

pub const PAYOUT_REPLY_ID: u64 = 1;
pub const RANDOMNESS_REQUEST_REPLY_ID: u64 = 2;

/// The prize pool is whatever the contract holds in the entrance denom
pub fn pool_balance(deps: Deps, env: &Env, config: &Config) -> StdResult<Coin> {
    deps.querier
        .query_balance(&env.contract.address, &config.entrance_fee.denom)
}

/// Captures the entry funds into the pool.
/// Funds below the entrance fee are a usage error, funds in another denom can't be pooled at all.
pub fn capture_entry_funds(info: &MessageInfo, config: &Config) -> Result<Coin, ContractError> {
    assert_payment(&info.funds, &config.entrance_fee).map_err(|e| match e {
        PaymentError::Insufficient { expected, received } => ContractError::InsufficientFee {
            required: expected,
            received,
        },
        e @ PaymentError::UnexpectedDenom { .. } => ContractError::TransferFailed {
            reason: e.to_string(),
        },
    })
}

pub fn payout_msg(to: &cosmwasm_std::Addr, amount: Coin) -> BankMsg {
    BankMsg::Send {
        to_address: to.to_string(),
        amount: vec![amount],
    }
}

/// A draw is due when the round is open, has entries, holds funds and has lasted at least `interval`
pub fn is_draw_due(env: &Env, config: &Config, round: &RoundInfo, pool: Uint128) -> bool {
    let is_open = round.state == LotteryState::Open;
    let has_players = round.player_count > 0;
    let has_balance = !pool.is_zero();
    let time_passed =
        env.block.time.seconds().saturating_sub(round.last_timestamp.seconds()) >= config.interval;
    is_open && has_players && has_balance && time_passed
}

/// Fails with the inputs of the predicate when no draw is due
pub fn assert_draw_due(
    env: &Env,
    config: &Config,
    round: &RoundInfo,
    pool: Uint128,
) -> Result<(), ContractError> {
    if is_draw_due(env, config, round, pool) {
        Ok(())
    } else {
        Err(ContractError::UpkeepNotNeeded {
            balance: pool,
            players: round.player_count,
            state: round.state,
        })
    }
}
