use cosmwasm_std::{Addr, Coin, Event, HexBinary, StdResult, Storage, SubMsg};
use nois::NoisCallback;
use randomness::{job_id, request_randomness_msg, winner_index};

use crate::{
    error::ContractError,
    state::{Config, RoundInfo, PLAYERS},
    utils::{payout_msg, PAYOUT_REPLY_ID, RANDOMNESS_REQUEST_REPLY_ID},
};

/// An outgoing randomness request, with the job id the callback must carry
pub struct DrawRequest {
    pub job_id: String,
    pub msg: SubMsg,
    pub event: Event,
}

/// Builds the request sent to the nois proxy for the given round.
/// The request is dispatched with `reply_on_error` so a rejected request surfaces as our own error.
pub fn request_draw(config: &Config, round: u64) -> StdResult<DrawRequest> {
    let job_id = job_id(round);
    let request = request_randomness_msg(
        &config.nois_proxy_addr,
        job_id.clone(),
        &config.nois_proxy_coin,
    )?;
    let params = &config.randomness_params;
    let event = Event::new("requested_draw")
        .add_attribute("request_id", job_id.clone())
        .add_attribute("round", round.to_string())
        .add_attribute("num_words", params.num_words.to_string())
        .add_attribute(
            "request_confirmations",
            params.request_confirmations.to_string(),
        )
        .add_attribute("callback_gas_limit", params.callback_gas_limit.to_string());

    Ok(DrawRequest {
        job_id,
        msg: SubMsg::reply_on_error(request, RANDOMNESS_REQUEST_REPLY_ID),
        event,
    })
}

/// Checks a callback belongs to the outstanding request of this round.
/// Stale, replayed or forged job ids are rejected before anything is read from the registry.
pub fn assert_matching_request(
    round: &RoundInfo,
    callback: &NoisCallback,
) -> Result<(), ContractError> {
    match &round.pending_request {
        Some(pending) if *pending == callback.job_id => Ok(()),
        _ => Err(ContractError::UnknownRequestId {
            job_id: callback.job_id.clone(),
        }),
    }
}

pub fn parse_randomness(randomness: &HexBinary) -> Result<[u8; 32], ContractError> {
    randomness
        .to_array()
        .map_err(|_| ContractError::InvalidRandomness)
}

/// Picks the winner of the current round: the entry at `randomness mod player_count`
pub fn pick_winner(
    storage: &dyn Storage,
    round: &RoundInfo,
    randomness: [u8; 32],
) -> Result<(u32, Addr), ContractError> {
    if round.player_count == 0 {
        return Err(ContractError::NoPlayers {});
    }
    let index = winner_index(randomness, round.player_count)?;
    let winner = PLAYERS.load(storage, (round.round, index))?;
    Ok((index, winner))
}

/// Sends the whole pool to the winner. A failed transfer is turned into `TransferFailed` by the reply.
pub fn payout(winner: &Addr, pool: Coin) -> Option<SubMsg> {
    if pool.amount.is_zero() {
        return None;
    }
    Some(SubMsg::reply_on_error(
        payout_msg(winner, pool),
        PAYOUT_REPLY_ID,
    ))
}
