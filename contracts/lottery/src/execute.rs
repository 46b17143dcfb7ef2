use cosmwasm_std::{ensure_eq, DepsMut, Env, Event, MessageInfo};
use nois::NoisCallback;
use utils::types::Response;

use crate::{
    draw::{assert_matching_request, parse_randomness, payout, pick_winner, request_draw},
    error::ContractError,
    state::{DrawResult, LotteryState, CONFIG, DRAW_RESULTS, PLAYERS, ROUND},
    utils::{assert_draw_due, capture_entry_funds, pool_balance},
};

/// Enter the current round.
/// The funds attached must be at least the entrance fee, and all of them go to the pool.
/// The same address may enter several times, each entry takes its own slot.
pub fn execute_enter(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut round = ROUND.load(deps.storage)?;

    // We first check the sent funds cover the fee
    let paid = capture_entry_funds(&info, &config)?;

    // Then no entry can change the odds of a draw in flight
    if round.state != LotteryState::Open {
        return Err(ContractError::NotOpen {});
    }

    let slot = round.player_count;
    PLAYERS.save(deps.storage, (round.round, slot), &info.sender)?;
    round.player_count += 1;
    ROUND.save(deps.storage, &round)?;

    deps.api.debug(&format!(
        "lottery: {} entered round {} in slot {}",
        info.sender, round.round, slot
    ));

    Ok(Response::new()
        .add_event(
            Event::new("entered")
                .add_attribute("player", info.sender.to_string())
                .add_attribute("round", round.round.to_string())
                .add_attribute("slot", slot.to_string()),
        )
        .add_attribute("action", "enter")
        .add_attribute("player", info.sender)
        .add_attribute("amount", paid.to_string()))
}

/// Closes the round and asks the proxy for randomness.
/// Anyone can call this once a draw is due, the scheduler is expected to poll `CheckDrawDue` first.
pub fn execute_trigger_draw(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut round = ROUND.load(deps.storage)?;
    let pool = pool_balance(deps.as_ref(), &env, &config)?;

    // Same predicate as the query, a second trigger always fails here since the round is calculating
    assert_draw_due(&env, &config, &round, pool.amount)?;

    let request = request_draw(&config, round.round)?;
    round.state = LotteryState::Calculating;
    round.pending_request = Some(request.job_id.clone());
    ROUND.save(deps.storage, &round)?;

    deps.api.debug(&format!(
        "lottery: requested randomness {} for round {} ({} players, pool {})",
        request.job_id, round.round, round.player_count, pool
    ));

    Ok(Response::new()
        .add_submessage(request.msg)
        .add_event(request.event)
        .add_attribute("action", "trigger_draw")
        .add_attribute("round", round.round.to_string())
        .add_attribute("request_id", request.job_id))
}

/// Receives the randomness from the proxy, pays the winner and opens the next round.
/// Every effect happens in this transaction: if the payout fails, the whole callback is reverted
/// and the round stays in the calculating state with its pending request.
pub fn execute_receive_nois(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    callback: NoisCallback,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut round = ROUND.load(deps.storage)?;

    // callback should only be allowed to be called by the proxy contract
    // otherwise anyone can cut the randomness workflow and cheat the randomness by sending the randomness directly to this contract
    ensure_eq!(
        info.sender,
        config.nois_proxy_addr,
        ContractError::UnauthorizedReceive
    );
    assert_matching_request(&round, &callback)?;
    if round.state != LotteryState::Calculating {
        return Err(ContractError::WrongState { state: round.state });
    }
    let randomness = parse_randomness(&callback.randomness)?;

    let (winner_index, winner) = pick_winner(deps.storage, &round, randomness)?;
    let pool = pool_balance(deps.as_ref(), &env, &config)?;
    let drawn_round = round.round;

    DRAW_RESULTS.save(
        deps.storage,
        drawn_round,
        &DrawResult {
            round: drawn_round,
            job_id: callback.job_id.clone(),
            winner: winner.clone(),
            winner_index,
            payout: pool.clone(),
            randomness: callback.randomness,
            drawn_at: env.block.time,
        },
    )?;

    // The registry of the next round starts empty, the request is consumed
    round.reset(env.block.time);
    ROUND.save(deps.storage, &round)?;

    deps.api.debug(&format!(
        "lottery: round {} won by {} (slot {}), paying {}",
        drawn_round, winner, winner_index, pool
    ));

    Ok(Response::new()
        .add_submessages(payout(&winner, pool.clone()))
        .add_event(
            Event::new("winner_picked")
                .add_attribute("winner", winner.to_string())
                .add_attribute("round", drawn_round.to_string())
                .add_attribute("payout", pool.to_string())
                .add_attribute("request_id", callback.job_id),
        )
        .add_attribute("action", "receive_randomness")
        .add_attribute("winner", winner))
}
