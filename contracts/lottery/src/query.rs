use cosmwasm_std::{Addr, Binary, Coin, Deps, Env, Order, StdResult};
use cw_storage_plus::Bound;
use utils::state::{DEFAULT_LIMIT, MAX_LIMIT};

use crate::{
    msg::{ConfigResponse, DrawDueResponse},
    state::{DrawResult, CONFIG, DRAW_RESULTS, PLAYERS, ROUND},
    utils::{is_draw_due, pool_balance},
};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        name: config.name,
        entrance_fee: config.entrance_fee,
        interval: config.interval,
        nois_proxy_addr: config.nois_proxy_addr,
        nois_proxy_coin: config.nois_proxy_coin,
        randomness_params: config.randomness_params,
    })
}

/// Entry at `index` in the current round. Fails for any index past the last entry.
pub fn query_player(deps: Deps, index: u32) -> StdResult<Addr> {
    let round = ROUND.load(deps.storage)?;
    PLAYERS.load(deps.storage, (round.round, index))
}

/// Query all entries within a round, in slot order
pub fn query_players(
    deps: Deps,
    round: Option<u64>,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<Vec<String>> {
    let round = match round {
        Some(round) => round,
        None => ROUND.load(deps.storage)?.round,
    };
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    PLAYERS
        .prefix(round)
        .range(deps.storage, start, None, Order::Ascending)
        .map(|kv_item| Ok(kv_item?.1.to_string()))
        .take(limit)
        .collect()
}

fn latest_draw(deps: Deps) -> StdResult<Option<DrawResult>> {
    DRAW_RESULTS
        .range(deps.storage, None, None, Order::Descending)
        .next()
        .transpose()
        .map(|latest| latest.map(|(_, result)| result))
}

pub fn query_recent_winner(deps: Deps) -> StdResult<Option<Addr>> {
    Ok(latest_draw(deps)?.map(|result| result.winner))
}

pub fn query_last_payout(deps: Deps) -> StdResult<Option<Coin>> {
    Ok(latest_draw(deps)?.map(|result| result.payout))
}

pub fn query_draw_result(deps: Deps, round: u64) -> StdResult<Option<DrawResult>> {
    DRAW_RESULTS.may_load(deps.storage, round)
}

pub fn query_pool_balance(deps: Deps, env: Env) -> StdResult<Coin> {
    let config = CONFIG.load(deps.storage)?;
    pool_balance(deps, &env, &config)
}

/// Read-only eligibility check for the scheduler, the block time is the current time
pub fn query_check_draw_due(deps: Deps, env: Env) -> StdResult<DrawDueResponse> {
    let config = CONFIG.load(deps.storage)?;
    let round = ROUND.load(deps.storage)?;
    let pool = pool_balance(deps, &env, &config)?;
    Ok(DrawDueResponse {
        draw_due: is_draw_due(&env, &config, &round, pool.amount),
        perform_data: Binary::default(),
    })
}
