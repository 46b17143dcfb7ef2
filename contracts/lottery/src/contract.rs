use cosmwasm_std::{
    ensure, entry_point, to_json_binary, Deps, DepsMut, Env, MessageInfo, QueryResponse, Reply,
    StdResult, SubMsgResult,
};
use cw2::set_contract_version;
use utils::{state::is_valid_name, types::Response};

use crate::{
    error::ContractError,
    execute::{execute_enter, execute_receive_nois, execute_trigger_draw},
    msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
    query::{
        query_check_draw_due, query_config, query_draw_result, query_last_payout, query_player,
        query_players, query_pool_balance, query_recent_winner,
    },
    state::{Config, RoundInfo, CONFIG, ROUND},
    utils::{PAYOUT_REPLY_ID, RANDOMNESS_REQUEST_REPLY_ID},
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let nois_proxy_addr = deps
        .api
        .addr_validate(&msg.nois_proxy_addr)
        .map_err(|_| ContractError::InvalidProxyAddress)?;

    // valid name
    if !is_valid_name(&msg.name) {
        return Err(ContractError::InvalidName {});
    }
    ensure!(
        !msg.entrance_fee.amount.is_zero(),
        ContractError::InvalidEntranceFee {}
    );
    ensure!(msg.interval > 0, ContractError::InvalidInterval {});
    // the proxy is paid out of the contract balance, it must not eat into the pool
    ensure!(
        msg.nois_proxy_coin.amount.is_zero()
            || msg.nois_proxy_coin.denom != msg.entrance_fee.denom,
        ContractError::ProxyDenomCollision {
            denom: msg.entrance_fee.denom.clone()
        }
    );
    let randomness_params = msg.randomness_params.unwrap_or_default();
    ensure!(
        randomness_params.is_valid(),
        ContractError::InvalidRandomnessParams {
            num_words: randomness_params.num_words
        }
    );

    let config = Config {
        name: msg.name,
        entrance_fee: msg.entrance_fee,
        interval: msg.interval,
        nois_proxy_addr,
        nois_proxy_coin: msg.nois_proxy_coin,
        randomness_params,
    };
    CONFIG.save(deps.storage, &config)?;
    // The first round is timed from the instantiation
    ROUND.save(deps.storage, &RoundInfo::new(env.block.time))?;

    set_contract_version(
        deps.storage,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )?;
    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("entrance_fee", config.entrance_fee.to_string())
        .add_attribute("interval", config.interval.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    set_contract_version(
        deps.storage,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )?;
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Enter {} => execute_enter(deps, env, info),
        ExecuteMsg::TriggerDraw {} => execute_trigger_draw(deps, env, info),
        ExecuteMsg::NoisReceive { callback } => execute_receive_nois(deps, env, info, callback),
    }
}

/// Sub-messages are only dispatched with `reply_on_error`.
/// Returning an error here reverts the whole transaction, including the state written before the dispatch.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match (msg.id, msg.result) {
        (_, SubMsgResult::Ok(_)) => Ok(Response::new()),
        (PAYOUT_REPLY_ID, SubMsgResult::Err(reason)) => {
            Err(ContractError::TransferFailed { reason })
        }
        (RANDOMNESS_REQUEST_REPLY_ID, SubMsgResult::Err(reason)) => {
            Err(ContractError::RandomnessRequestFailed { reason })
        }
        _ => Err(ContractError::Unreachable {}),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::EntranceFee {} => to_json_binary(&CONFIG.load(deps.storage)?.entrance_fee)?,
        QueryMsg::Interval {} => to_json_binary(&CONFIG.load(deps.storage)?.interval)?,
        QueryMsg::State {} => to_json_binary(&ROUND.load(deps.storage)?.state)?,
        QueryMsg::Round {} => to_json_binary(&ROUND.load(deps.storage)?)?,
        QueryMsg::Player { index } => to_json_binary(&query_player(deps, index)?)?,
        QueryMsg::NumberOfPlayers {} => to_json_binary(&ROUND.load(deps.storage)?.player_count)?,
        QueryMsg::Players {
            round,
            start_after,
            limit,
        } => to_json_binary(&query_players(deps, round, start_after, limit)?)?,
        QueryMsg::RecentWinner {} => to_json_binary(&query_recent_winner(deps)?)?,
        QueryMsg::LastPayout {} => to_json_binary(&query_last_payout(deps)?)?,
        QueryMsg::LastTimestamp {} => to_json_binary(&ROUND.load(deps.storage)?.last_timestamp)?,
        QueryMsg::RandomnessParams {} => {
            to_json_binary(&CONFIG.load(deps.storage)?.randomness_params)?
        }
        QueryMsg::PendingRequest {} => {
            to_json_binary(&ROUND.load(deps.storage)?.pending_request)?
        }
        QueryMsg::PoolBalance {} => to_json_binary(&query_pool_balance(deps, env)?)?,
        QueryMsg::CheckDrawDue {} => to_json_binary(&query_check_draw_due(deps, env)?)?,
        QueryMsg::DrawResult { round } => to_json_binary(&query_draw_result(deps, round)?)?,
    };
    Ok(response)
}
