//! A stand-in for the nois proxy. Requests are recorded and only answered when a test
//! explicitly delivers a beacon, so the callback always arrives in a later transaction.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    coins, to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env, HexBinary, MessageInfo,
    Order, Response, StdError, StdResult, Timestamp, Uint128, WasmMsg,
};
use cw_storage_plus::{Item, Map};
use nois::NoisCallback;

#[cw_serde]
pub struct Config {
    denom: String,
    fee: Uint128,
}

const CONFIG: Item<Config> = Item::new("config");
/// (requester, job_id) -> time the request was made
const REQUESTS: Map<(Addr, String), Timestamp> = Map::new("requests");

#[cw_serde]
pub struct InstantiateMsg {
    pub denom: String,
    pub fee: Uint128,
}

/// Mirrors the nois proxy messages so the lottery request deserializes here,
/// plus `Deliver` which plays the part of the beacon arriving.
#[cw_serde]
pub enum ExecuteMsg {
    GetNextRandomness {
        job_id: String,
    },
    GetRandomnessAfter {
        after: Timestamp,
        job_id: String,
    },
    Deliver {
        requester: String,
        job_id: String,
        randomness: HexBinary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Vec<String>)]
    Requests { requester: String },
}

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, StdError> {
    CONFIG.save(
        deps.storage,
        &Config {
            denom: msg.denom,
            fee: msg.fee,
        },
    )?;
    Ok(Response::new())
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Requests { requester } => {
            let requester = deps.api.addr_validate(&requester)?;
            let jobs = REQUESTS
                .prefix(requester)
                .keys(deps.storage, None, None, Order::Ascending)
                .collect::<StdResult<Vec<String>>>()?;
            to_json_binary(&jobs)
        }
    }
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, StdError> {
    match msg {
        ExecuteMsg::GetNextRandomness { job_id } => register_request(deps, env, info, job_id),
        ExecuteMsg::GetRandomnessAfter { job_id, .. } => register_request(deps, env, info, job_id),
        ExecuteMsg::Deliver {
            requester,
            job_id,
            randomness,
        } => deliver(deps, env, requester, job_id, randomness),
    }
}

fn register_request(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    job_id: String,
) -> StdResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    let expected = if config.fee.is_zero() {
        vec![]
    } else {
        coins(config.fee.u128(), config.denom)
    };
    if info.funds != expected {
        return Err(StdError::generic_err("Nois not enough funds sent to proxy"));
    }
    REQUESTS.save(deps.storage, (info.sender, job_id.clone()), &env.block.time)?;
    Ok(Response::new()
        .add_attribute("action", "request_randomness")
        .add_attribute("job_id", job_id))
}

/// Sends the callback whether or not the job was requested, the proxy may deliver twice
/// or deliver a job the requester never asked for.
fn deliver(
    deps: DepsMut,
    env: Env,
    requester: String,
    job_id: String,
    randomness: HexBinary,
) -> StdResult<Response> {
    let requester = deps.api.addr_validate(&requester)?;
    REQUESTS.remove(deps.storage, (requester.clone(), job_id.clone()));

    Ok(Response::new()
        .add_message(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: requester.to_string(),
            msg: to_json_binary(&lottery::msg::ExecuteMsg::NoisReceive {
                callback: NoisCallback {
                    job_id: job_id.clone(),
                    published: env.block.time,
                    randomness,
                },
            })?,
            funds: vec![],
        }))
        .add_attribute("action", "deliver")
        .add_attribute("job_id", job_id))
}
