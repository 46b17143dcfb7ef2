use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, Coin, HexBinary, StdError, StdResult, Uint256, WasmMsg};
use nois::ProxyExecuteMsg;

/// Every job id sent to the proxy is this prefix followed by the round number.
pub const JOB_ID_PREFIX: &str = "lottery-round-";

/// A draw only ever consumes one random value.
pub const NUM_WORDS: u32 = 1;

pub const DEFAULT_REQUEST_CONFIRMATIONS: u16 = 3;
pub const DEFAULT_CALLBACK_GAS_LIMIT: u64 = 500_000;

/// Parameters attached to every randomness request.
/// `request_confirmations` and `callback_gas_limit` are not interpreted by the lottery,
/// they are forwarded to observers of the request.
#[cw_serde]
pub struct RandomnessParams {
    pub num_words: u32,
    pub request_confirmations: u16,
    pub callback_gas_limit: u64,
}

impl Default for RandomnessParams {
    fn default() -> Self {
        Self {
            num_words: NUM_WORDS,
            request_confirmations: DEFAULT_REQUEST_CONFIRMATIONS,
            callback_gas_limit: DEFAULT_CALLBACK_GAS_LIMIT,
        }
    }
}

impl RandomnessParams {
    pub fn is_valid(&self) -> bool {
        self.num_words == NUM_WORDS
    }
}

pub fn job_id(round: u64) -> String {
    format!("{JOB_ID_PREFIX}{round}")
}

pub fn round_from_job_id(job_id: &str) -> Option<u64> {
    job_id.strip_prefix(JOB_ID_PREFIX)?.parse().ok()
}

/// Builds the message asking the nois proxy for the next beacon.
/// The job id is needed to know what randomness we are referring to upon reception in the callback.
/// A zero fee is not attached, the bank module rejects empty coins.
pub fn request_randomness_msg(proxy: &Addr, job_id: String, fee: &Coin) -> StdResult<WasmMsg> {
    let funds = if fee.amount.is_zero() {
        vec![]
    } else {
        vec![fee.clone()]
    };
    Ok(WasmMsg::Execute {
        contract_addr: proxy.to_string(),
        msg: to_json_binary(&ProxyExecuteMsg::GetNextRandomness { job_id })?,
        funds,
    })
}

/// `randomness mod n`, reading the 32 bytes as a big-endian unsigned integer.
/// The result is always in `0..n`.
pub fn winner_index(randomness: [u8; 32], n: u32) -> StdResult<u32> {
    if n == 0 {
        return Err(StdError::generic_err("Cannot pick a winner among zero entries"));
    }
    let index = Uint256::from_be_bytes(randomness) % Uint256::from(n);
    let bytes = index.to_be_bytes();
    Ok(u32::from_be_bytes([bytes[28], bytes[29], bytes[30], bytes[31]]))
}

/// Encodes a small integer as a 32 byte beacon, mostly useful to drive draws with a known value.
pub fn randomness_from_value(value: u64) -> HexBinary {
    let mut bytes = [0u8; 32];
    bytes[24..].copy_from_slice(&value.to_be_bytes());
    HexBinary::from(bytes.to_vec())
}
