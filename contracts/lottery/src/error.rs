use thiserror::Error;

use cosmwasm_std::{Coin, StdError, Uint128};

use crate::state::LotteryState;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Name is not in the expected format (3-50 UTF-8 bytes)")]
    InvalidName {},

    #[error("The entrance fee must be a positive amount")]
    InvalidEntranceFee {},

    #[error("The draw interval must be at least one second")]
    InvalidInterval {},

    #[error("Proxy address is not valid")]
    InvalidProxyAddress,

    #[error("The proxy fee can't be paid in the entrance denom ({denom}), it would be taken from the prize pool")]
    ProxyDenomCollision { denom: String },

    #[error("Exactly one random value must be requested per draw, got {num_words}")]
    InvalidRandomnessParams { num_words: u32 },

    #[error("Not enough funds sent to enter. Required : {required}, received : {received}")]
    InsufficientFee { required: Coin, received: Uint128 },

    #[error("The lottery is not open, a draw is being calculated")]
    NotOpen {},

    #[error("Upkeep not needed. Balance : {balance}, players : {players}, state : {state}")]
    UpkeepNotNeeded {
        balance: Uint128,
        players: u32,
        state: LotteryState,
    },

    // callback should only be allowed to be called by the proxy contract
    // otherwise anyone can cut the randomness workflow and pick the winner
    #[error("Unauthorized Receive execution")]
    UnauthorizedReceive,

    #[error("No pending randomness request matches the job id {job_id}")]
    UnknownRequestId { job_id: String },

    #[error("The lottery can't accept randomness in its current state : {state}")]
    WrongState { state: LotteryState },

    #[error("Received invalid randomness")]
    InvalidRandomness,

    #[error("There is no player to pick a winner from")]
    NoPlayers {},

    #[error("Transfer failed: {reason}")]
    TransferFailed { reason: String },

    #[error("The randomness request was rejected by the proxy: {reason}")]
    RandomnessRequestFailed { reason: String },

    #[error("Unreachable code, something weird happened")]
    Unreachable {},
}
