use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Coin, Timestamp};
use nois::NoisCallback;
use randomness::RandomnessParams;

use crate::state::{DrawResult, LotteryState, RoundInfo};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub entrance_fee: Coin,
    /// Seconds between draws
    pub interval: u64,
    pub nois_proxy_addr: String,
    pub nois_proxy_coin: Coin,
    pub randomness_params: Option<RandomnessParams>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Enter the current round. The entrance fee must be attached in the pool denom.
    Enter {},
    /// Closes the round and requests randomness, only possible when a draw is due
    TriggerDraw {},
    /// Callback from the nois proxy carrying the randomness of a previous request
    NoisReceive { callback: NoisCallback },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(Coin)]
    EntranceFee {},
    #[returns(u64)]
    Interval {},
    #[returns(LotteryState)]
    State {},
    #[returns(RoundInfo)]
    Round {},
    #[returns(Addr)]
    Player { index: u32 },
    #[returns(u32)]
    NumberOfPlayers {},
    /// Entries of a round, defaults to the current one
    #[returns(Vec<String>)]
    Players {
        round: Option<u64>,
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    #[returns(Option<Addr>)]
    RecentWinner {},
    #[returns(Option<Coin>)]
    LastPayout {},
    #[returns(Timestamp)]
    LastTimestamp {},
    #[returns(RandomnessParams)]
    RandomnessParams {},
    #[returns(Option<String>)]
    PendingRequest {},
    #[returns(Coin)]
    PoolBalance {},
    #[returns(DrawDueResponse)]
    CheckDrawDue {},
    #[returns(Option<DrawResult>)]
    DrawResult { round: u64 },
}

#[cw_serde]
pub struct ConfigResponse {
    pub name: String,
    pub entrance_fee: Coin,
    pub interval: u64,
    pub nois_proxy_addr: Addr,
    pub nois_proxy_coin: Coin,
    pub randomness_params: RandomnessParams,
}

#[cw_serde]
pub struct DrawDueResponse {
    pub draw_due: bool,
    /// Opaque context for the trigger call, always empty
    pub perform_data: Binary,
}

#[cw_serde]
pub struct MigrateMsg {}
