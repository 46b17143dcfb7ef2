use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, HexBinary, Timestamp};
use cw_storage_plus::{Item, Map};
use randomness::RandomnessParams;

pub const CONFIG: Item<Config> = Item::new("config");
pub const ROUND: Item<RoundInfo> = Item::new("round");
/// Registry of entries, keyed by (round, slot). Slots are dense from 0 to `player_count`.
pub const PLAYERS: Map<(u64, u32), Addr> = Map::new("players");
pub const DRAW_RESULTS: Map<u64, DrawResult> = Map::new("draw_results");

#[cw_serde]
pub struct Config {
    /// The name of the smart contract
    pub name: String,
    /// Minimum amount to send with an entry. The denom is the denom of the prize pool.
    pub entrance_fee: Coin,
    /// Seconds that must pass after a round opened before it can be drawn
    pub interval: u64,
    pub nois_proxy_addr: Addr,
    /// Fee paid to the proxy on every request, out of the contract balance
    pub nois_proxy_coin: Coin,
    pub randomness_params: RandomnessParams,
}

#[cw_serde]
#[derive(Copy)]
pub enum LotteryState {
    Open,
    Calculating,
}

impl fmt::Display for LotteryState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LotteryState::Open => write!(f, "open"),
            LotteryState::Calculating => write!(f, "calculating"),
        }
    }
}

#[cw_serde]
pub struct RoundInfo {
    pub round: u64,
    pub state: LotteryState,
    pub player_count: u32,
    /// Time the current round opened at
    pub last_timestamp: Timestamp,
    /// Job id of the outstanding randomness request, only set while calculating
    pub pending_request: Option<String>,
}

impl RoundInfo {
    pub fn new(opened_at: Timestamp) -> Self {
        Self {
            round: 0,
            state: LotteryState::Open,
            player_count: 0,
            last_timestamp: opened_at,
            pending_request: None,
        }
    }

    /// Closes the current round and opens the next one with an empty registry
    pub fn reset(&mut self, now: Timestamp) {
        self.round += 1;
        self.state = LotteryState::Open;
        self.player_count = 0;
        self.last_timestamp = now;
        self.pending_request = None;
    }
}

#[cw_serde]
pub struct DrawResult {
    pub round: u64,
    pub job_id: String,
    pub winner: Addr,
    pub winner_index: u32,
    pub payout: Coin,
    pub randomness: HexBinary,
    pub drawn_at: Timestamp,
}
