pub const OWNER_ADDR: &str = "fee";
pub const KEEPER_ADDR: &str = "keeper";
pub const LOTTERY_NAME: &str = "lottery - periodic draw";

pub const NATIVE_DENOM: &str = "ustars";
pub const NOIS_DENOM: &str = "unois";

pub const ENTRANCE_FEE: u128 = 1_000_000;
pub const INTERVAL: u64 = 30;
pub const NOIS_AMOUNT: u128 = 50;
