use cosmwasm_std::{Addr, Coin, HexBinary};
use cw_multi_test::App;

pub struct EnterParams<'a> {
    pub app: &'a mut App,
    pub lottery_contract_addr: Addr,
    pub msg_senders: Vec<Addr>,
    pub funds_send: Vec<Coin>,
}

pub struct DeliverRandomnessParams<'a> {
    pub app: &'a mut App,
    pub lottery_contract_addr: Addr,
    pub nois_contract_addr: Addr,
    pub job_id: String,
    pub randomness: HexBinary,
}
