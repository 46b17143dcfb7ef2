use cosmwasm_std::Addr;

pub struct LotteryContracts {
    pub lottery: Addr,
    pub nois: Addr,
}

pub struct LotteryCodeIds {
    pub lottery_code_id: u64,
    pub nois_code_id: u64,
}
