use cosmwasm_std::{coin, Addr, Coin, Uint128};
use cw_multi_test::{App, BankSudo, Executor, SudoMsg};
use lottery::msg::InstantiateMsg;

use super::{
    constants::{ENTRANCE_FEE, INTERVAL, LOTTERY_NAME, NATIVE_DENOM, NOIS_AMOUNT, NOIS_DENOM, OWNER_ADDR},
    contract_boxes::{contract_fake_nois, contract_lottery, custom_mock_app},
    helpers::setup_block_time,
    msg::{LotteryCodeIds, LotteryContracts},
    nois_proxy,
};

pub const GENESIS_TIME: u64 = 1647032400000000000;

pub fn lottery_code_ids(app: &mut App) -> LotteryCodeIds {
    let lottery_code_id = app.store_code(contract_lottery());
    let nois_code_id = app.store_code(contract_fake_nois());
    LotteryCodeIds {
        lottery_code_id,
        nois_code_id,
    }
}

pub fn default_instantiate_msg(nois_proxy_addr: &Addr) -> InstantiateMsg {
    InstantiateMsg {
        name: LOTTERY_NAME.to_string(),
        entrance_fee: coin(ENTRANCE_FEE, NATIVE_DENOM),
        interval: INTERVAL,
        nois_proxy_addr: nois_proxy_addr.to_string(),
        nois_proxy_coin: coin(NOIS_AMOUNT, NOIS_DENOM),
        randomness_params: None,
    }
}

/// Instantiates the fake proxy, charging `fee` per request
pub fn instantiate_nois(app: &mut App, code_ids: &LotteryCodeIds, fee: Coin) -> Addr {
    app.instantiate_contract(
        code_ids.nois_code_id,
        Addr::unchecked(OWNER_ADDR),
        &nois_proxy::InstantiateMsg {
            denom: fee.denom,
            fee: fee.amount,
        },
        &[],
        "nois-proxy",
        None,
    )
    .unwrap()
}

/// Gives the lottery enough proxy fee coins for `draws` draws
pub fn fund_nois_fees(app: &mut App, lottery: &Addr, draws: u128) {
    app.sudo(SudoMsg::Bank({
        BankSudo::Mint {
            to_address: lottery.to_string(),
            amount: vec![coin(NOIS_AMOUNT * draws, NOIS_DENOM)],
        }
    }))
    .unwrap();
}

pub fn proper_lottery_instantiate() -> (App, LotteryContracts) {
    let mut app = custom_mock_app();
    setup_block_time(&mut app, GENESIS_TIME, Some(10000));

    let code_ids = lottery_code_ids(&mut app);
    let nois = instantiate_nois(
        &mut app,
        &code_ids,
        Coin {
            denom: NOIS_DENOM.to_string(),
            amount: Uint128::new(NOIS_AMOUNT),
        },
    );

    let lottery = app
        .instantiate_contract(
            code_ids.lottery_code_id,
            Addr::unchecked(OWNER_ADDR),
            &default_instantiate_msg(&nois),
            &[],
            "lottery",
            Some(OWNER_ADDR.to_string()),
        )
        .unwrap();

    fund_nois_fees(&mut app, &lottery, 100);

    (app, LotteryContracts { lottery, nois })
}
