use cosmwasm_std::{coin, coins, Addr};
use cw_multi_test::{App, BankSudo, SudoMsg};

use super::constants::NATIVE_DENOM;

pub const INITIAL_BALANCE: u128 = 100_000_000_000_000;

fn mint(router: &mut App, to: &Addr, amount: u128) {
    router
        .sudo(SudoMsg::Bank({
            BankSudo::Mint {
                to_address: to.to_string(),
                amount: vec![coin(amount, NATIVE_DENOM.to_string())],
            }
        }))
        .ok();
}

pub fn setup_lottery_participants(router: &mut App) -> (Addr, Addr, Addr, Addr, Addr, Addr) {
    // define accounts
    let one = Addr::unchecked("addr-one");
    let two = Addr::unchecked("addr-two");
    let three = Addr::unchecked("addr-three");
    let four = Addr::unchecked("addr-four");
    let five = Addr::unchecked("addr-five");
    let six = Addr::unchecked("addr-six");

    // fund accounts
    for participant in [&one, &two, &three, &four, &five, &six] {
        mint(router, participant, INITIAL_BALANCE);
    }

    // check native balances
    for participant in [&one, &two, &three, &four, &five, &six] {
        let balances = router.wrap().query_all_balances(participant).unwrap();
        assert_eq!(balances, coins(INITIAL_BALANCE, NATIVE_DENOM));
    }

    (one, two, three, four, five, six)
}

/// An account holding a foreign denom only
pub fn setup_foreign_account(router: &mut App, denom: &str) -> Addr {
    let stranger = Addr::unchecked("addr-stranger");
    router
        .sudo(SudoMsg::Bank({
            BankSudo::Mint {
                to_address: stranger.to_string(),
                amount: vec![
                    coin(INITIAL_BALANCE, denom.to_string()),
                    coin(INITIAL_BALANCE, NATIVE_DENOM.to_string()),
                ],
            }
        }))
        .ok();
    stranger
}
