use cosmwasm_std::{Coin, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PaymentError {
    #[error("Expected at least {expected}, received {received}")]
    Insufficient { expected: Coin, received: Uint128 },

    #[error("Cannot accept {denom} in a payment denominated in {expected_denom}")]
    UnexpectedDenom {
        denom: String,
        expected_denom: String,
    },
}

/// Checks the funds attached to a message cover `expected`.
/// Only the expected denom may be attached, and any amount at or above the expected one is accepted.
/// Returns the coin that was actually received.
pub fn assert_payment(funds: &[Coin], expected: &Coin) -> Result<Coin, PaymentError> {
    if let Some(other) = funds.iter().find(|c| c.denom != expected.denom) {
        return Err(PaymentError::UnexpectedDenom {
            denom: other.denom.clone(),
            expected_denom: expected.denom.clone(),
        });
    }

    let received = funds
        .iter()
        .fold(Uint128::zero(), |acc, c| acc + c.amount);

    if received < expected.amount {
        return Err(PaymentError::Insufficient {
            expected: expected.clone(),
            received,
        });
    }

    Ok(Coin {
        denom: expected.denom.clone(),
        amount: received,
    })
}
