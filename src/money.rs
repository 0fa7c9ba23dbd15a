//! Money conversion between wire amounts and internal cents.
//!
//! Balances and transfer amounts are stored as `i64` cents to avoid
//! floating-point precision issues. Clients send and receive amounts in
//! major units as JSON numbers (e.g. `2000` or `20.5`).
//!
//! All conversions go through this module:
//! - `parse_amount`: client JSON value → cents, rejecting anything inexact
//! - `to_decimal`: cents → `Decimal` for responses and messages

use rust_decimal::prelude::*;
use serde_json::Value;

use crate::error::AppError;

/// Number of decimal places carried by a cent amount.
pub const SCALE: u32 = 2;

/// Convert a client-provided amount into cents.
///
/// # Errors
///
/// Returns `InvalidAmount` if the value:
/// - is not a JSON number
/// - is zero or negative
/// - has more than two decimal places
/// - does not fit into `i64` cents
pub fn parse_amount(value: &Value) -> Result<i64, AppError> {
    let Value::Number(number) = value else {
        return Err(AppError::InvalidAmount(
            "The transfer amount must be a number".to_string(),
        ));
    };

    // With `arbitrary_precision` this is the literal exactly as the client
    // sent it; no f64 conversion has happened.
    let text = number.to_string();
    let parsed = if text.contains(['e', 'E']) {
        Decimal::from_scientific(&text)
    } else {
        Decimal::from_str_exact(&text)
    };
    let amount = parsed
        .map_err(|_| AppError::InvalidAmount("The transfer amount is out of range".to_string()))?
        .normalize();

    if amount <= Decimal::ZERO {
        return Err(AppError::InvalidAmount(
            "The transfer amount must be greater than zero".to_string(),
        ));
    }

    if amount.scale() > SCALE {
        return Err(AppError::InvalidAmount(format!(
            "The transfer amount supports at most {SCALE} decimal places"
        )));
    }

    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.to_i64())
        .ok_or_else(|| AppError::InvalidAmount("The transfer amount is too large".to_string()))
}

/// Render cents as a major-unit decimal with trailing zeros removed.
pub fn to_decimal(cents: i64) -> Decimal {
    Decimal::new(cents, SCALE).normalize()
}
