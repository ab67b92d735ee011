//! Native-currency unit conversion.
//!
//! Prices travel on-chain as integers in the smallest unit (wei) and are
//! shown to the user as decimal ether strings. Both directions are exact
//! for every value with at most 18 fractional digits.

use alloy::primitives::utils::{format_ether, parse_ether};
use alloy::primitives::U256;
use thiserror::Error;

/// Fixed-point precision of the native currency.
pub const DECIMALS: usize = 18;

/// Errors produced by unit conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{0}': expected an unsigned decimal number")]
    Malformed(String),

    #[error("amount '{0}' has more than 18 fractional digits")]
    TooPrecise(String),

    #[error("amount '{0}' is out of range")]
    Overflow(String),
}

/// Convert a decimal ether string (e.g. `"0.01"`) to wei.
pub fn to_wei(amount: &str) -> Result<U256, UnitsError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(UnitsError::Empty);
    }

    let (int_part, frac_part) = match amount.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (amount, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty())
        || !all_digits(int_part)
        || !all_digits(frac_part)
    {
        return Err(UnitsError::Malformed(amount.to_string()));
    }
    if frac_part.len() > DECIMALS {
        return Err(UnitsError::TooPrecise(amount.to_string()));
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let normalized = if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{}.{}", int_part, frac_part)
    };

    parse_ether(&normalized).map_err(|_| UnitsError::Overflow(amount.to_string()))
}

/// Convert wei to a decimal ether string with trailing zeros removed.
///
/// `10_000_000_000_000_000` becomes `"0.01"`, one ether becomes `"1"`.
pub fn from_wei(amount: U256) -> String {
    let formatted = format_ether(amount);
    match formatted.split_once('.') {
        Some((int_part, frac_part)) => {
            let frac_part = frac_part.trim_end_matches('0');
            if frac_part.is_empty() {
                int_part.to_string()
            } else {
                format!("{}.{}", int_part, frac_part)
            }
        }
        None => formatted,
    }
}

/// String form of [`to_wei`]: decimal ether in, base-10 wei out.
pub fn to_smallest_unit(amount: &str) -> Result<String, UnitsError> {
    to_wei(amount).map(|wei| wei.to_string())
}

/// String form of [`from_wei`]: base-10 wei in, decimal ether out.
///
/// Only canonical integers are accepted (no sign, no leading zeros), so
/// `to_smallest_unit` always gives back the exact input.
pub fn from_smallest_unit(amount: &str) -> Result<String, UnitsError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(UnitsError::Empty);
    }
    if !amount.bytes().all(|b| b.is_ascii_digit()) || (amount.len() > 1 && amount.starts_with('0'))
    {
        return Err(UnitsError::Malformed(amount.to_string()));
    }
    let wei = U256::from_str_radix(amount, 10)
        .map_err(|_| UnitsError::Overflow(amount.to_string()))?;
    Ok(from_wei(wei))
}
