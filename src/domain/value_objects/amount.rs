//! # Amounts
//!
//! Conversion between whole-token decimal strings and base-unit integers.
//!
//! Amounts always arrive as decimal strings in whole-token units and are
//! scaled by the token's own decimal count. Native currency uses
//! [`NATIVE_DECIMALS`]; ERC-20 decimals are read from the token contract.
//!
//! # Examples
//!
//! ```
//! use bnb_wallet::domain::value_objects::amount::{parse_amount, format_amount};
//!
//! let base = parse_amount("1.5", 6).unwrap();
//! assert_eq!(base.as_u64(), 1_500_000);
//! assert_eq!(format_amount(base, 6), "1.5");
//! ```

use crate::domain::errors::{WalletError, WalletResult};
use ethers::types::U256;
use ethers::utils::{format_units, parse_units};

/// Decimal count of the native currency.
pub const NATIVE_DECIMALS: u8 = 18;

/// Gas consumed by a plain value transfer.
pub const NATIVE_TRANSFER_GAS: u64 = 21_000;

/// Parses a whole-token decimal string into base units.
///
/// # Errors
///
/// Returns `WalletError::InvalidAmount` if the string is empty, negative,
/// not a decimal number, or has more fractional digits than `decimals`.
pub fn parse_amount(amount: &str, decimals: u8) -> WalletResult<U256> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(WalletError::InvalidAmount("amount cannot be empty".to_string()));
    }
    if trimmed.starts_with('-') {
        return Err(WalletError::InvalidAmount(format!(
            "amount must not be negative: {trimmed}"
        )));
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit() || c == '.') || trimmed == "." {
        return Err(WalletError::InvalidAmount(format!(
            "not a decimal number: {trimmed}"
        )));
    }
    if let Some((_, fraction)) = trimmed.split_once('.')
        && fraction.len() > usize::from(decimals)
    {
        return Err(WalletError::InvalidAmount(format!(
            "{trimmed} has more than {decimals} decimal places"
        )));
    }

    parse_units(trimmed, u32::from(decimals))
        .map(Into::into)
        .map_err(|e| WalletError::InvalidAmount(format!("{trimmed}: {e}")))
}

/// Formats base units as a whole-token decimal string without trailing zeros.
#[must_use]
pub fn format_amount(value: U256, decimals: u8) -> String {
    match format_units(value, u32::from(decimals)) {
        Ok(formatted) if formatted.contains('.') => {
            let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
            trimmed.to_string()
        }
        Ok(formatted) => formatted,
        Err(_) => value.to_string(),
    }
}

/// Returns the gas budget reserved for a native value transfer.
#[must_use]
pub fn reserved_transfer_gas(gas_price: U256) -> U256 {
    gas_price.saturating_mul(U256::from(NATIVE_TRANSFER_GAS))
}

/// Sizes a native "transfer all" sweep: `balance - gas_price * 21000`.
///
/// # Errors
///
/// Returns `WalletError::InsufficientBalance` if the balance does not cover
/// the reserved gas.
pub fn sweepable_native(balance: U256, gas_price: U256) -> WalletResult<U256> {
    let reserved = reserved_transfer_gas(gas_price);
    balance.checked_sub(reserved).ok_or_else(|| {
        WalletError::InsufficientBalance(format!(
            "balance {balance} does not cover reserved gas {reserved}"
        ))
    })
}
