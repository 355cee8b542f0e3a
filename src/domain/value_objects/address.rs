//! # Addresses
//!
//! Validation of hex address strings at the request boundary.

use crate::domain::errors::{WalletError, WalletResult};
use ethers::types::Address;

/// Returns true if the string is a `0x`-prefixed 40-hex-digit address.
#[must_use]
pub fn is_valid_address(address: &str) -> bool {
    let Some(hex_part) = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
    else {
        return false;
    };

    hex_part.len() == 40 && hex_part.chars().all(|c| c.is_ascii_hexdigit())
}

/// Parses an address string.
///
/// # Errors
///
/// Returns `WalletError::InvalidAddress` if the format is invalid.
pub fn parse_address(address: &str) -> WalletResult<Address> {
    let trimmed = address.trim();
    if !is_valid_address(trimmed) {
        return Err(WalletError::InvalidAddress(address.to_string()));
    }

    trimmed
        .parse()
        .map_err(|_| WalletError::InvalidAddress(address.to_string()))
}

/// Parses an optional address string.
///
/// # Errors
///
/// Returns `WalletError::InvalidAddress` if a present value is invalid.
pub fn parse_optional_address(address: Option<&str>) -> WalletResult<Option<Address>> {
    address.map(parse_address).transpose()
}
