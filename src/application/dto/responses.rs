//! # Response DTOs
//!
//! Balance and wallet summary views returned to callers.

use ethers::types::{Address, U256};
use serde::Serialize;
use std::fmt;

use crate::domain::value_objects::format_amount;

/// Balance of one asset on one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    /// Logical chain name.
    pub chain: String,
    /// Account the balance belongs to.
    pub owner: Address,
    /// Token contract; absent for native currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<Address>,
    /// Display symbol.
    pub symbol: String,
    /// Balance in base units, as a decimal string.
    pub raw: String,
    /// Decimal count used for formatting.
    pub decimals: u8,
    /// Balance in whole-token units.
    pub formatted: String,
}

impl BalanceResponse {
    /// Creates a balance view, formatting `raw` with `decimals`.
    #[must_use]
    pub fn new(
        chain: impl Into<String>,
        owner: Address,
        token: Option<Address>,
        symbol: impl Into<String>,
        raw: U256,
        decimals: u8,
    ) -> Self {
        Self {
            chain: chain.into(),
            owner,
            token,
            symbol: symbol.into(),
            raw: raw.to_string(),
            decimals,
            formatted: format_amount(raw, decimals),
        }
    }
}

impl fmt::Display for BalanceResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.formatted, self.symbol, self.chain)
    }
}

/// Account overview on the current chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSummary {
    /// Account address.
    pub address: Address,
    /// Current chain name.
    pub chain: String,
    /// EVM chain ID of the current chain.
    pub chain_id: u64,
    /// Native balance on the current chain.
    pub balance: BalanceResponse,
}

impl fmt::Display for WalletSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} on {} ({}): {}", self.address, self.chain, self.chain_id, self.balance)
    }
}
