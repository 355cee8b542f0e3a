//! # Token Registry
//!
//! Token address mapping across chains.
//!
//! Maps well-known symbols to their contract address on each chain so a
//! transfer can name a token by symbol. Decimals are deliberately absent:
//! they are always read from the token contract.

use crate::domain::errors::{WalletError, WalletResult};
use crate::domain::value_objects::{ChainName, SupportedChain, parse_address};
use ethers::types::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Information about a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Token symbol (e.g., "USDT", "WBNB").
    pub symbol: String,
    /// Token name (e.g., "Wrapped BNB").
    pub name: String,
    /// Token addresses per chain.
    #[serde(default)]
    pub addresses: HashMap<ChainName, Address>,
}

impl TokenInfo {
    /// Creates a new token info.
    #[must_use]
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            addresses: HashMap::new(),
        }
    }

    /// Adds an address for a chain.
    #[must_use]
    pub fn with_address(mut self, chain: impl Into<ChainName>, address: Address) -> Self {
        self.addresses.insert(chain.into(), address);
        self
    }

    /// Adds an address for a chain from its hex form.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidAddress` if the address is malformed.
    pub fn with_hex_address(
        self,
        chain: impl Into<ChainName>,
        address: &str,
    ) -> WalletResult<Self> {
        Ok(self.with_address(chain, parse_address(address)?))
    }

    /// Gets the address for a specific chain.
    #[must_use]
    pub fn address(&self, chain: &ChainName) -> Option<Address> {
        self.addresses.get(chain).copied()
    }

    /// Returns true if the token is available on the specified chain.
    #[must_use]
    pub fn is_available_on(&self, chain: &ChainName) -> bool {
        self.addresses.contains_key(chain)
    }
}

/// Registry for token address mappings across chains.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenRegistry {
    /// Tokens indexed by upper-case symbol.
    #[serde(flatten)]
    tokens: HashMap<String, TokenInfo>,
}

impl TokenRegistry {
    /// Creates a new empty token registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the common BSC and opBNB tokens.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidAddress` if a built-in address is malformed.
    pub fn with_common_tokens() -> WalletResult<Self> {
        let mut registry = Self::new();

        registry.register(
            TokenInfo::new("USDT", "Tether USD")
                .with_hex_address(SupportedChain::Bsc, "0x55d398326f99059fF775485246999027B3197955")?
                .with_hex_address(
                    SupportedChain::OpBnb,
                    "0x9e5AAC1Ba1a2e6aEd6b32689DFcF62A509Ca96f3",
                )?,
        );

        registry.register(
            TokenInfo::new("USDC", "USD Coin")
                .with_hex_address(SupportedChain::Bsc, "0x8AC76a51cc950d9822D68b83fE1Ad97B32Cd580d")?,
        );

        registry.register(
            TokenInfo::new("WBNB", "Wrapped BNB")
                .with_hex_address(SupportedChain::Bsc, "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c")?
                .with_hex_address(
                    SupportedChain::OpBnb,
                    "0x4200000000000000000000000000000000000006",
                )?,
        );

        registry.register(
            TokenInfo::new("FDUSD", "First Digital USD")
                .with_hex_address(SupportedChain::Bsc, "0xc5f0f7b66764F6ec8C8Dff7BA683102295E16409")?,
        );

        Ok(registry)
    }

    /// Registers a token, replacing any token with the same symbol.
    pub fn register(&mut self, token: TokenInfo) {
        self.tokens.insert(token.symbol.to_ascii_uppercase(), token);
    }

    /// Gets token info by symbol, case-insensitively.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&TokenInfo> {
        self.tokens.get(&symbol.trim().to_ascii_uppercase())
    }

    /// Gets the address of a token on a specific chain.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::TokenResolutionFailed` if the token is unknown or
    /// not deployed on the chain.
    pub fn get_address(&self, symbol: &str, chain: &ChainName) -> WalletResult<Address> {
        let token = self.get(symbol).ok_or_else(|| {
            WalletError::TokenResolutionFailed(format!("unknown token symbol '{symbol}'"))
        })?;

        token.address(chain).ok_or_else(|| {
            WalletError::TokenResolutionFailed(format!(
                "token '{}' is not available on {chain}",
                token.symbol
            ))
        })
    }

    /// Gets token info by address on a specific chain.
    #[must_use]
    pub fn get_by_address(&self, address: Address, chain: &ChainName) -> Option<&TokenInfo> {
        self.tokens
            .values()
            .find(|t| t.address(chain) == Some(address))
    }

    /// Returns all registered token symbols.
    #[must_use]
    pub fn symbols(&self) -> Vec<&str> {
        self.tokens.values().map(|t| t.symbol.as_str()).collect()
    }

    /// Returns the number of registered tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no tokens are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns all tokens available on a specific chain.
    #[must_use]
    pub fn tokens_on_chain(&self, chain: &ChainName) -> Vec<&TokenInfo> {
        self.tokens
            .values()
            .filter(|t| t.is_available_on(chain))
            .collect()
    }
}
