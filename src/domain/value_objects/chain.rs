//! # Chain Value Objects
//!
//! Chain identity types for the BNB Chain family.
//!
//! [`SupportedChain`] is the closed catalog of well-known networks;
//! [`ChainName`] adds an escape hatch for chains registered at runtime;
//! [`ChainDescriptor`] is the immutable configuration of one chain.
//!
//! # Examples
//!
//! ```
//! use bnb_wallet::domain::value_objects::chain::{ChainName, SupportedChain};
//!
//! let name: ChainName = "opbnb".parse().unwrap();
//! assert_eq!(name, ChainName::Known(SupportedChain::OpBnb));
//! assert_eq!(name.to_string(), "opBNB");
//! ```

use crate::domain::errors::{WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Public default RPC endpoints by chain.
pub mod default_rpc {
    /// BNB Smart Chain mainnet.
    pub const BSC: &str = "https://bsc-dataseed.bnbchain.org";
    /// BNB Smart Chain testnet.
    pub const BSC_TESTNET: &str = "https://data-seed-prebsc-1-s1.bnbchain.org:8545";
    /// opBNB mainnet.
    pub const OPBNB: &str = "https://opbnb-mainnet-rpc.bnbchain.org";
    /// opBNB testnet.
    pub const OPBNB_TESTNET: &str = "https://opbnb-testnet-rpc.bnbchain.org";
}

/// Chains in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportedChain {
    /// BNB Smart Chain mainnet (chain ID 56).
    #[serde(rename = "bsc")]
    Bsc,
    /// BNB Smart Chain testnet (chain ID 97).
    #[serde(rename = "bscTestnet")]
    BscTestnet,
    /// opBNB mainnet (chain ID 204).
    #[serde(rename = "opBNB")]
    OpBnb,
    /// opBNB testnet (chain ID 5611).
    #[serde(rename = "opBNBTestnet")]
    OpBnbTestnet,
}

impl SupportedChain {
    /// Returns the EVM chain ID.
    #[must_use]
    pub fn chain_id(&self) -> u64 {
        match self {
            Self::Bsc => 56,
            Self::BscTestnet => 97,
            Self::OpBnb => 204,
            Self::OpBnbTestnet => 5611,
        }
    }

    /// Returns the logical name used as the registry key.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bsc => "bsc",
            Self::BscTestnet => "bscTestnet",
            Self::OpBnb => "opBNB",
            Self::OpBnbTestnet => "opBNBTestnet",
        }
    }

    /// Returns the human-readable network name.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Bsc => "BNB Smart Chain",
            Self::BscTestnet => "BNB Smart Chain Testnet",
            Self::OpBnb => "opBNB",
            Self::OpBnbTestnet => "opBNB Testnet",
        }
    }

    /// Returns the native currency symbol.
    #[must_use]
    pub fn native_symbol(&self) -> &'static str {
        match self {
            Self::Bsc | Self::OpBnb => "BNB",
            Self::BscTestnet | Self::OpBnbTestnet => "tBNB",
        }
    }

    /// Returns the public default RPC endpoint.
    #[must_use]
    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            Self::Bsc => default_rpc::BSC,
            Self::BscTestnet => default_rpc::BSC_TESTNET,
            Self::OpBnb => default_rpc::OPBNB,
            Self::OpBnbTestnet => default_rpc::OPBNB_TESTNET,
        }
    }

    /// Returns the block explorer URL.
    #[must_use]
    pub fn explorer_url(&self) -> &'static str {
        match self {
            Self::Bsc => "https://bscscan.com",
            Self::BscTestnet => "https://testnet.bscscan.com",
            Self::OpBnb => "https://opbnb.bscscan.com",
            Self::OpBnbTestnet => "https://opbnb-testnet.bscscan.com",
        }
    }

    /// Returns true for test networks.
    #[must_use]
    pub fn is_testnet(&self) -> bool {
        matches!(self, Self::BscTestnet | Self::OpBnbTestnet)
    }

    /// Builds the catalog descriptor, optionally overriding the RPC URL.
    #[must_use]
    pub fn descriptor(&self, custom_rpc: Option<&str>) -> ChainDescriptor {
        ChainDescriptor::new(
            self.chain_id(),
            self.name(),
            self.native_symbol(),
            custom_rpc.unwrap_or(self.default_rpc_url()),
        )
        .with_explorer(self.explorer_url())
    }

    /// Returns all catalog chains.
    #[must_use]
    pub fn all() -> &'static [SupportedChain] {
        &[
            SupportedChain::Bsc,
            SupportedChain::BscTestnet,
            SupportedChain::OpBnb,
            SupportedChain::OpBnbTestnet,
        ]
    }

    /// Looks up a catalog chain by logical name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|chain| chain.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Looks up a catalog chain by chain ID.
    #[must_use]
    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|chain| chain.chain_id() == chain_id)
    }
}

impl fmt::Display for SupportedChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SupportedChain {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| WalletError::UnknownChain(s.to_string()))
    }
}

/// Registry key for a chain.
///
/// Catalog names always resolve to [`ChainName::Known`]; any other
/// non-empty name is a [`ChainName::Custom`] chain that must be registered
/// before use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChainName {
    /// A chain from the static catalog.
    Known(SupportedChain),
    /// A chain added at runtime.
    Custom(String),
}

impl ChainName {
    /// Parses a chain name, validating it against the catalog first.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::UnknownChain` if the name is empty.
    pub fn parse(name: &str) -> WalletResult<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(WalletError::UnknownChain(name.to_string()));
        }
        Ok(match SupportedChain::from_name(trimmed) {
            Some(chain) => Self::Known(chain),
            None => Self::Custom(trimmed.to_string()),
        })
    }

    /// Returns the logical name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(chain) => chain.name(),
            Self::Custom(name) => name,
        }
    }

    /// Returns the catalog chain, if any.
    #[must_use]
    pub fn known(&self) -> Option<SupportedChain> {
        match self {
            Self::Known(chain) => Some(*chain),
            Self::Custom(_) => None,
        }
    }

    /// Returns true if this is the given catalog chain.
    #[must_use]
    pub fn is(&self, chain: SupportedChain) -> bool {
        self.known() == Some(chain)
    }
}

impl From<SupportedChain> for ChainName {
    fn from(chain: SupportedChain) -> Self {
        Self::Known(chain)
    }
}

impl FromStr for ChainName {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ChainName {
    type Error = WalletError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ChainName> for String {
    fn from(name: ChainName) -> Self {
        name.as_str().to_string()
    }
}

impl fmt::Display for ChainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable configuration of one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainDescriptor {
    /// EVM chain ID.
    pub chain_id: u64,
    /// Logical name.
    pub name: String,
    /// Native currency symbol.
    pub native_symbol: String,
    /// JSON-RPC endpoint.
    pub rpc_url: String,
    /// Block explorer URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
}

impl ChainDescriptor {
    /// Creates a new chain descriptor.
    #[must_use]
    pub fn new(
        chain_id: u64,
        name: impl Into<String>,
        native_symbol: impl Into<String>,
        rpc_url: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            name: name.into(),
            native_symbol: native_symbol.into(),
            rpc_url: rpc_url.into(),
            explorer_url: None,
        }
    }

    /// Sets the block explorer URL.
    #[must_use]
    pub fn with_explorer(mut self, url: impl Into<String>) -> Self {
        self.explorer_url = Some(url.into());
        self
    }

    /// Returns a copy pointing at another RPC endpoint.
    #[must_use]
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = rpc_url.into();
        self
    }

    /// Validates the descriptor's identity.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidRequest` if the name is empty or the
    /// chain ID is zero.
    pub fn validate(&self) -> WalletResult<()> {
        if self.name.trim().is_empty() {
            return Err(WalletError::InvalidRequest(
                "chain name cannot be empty".to_string(),
            ));
        }
        if self.chain_id == 0 {
            return Err(WalletError::InvalidRequest(format!(
                "chain '{}' has no chain id",
                self.name
            )));
        }
        Ok(())
    }
}
