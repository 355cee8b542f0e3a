//! # Wallet Errors
//!
//! Typed error definitions for chain resolution, request validation and
//! transaction execution.
//!
//! # Error Code Ranges
//!
//! | Range | Category |
//! |-------|----------|
//! | 1000-1999 | Validation errors (raised before any network call) |
//! | 2000-2999 | Chain and registry errors |
//! | 3000-3999 | Execution errors (raised after reaching the chain) |
//!
//! Orchestrator wrappers ([`WalletError::BridgeFailed`],
//! [`WalletError::StakeFailed`]) report the code of their root cause.
//!
//! # Examples
//!
//! ```
//! use bnb_wallet::domain::errors::WalletError;
//!
//! let error = WalletError::MissingField("toValidator");
//! assert_eq!(error.code(), 1001);
//! assert!(error.is_validation());
//! ```

use ethers::types::TxHash;
use thiserror::Error;

/// Error raised by the wallet core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    // ========================================================================
    // Validation Errors (1000-1999)
    // ========================================================================
    /// A field required by the requested action is absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// An amount string could not be converted to base units.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// An address string is not a 20-byte hex address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The bridge pair is not one of the supported directions.
    #[error("unsupported bridge direction: {from} -> {to}")]
    UnsupportedDirection {
        /// Source chain name.
        from: String,
        /// Destination chain name.
        to: String,
    },

    /// The action is not available on the selected chain.
    #[error("unsupported chain for this action: {0}")]
    UnsupportedChain(String),

    /// The request is malformed in a way not covered by other variants.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A token symbol could not be mapped to an address.
    #[error("token resolution failed: {0}")]
    TokenResolutionFailed(String),

    /// The signing key could not be parsed.
    #[error("invalid private key: {0}")]
    InvalidKey(String),

    // ========================================================================
    // Chain Errors (2000-2999)
    // ========================================================================
    /// The chain is neither registered nor in the static catalog.
    #[error("unknown chain: {0}")]
    UnknownChain(String),

    /// A client could not be built for the chain's transport.
    #[error("client unavailable for chain {chain}: {message}")]
    ClientUnavailable {
        /// Chain name.
        chain: String,
        /// Underlying failure.
        message: String,
    },

    // ========================================================================
    // Execution Errors (3000-3999)
    // ========================================================================
    /// A read call (balance, allowance, decimals, gas price) failed.
    #[error("read failed: {0}")]
    ReadFailed(String),

    /// The chain rejected the call during simulation.
    #[error("simulation reverted: {0}")]
    SimulationReverted(String),

    /// Submitting or confirming a transaction failed.
    #[error("submission failed: {0}")]
    SubmissionFailed(String),

    /// The balance cannot cover the requested amount plus reserved gas.
    #[error("insufficient balance: {0}")]
    InsufficientBalance(String),

    /// A bridge request failed.
    ///
    /// `allowance` is set when an allowance increase was submitted before
    /// the failure, confirmed or not; that step is not rolled back.
    #[error("bridge failed: {source}{}", allowance_note(.allowance))]
    BridgeFailed {
        /// The underlying failure.
        source: Box<WalletError>,
        /// Allowance-increase transaction sent before the failure, if any.
        allowance: Option<AllowanceIncrease>,
    },

    /// A staking call failed during simulation or submission.
    #[error("stake failed: {source}")]
    StakeFailed {
        /// The underlying failure.
        source: Box<WalletError>,
    },
}

/// An allowance-increase transaction sent ahead of a bridge call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowanceIncrease {
    /// Transaction hash.
    pub tx_hash: TxHash,
    /// Whether the transaction was mined successfully.
    pub confirmed: bool,
}

impl AllowanceIncrease {
    /// A submitted transaction whose receipt has not been confirmed.
    #[must_use]
    pub fn submitted(tx_hash: TxHash) -> Self {
        Self {
            tx_hash,
            confirmed: false,
        }
    }

    /// A transaction mined successfully.
    #[must_use]
    pub fn confirmed(tx_hash: TxHash) -> Self {
        Self {
            tx_hash,
            confirmed: true,
        }
    }
}

fn allowance_note(allowance: &Option<AllowanceIncrease>) -> String {
    match allowance {
        Some(a) if a.confirmed => {
            format!(" (allowance increase {:?} already confirmed)", a.tx_hash)
        }
        Some(a) => format!(" (allowance increase {:?} submitted, unconfirmed)", a.tx_hash),
        None => String::new(),
    }
}

impl WalletError {
    /// Creates an unsupported direction error.
    #[must_use]
    pub fn unsupported_direction(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::UnsupportedDirection {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Wraps an error as a bridge failure.
    #[must_use]
    pub fn bridge_failed(source: WalletError, allowance: Option<AllowanceIncrease>) -> Self {
        Self::BridgeFailed {
            source: Box::new(source),
            allowance,
        }
    }

    /// Wraps an error as a staking failure.
    #[must_use]
    pub fn stake_failed(source: WalletError) -> Self {
        Self::StakeFailed {
            source: Box::new(source),
        }
    }

    /// Returns the innermost error, unwrapping orchestrator wrappers.
    #[must_use]
    pub fn root_cause(&self) -> &WalletError {
        match self {
            Self::BridgeFailed { source, .. } | Self::StakeFailed { source } => {
                source.root_cause()
            }
            other => other,
        }
    }

    /// Returns the numeric error code of the root cause.
    #[must_use]
    pub fn code(&self) -> u16 {
        match self.root_cause() {
            Self::MissingField(_) => 1001,
            Self::InvalidAmount(_) => 1002,
            Self::InvalidAddress(_) => 1003,
            Self::UnsupportedDirection { .. } => 1004,
            Self::UnsupportedChain(_) => 1005,
            Self::InvalidRequest(_) => 1006,
            Self::TokenResolutionFailed(_) => 1007,
            Self::InvalidKey(_) => 1008,

            Self::UnknownChain(_) => 2001,
            Self::ClientUnavailable { .. } => 2002,

            Self::ReadFailed(_) => 3001,
            Self::SimulationReverted(_) => 3002,
            Self::SubmissionFailed(_) => 3003,
            Self::InsufficientBalance(_) => 3004,

            // root_cause never returns a wrapper
            Self::BridgeFailed { .. } | Self::StakeFailed { .. } => 3999,
        }
    }

    /// Returns the error category name.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self.code() {
            1000..=1999 => "validation",
            2000..=2999 => "chain",
            _ => "execution",
        }
    }

    /// Returns true if the failure happened before any transaction was sent.
    ///
    /// Validation and unknown-chain failures never have side effects.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self.code(), 1000..=2001)
    }

    /// Returns the allowance-increase transaction carried by a bridge
    /// failure, if any.
    #[must_use]
    pub fn allowance(&self) -> Option<AllowanceIncrease> {
        match self {
            Self::BridgeFailed { allowance, .. } => *allowance,
            _ => None,
        }
    }

    /// Returns the hash of the allowance increase sent before a bridge
    /// failure, whether or not it was confirmed.
    #[must_use]
    pub fn allowance_tx(&self) -> Option<TxHash> {
        self.allowance().map(|a| a.tx_hash)
    }
}

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;
