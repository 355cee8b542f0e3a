//! # Account
//!
//! The signing identity shared by every per-chain client.
//!
//! Derived once from a private key; the address never changes and the key
//! is never exposed through `Debug` or serialization.

use crate::domain::errors::{WalletError, WalletResult};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::Address;
use std::fmt;
use std::str::FromStr;

/// A signing account.
#[derive(Clone)]
pub struct Account {
    wallet: LocalWallet,
}

impl Account {
    /// Derives an account from a hex private key, with or without `0x`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidKey` if the key cannot be parsed.
    pub fn from_private_key(private_key: &str) -> WalletResult<Self> {
        let wallet = LocalWallet::from_str(private_key.trim())
            .map_err(|e| WalletError::InvalidKey(e.to_string()))?;
        Ok(Self { wallet })
    }

    /// Returns the account address.
    #[inline]
    #[must_use]
    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    /// Returns a signer bound to the given chain ID.
    #[must_use]
    pub fn signer_for(&self, chain_id: u64) -> LocalWallet {
        self.wallet.clone().with_chain_id(chain_id)
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}
