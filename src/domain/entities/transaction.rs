//! # Transactions
//!
//! Call requests handed to chain clients and the results returned to
//! callers.
//!
//! A [`CallRequest`] describes one contract call or value transfer; the same
//! request is first simulated and then submitted. A [`TransactionResult`] is
//! produced once per successful submission and is the only artifact a
//! request leaves behind.

use ethers::types::{Address, Bytes, TxHash, U256};
use serde::Serialize;
use std::fmt;

/// A call or value transfer against one chain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallRequest {
    /// Sender, set for simulations so the node evaluates balances and
    /// allowances of the real account.
    pub from: Option<Address>,
    /// Recipient or contract address.
    pub to: Address,
    /// Native value in base units.
    pub value: U256,
    /// ABI-encoded call data.
    pub data: Option<Bytes>,
    /// Pinned gas limit.
    pub gas: Option<U256>,
    /// Pinned gas price.
    pub gas_price: Option<U256>,
}

impl CallRequest {
    /// Creates a read-only call with the given data.
    #[must_use]
    pub fn read(to: Address, data: Bytes) -> Self {
        Self {
            to,
            data: Some(data),
            ..Self::default()
        }
    }

    /// Creates a contract call carrying native value.
    #[must_use]
    pub fn contract(to: Address, data: Bytes, value: U256) -> Self {
        Self {
            to,
            value,
            data: Some(data),
            ..Self::default()
        }
    }

    /// Creates a plain value transfer.
    #[must_use]
    pub fn transfer(to: Address, value: U256) -> Self {
        Self {
            to,
            value,
            ..Self::default()
        }
    }

    /// Sets the sender.
    #[must_use]
    pub fn with_sender(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    /// Attaches call data.
    #[must_use]
    pub fn with_data(mut self, data: Option<Bytes>) -> Self {
        self.data = data;
        self
    }

    /// Pins the gas limit and gas price.
    #[must_use]
    pub fn with_gas(mut self, gas: Option<U256>, gas_price: Option<U256>) -> Self {
        self.gas = gas;
        self.gas_price = gas_price;
        self
    }

    /// Returns the 4-byte function selector, if call data is present.
    #[must_use]
    pub fn selector(&self) -> Option<[u8; 4]> {
        let data = self.data.as_ref()?;
        let bytes = data.get(0..4)?;
        let mut selector = [0u8; 4];
        selector.copy_from_slice(bytes);
        Some(selector)
    }
}

/// Outcome of one submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionResult {
    /// Transaction hash.
    pub hash: TxHash,
    /// Sending account.
    pub from: Address,
    /// Recipient or contract address.
    pub to: Address,
    /// Native value moved, in base units.
    pub value: U256,
    /// Call data sent with the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,
    /// Logical chain name.
    pub chain: String,
}

impl TransactionResult {
    /// Creates a result from the submitted request.
    #[must_use]
    pub fn new(hash: TxHash, from: Address, request: &CallRequest, chain: impl Into<String>) -> Self {
        Self {
            hash,
            from,
            to: request.to,
            value: request.value,
            data: request.data.clone(),
            chain: chain.into(),
        }
    }
}

impl fmt::Display for TransactionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} on {}: {:?} -> {:?} value {}",
            self.hash, self.chain, self.from, self.to, self.value
        )
    }
}
