//! # Chain Client
//!
//! Ports for JSON-RPC access to an EVM chain.
//!
//! The orchestrators never talk to a node directly; they go through
//! [`ChainReader`] for reads and simulations and [`ChainWriter`] for signed
//! submissions. A [`ClientFactory`] builds both from a chain descriptor so
//! the registry can swap transports without the orchestrators noticing.

use crate::domain::entities::{Account, CallRequest};
use crate::domain::value_objects::ChainDescriptor;
use async_trait::async_trait;
use ethers::types::{Address, Bytes, TxHash, U256};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Transport-level client error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The transport could not be created or reached.
    #[error("connection error: {0}")]
    Connection(String),

    /// The node returned a JSON-RPC error.
    #[error("rpc error: {0}")]
    Rpc(String),

    /// The node reported an execution revert.
    #[error("execution reverted: {0}")]
    Reverted(String),

    /// The transaction was mined with a failure status or dropped.
    #[error("transaction {hash:?} failed: {reason}")]
    TransactionFailed {
        /// Transaction hash.
        hash: TxHash,
        /// Failure description.
        reason: String,
    },
}

impl ClientError {
    /// Classifies a raw node error message.
    #[must_use]
    pub fn from_node_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.to_ascii_lowercase().contains("revert") {
            Self::Reverted(message)
        } else {
            Self::Rpc(message)
        }
    }

    /// Returns true if the node rejected the call's execution.
    #[must_use]
    pub fn is_revert(&self) -> bool {
        matches!(self, Self::Reverted(_))
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Read-only access to one chain.
#[async_trait]
pub trait ChainReader: Send + Sync + fmt::Debug {
    /// Returns the RPC endpoint this client is bound to.
    fn rpc_url(&self) -> &str;

    /// Returns the chain ID this client targets.
    fn chain_id(&self) -> u64;

    /// Returns the native balance of an account.
    async fn get_balance(&self, owner: Address) -> ClientResult<U256>;

    /// Returns the node's current gas price.
    async fn get_gas_price(&self) -> ClientResult<U256>;

    /// Executes a call without submitting it (`eth_call`).
    async fn call(&self, request: &CallRequest) -> ClientResult<Bytes>;
}

/// Signing access to one chain.
#[async_trait]
pub trait ChainWriter: ChainReader {
    /// Returns the signing account's address.
    fn sender(&self) -> Address;

    /// Signs and submits a transaction, returning its hash.
    async fn send_transaction(&self, request: &CallRequest) -> ClientResult<TxHash>;

    /// Waits until the transaction is included and succeeded.
    async fn wait_for_receipt(&self, hash: TxHash) -> ClientResult<()>;
}

/// Builds clients bound to a chain descriptor's transport.
pub trait ClientFactory: Send + Sync + fmt::Debug {
    /// Builds a read-only client.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Connection` if the transport cannot be created.
    fn read_client(&self, descriptor: &ChainDescriptor) -> ClientResult<Arc<dyn ChainReader>>;

    /// Builds a signing client for the account.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Connection` if the transport cannot be created.
    fn write_client(
        &self,
        descriptor: &ChainDescriptor,
        account: &Account,
    ) -> ClientResult<Arc<dyn ChainWriter>>;
}

/// Read and write clients for one chain, built from the same descriptor.
#[derive(Debug, Clone)]
pub struct ClientPair {
    /// Read-only client.
    pub reader: Arc<dyn ChainReader>,
    /// Signing client.
    pub writer: Arc<dyn ChainWriter>,
}
