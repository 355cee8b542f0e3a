//! # Ethers Client
//!
//! [`ChainReader`] and [`ChainWriter`] on top of ethers-rs.
//!
//! Readers wrap a `Provider<Http>`; writers wrap a `SignerMiddleware` that
//! signs with the registry's account bound to the descriptor's chain ID.
//!
//! # Examples
//!
//! ```ignore
//! use bnb_wallet::infrastructure::blockchain::{ClientFactory, EthersClientFactory};
//! use bnb_wallet::domain::value_objects::SupportedChain;
//!
//! let factory = EthersClientFactory::default();
//! let reader = factory.read_client(&SupportedChain::Bsc.descriptor(None))?;
//! let price = reader.get_gas_price().await?;
//! ```

use super::client::{
    ChainReader, ChainWriter, ClientError, ClientFactory, ClientResult,
};
use crate::domain::entities::{Account, CallRequest};
use crate::domain::value_objects::ChainDescriptor;
use async_trait::async_trait;
use ethers::middleware::SignerMiddleware;
use ethers::prelude::*;
use ethers::types::transaction::eip2718::TypedTransaction;
use std::sync::Arc;
use std::time::Duration;

/// HTTP provider type alias.
pub type HttpProvider = Provider<Http>;

/// Signing middleware type alias.
pub type SigningClient = SignerMiddleware<HttpProvider, LocalWallet>;

/// Default polling interval for pending transactions.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

fn typed_transaction(request: &CallRequest) -> TypedTransaction {
    let mut tx = TransactionRequest::new().to(request.to).value(request.value);
    if let Some(from) = request.from {
        tx = tx.from(from);
    }
    if let Some(data) = &request.data {
        tx = tx.data(data.clone());
    }
    if let Some(gas) = request.gas {
        tx = tx.gas(gas);
    }
    if let Some(gas_price) = request.gas_price {
        tx = tx.gas_price(gas_price);
    }
    tx.into()
}

fn connect(rpc_url: &str, poll_interval: Duration) -> ClientResult<HttpProvider> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| ClientError::Connection(format!("failed to create provider: {e}")))?
        .interval(poll_interval);
    Ok(provider)
}

/// Read-only ethers client.
#[derive(Clone)]
pub struct EthersReadClient {
    provider: Arc<HttpProvider>,
    rpc_url: String,
    chain_id: u64,
}

impl EthersReadClient {
    /// Creates a reader for an RPC endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Connection` if the URL is not a valid transport.
    pub fn new(
        rpc_url: impl Into<String>,
        chain_id: u64,
        poll_interval: Duration,
    ) -> ClientResult<Self> {
        let rpc_url = rpc_url.into();
        let provider = connect(&rpc_url, poll_interval)?;
        Ok(Self {
            provider: Arc::new(provider),
            rpc_url,
            chain_id,
        })
    }
}

impl std::fmt::Debug for EthersReadClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EthersReadClient")
            .field("rpc_url", &self.rpc_url)
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

#[async_trait]
impl ChainReader for EthersReadClient {
    fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn get_balance(&self, owner: Address) -> ClientResult<U256> {
        self.provider
            .get_balance(owner, None)
            .await
            .map_err(|e| ClientError::from_node_message(e.to_string()))
    }

    async fn get_gas_price(&self) -> ClientResult<U256> {
        self.provider
            .get_gas_price()
            .await
            .map_err(|e| ClientError::from_node_message(e.to_string()))
    }

    async fn call(&self, request: &CallRequest) -> ClientResult<Bytes> {
        self.provider
            .call(&typed_transaction(request), None)
            .await
            .map_err(|e| ClientError::from_node_message(e.to_string()))
    }
}

/// Signing ethers client.
#[derive(Clone)]
pub struct EthersWriteClient {
    client: Arc<SigningClient>,
    rpc_url: String,
    chain_id: u64,
    poll_interval: Duration,
}

impl EthersWriteClient {
    /// Creates a writer for an RPC endpoint and account.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Connection` if the URL is not a valid transport.
    pub fn new(
        rpc_url: impl Into<String>,
        chain_id: u64,
        account: &Account,
        poll_interval: Duration,
    ) -> ClientResult<Self> {
        let rpc_url = rpc_url.into();
        let provider = connect(&rpc_url, poll_interval)?;
        let client = SignerMiddleware::new(provider, account.signer_for(chain_id));
        Ok(Self {
            client: Arc::new(client),
            rpc_url,
            chain_id,
            poll_interval,
        })
    }
}

impl std::fmt::Debug for EthersWriteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EthersWriteClient")
            .field("rpc_url", &self.rpc_url)
            .field("chain_id", &self.chain_id)
            .field("sender", &self.client.address())
            .finish()
    }
}

#[async_trait]
impl ChainReader for EthersWriteClient {
    fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn get_balance(&self, owner: Address) -> ClientResult<U256> {
        self.client
            .get_balance(owner, None)
            .await
            .map_err(|e| ClientError::from_node_message(e.to_string()))
    }

    async fn get_gas_price(&self) -> ClientResult<U256> {
        self.client
            .get_gas_price()
            .await
            .map_err(|e| ClientError::from_node_message(e.to_string()))
    }

    async fn call(&self, request: &CallRequest) -> ClientResult<Bytes> {
        self.client
            .call(&typed_transaction(request), None)
            .await
            .map_err(|e| ClientError::from_node_message(e.to_string()))
    }
}

#[async_trait]
impl ChainWriter for EthersWriteClient {
    fn sender(&self) -> Address {
        self.client.address()
    }

    async fn send_transaction(&self, request: &CallRequest) -> ClientResult<TxHash> {
        let pending = self
            .client
            .send_transaction(typed_transaction(request), None)
            .await
            .map_err(|e| ClientError::from_node_message(e.to_string()))?;
        Ok(pending.tx_hash())
    }

    async fn wait_for_receipt(&self, hash: TxHash) -> ClientResult<()> {
        let receipt = PendingTransaction::new(hash, self.client.provider())
            .interval(self.poll_interval)
            .await
            .map_err(|e| ClientError::from_node_message(e.to_string()))?;

        match receipt {
            Some(receipt) if receipt.status == Some(U64::one()) => Ok(()),
            Some(_) => Err(ClientError::TransactionFailed {
                hash,
                reason: "mined with failure status".to_string(),
            }),
            None => Err(ClientError::TransactionFailed {
                hash,
                reason: "dropped from mempool".to_string(),
            }),
        }
    }
}

/// Builds ethers-backed clients.
#[derive(Debug, Clone)]
pub struct EthersClientFactory {
    poll_interval: Duration,
}

impl EthersClientFactory {
    /// Creates a factory with the given polling interval.
    #[must_use]
    pub fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }

    /// Returns the polling interval.
    #[inline]
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl Default for EthersClientFactory {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

impl ClientFactory for EthersClientFactory {
    fn read_client(&self, descriptor: &ChainDescriptor) -> ClientResult<Arc<dyn ChainReader>> {
        let client =
            EthersReadClient::new(&descriptor.rpc_url, descriptor.chain_id, self.poll_interval)?;
        Ok(Arc::new(client))
    }

    fn write_client(
        &self,
        descriptor: &ChainDescriptor,
        account: &Account,
    ) -> ClientResult<Arc<dyn ChainWriter>> {
        let client = EthersWriteClient::new(
            &descriptor.rpc_url,
            descriptor.chain_id,
            account,
            self.poll_interval,
        )?;
        Ok(Arc::new(client))
    }
}
