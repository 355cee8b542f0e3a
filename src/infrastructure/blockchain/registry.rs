//! # Chain Registry
//!
//! Registry of known chains and the clients derived from them.
//!
//! Catalog chains resolve without registration; anything else must be
//! registered first. Clients are built lazily on first use and cached per
//! chain; re-registering a chain drops its cached clients so a new RPC
//! override takes effect on the next request. Handles already handed out
//! keep working against the transport they were built with.
//!
//! # Thread Safety
//!
//! The registry is thread-safe and can be shared across async tasks using
//! `Arc<ChainRegistry>`.
//!
//! # Examples
//!
//! ```ignore
//! use bnb_wallet::infrastructure::blockchain::{ChainRegistry, EthersClientFactory};
//!
//! let registry = ChainRegistry::new(account, Arc::new(EthersClientFactory::default()));
//! let reader = registry.read_client(&"bsc".parse()?).await?;
//! ```

use super::client::{ChainReader, ChainWriter, ClientFactory, ClientPair};
use crate::domain::entities::Account;
use crate::domain::errors::{WalletError, WalletResult};
use crate::domain::value_objects::{ChainDescriptor, ChainName, SupportedChain};
use ethers::types::Address;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Entry in the chain registry.
#[derive(Debug)]
struct RegistryEntry {
    descriptor: ChainDescriptor,
    clients: Option<ClientPair>,
}

impl RegistryEntry {
    fn new(descriptor: ChainDescriptor) -> Self {
        Self {
            descriptor,
            clients: None,
        }
    }
}

/// Registry of chain descriptors and per-chain clients.
#[derive(Debug)]
pub struct ChainRegistry {
    account: Account,
    factory: Arc<dyn ClientFactory>,
    entries: RwLock<HashMap<ChainName, RegistryEntry>>,
    current: RwLock<Option<ChainName>>,
}

impl ChainRegistry {
    /// Creates a registry for the account with no chains registered.
    ///
    /// Catalog chains still resolve through [`Self::derive_from_catalog`].
    #[must_use]
    pub fn new(account: Account, factory: Arc<dyn ClientFactory>) -> Self {
        Self {
            account,
            factory,
            entries: RwLock::new(HashMap::new()),
            current: RwLock::new(None),
        }
    }

    /// Creates a registry with catalog chains pointed at RPC overrides.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::UnknownChain` if an override names a chain that
    /// is not in the catalog, or `WalletError::InvalidRequest` if two keys
    /// name the same chain.
    pub async fn with_overrides(
        account: Account,
        factory: Arc<dyn ClientFactory>,
        overrides: &HashMap<String, String>,
    ) -> WalletResult<Self> {
        let mut resolved: HashMap<ChainName, &str> = HashMap::with_capacity(overrides.len());
        for (key, rpc_url) in overrides {
            let name = ChainName::parse(key)?;
            if resolved.insert(name.clone(), rpc_url).is_some() {
                return Err(WalletError::InvalidRequest(format!(
                    "duplicate RPC override for chain '{name}'"
                )));
            }
        }

        let registry = Self::new(account, factory);
        for (name, rpc_url) in resolved {
            let descriptor = Self::derive_from_catalog(&name, Some(rpc_url))?;
            registry.register(name, descriptor).await?;
        }
        Ok(registry)
    }

    /// Builds a descriptor from the static catalog.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::UnknownChain` if the name is not a catalog chain.
    pub fn derive_from_catalog(
        name: &ChainName,
        custom_rpc: Option<&str>,
    ) -> WalletResult<ChainDescriptor> {
        let chain = name
            .known()
            .ok_or_else(|| WalletError::UnknownChain(name.to_string()))?;
        Ok(chain.descriptor(custom_rpc))
    }

    /// Registers or overwrites a chain.
    ///
    /// Cached clients for the chain are dropped.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidRequest` if the descriptor has no identity.
    pub async fn register(&self, name: ChainName, descriptor: ChainDescriptor) -> WalletResult<()> {
        descriptor.validate()?;
        debug!(chain = %name, rpc_url = %descriptor.rpc_url, "registering chain");

        let mut entries = self.entries.write().await;
        entries.insert(name, RegistryEntry::new(descriptor));
        Ok(())
    }

    /// Returns the descriptor for a chain.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::UnknownChain` if the chain is neither registered
    /// nor in the catalog.
    pub async fn descriptor(&self, name: &ChainName) -> WalletResult<ChainDescriptor> {
        let entries = self.entries.read().await;
        match entries.get(name) {
            Some(entry) => Ok(entry.descriptor.clone()),
            None => Self::derive_from_catalog(name, None),
        }
    }

    /// Returns true if the chain resolves.
    pub async fn contains(&self, name: &ChainName) -> bool {
        self.descriptor(name).await.is_ok()
    }

    /// Returns the read and write clients for a chain.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::UnknownChain` if the chain does not resolve, or
    /// `WalletError::ClientUnavailable` if the transport cannot be built.
    pub async fn clients(&self, name: &ChainName) -> WalletResult<ClientPair> {
        {
            let entries = self.entries.read().await;
            if let Some(clients) = entries.get(name).and_then(|e| e.clients.as_ref()) {
                return Ok(clients.clone());
            }
        }

        let mut entries = self.entries.write().await;
        if !entries.contains_key(name) {
            let descriptor = Self::derive_from_catalog(name, None)?;
            entries.insert(name.clone(), RegistryEntry::new(descriptor));
        }
        let entry = entries
            .get_mut(name)
            .ok_or_else(|| WalletError::UnknownChain(name.to_string()))?;

        if let Some(clients) = &entry.clients {
            return Ok(clients.clone());
        }

        let unavailable = |e: super::client::ClientError| WalletError::ClientUnavailable {
            chain: name.to_string(),
            message: e.to_string(),
        };
        let reader = self
            .factory
            .read_client(&entry.descriptor)
            .map_err(unavailable)?;
        let writer = self
            .factory
            .write_client(&entry.descriptor, &self.account)
            .map_err(unavailable)?;

        debug!(chain = %name, rpc_url = %entry.descriptor.rpc_url, "built chain clients");
        let pair = ClientPair { reader, writer };
        entry.clients = Some(pair.clone());
        Ok(pair)
    }

    /// Returns the read-only client for a chain.
    ///
    /// # Errors
    ///
    /// See [`Self::clients`].
    pub async fn read_client(&self, name: &ChainName) -> WalletResult<Arc<dyn ChainReader>> {
        Ok(self.clients(name).await?.reader)
    }

    /// Returns the signing client for a chain.
    ///
    /// # Errors
    ///
    /// See [`Self::clients`].
    pub async fn write_client(&self, name: &ChainName) -> WalletResult<Arc<dyn ChainWriter>> {
        Ok(self.clients(name).await?.writer)
    }

    /// Selects the current chain for informational queries.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::UnknownChain` if the chain does not resolve.
    pub async fn set_current(&self, name: ChainName) -> WalletResult<()> {
        self.descriptor(&name).await?;
        let mut current = self.current.write().await;
        *current = Some(name);
        Ok(())
    }

    /// Returns the current chain, if one was selected.
    pub async fn current(&self) -> Option<ChainName> {
        self.current.read().await.clone()
    }

    /// Returns the signing account.
    #[inline]
    #[must_use]
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Returns the signing account's address.
    #[inline]
    #[must_use]
    pub fn address(&self) -> Address {
        self.account.address()
    }

    /// Returns descriptors for every catalog and registered chain, sorted by
    /// chain ID.
    pub async fn chains(&self) -> Vec<ChainDescriptor> {
        let entries = self.entries.read().await;
        let mut chains: Vec<ChainDescriptor> = entries
            .values()
            .map(|e| e.descriptor.clone())
            .collect();

        for chain in SupportedChain::all() {
            if !entries.contains_key(&ChainName::Known(*chain)) {
                chains.push(chain.descriptor(None));
            }
        }

        chains.sort_by_key(|d| d.chain_id);
        chains
    }
}
