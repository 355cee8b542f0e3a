//! # Balance Use Case
//!
//! Balance lookups and the wallet summary.

use crate::application::dto::{BalanceResponse, WalletSummary};
use crate::application::services::dispatcher::TransactionDispatcher;
use crate::application::use_cases::transfer::{Asset, resolve_asset};
use crate::domain::errors::{WalletError, WalletResult};
use crate::domain::value_objects::{ChainName, parse_optional_address};
use crate::infrastructure::blockchain::tokens::TokenRegistry;
use std::sync::Arc;
use tracing::debug;

/// Read-only wallet queries.
#[derive(Debug, Clone)]
pub struct BalanceQueries {
    dispatcher: TransactionDispatcher,
    tokens: Arc<TokenRegistry>,
}

impl BalanceQueries {
    /// Creates the query service.
    #[must_use]
    pub fn new(dispatcher: TransactionDispatcher, tokens: Arc<TokenRegistry>) -> Self {
        Self { dispatcher, tokens }
    }

    /// Returns a balance on `chain`.
    ///
    /// `token` follows the transfer resolution rules; `owner` defaults to the
    /// signing account.
    ///
    /// # Errors
    ///
    /// Returns `UnknownChain`, `InvalidAddress` or `TokenResolutionFailed`
    /// for bad inputs and `ReadFailed` if a read fails.
    pub async fn balance(
        &self,
        chain: &str,
        token: Option<&str>,
        owner: Option<&str>,
    ) -> WalletResult<BalanceResponse> {
        let chain = ChainName::parse(chain)?;
        let descriptor = self.dispatcher.registry().descriptor(&chain).await?;
        let owner = parse_optional_address(owner)?.unwrap_or_else(|| self.dispatcher.sender());
        let asset = resolve_asset(&self.tokens, &chain, &descriptor.native_symbol, token)?;

        let raw = self.dispatcher.read_balance(&chain, asset.token(), owner).await?;
        let decimals = self.dispatcher.read_decimals(&chain, asset.token()).await?;

        let symbol = match asset {
            Asset::Native => descriptor.native_symbol.clone(),
            Asset::Erc20(address) => self
                .tokens
                .get_by_address(address, &chain)
                .map_or_else(|| format!("{address:?}"), |t| t.symbol.clone()),
        };

        debug!(chain = %chain, owner = ?owner, %raw, decimals, "balance read");
        Ok(BalanceResponse::new(
            chain.as_str(),
            owner,
            asset.token(),
            symbol,
            raw,
            decimals,
        ))
    }

    /// Summarizes the account on the registry's current chain.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidRequest` if no current chain was
    /// selected, or `ReadFailed` if the balance read fails.
    pub async fn summary(&self) -> WalletResult<WalletSummary> {
        let registry = self.dispatcher.registry();
        let chain = registry.current().await.ok_or_else(|| {
            WalletError::InvalidRequest("no current chain selected".to_string())
        })?;
        let descriptor = registry.descriptor(&chain).await?;
        let balance = self.balance(chain.as_str(), None, None).await?;

        Ok(WalletSummary {
            address: registry.address(),
            chain: chain.to_string(),
            chain_id: descriptor.chain_id,
            balance,
        })
    }
}
