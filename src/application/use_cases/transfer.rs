//! # Transfer Use Case
//!
//! Sends native currency or an ERC-20 token on a single chain.
//!
//! An absent amount sweeps the balance. A native sweep reserves
//! `gasPrice × 21000` and pins that gas limit and price on the transaction;
//! an ERC-20 sweep sends the token balance exactly.

use crate::application::dto::TransferRequest;
use crate::application::services::dispatcher::{NativeSendOptions, TransactionDispatcher};
use crate::domain::entities::TransactionResult;
use crate::domain::errors::{WalletError, WalletResult};
use crate::domain::value_objects::{
    ChainName, NATIVE_DECIMALS, NATIVE_TRANSFER_GAS, is_valid_address, parse_address,
    parse_amount, sweepable_native,
};
use crate::infrastructure::blockchain::tokens::TokenRegistry;
use ethers::types::{Address, Bytes, U256};
use std::fmt;
use std::sync::Arc;
use tracing::{Instrument, debug, info_span};
use uuid::Uuid;

/// Asset a request refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    /// The chain's native currency.
    Native,
    /// An ERC-20 token contract.
    Erc20(Address),
}

impl Asset {
    /// Returns the token contract, if any.
    #[must_use]
    pub fn token(&self) -> Option<Address> {
        match self {
            Self::Native => None,
            Self::Erc20(address) => Some(*address),
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => f.write_str("native"),
            Self::Erc20(address) => write!(f, "{address:?}"),
        }
    }
}

/// Resolves a token reference on a chain.
///
/// Absent or equal to the chain's native symbol means native currency, a hex
/// address is taken as is, anything else is looked up by symbol.
///
/// # Errors
///
/// Returns `WalletError::TokenResolutionFailed` for an unknown symbol or one
/// not deployed on the chain.
pub fn resolve_asset(
    tokens: &TokenRegistry,
    chain: &ChainName,
    native_symbol: &str,
    token: Option<&str>,
) -> WalletResult<Asset> {
    let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(Asset::Native);
    };

    if token.eq_ignore_ascii_case(native_symbol) {
        return Ok(Asset::Native);
    }
    if is_valid_address(token) {
        return parse_address(token).map(Asset::Erc20);
    }
    tokens.get_address(token, chain).map(Asset::Erc20)
}

fn parse_call_data(data: &str) -> WalletResult<Bytes> {
    data.parse::<Bytes>()
        .map_err(|e| WalletError::InvalidRequest(format!("call data is not hex: {e}")))
}

/// Orchestrates single-chain transfers.
#[derive(Debug, Clone)]
pub struct TransferOrchestrator {
    dispatcher: TransactionDispatcher,
    tokens: Arc<TokenRegistry>,
}

impl TransferOrchestrator {
    /// Creates an orchestrator.
    #[must_use]
    pub fn new(dispatcher: TransactionDispatcher, tokens: Arc<TokenRegistry>) -> Self {
        Self { dispatcher, tokens }
    }

    /// Executes a transfer request.
    ///
    /// # Errors
    ///
    /// Returns validation errors (`UnknownChain`, `InvalidAddress`,
    /// `TokenResolutionFailed`, `InvalidRequest`, `InvalidAmount`) before any
    /// submission, `InsufficientBalance` when a native sweep cannot cover gas,
    /// and the dispatcher's read/simulation/submission errors otherwise.
    pub async fn transfer(&self, request: &TransferRequest) -> WalletResult<TransactionResult> {
        let chain = ChainName::parse(&request.chain)?;
        let descriptor = self.dispatcher.registry().descriptor(&chain).await?;
        let to = parse_address(&request.to)?;
        let asset = resolve_asset(&self.tokens, &chain, &descriptor.native_symbol, request.token())?;

        let data = match (asset, request.data()) {
            (_, None) => None,
            (Asset::Native, Some(hex)) => Some(parse_call_data(hex)?),
            (Asset::Erc20(_), Some(_)) => {
                return Err(WalletError::InvalidRequest(
                    "call data is only supported on native transfers".to_string(),
                ));
            }
        };

        let request_id = Uuid::new_v4();
        let span = info_span!("transfer", %request_id, chain = %chain, %asset);

        async {
            match asset {
                Asset::Native => self.transfer_native(&chain, to, request.amount(), data).await,
                Asset::Erc20(token) => {
                    self.transfer_erc20(&chain, token, to, request.amount()).await
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn transfer_native(
        &self,
        chain: &ChainName,
        to: Address,
        amount: Option<&str>,
        data: Option<Bytes>,
    ) -> WalletResult<TransactionResult> {
        let (value, options) = match amount {
            Some(amount) => (
                parse_amount(amount, NATIVE_DECIMALS)?,
                NativeSendOptions::default(),
            ),
            None => {
                let sender = self.dispatcher.sender();
                let balance = self.dispatcher.read_balance(chain, None, sender).await?;
                let gas_price = self.dispatcher.gas_price(chain).await?;
                let value = sweepable_native(balance, gas_price)?;
                debug!(%balance, %gas_price, %value, "sizing native sweep");
                (
                    value,
                    NativeSendOptions::pinned(U256::from(NATIVE_TRANSFER_GAS), gas_price),
                )
            }
        };

        self.dispatcher
            .send_native(chain, to, value, options.with_data(data))
            .await
    }

    async fn transfer_erc20(
        &self,
        chain: &ChainName,
        token: Address,
        to: Address,
        amount: Option<&str>,
    ) -> WalletResult<TransactionResult> {
        let value = match amount {
            Some(amount) => {
                let decimals = self.dispatcher.read_decimals(chain, Some(token)).await?;
                parse_amount(amount, decimals)?
            }
            None => {
                let sender = self.dispatcher.sender();
                let balance = self.dispatcher.read_balance(chain, Some(token), sender).await?;
                debug!(%balance, "sizing token sweep");
                balance
            }
        };

        self.dispatcher.send_erc20(chain, token, to, value).await
    }
}
