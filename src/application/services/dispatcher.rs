//! # Transaction Dispatcher
//!
//! Thin transaction primitives shared by the orchestrators.
//!
//! Every primitive takes its chain explicitly. Contract calls are simulated
//! with the sender set and only submitted if the simulation succeeds; plain
//! value transfers are submitted directly. Read failures surface as
//! `ReadFailed`, simulation reverts as `SimulationReverted` and transport or
//! signing failures as `SubmissionFailed`.

use crate::domain::entities::{CallRequest, TransactionResult};
use crate::domain::errors::{WalletError, WalletResult};
use crate::domain::value_objects::{ChainName, NATIVE_DECIMALS};
use crate::infrastructure::blockchain::client::{ChainWriter, ClientError};
use crate::infrastructure::blockchain::contracts;
use crate::infrastructure::blockchain::registry::ChainRegistry;
use ethers::types::{Address, Bytes, TxHash, U256};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of an allowance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowanceOutcome {
    /// The existing allowance already covers the amount.
    Sufficient {
        /// Allowance read from the token.
        current: U256,
    },
    /// An increase was submitted (and confirmed, from `ensure_allowance`).
    Increased {
        /// Hash of the `increaseAllowance` transaction.
        tx_hash: TxHash,
        /// Amount the allowance was raised by.
        delta: U256,
    },
}

impl AllowanceOutcome {
    /// Returns the increase transaction hash, if one was sent.
    #[must_use]
    pub fn tx_hash(&self) -> Option<TxHash> {
        match self {
            Self::Sufficient { .. } => None,
            Self::Increased { tx_hash, .. } => Some(*tx_hash),
        }
    }
}

/// Options for a native value transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NativeSendOptions {
    /// Pinned gas limit.
    pub gas: Option<U256>,
    /// Pinned gas price.
    pub gas_price: Option<U256>,
    /// Call data attached to the transfer.
    pub data: Option<Bytes>,
}

impl NativeSendOptions {
    /// Pins gas limit and price.
    #[must_use]
    pub fn pinned(gas: U256, gas_price: U256) -> Self {
        Self {
            gas: Some(gas),
            gas_price: Some(gas_price),
            data: None,
        }
    }

    /// Attaches call data.
    #[must_use]
    pub fn with_data(mut self, data: Option<Bytes>) -> Self {
        self.data = data;
        self
    }
}

fn read_failed(what: &str, chain: &ChainName, err: ClientError) -> WalletError {
    WalletError::ReadFailed(format!("{what} on {chain}: {err}"))
}

fn simulation_failed(chain: &ChainName, err: ClientError) -> WalletError {
    if err.is_revert() {
        WalletError::SimulationReverted(format!("{chain}: {err}"))
    } else {
        WalletError::SubmissionFailed(format!("simulation on {chain}: {err}"))
    }
}

fn submission_failed(chain: &ChainName, err: ClientError) -> WalletError {
    WalletError::SubmissionFailed(format!("{chain}: {err}"))
}

/// Dispatches reads, simulations and submissions through the registry.
#[derive(Debug, Clone)]
pub struct TransactionDispatcher {
    registry: Arc<ChainRegistry>,
}

impl TransactionDispatcher {
    /// Creates a dispatcher over a registry.
    #[must_use]
    pub fn new(registry: Arc<ChainRegistry>) -> Self {
        Self { registry }
    }

    /// Returns the registry.
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &Arc<ChainRegistry> {
        &self.registry
    }

    /// Returns the signing account's address.
    #[inline]
    #[must_use]
    pub fn sender(&self) -> Address {
        self.registry.address()
    }

    /// Submits a native value transfer.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::SubmissionFailed` if the node rejects the
    /// transaction, or a registry error if the chain does not resolve.
    pub async fn send_native(
        &self,
        chain: &ChainName,
        to: Address,
        value: U256,
        options: NativeSendOptions,
    ) -> WalletResult<TransactionResult> {
        let writer = self.registry.write_client(chain).await?;
        let request = CallRequest::transfer(to, value)
            .with_sender(writer.sender())
            .with_data(options.data)
            .with_gas(options.gas, options.gas_price);

        self.submit(chain, writer.as_ref(), request).await
    }

    /// Simulates then submits an ERC-20 `transfer`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::SimulationReverted` if the token rejects the
    /// transfer, or `WalletError::SubmissionFailed` if sending fails.
    pub async fn send_erc20(
        &self,
        chain: &ChainName,
        token: Address,
        to: Address,
        value: U256,
    ) -> WalletResult<TransactionResult> {
        let data = contracts::erc20_transfer(to, value);
        self.call_contract(chain, token, data, U256::zero()).await
    }

    /// Simulates then submits a contract call.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::SimulationReverted` if the simulation reverts,
    /// or `WalletError::SubmissionFailed` if sending fails.
    pub async fn call_contract(
        &self,
        chain: &ChainName,
        contract: Address,
        data: Bytes,
        value: U256,
    ) -> WalletResult<TransactionResult> {
        let writer = self.registry.write_client(chain).await?;
        let request = CallRequest::contract(contract, data, value).with_sender(writer.sender());

        self.simulate(chain, writer.as_ref(), &request).await?;
        self.submit(chain, writer.as_ref(), request).await
    }

    /// Makes sure `spender` may move `amount` of `token` from `owner`.
    ///
    /// When the current allowance falls short, submits `increaseAllowance`
    /// for exactly the shortfall and waits for it to be mined.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::ReadFailed` if the allowance cannot be read, or
    /// the simulation/submission errors of the increase transaction.
    pub async fn ensure_allowance(
        &self,
        chain: &ChainName,
        token: Address,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> WalletResult<AllowanceOutcome> {
        let outcome = self
            .submit_allowance_increase(chain, token, owner, spender, amount)
            .await?;
        if let Some(tx_hash) = outcome.tx_hash() {
            self.confirm(chain, tx_hash).await?;
        }
        Ok(outcome)
    }

    /// Submits `increaseAllowance` for the shortfall without waiting for it.
    ///
    /// `AllowanceOutcome::Increased` here means submitted; pair it with
    /// [`Self::confirm`].
    ///
    /// # Errors
    ///
    /// Returns `WalletError::ReadFailed` if the allowance cannot be read, or
    /// the simulation/submission errors of the increase transaction.
    pub async fn submit_allowance_increase(
        &self,
        chain: &ChainName,
        token: Address,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> WalletResult<AllowanceOutcome> {
        let current = self.read_allowance(chain, token, owner, spender).await?;
        if current >= amount {
            debug!(chain = %chain, token = ?token, %current, %amount, "allowance sufficient");
            return Ok(AllowanceOutcome::Sufficient { current });
        }

        let delta = amount - current;
        info!(chain = %chain, token = ?token, spender = ?spender, %delta, "increasing allowance");

        let data = contracts::erc20_increase_allowance(spender, delta);
        let result = self.call_contract(chain, token, data, U256::zero()).await?;
        Ok(AllowanceOutcome::Increased {
            tx_hash: result.hash,
            delta,
        })
    }

    /// Waits until a submitted transaction is mined successfully.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::SubmissionFailed` if the transaction is dropped,
    /// reverts, or the receipt cannot be fetched.
    pub async fn confirm(&self, chain: &ChainName, tx_hash: TxHash) -> WalletResult<()> {
        let writer = self.registry.write_client(chain).await?;
        writer
            .wait_for_receipt(tx_hash)
            .await
            .map_err(|e| submission_failed(chain, e))?;

        info!(chain = %chain, tx_hash = ?tx_hash, "transaction confirmed");
        Ok(())
    }

    /// Reads an ERC-20 allowance.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::ReadFailed` if the call fails or returns garbage.
    pub async fn read_allowance(
        &self,
        chain: &ChainName,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> WalletResult<U256> {
        let reader = self.registry.read_client(chain).await?;
        let output = reader
            .call(&CallRequest::read(token, contracts::erc20_allowance(owner, spender)))
            .await
            .map_err(|e| read_failed("allowance", chain, e))?;

        contracts::decode_u256(&output)
            .ok_or_else(|| WalletError::ReadFailed(format!("malformed allowance from {token:?}")))
    }

    /// Reads a native balance, or an ERC-20 balance when `token` is set.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::ReadFailed` if the read fails.
    pub async fn read_balance(
        &self,
        chain: &ChainName,
        token: Option<Address>,
        owner: Address,
    ) -> WalletResult<U256> {
        let reader = self.registry.read_client(chain).await?;
        match token {
            None => reader
                .get_balance(owner)
                .await
                .map_err(|e| read_failed("balance", chain, e)),
            Some(token) => {
                let output = reader
                    .call(&CallRequest::read(token, contracts::erc20_balance_of(owner)))
                    .await
                    .map_err(|e| read_failed("token balance", chain, e))?;
                contracts::decode_u256(&output).ok_or_else(|| {
                    WalletError::ReadFailed(format!("malformed balance from {token:?}"))
                })
            }
        }
    }

    /// Reads a token's decimals; native currency always has 18.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::ReadFailed` if the read fails.
    pub async fn read_decimals(&self, chain: &ChainName, token: Option<Address>) -> WalletResult<u8> {
        let Some(token) = token else {
            return Ok(NATIVE_DECIMALS);
        };

        let reader = self.registry.read_client(chain).await?;
        let output = reader
            .call(&CallRequest::read(token, contracts::erc20_decimals()))
            .await
            .map_err(|e| read_failed("decimals", chain, e))?;

        contracts::decode_u8(&output)
            .ok_or_else(|| WalletError::ReadFailed(format!("malformed decimals from {token:?}")))
    }

    /// Reads the chain's gas price.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::ReadFailed` if the read fails.
    pub async fn gas_price(&self, chain: &ChainName) -> WalletResult<U256> {
        let reader = self.registry.read_client(chain).await?;
        reader
            .get_gas_price()
            .await
            .map_err(|e| read_failed("gas price", chain, e))
    }

    async fn simulate(
        &self,
        chain: &ChainName,
        writer: &dyn ChainWriter,
        request: &CallRequest,
    ) -> WalletResult<()> {
        writer.call(request).await.map_err(|e| {
            warn!(chain = %chain, to = ?request.to, error = %e, "simulation failed");
            simulation_failed(chain, e)
        })?;
        Ok(())
    }

    async fn submit(
        &self,
        chain: &ChainName,
        writer: &dyn ChainWriter,
        request: CallRequest,
    ) -> WalletResult<TransactionResult> {
        let hash = writer.send_transaction(&request).await.map_err(|e| {
            warn!(chain = %chain, to = ?request.to, error = %e, "submission failed");
            submission_failed(chain, e)
        })?;

        info!(
            chain = %chain,
            tx_hash = ?hash,
            to = ?request.to,
            value = %request.value,
            "transaction submitted"
        );
        Ok(TransactionResult::new(hash, writer.sender(), &request, chain.as_str()))
    }
}
