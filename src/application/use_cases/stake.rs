//! # Stake Use Case
//!
//! Delegate, undelegate, redelegate and claim against the BSC staking hub.
//!
//! Only BSC mainnet hosts the hub. Field requirements are checked before any
//! network call; execution failures are wrapped in `StakeFailed`.

use crate::application::dto::{StakeAction, StakeRequest};
use crate::application::services::dispatcher::TransactionDispatcher;
use crate::domain::entities::TransactionResult;
use crate::domain::errors::{WalletError, WalletResult};
use crate::domain::value_objects::{
    ChainName, NATIVE_DECIMALS, SupportedChain, parse_address, parse_amount,
};
use crate::infrastructure::blockchain::contracts;
use ethers::types::{Address, Bytes, U256};
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

/// A validated staking call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakeCall {
    /// Delegate `amount` to `operator`.
    Delegate {
        /// Target validator.
        operator: Address,
        /// Native value staked.
        amount: U256,
        /// Whether vote power is delegated too.
        delegate_vote_power: bool,
    },
    /// Undelegate `shares` from `operator`.
    Undelegate {
        /// Source validator.
        operator: Address,
        /// Shares to undelegate.
        shares: U256,
    },
    /// Move `shares` between validators.
    Redelegate {
        /// Source validator.
        from: Address,
        /// Target validator.
        to: Address,
        /// Shares to move.
        shares: U256,
    },
    /// Claim everything unlocked from `operator`.
    Claim {
        /// Source validator.
        operator: Address,
    },
}

impl StakeCall {
    /// Builds the call from a validated request.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::MissingField` for an absent required field,
    /// `WalletError::InvalidAddress` or `WalletError::InvalidAmount` for
    /// malformed values.
    pub fn from_request(request: &StakeRequest) -> WalletResult<Self> {
        request.validate()?;

        let amount = || -> WalletResult<U256> {
            let raw = request.amount().ok_or(WalletError::MissingField("amount"))?;
            parse_amount(raw, NATIVE_DECIMALS)
        };
        let from = || -> WalletResult<Address> {
            parse_address(
                request
                    .from_validator()
                    .ok_or(WalletError::MissingField("fromValidator"))?,
            )
        };
        let to = || -> WalletResult<Address> {
            parse_address(
                request
                    .to_validator()
                    .ok_or(WalletError::MissingField("toValidator"))?,
            )
        };

        Ok(match request.action {
            StakeAction::Delegate => Self::Delegate {
                operator: to()?,
                amount: amount()?,
                delegate_vote_power: request.delegate_vote_power,
            },
            StakeAction::Undelegate => Self::Undelegate {
                operator: from()?,
                shares: amount()?,
            },
            StakeAction::Redelegate => Self::Redelegate {
                from: from()?,
                to: to()?,
                shares: amount()?,
            },
            StakeAction::Claim => Self::Claim { operator: from()? },
        })
    }

    /// Returns the native value attached to the call.
    #[must_use]
    pub fn value(&self) -> U256 {
        match self {
            Self::Delegate { amount, .. } => *amount,
            _ => U256::zero(),
        }
    }

    /// Encodes the call.
    #[must_use]
    pub fn encode(&self) -> Bytes {
        match *self {
            Self::Delegate {
                operator,
                delegate_vote_power,
                ..
            } => contracts::stake_delegate(operator, delegate_vote_power),
            Self::Undelegate { operator, shares } => contracts::stake_undelegate(operator, shares),
            Self::Redelegate { from, to, shares } => {
                contracts::stake_redelegate(from, to, shares, true)
            }
            // zero claims every unlocked request
            Self::Claim { operator } => contracts::stake_claim(operator, U256::zero()),
        }
    }
}

/// Orchestrates staking actions.
#[derive(Debug, Clone)]
pub struct StakeOrchestrator {
    dispatcher: TransactionDispatcher,
}

impl StakeOrchestrator {
    /// Creates an orchestrator.
    #[must_use]
    pub fn new(dispatcher: TransactionDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Executes a staking request.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::UnsupportedChain` off BSC mainnet and
    /// `WalletError::MissingField` for an absent required field, both before
    /// any network call. Simulation and submission failures are wrapped in
    /// `WalletError::StakeFailed`.
    pub async fn stake(&self, request: &StakeRequest) -> WalletResult<TransactionResult> {
        let chain = ChainName::parse(&request.chain)?;
        if !chain.is(SupportedChain::Bsc) {
            return Err(WalletError::UnsupportedChain(format!(
                "staking is only available on bsc, not {chain}"
            )));
        }
        let call = StakeCall::from_request(request)?;

        let request_id = Uuid::new_v4();
        let span = info_span!("stake", %request_id, action = request.action.as_str());

        async {
            info!(value = %call.value(), "dispatching stake call");
            self.dispatcher
                .call_contract(&chain, contracts::STAKE_HUB, call.encode(), call.value())
                .await
                .map_err(|e| {
                    warn!(error = %e, "stake failed");
                    WalletError::stake_failed(e)
                })
        }
        .instrument(span)
        .await
    }
}
