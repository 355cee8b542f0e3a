//! # Bridge Use Case
//!
//! Moves native currency or ERC-20 tokens between BSC (L1) and opBNB (L2).
//!
//! Shape selection is a pure function of direction, recipient and token
//! kind ([`plan_bridge`]); the orchestrator only resolves inputs, raises the
//! token allowance when needed and dispatches the planned call.
//!
//! | Direction | Self | Native | Call | Value |
//! |---|---|---|---|---|
//! | L1→L2 | yes | yes | `depositETH` | amount |
//! | L1→L2 | yes | no | `depositERC20` | 0 |
//! | L1→L2 | no | yes | `depositETHTo` | amount |
//! | L1→L2 | no | no | `depositERC20To` | 0 |
//! | L2→L1 | yes | yes | `withdraw` | amount + fee |
//! | L2→L1 | yes | no | `withdraw` | amount + fee |
//! | L2→L1 | no | yes | `withdrawTo` | amount + fee |
//! | L2→L1 | no | no | `withdrawTo` | fee |
//!
//! The last row sends only the delegation fee as value. This matches the
//! deployed behaviour and is kept as is.

use crate::application::dto::BridgeRequest;
use crate::application::services::dispatcher::TransactionDispatcher;
use crate::domain::entities::TransactionResult;
use crate::domain::errors::{AllowanceIncrease, WalletError, WalletResult};
use crate::domain::value_objects::{
    ChainName, NATIVE_DECIMALS, SupportedChain, parse_address, parse_amount,
    parse_optional_address,
};
use crate::infrastructure::blockchain::contracts::{self, bridge};
use ethers::types::{Address, Bytes, U256};
use std::fmt;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

/// Direction of a bridge transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgeDirection {
    /// BSC to opBNB deposit.
    L1ToL2,
    /// opBNB to BSC withdrawal.
    L2ToL1,
}

impl BridgeDirection {
    /// Resolves the direction of a chain pair.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::UnsupportedDirection` for any pair other than
    /// `bsc → opBNB` and `opBNB → bsc`.
    pub fn resolve(from: &ChainName, to: &ChainName) -> WalletResult<Self> {
        match (from.known(), to.known()) {
            (Some(SupportedChain::Bsc), Some(SupportedChain::OpBnb)) => Ok(Self::L1ToL2),
            (Some(SupportedChain::OpBnb), Some(SupportedChain::Bsc)) => Ok(Self::L2ToL1),
            _ => Err(WalletError::unsupported_direction(from.as_str(), to.as_str())),
        }
    }

    /// Returns the chain the transaction is sent on.
    #[must_use]
    pub fn source_chain(&self) -> SupportedChain {
        match self {
            Self::L1ToL2 => SupportedChain::Bsc,
            Self::L2ToL1 => SupportedChain::OpBnb,
        }
    }

    /// Returns the bridge contract on the source chain.
    #[must_use]
    pub fn bridge_contract(&self) -> Address {
        match self {
            Self::L1ToL2 => contracts::L1_STANDARD_BRIDGE,
            Self::L2ToL1 => contracts::L2_STANDARD_BRIDGE,
        }
    }

    /// Returns a short label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L1ToL2 => "L1_TO_L2",
            Self::L2ToL1 => "L2_TO_L1",
        }
    }
}

impl fmt::Display for BridgeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the eight bridge call shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeCall {
    /// Native deposit to the sender.
    DepositNative,
    /// Native deposit to a recipient.
    DepositNativeTo {
        /// Recipient on L2.
        to: Address,
    },
    /// ERC-20 deposit to the sender.
    DepositErc20 {
        /// Token on L1.
        l1_token: Address,
        /// Token on L2.
        l2_token: Address,
        /// Amount in base units.
        amount: U256,
    },
    /// ERC-20 deposit to a recipient.
    DepositErc20To {
        /// Token on L1.
        l1_token: Address,
        /// Token on L2.
        l2_token: Address,
        /// Recipient on L2.
        to: Address,
        /// Amount in base units.
        amount: U256,
    },
    /// Withdrawal to the sender.
    Withdraw {
        /// Token on L2; the native placeholder for native currency.
        l2_token: Address,
        /// Amount in base units.
        amount: U256,
    },
    /// Withdrawal to a recipient.
    WithdrawTo {
        /// Token on L2; the native placeholder for native currency.
        l2_token: Address,
        /// Recipient on L1.
        to: Address,
        /// Amount in base units.
        amount: U256,
    },
}

impl BridgeCall {
    /// Returns the canonical method signature.
    #[must_use]
    pub fn method(&self) -> &'static str {
        match self {
            Self::DepositNative => bridge::DEPOSIT_ETH,
            Self::DepositNativeTo { .. } => bridge::DEPOSIT_ETH_TO,
            Self::DepositErc20 { .. } => bridge::DEPOSIT_ERC20,
            Self::DepositErc20To { .. } => bridge::DEPOSIT_ERC20_TO,
            Self::Withdraw { .. } => bridge::WITHDRAW,
            Self::WithdrawTo { .. } => bridge::WITHDRAW_TO,
        }
    }

    /// Encodes the call with the given `minGasLimit` and empty extra data.
    #[must_use]
    pub fn encode(&self, min_gas_limit: u32) -> Bytes {
        match *self {
            Self::DepositNative => contracts::deposit_eth(min_gas_limit),
            Self::DepositNativeTo { to } => contracts::deposit_eth_to(to, min_gas_limit),
            Self::DepositErc20 {
                l1_token,
                l2_token,
                amount,
            } => contracts::deposit_erc20(l1_token, l2_token, amount, min_gas_limit),
            Self::DepositErc20To {
                l1_token,
                l2_token,
                to,
                amount,
            } => contracts::deposit_erc20_to(l1_token, l2_token, to, amount, min_gas_limit),
            Self::Withdraw { l2_token, amount } => {
                contracts::withdraw(l2_token, amount, min_gas_limit)
            }
            Self::WithdrawTo {
                l2_token,
                to,
                amount,
            } => contracts::withdraw_to(l2_token, to, amount, min_gas_limit),
        }
    }
}

/// Resolved inputs of a bridge transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeParams {
    /// Bridge direction.
    pub direction: BridgeDirection,
    /// Recipient; `None` for a self-bridge.
    pub recipient: Option<Address>,
    /// `(fromToken, toToken)`; `None` for native currency.
    pub tokens: Option<(Address, Address)>,
    /// Amount in base units.
    pub amount: U256,
    /// Delegation fee added to withdrawals.
    pub fee: U256,
}

/// Contract call selected for a bridge transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgePlan {
    /// Bridge contract to call.
    pub contract: Address,
    /// Call shape.
    pub call: BridgeCall,
    /// Native value attached.
    pub value: U256,
}

/// Selects the bridge call shape and value.
///
/// # Errors
///
/// Returns `WalletError::InvalidAmount` if a withdrawal value of amount plus
/// fee overflows.
pub fn plan_bridge(params: &BridgeParams) -> WalletResult<BridgePlan> {
    let BridgeParams {
        direction,
        recipient,
        tokens,
        amount,
        fee,
    } = *params;

    let (call, value) = match direction {
        BridgeDirection::L1ToL2 => match (recipient, tokens) {
            (None, None) => (BridgeCall::DepositNative, amount),
            (None, Some((l1_token, l2_token))) => (
                BridgeCall::DepositErc20 {
                    l1_token,
                    l2_token,
                    amount,
                },
                U256::zero(),
            ),
            (Some(to), None) => (BridgeCall::DepositNativeTo { to }, amount),
            (Some(to), Some((l1_token, l2_token))) => (
                BridgeCall::DepositErc20To {
                    l1_token,
                    l2_token,
                    to,
                    amount,
                },
                U256::zero(),
            ),
        },
        BridgeDirection::L2ToL1 => {
            let with_fee = || {
                amount
                    .checked_add(fee)
                    .ok_or_else(|| WalletError::InvalidAmount("amount plus fee overflows".into()))
            };
            match (recipient, tokens) {
                (None, None) => (
                    BridgeCall::Withdraw {
                        l2_token: contracts::L2_NATIVE_TOKEN,
                        amount,
                    },
                    with_fee()?,
                ),
                (None, Some((l2_token, _))) => {
                    (BridgeCall::Withdraw { l2_token, amount }, with_fee()?)
                }
                (Some(to), None) => (
                    BridgeCall::WithdrawTo {
                        l2_token: contracts::L2_NATIVE_TOKEN,
                        to,
                        amount,
                    },
                    with_fee()?,
                ),
                // fee only; the token amount moves inside the call
                (Some(to), Some((l2_token, _))) => (
                    BridgeCall::WithdrawTo {
                        l2_token,
                        to,
                        amount,
                    },
                    fee,
                ),
            }
        }
    };

    Ok(BridgePlan {
        contract: direction.bridge_contract(),
        call,
        value,
    })
}

/// Orchestrates bridge transfers.
#[derive(Debug, Clone)]
pub struct BridgeOrchestrator {
    dispatcher: TransactionDispatcher,
    delegation_fee: U256,
    min_gas_limit: u32,
}

impl BridgeOrchestrator {
    /// Creates an orchestrator.
    #[must_use]
    pub fn new(dispatcher: TransactionDispatcher, delegation_fee: U256, min_gas_limit: u32) -> Self {
        Self {
            dispatcher,
            delegation_fee,
            min_gas_limit,
        }
    }

    /// Returns the delegation fee.
    #[inline]
    #[must_use]
    pub fn delegation_fee(&self) -> U256 {
        self.delegation_fee
    }

    /// Executes a bridge request.
    ///
    /// # Errors
    ///
    /// Every failure is a `WalletError::BridgeFailed` wrapping the cause.
    /// Validation failures are raised before any network call. When an
    /// allowance increase was submitted before a later failure, its hash is
    /// carried in the error along with whether it was confirmed.
    pub async fn bridge(&self, request: &BridgeRequest) -> WalletResult<TransactionResult> {
        let request_id = Uuid::new_v4();
        let span = info_span!(
            "bridge",
            %request_id,
            from = %request.from_chain,
            to = %request.to_chain
        );

        async {
            let mut allowance = None;
            self.execute(request, &mut allowance)
                .await
                .map_err(|e| {
                    warn!(error = %e, allowance = ?allowance, "bridge failed");
                    WalletError::bridge_failed(e, allowance)
                })
        }
        .instrument(span)
        .await
    }

    async fn execute(
        &self,
        request: &BridgeRequest,
        allowance: &mut Option<AllowanceIncrease>,
    ) -> WalletResult<TransactionResult> {
        let from = ChainName::parse(&request.from_chain)?;
        let to = ChainName::parse(&request.to_chain)?;
        let direction = BridgeDirection::resolve(&from, &to)?;
        request.validate()?;

        let sender = self.dispatcher.sender();
        let recipient = parse_optional_address(request.to_address())?.filter(|r| *r != sender);
        let tokens = match request.tokens() {
            Some((from_token, to_token)) => {
                Some((parse_address(from_token)?, parse_address(to_token)?))
            }
            None => None,
        };

        let chain = ChainName::from(direction.source_chain());
        let decimals = match tokens {
            Some((from_token, _)) => self.dispatcher.read_decimals(&chain, Some(from_token)).await?,
            None => NATIVE_DECIMALS,
        };
        let amount = parse_amount(&request.amount, decimals)?;

        if let Some((from_token, _)) = tokens {
            let outcome = self
                .dispatcher
                .submit_allowance_increase(
                    &chain,
                    from_token,
                    sender,
                    direction.bridge_contract(),
                    amount,
                )
                .await?;
            if let Some(tx_hash) = outcome.tx_hash() {
                *allowance = Some(AllowanceIncrease::submitted(tx_hash));
                self.dispatcher.confirm(&chain, tx_hash).await?;
                *allowance = Some(AllowanceIncrease::confirmed(tx_hash));
            }
        }

        let plan = plan_bridge(&BridgeParams {
            direction,
            recipient,
            tokens,
            amount,
            fee: self.delegation_fee,
        })?;

        info!(
            %direction,
            self_bridge = recipient.is_none(),
            native = tokens.is_none(),
            method = plan.call.method(),
            value = %plan.value,
            "bridge planned"
        );

        self.dispatcher
            .call_contract(&chain, plan.contract, plan.call.encode(self.min_gas_limit), plan.value)
            .await
    }
}
