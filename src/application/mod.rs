//! # Application Layer
//!
//! Use case orchestration and application services.
//!
//! ## Use Cases
//!
//! - [`TransferOrchestrator`]: native and ERC-20 transfers on one chain
//! - [`BridgeOrchestrator`]: deposits and withdrawals between BSC and opBNB
//! - [`StakeOrchestrator`]: validator staking on BSC
//! - [`BalanceQueries`]: balances and the wallet summary
//!
//! ## Services
//!
//! - [`TransactionDispatcher`]: simulate-then-submit primitives

pub mod dto;
pub mod services;
pub mod use_cases;

pub use dto::{
    BalanceResponse, BridgeRequest, StakeAction, StakeRequest, TransferRequest, WalletSummary,
};
pub use services::{AllowanceOutcome, NativeSendOptions, TransactionDispatcher};
pub use use_cases::{
    BalanceQueries, BridgeDirection, BridgeOrchestrator, StakeOrchestrator, TransferOrchestrator,
};
