//! # BNB Wallet
//!
//! Multi-chain wallet core for BSC, opBNB and their test networks.
//!
//! Resolves transfer, bridge and stake intents into chain-specific
//! transactions: selecting contract call shapes, sizing values and fees, and
//! checking on-chain preconditions such as token allowances before
//! submission.
//!
//! ## Architecture
//!
//! This crate follows Domain-Driven Design with a layered architecture:
//!
//! - **Domain Layer** (`domain`): Chains, amounts, addresses, accounts and the error taxonomy
//! - **Application Layer** (`application`): Orchestrators and the transaction dispatcher
//! - **Infrastructure Layer** (`infrastructure`): JSON-RPC clients, contract ABIs and registries
//!
//! ## Example
//!
//! ```rust,ignore
//! use bnb_wallet::application::{BridgeOrchestrator, BridgeRequest, TransactionDispatcher};
//!
//! let dispatcher = TransactionDispatcher::new(registry);
//! let bridge = BridgeOrchestrator::new(dispatcher, fee, min_gas_limit);
//! let result = bridge.bridge(&BridgeRequest::new("bsc", "opBNB", "1")).await?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod test_support;
