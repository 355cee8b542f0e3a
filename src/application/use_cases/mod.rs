//! # Use Cases
//!
//! Application use cases implementing wallet workflows.
//!
//! Each use case validates a structured request, resolves its chain
//! explicitly and drives the [`TransactionDispatcher`](crate::application::services::TransactionDispatcher).

pub mod balance;
pub mod bridge;
pub mod stake;
#[cfg(test)]
mod tests;
pub mod transfer;

pub use balance::BalanceQueries;
pub use bridge::{
    BridgeCall, BridgeDirection, BridgeOrchestrator, BridgeParams, BridgePlan, plan_bridge,
};
pub use stake::{StakeCall, StakeOrchestrator};
pub use transfer::{Asset, TransferOrchestrator, resolve_asset};
