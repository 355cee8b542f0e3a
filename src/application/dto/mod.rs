//! # Data Transfer Objects
//!
//! DTOs for use case input/output, decoupling callers from the domain.
//!
//! These objects carry requests exactly as a caller supplies them (decimal
//! strings, hex addresses, logical chain names) and views returned to it.

pub mod requests;
pub mod responses;

pub use requests::{BridgeRequest, StakeAction, StakeRequest, TransferRequest};
pub use responses::{BalanceResponse, WalletSummary};
