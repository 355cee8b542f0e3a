//! # Domain Entities
//!
//! - [`Account`]: signing identity derived from a private key
//! - [`CallRequest`]: one call or value transfer against a chain
//! - [`TransactionResult`]: outcome of one submitted transaction

pub mod account;
pub mod transaction;

pub use account::Account;
pub use transaction::{CallRequest, TransactionResult};
