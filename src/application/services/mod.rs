//! # Application Services
//!
//! Services shared by the use cases.
//!
//! - [`TransactionDispatcher`]: reads, simulations and submissions per chain

pub mod dispatcher;

pub use dispatcher::{AllowanceOutcome, NativeSendOptions, TransactionDispatcher};
