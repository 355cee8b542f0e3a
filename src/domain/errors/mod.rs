//! # Domain Errors
//!
//! Typed error types for wallet operations.
//!
//! Error codes are organized by category:
//! - 1000-1999: Validation errors
//! - 2000-2999: Chain and registry errors
//! - 3000-3999: Execution errors
//!
//! # Examples
//!
//! ```
//! use bnb_wallet::domain::errors::{WalletError, WalletResult};
//!
//! fn require_validator(validator: Option<&str>) -> WalletResult<&str> {
//!     validator.ok_or(WalletError::MissingField("toValidator"))
//! }
//!
//! assert!(require_validator(None).is_err());
//! ```

pub mod wallet_error;

pub use wallet_error::{AllowanceIncrease, WalletError, WalletResult};
