//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Chain Identity
//!
//! - [`SupportedChain`]: Closed catalog of well-known networks
//! - [`ChainName`]: Registry key with an escape hatch for runtime chains
//! - [`ChainDescriptor`]: Immutable chain configuration
//!
//! ## Amounts and Addresses
//!
//! - [`parse_amount`] / [`format_amount`]: Decimal strings to base units
//! - [`sweepable_native`]: Native "transfer all" sizing
//! - [`parse_address`]: Hex address validation

pub mod address;
pub mod amount;
pub mod chain;

pub use address::{is_valid_address, parse_address, parse_optional_address};
pub use amount::{
    NATIVE_DECIMALS, NATIVE_TRANSFER_GAS, format_amount, parse_amount, reserved_transfer_gas,
    sweepable_native,
};
pub use chain::{ChainDescriptor, ChainName, SupportedChain};
