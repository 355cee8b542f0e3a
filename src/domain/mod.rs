//! # Domain Layer
//!
//! Chain-independent wallet concepts.
//!
//! This layer contains:
//! - **Entities**: the signing account, call requests and transaction results
//! - **Value Objects**: chains, amounts and addresses with validation
//! - **Errors**: the wallet error taxonomy

pub mod entities;
pub mod errors;
pub mod value_objects;
