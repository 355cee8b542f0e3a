//! # Infrastructure Layer
//!
//! External adapters and implementations of the chain ports.
//!
//! ## Blockchain
//!
//! - JSON-RPC chain clients on ethers-rs
//! - The chain registry and per-chain client cache
//! - Contract addresses and call-data encoders
//! - The token symbol registry

pub mod blockchain;
