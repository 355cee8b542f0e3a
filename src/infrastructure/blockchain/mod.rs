//! # Blockchain Clients
//!
//! JSON-RPC clients, contract ABIs and registries for BSC and opBNB.

pub mod client;
pub mod contracts;
pub mod ethers_client;
pub mod registry;
pub mod tokens;

pub use client::{ChainReader, ChainWriter, ClientError, ClientFactory, ClientPair, ClientResult};
pub use ethers_client::{EthersClientFactory, EthersReadClient, EthersWriteClient};
pub use registry::ChainRegistry;
pub use tokens::{TokenInfo, TokenRegistry};
