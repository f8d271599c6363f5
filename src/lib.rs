//! Ether transfer demo library.
//!
//! Connects to an Ethereum JSON-RPC node, transfers Ether from the node's
//! coinbase to its second account, and waits for the receipt.

pub mod blockchain;
pub mod config;
pub mod observability;
pub mod resilience;
pub mod transfer;

pub use blockchain::{Endpoint, NodeClient, NodeRpc, TransferError};
pub use config::TransferConfig;
pub use transfer::{TransferOrchestrator, TransferReport};
