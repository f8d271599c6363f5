//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Endpoint (host, port)
//!     → client.rs (RPC connection, handshake, queries)
//!     → transaction.rs (transfer request, node-signed submission)
//!     → units.rs (wei ↔ ether for display)
//! ```
//!
//! # Constraints
//! - No local keys: the node signs with its own unlocked account
//! - All queries target the "latest" block

pub mod client;
pub mod transaction;
pub mod types;
pub mod units;

pub use client::{NodeClient, NodeRpc};
pub use transaction::TransferRequest;
pub use types::{Endpoint, TransferError, TransferReceipt, TransferResult};
pub use units::{ether_to_wei, wei_to_ether, EtherAmount};
