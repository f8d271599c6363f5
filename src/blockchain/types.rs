//! Chain-specific types and error definitions.

use alloy::primitives::TxHash;
use thiserror::Error;

/// Gas price used for the transfer, in wei (20 gwei).
pub const GAS_PRICE_WEI: u64 = 20_000_000_000;

/// Gas limit used for the transfer.
pub const GAS_LIMIT: u64 = 4_300_000;

/// Amount transferred by the demo, in ether.
pub const TRANSFER_AMOUNT_ETHER: &str = "0.123";

/// Host of the node RPC interface.
pub const DEFAULT_HOST: &str = "localhost";

/// Port of the node RPC interface.
pub const DEFAULT_PORT: u16 = 8545;

/// Host and port of a node's JSON-RPC interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// HTTP URL of the endpoint.
    pub fn url(&self) -> TransferResult<url::Url> {
        let raw = self.to_string();
        raw.parse()
            .map_err(|e| TransferError::Connection(format!("Invalid RPC URL '{}': {}", raw, e)))
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "http://{}:{}", self.host, self.port)
    }
}

/// Receipt of a mined transaction, as reported by the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    pub cumulative_gas_used: u64,
    /// `false` if the transaction reverted.
    pub status: bool,
}

/// Errors that can occur during a transfer run.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Endpoint malformed, unreachable, or the handshake failed.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The node does not expose a sender and a recipient account.
    #[error("Account resolution failed: {0}")]
    AccountResolution(String),

    /// The node rejected the transaction.
    #[error("Transaction submission failed: {0}")]
    Submission(String),

    /// No receipt was observed within the poll budget.
    #[error("No transaction receipt received after {attempts} attempts")]
    ReceiptTimeout { attempts: u32 },

    /// Any other RPC query failure.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Amount could not be parsed as an ether value.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// Result type for transfer operations.
pub type TransferResult<T> = Result<T, TransferError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        let endpoint = Endpoint::new("127.0.0.1", 7545);
        assert_eq!(endpoint.to_string(), "http://127.0.0.1:7545");
        assert_eq!(endpoint.url().unwrap().port(), Some(7545));
    }

    #[test]
    fn test_default_endpoint() {
        let endpoint = Endpoint::default();
        assert_eq!(endpoint.host(), "localhost");
        assert_eq!(endpoint.port(), 8545);
    }

    #[test]
    fn test_invalid_endpoint() {
        let endpoint = Endpoint::new("bad host", 8545);
        let err = endpoint.url().unwrap_err();
        assert!(matches!(err, TransferError::Connection(_)));
    }

    #[test]
    fn test_error_display() {
        let err = TransferError::ReceiptTimeout { attempts: 40 };
        assert_eq!(
            err.to_string(),
            "No transaction receipt received after 40 attempts"
        );

        let err = TransferError::AccountResolution("only 1 account".to_string());
        assert!(err.to_string().contains("only 1 account"));
    }
}
