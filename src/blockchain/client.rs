//! Node RPC client.
//!
//! # Responsibilities
//! - Connect to a JSON-RPC endpoint and check the handshake
//! - Query accounts, nonces, balances and receipts
//! - Submit node-signed transfers
//!
//! Every query goes to the "latest" block. No per-call timeout is
//! applied beyond the transport default.

use alloy::eips::BlockId;
use alloy::primitives::{Address, TxHash, U256, U64};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::blockchain::transaction::TransferRequest;
use crate::blockchain::types::{Endpoint, TransferError, TransferReceipt, TransferResult};

/// The node RPC surface the transfer uses.
#[async_trait]
pub trait NodeRpc: Send + Sync {
    /// `web3_clientVersion`
    async fn client_version(&self) -> TransferResult<String>;

    /// `eth_coinbase`
    async fn coinbase(&self) -> TransferResult<Address>;

    /// `eth_accounts`
    async fn accounts(&self) -> TransferResult<Vec<Address>>;

    /// `eth_getTransactionCount` at "latest".
    async fn transaction_count(&self, address: Address) -> TransferResult<u64>;

    /// `eth_sendTransaction`
    async fn send_transaction(&self, request: &TransferRequest) -> TransferResult<TxHash>;

    /// `eth_getTransactionReceipt`; `None` while the transaction is pending.
    async fn transaction_receipt(&self, tx_hash: TxHash)
        -> TransferResult<Option<TransferReceipt>>;

    /// `eth_getBalance` at "latest", in wei.
    async fn balance(&self, address: Address) -> TransferResult<U256>;
}

/// Node client backed by an alloy HTTP provider.
#[derive(Clone)]
pub struct NodeClient {
    provider: Arc<dyn Provider + Send + Sync>,
    endpoint: Endpoint,
    client_version: String,
}

impl NodeClient {
    /// Connect to the node and perform the client-version handshake.
    ///
    /// Fails with [`TransferError::Connection`] if the URL is malformed,
    /// the node is unreachable, or the handshake reply is unusable.
    pub async fn connect(endpoint: Endpoint) -> TransferResult<Self> {
        let url = endpoint.url()?;
        // Fillers are disabled: every transaction field is set explicitly.
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_http(url);

        let client_version = provider
            .get_client_version()
            .await
            .map_err(|e| TransferError::Connection(format!("{}: {}", endpoint, e)))?;

        if client_version.trim().is_empty() {
            return Err(TransferError::Connection(format!(
                "{}: node reported an empty client version",
                endpoint
            )));
        }

        tracing::info!(
            rpc_url = %endpoint,
            client_version = %client_version,
            "Node client connected"
        );

        Ok(Self {
            provider: Arc::new(provider),
            endpoint,
            client_version,
        })
    }

    /// Version string reported during the handshake.
    pub fn version(&self) -> &str {
        &self.client_version
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[async_trait]
impl NodeRpc for NodeClient {
    async fn client_version(&self) -> TransferResult<String> {
        self.provider
            .get_client_version()
            .await
            .map_err(|e| TransferError::Rpc(format!("web3_clientVersion: {}", e)))
    }

    async fn coinbase(&self) -> TransferResult<Address> {
        let coinbase: Address = self
            .provider
            .client()
            .request_noparams("eth_coinbase")
            .await
            .map_err(|e| TransferError::AccountResolution(format!("eth_coinbase: {}", e)))?;
        Ok(coinbase)
    }

    async fn accounts(&self) -> TransferResult<Vec<Address>> {
        self.provider
            .get_accounts()
            .await
            .map_err(|e| TransferError::AccountResolution(format!("eth_accounts: {}", e)))
    }

    async fn transaction_count(&self, address: Address) -> TransferResult<u64> {
        self.provider
            .get_transaction_count(address)
            .block_id(BlockId::latest())
            .await
            .map_err(|e| TransferError::Rpc(format!("eth_getTransactionCount: {}", e)))
    }

    async fn send_transaction(&self, request: &TransferRequest) -> TransferResult<TxHash> {
        let tx: TransactionRequest = request.into();
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| TransferError::Submission(e.to_string()))?;
        Ok(*pending.tx_hash())
    }

    async fn transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> TransferResult<Option<TransferReceipt>> {
        // Decoded leniently: pre-EIP-2718 nodes omit `type` and `effectiveGasPrice`.
        let receipt: Option<RpcReceipt> = self
            .provider
            .client()
            .request("eth_getTransactionReceipt", (tx_hash,))
            .await
            .map_err(|e| TransferError::Rpc(format!("eth_getTransactionReceipt: {}", e)))?;
        Ok(receipt.map(TransferReceipt::from))
    }

    async fn balance(&self, address: Address) -> TransferResult<U256> {
        self.provider
            .get_balance(address)
            .block_id(BlockId::latest())
            .await
            .map_err(|e| TransferError::Rpc(format!("eth_getBalance: {}", e)))
    }
}

/// The receipt fields the transfer reads, as sent on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RpcReceipt {
    transaction_hash: TxHash,
    #[serde(default)]
    block_number: Option<U64>,
    gas_used: U64,
    cumulative_gas_used: U64,
    /// Absent before Byzantium, where `root` is reported instead.
    #[serde(default)]
    status: Option<U64>,
}

impl From<RpcReceipt> for TransferReceipt {
    fn from(receipt: RpcReceipt) -> Self {
        Self {
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number.map(|n| n.to::<u64>()),
            gas_used: receipt.gas_used.to::<u64>(),
            cumulative_gas_used: receipt.cumulative_gas_used.to::<u64>(),
            status: receipt.status.map_or(true, |s| s != U64::ZERO),
        }
    }
}

impl std::fmt::Debug for NodeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeClient")
            .field("rpc_url", &self.endpoint.to_string())
            .field("client_version", &self.client_version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_receipt_decoding() {
        let receipt: RpcReceipt = serde_json::from_value(serde_json::json!({
            "transactionHash": "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b",
            "blockNumber": "0x1",
            "gasUsed": "0x5208",
            "cumulativeGasUsed": "0x5208",
            "root": "0x2c6a1d1f0a7b36e0a5a3a0d8d2a1d3f0c4b5e6f708192a3b4c5d6e7f80910a1b",
        }))
        .unwrap();

        let receipt = TransferReceipt::from(receipt);
        assert_eq!(receipt.block_number, Some(1));
        assert_eq!(receipt.cumulative_gas_used, 21_000);
        assert!(receipt.status);
    }

    #[test]
    fn test_reverted_receipt_decoding() {
        let receipt: RpcReceipt = serde_json::from_value(serde_json::json!({
            "transactionHash": "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b",
            "blockNumber": null,
            "gasUsed": "0x5208",
            "cumulativeGasUsed": "0xa410",
            "status": "0x0",
        }))
        .unwrap();

        let receipt = TransferReceipt::from(receipt);
        assert_eq!(receipt.block_number, None);
        assert_eq!(receipt.gas_used, 21_000);
        assert_eq!(receipt.cumulative_gas_used, 42_000);
        assert!(!receipt.status);
    }

    #[tokio::test]
    async fn test_connect_unreachable() {
        // Nothing listens on port 1
        let result = NodeClient::connect(Endpoint::new("127.0.0.1", 1)).await;
        assert!(matches!(result, Err(TransferError::Connection(_))));
    }

    #[tokio::test]
    async fn test_connect_invalid_host() {
        let result = NodeClient::connect(Endpoint::new("not a host", 8545)).await;
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid RPC URL"));
    }
}
