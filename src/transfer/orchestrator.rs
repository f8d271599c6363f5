//! Transfer orchestration.
//!
//! # Flow
//! ```text
//! connect → resolve accounts → nonce → build request → submit
//!     → poll for receipt → report cost and balances
//! ```
//!
//! Every step is awaited in order; any error aborts the run.

use alloy::primitives::{Address, TxHash, U256};
use std::future::Future;
use std::time::Duration;

use crate::blockchain::client::{NodeClient, NodeRpc};
use crate::blockchain::transaction::TransferRequest;
use crate::blockchain::types::{Endpoint, TransferError, TransferReceipt, TransferResult};
use crate::blockchain::units::{wei_to_ether, EtherAmount};
use crate::config::TransferConfig;
use crate::resilience::retries::{poll_until_some, PollPolicy};

/// Summary of a completed transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReport {
    pub client_version: String,
    pub from: Address,
    pub to: Address,
    pub amount: EtherAmount,
    pub nonce: u64,
    pub tx_hash: TxHash,
    pub receipt: TransferReceipt,
    /// `cumulative_gas_used * gas_price`
    pub cost: EtherAmount,
    pub balance_before: EtherAmount,
    pub balance_after: EtherAmount,
}

/// Drives a single Ether transfer against one node.
#[derive(Debug)]
pub struct TransferOrchestrator<N> {
    node: N,
    config: TransferConfig,
    /// Version from the connect handshake, if one was made.
    client_version: Option<String>,
}

impl TransferOrchestrator<NodeClient> {
    /// Connect to `endpoint` and build an orchestrator around the client.
    pub async fn connect(endpoint: Endpoint, config: TransferConfig) -> TransferResult<Self> {
        let client = NodeClient::connect(endpoint).await?;
        let client_version = client.version().to_string();
        Ok(Self {
            client_version: Some(client_version),
            ..Self::new(client, config)
        })
    }
}

impl<N: NodeRpc> TransferOrchestrator<N> {
    pub fn new(node: N, config: TransferConfig) -> Self {
        Self {
            node,
            config,
            client_version: None,
        }
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    /// Version reported by the node; queried only if no handshake was made.
    pub async fn client_version(&self) -> TransferResult<String> {
        match &self.client_version {
            Some(version) => Ok(version.clone()),
            None => self.node.client_version().await,
        }
    }

    /// Sender is the node's coinbase, recipient its second account.
    pub async fn resolve_accounts(&self) -> TransferResult<(Address, Address)> {
        let from = self.node.coinbase().await?;
        let accounts = self.node.accounts().await?;

        let to = *accounts.get(1).ok_or_else(|| {
            TransferError::AccountResolution(format!(
                "node exposes {} account(s), at least 2 are required",
                accounts.len()
            ))
        })?;

        tracing::debug!(from = %from, to = %to, "Accounts resolved");
        Ok((from, to))
    }

    /// Transaction count of `address` at the latest block.
    pub async fn fetch_nonce(&self, address: Address) -> TransferResult<u64> {
        self.node.transaction_count(address).await
    }

    /// Fetch the sender's nonce and build the transfer with the configured gas settings.
    pub async fn build_transfer(
        &self,
        from: Address,
        to: Address,
        amount_wei: U256,
    ) -> TransferResult<TransferRequest> {
        let nonce = self.fetch_nonce(from).await?;
        let tx = &self.config.transaction;
        Ok(TransferRequest::new(
            from,
            nonce,
            u128::from(tx.gas_price_wei),
            tx.gas_limit,
            to,
            amount_wei,
        ))
    }

    /// Submit a built transfer and return its hash.
    pub async fn submit(&self, request: &TransferRequest) -> TransferResult<TxHash> {
        tracing::debug!(
            nonce = request.nonce,
            max_cost = %wei_to_ether(request.max_cost()),
            "Submitting transaction"
        );
        let tx_hash = self.node.send_transaction(request).await?;
        tracing::info!(
            tx_hash = %tx_hash,
            nonce = request.nonce,
            "Transaction submitted"
        );
        Ok(tx_hash)
    }

    /// Build and submit a transfer of `amount_wei` from `from` to `to`.
    pub async fn submit_transfer(
        &self,
        from: Address,
        to: Address,
        amount_wei: U256,
    ) -> TransferResult<TxHash> {
        let request = self.build_transfer(from, to, amount_wei).await?;
        self.submit(&request).await
    }

    /// Poll for the receipt of `tx_hash` using the configured policy.
    pub async fn await_receipt(&self, tx_hash: TxHash) -> TransferResult<TransferReceipt> {
        self.await_receipt_with(tx_hash, self.config.poll_policy(), tokio::time::sleep)
            .await
    }

    /// Poll for the receipt of `tx_hash` with an explicit policy and sleep.
    pub async fn await_receipt_with<S, SFut>(
        &self,
        tx_hash: TxHash,
        policy: PollPolicy,
        sleep: S,
    ) -> TransferResult<TransferReceipt>
    where
        S: FnMut(Duration) -> SFut,
        SFut: Future<Output = ()>,
    {
        let fetch = move |attempt: u32| async move {
            let receipt = self.node.transaction_receipt(tx_hash).await?;
            if receipt.is_none() {
                tracing::debug!(tx_hash = %tx_hash, attempt, "Transaction pending");
            }
            Ok::<_, TransferError>(receipt)
        };

        match poll_until_some(policy, fetch, sleep).await? {
            Ok(receipt) => {
                tracing::info!(
                    tx_hash = %tx_hash,
                    block_number = ?receipt.block_number,
                    "Receipt received"
                );
                Ok(receipt)
            }
            Err(exhausted) => {
                tracing::warn!(
                    tx_hash = %tx_hash,
                    attempts = exhausted.attempts,
                    "No receipt within poll budget"
                );
                Err(TransferError::ReceiptTimeout {
                    attempts: exhausted.attempts,
                })
            }
        }
    }

    /// Balance of `address` in ether.
    pub async fn get_balance(&self, address: Address) -> TransferResult<EtherAmount> {
        Ok(wei_to_ether(self.node.balance(address).await?))
    }

    /// Transfer `amount_wei` from the coinbase to the second account and report.
    pub async fn run(&self, amount_wei: U256) -> TransferResult<TransferReport> {
        let client_version = self.client_version().await?;
        println!("Connected to {}\n", client_version);

        let (from, to) = self.resolve_accounts().await?;

        let balance_before = self.get_balance(to).await?;
        println!("Account (to address) {}", to);
        println!("Balance before Tx: {}\n", balance_before);

        let amount = wei_to_ether(amount_wei);
        println!("Transfer {} Ether to account", amount);

        let request = self.build_transfer(from, to, amount_wei).await?;
        println!("Nonce for sending address (coinbase): {}", request.nonce);

        let tx_hash = self.submit(&request).await?;
        println!("Tx hash: {}", tx_hash);

        let receipt = self.await_receipt(tx_hash).await?;
        let cost = wei_to_ether(
            U256::from(receipt.cumulative_gas_used) * U256::from(request.gas_price),
        );
        println!(
            "Tx cost: {} Gas ({} Ether)\n",
            receipt.cumulative_gas_used, cost
        );
        tracing::info!(
            tx_hash = %tx_hash,
            gas = receipt.cumulative_gas_used,
            cost_wei = %cost.wei(),
            "Transfer cost"
        );

        let balance_after = self.get_balance(to).await?;
        println!("Balance after Tx: {}", balance_after);

        Ok(TransferReport {
            client_version,
            from,
            to,
            amount,
            nonce: request.nonce,
            tx_hash,
            receipt,
            cost,
            balance_before,
            balance_after,
        })
    }
}
