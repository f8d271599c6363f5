//! Value-transfer transaction requests.
//!
//! The node signs with its own unlocked account, so the request is sent
//! unsigned through `eth_sendTransaction`.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, U256};
use alloy::rpc::types::TransactionRequest;

/// An Ether transfer: constructed once, submitted once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub from: Address,
    pub nonce: u64,
    pub gas_price: u128,
    pub gas_limit: u64,
    pub to: Address,
    pub value: U256,
}

impl TransferRequest {
    pub fn new(
        from: Address,
        nonce: u64,
        gas_price: u128,
        gas_limit: u64,
        to: Address,
        value: U256,
    ) -> Self {
        Self {
            from,
            nonce,
            gas_price,
            gas_limit,
            to,
            value,
        }
    }

    /// Maximum fee the sender can be charged, in wei.
    pub fn max_cost(&self) -> U256 {
        U256::from(self.gas_price) * U256::from(self.gas_limit)
    }
}

impl From<&TransferRequest> for TransactionRequest {
    fn from(req: &TransferRequest) -> Self {
        TransactionRequest::default()
            .with_from(req.from)
            .with_to(req.to)
            .with_value(req.value)
            .with_nonce(req.nonce)
            .with_gas_price(req.gas_price)
            .with_gas_limit(req.gas_limit)
    }
}
