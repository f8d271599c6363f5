//! Configuration schema definitions.
//!
//! All types derive `Deserialize` for loading from config files.

use serde::Deserialize;
use std::time::Duration;

use crate::blockchain::types::{
    Endpoint, DEFAULT_HOST, DEFAULT_PORT, GAS_LIMIT, GAS_PRICE_WEI, TRANSFER_AMOUNT_ETHER,
};
use crate::resilience::retries::PollPolicy;

/// Root configuration for a transfer run.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TransferConfig {
    /// Node endpoint.
    pub node: NodeConfig,

    /// Transaction parameters.
    pub transaction: TxConfig,

    /// Receipt polling.
    pub poll: PollConfig,
}

impl TransferConfig {
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.node.host.clone(), self.node.port)
    }

    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy::new(
            self.poll.max_attempts,
            Duration::from_millis(self.poll.interval_ms),
        )
    }
}

/// Node RPC endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct NodeConfig {
    pub host: String,
    pub port: u16,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Transfer transaction parameters.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TxConfig {
    /// Gas price in wei.
    pub gas_price_wei: u64,

    /// Gas limit.
    pub gas_limit: u64,

    /// Amount to transfer, as a decimal ether string.
    pub amount_ether: String,
}

impl Default for TxConfig {
    fn default() -> Self {
        Self {
            gas_price_wei: GAS_PRICE_WEI,
            gas_limit: GAS_LIMIT,
            amount_ether: TRANSFER_AMOUNT_ETHER.to_string(),
        }
    }
}

/// Receipt polling settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PollConfig {
    pub max_attempts: u32,
    pub interval_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: 40,
            interval_ms: 1000,
        }
    }
}
