//! Conversion between wei and ether.

use alloy::primitives::utils::{format_ether, parse_ether};
use alloy::primitives::U256;

use crate::blockchain::types::{TransferError, TransferResult};

/// A wei amount rendered in ether.
///
/// Displays as a plain decimal with trailing zeros trimmed, e.g. `0.123`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct EtherAmount(U256);

impl EtherAmount {
    pub fn from_wei(wei: U256) -> Self {
        Self(wei)
    }

    pub fn wei(&self) -> U256 {
        self.0
    }
}

impl std::fmt::Display for EtherAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let formatted = format_ether(self.0);
        let trimmed = if formatted.contains('.') {
            formatted.trim_end_matches('0').trim_end_matches('.')
        } else {
            formatted.as_str()
        };
        f.write_str(trimmed)
    }
}

/// Parse a decimal ether string into wei.
pub fn ether_to_wei(ether: &str) -> TransferResult<U256> {
    parse_ether(ether.trim())
        .map_err(|e| TransferError::InvalidAmount(format!("'{}': {}", ether, e)))
}

/// Convert wei into ether.
pub fn wei_to_ether(wei: U256) -> EtherAmount {
    EtherAmount::from_wei(wei)
}
