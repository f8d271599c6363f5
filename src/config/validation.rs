//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: TransferConfig → Result<(), Vec<ValidationError>>

use crate::blockchain::units::ether_to_wei;
use crate::config::schema::TransferConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check value ranges and the transfer amount.
pub fn validate_config(config: &TransferConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.node.host.trim().is_empty() {
        errors.push(ValidationError::new("node.host", "must not be empty"));
    }
    if config.node.port == 0 {
        errors.push(ValidationError::new("node.port", "must be greater than 0"));
    }
    if config.transaction.gas_limit == 0 {
        errors.push(ValidationError::new("transaction.gas_limit", "must be greater than 0"));
    }
    if let Err(e) = ether_to_wei(&config.transaction.amount_ether) {
        errors.push(ValidationError::new("transaction.amount_ether", e.to_string()));
    }
    if config.poll.max_attempts == 0 {
        errors.push(ValidationError::new("poll.max_attempts", "must be greater than 0"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
