//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional TOML file ($ETHER_TRANSFER_CONFIG)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → TransferConfig (validated, immutable)
//!     → positional CLI args override host/port
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; the defaults are the demo's fixed constants
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, CONFIG_PATH_ENV_VAR};
pub use schema::{NodeConfig, PollConfig, TransferConfig, TxConfig};
