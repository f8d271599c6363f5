//! Transfer orchestration.

pub mod orchestrator;

pub use orchestrator::{TransferOrchestrator, TransferReport};
