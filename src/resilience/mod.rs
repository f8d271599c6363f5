//! Resilience subsystem.
//!
//! Only the receipt poll retries: a fixed number of attempts with a fixed
//! delay. Every other call fails fast.

pub mod retries;

pub use retries::{poll_until_some, Exhausted, PollPolicy};
