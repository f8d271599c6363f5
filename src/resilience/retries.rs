//! Fixed-interval polling.
//!
//! # Responsibilities
//! - Repeat a fetch until it yields a value or the attempt budget is spent
//! - Sleep a constant interval between attempts
//!
//! # Design Decisions
//! - No exponential backoff, no jitter
//! - Errors from the fetch abort immediately; only "not yet" is retried
//! - Fetch and sleep are injected so the loop runs without real time in tests

use std::future::Future;
use std::time::Duration;

/// Attempt budget and spacing for a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl PollPolicy {
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
        }
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::new(40, Duration::from_millis(1000))
    }
}

/// Outcome of an exhausted poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exhausted {
    pub attempts: u32,
}

/// Call `fetch` up to `policy.max_attempts` times, returning the first `Some`.
///
/// `sleep` runs between attempts, never after the last one. Returns
/// `Ok(Err(Exhausted))` when every attempt came back empty.
pub async fn poll_until_some<T, E, F, Fut, S, SFut>(
    policy: PollPolicy,
    mut fetch: F,
    mut sleep: S,
) -> Result<Result<T, Exhausted>, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
    S: FnMut(Duration) -> SFut,
    SFut: Future<Output = ()>,
{
    for attempt in 1..=policy.max_attempts {
        if let Some(value) = fetch(attempt).await? {
            return Ok(Ok(value));
        }
        if attempt < policy.max_attempts {
            sleep(policy.interval).await;
        }
    }

    Ok(Err(Exhausted {
        attempts: policy.max_attempts,
    }))
}
