//! Retry loop: run a closure until success or policy says stop.

use super::classify;
use super::error::AttemptError;
use super::policy::{RetryDecision, RetryPolicy};
use std::time::Duration;

/// Final result of a retried operation plus how many attempts it took.
#[derive(Debug)]
pub struct RetryOutcome<T> {
    pub result: Result<T, AttemptError>,
    pub attempts: u32,
}

/// Runs a closure until it succeeds or the retry policy says to stop.
/// On retryable failure, sleeps for the backoff duration then tries again.
pub fn run_with_retry<T, F>(policy: &RetryPolicy, f: F) -> RetryOutcome<T>
where
    F: FnMut() -> Result<T, AttemptError>,
{
    run_with_retry_sleeping(policy, f, std::thread::sleep)
}

/// Like [`run_with_retry`] with an explicit sleep function.
pub fn run_with_retry_sleeping<T, F, S>(policy: &RetryPolicy, mut f: F, mut sleep: S) -> RetryOutcome<T>
where
    F: FnMut() -> Result<T, AttemptError>,
    S: FnMut(Duration),
{
    let mut attempt = 1u32;
    loop {
        match f() {
            Ok(v) => {
                return RetryOutcome {
                    result: Ok(v),
                    attempts: attempt,
                }
            }
            Err(e) => {
                let kind = classify::classify(&e);
                match policy.decide(attempt, kind) {
                    RetryDecision::NoRetry => {
                        return RetryOutcome {
                            result: Err(e),
                            attempts: attempt,
                        }
                    }
                    RetryDecision::RetryAfter(d) => {
                        tracing::debug!(attempt, ?kind, delay_ms = d.as_millis() as u64, "retrying after {}", e);
                        sleep(d);
                        attempt += 1;
                    }
                }
            }
        }
    }
}
