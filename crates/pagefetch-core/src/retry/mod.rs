//! Retry and backoff policy.
//!
//! Classifies failed attempts (timeouts, throttling, server errors,
//! connection failures) and decides exponential backoff so the fetcher
//! applies one consistent policy to every descriptor.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_http_status, classify_transport_error};
pub use error::AttemptError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::{run_with_retry, run_with_retry_sleeping, RetryOutcome};
