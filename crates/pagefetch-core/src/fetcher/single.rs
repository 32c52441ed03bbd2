//! One descriptor, start to terminal result.

use super::{ConcurrentFetcher, UNAVAILABLE_NOTE};
use crate::descriptor::{FetchResult, ResourceDescriptor};
use crate::extract::{compose_record, normalize_document};
use crate::retry::{run_with_retry, AttemptError};
use crate::transport::RawResponse;

impl ConcurrentFetcher {
    /// Retrieve and normalize a single descriptor. Blocks the calling thread
    /// for the request(s) and any backoff sleeps; never panics on bad input
    /// and never returns an error, only a `Failed` result.
    pub fn fetch_one(&self, descriptor: &ResourceDescriptor) -> FetchResult {
        let id = descriptor.id.as_str();

        let outcome = run_with_retry(&self.opts.retry, || {
            let identity = self.opts.identities.choose();
            tracing::debug!(target_id = id, "GET");
            let resp: RawResponse = self.transport.fetch(id, identity)?;
            if resp.is_success() {
                Ok(resp)
            } else {
                Err(AttemptError::Http(resp.status))
            }
        });

        let resp = match outcome.result {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(target_id = id, attempts = outcome.attempts, "fetch failed: {}", e);
                return FetchResult::failed(descriptor, UNAVAILABLE_NOTE);
            }
        };

        match normalize_document(&resp.body, self.opts.content_cap) {
            Ok(text) => {
                tracing::debug!(
                    target_id = id,
                    attempts = outcome.attempts,
                    "extracted {} chars",
                    text.chars().count()
                );
                let record = compose_record(descriptor.label(), id, &text);
                FetchResult::ok(descriptor, record)
            }
            Err(e) => {
                tracing::warn!(target_id = id, "normalization failed: {}", e);
                FetchResult::failed(descriptor, UNAVAILABLE_NOTE)
            }
        }
    }
}
