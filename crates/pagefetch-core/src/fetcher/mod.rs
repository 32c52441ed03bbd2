//! Concurrent fetcher.
//!
//! Each descriptor is requested with a randomly chosen client identity,
//! retried with backoff on transient failures, checked for a 2xx status,
//! reduced to capped plain text and wrapped in a labeled record. `fetch_all`
//! runs that for a whole batch on a bounded worker pool and collects one
//! terminal result per distinct id.

mod batch;
mod single;

use std::sync::Arc;
use std::time::Duration;

use crate::config::FetcherConfig;
use crate::extract::DEFAULT_CONTENT_CAP;
use crate::retry::RetryPolicy;
use crate::transport::{CurlOptions, CurlTransport, IdentityPool, Transport};

/// Note stored on every failed result. Details only go to the log.
pub const UNAVAILABLE_NOTE: &str = "[Content blocked or unavailable]";

/// Everything the fetcher needs besides the transport.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub identities: IdentityPool,
    pub retry: RetryPolicy,
    /// Cap on normalized text per descriptor, in characters.
    pub content_cap: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            identities: IdentityPool::default(),
            retry: RetryPolicy::default(),
            content_cap: DEFAULT_CONTENT_CAP,
        }
    }
}

/// Fetches batches of descriptors. Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct ConcurrentFetcher {
    transport: Arc<dyn Transport>,
    opts: FetchOptions,
}

impl std::fmt::Debug for ConcurrentFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConcurrentFetcher")
            .field("opts", &self.opts)
            .finish_non_exhaustive()
    }
}

impl ConcurrentFetcher {
    pub fn new(transport: Arc<dyn Transport>, opts: FetchOptions) -> Self {
        Self {
            transport,
            opts: FetchOptions {
                content_cap: opts.content_cap.max(1),
                ..opts
            },
        }
    }

    /// Curl-backed fetcher using timeouts, identities, cap and retry policy
    /// from `cfg`.
    pub fn from_config(cfg: &FetcherConfig) -> Self {
        let transport = CurlTransport::new(CurlOptions {
            request_timeout: Duration::from_secs(cfg.request_timeout_secs),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            ..CurlOptions::default()
        });
        let opts = FetchOptions {
            identities: IdentityPool::new(cfg.user_agents.iter().cloned()),
            retry: cfg.retry_policy(),
            content_cap: cfg.content_cap_chars,
        };
        Self::new(Arc::new(transport), opts)
    }

    pub fn options(&self) -> &FetchOptions {
        &self.opts
    }
}
