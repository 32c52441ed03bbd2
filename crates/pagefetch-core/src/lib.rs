//! Bounded-concurrency page fetcher.
//!
//! Given a batch of [`ResourceDescriptor`]s, [`ConcurrentFetcher::fetch_all`]
//! retrieves every target on a fixed-size worker pool, retries transient
//! failures with exponential backoff, normalizes HTML to capped plain text
//! and returns one [`FetchResult`] per distinct id. A failing target never
//! affects its siblings; it just becomes a `Failed` entry.

pub mod config;
pub mod descriptor;
pub mod extract;
pub mod fetcher;
pub mod logging;
pub mod retry;
pub mod transport;

pub use descriptor::{FetchOutcome, FetchResult, FetchStatus, ResourceDescriptor, ResultMapping};
pub use fetcher::{ConcurrentFetcher, FetchOptions, UNAVAILABLE_NOTE};
pub use transport::{RawResponse, Transport, TransportError};
