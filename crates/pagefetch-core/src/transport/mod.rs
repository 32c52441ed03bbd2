//! Transport abstraction.
//!
//! The fetcher only ever talks to a [`Transport`]; the production
//! implementation is [`CurlTransport`], tests plug in scripted mocks.

mod curl;
mod identity;

pub use self::curl::{CurlOptions, CurlTransport};
pub use identity::{IdentityPool, DEFAULT_USER_AGENTS};

use thiserror::Error;

/// Status and body of a completed HTTP exchange (any status code).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure to obtain any response at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("invalid target: {0}")]
    InvalidTarget(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("could not resolve host: {0}")]
    Resolve(String),
    #[error("transport error: {0}")]
    Other(String),
}

/// Retrieves one target. `identity` is the client identity (user agent) to
/// present for this request.
///
/// Implementations block; the fetcher calls them from blocking worker threads.
pub trait Transport: Send + Sync {
    fn fetch(&self, target: &str, identity: &str) -> Result<RawResponse, TransportError>;
}
