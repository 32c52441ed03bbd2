//! Single-attempt error type for retry classification.

use crate::transport::TransportError;
use thiserror::Error;

/// Why one attempt did not produce a usable response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttemptError {
    /// No response was obtained.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// A response arrived with a non-2xx status.
    #[error("HTTP {0}")]
    Http(u16),
}
