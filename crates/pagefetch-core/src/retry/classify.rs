//! Classify HTTP status and transport errors into retry policy error kinds.

use super::error::AttemptError;
use super::policy::ErrorKind;
use crate::transport::TransportError;

/// Classify an HTTP status code for retry decisions.
pub fn classify_http_status(code: u16) -> ErrorKind {
    match code {
        429 | 503 => ErrorKind::Throttled,
        500 | 502 | 504 => ErrorKind::Http5xx(code),
        _ => ErrorKind::Other,
    }
}

/// Classify a transport error for retry decisions.
pub fn classify_transport_error(e: &TransportError) -> ErrorKind {
    match e {
        TransportError::Timeout(_) => ErrorKind::Timeout,
        TransportError::Connect(_) | TransportError::Resolve(_) => ErrorKind::Connection,
        TransportError::InvalidTarget(_) | TransportError::Other(_) => ErrorKind::Other,
    }
}

/// Classify an attempt error (transport or HTTP) into an ErrorKind.
pub fn classify(e: &AttemptError) -> ErrorKind {
    match e {
        AttemptError::Transport(te) => classify_transport_error(te),
        AttemptError::Http(code) => classify_http_status(*code),
    }
}
