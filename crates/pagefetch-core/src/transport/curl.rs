//! libcurl-backed transport (blocking GET).

use super::{RawResponse, Transport, TransportError};
use std::time::Duration;
use url::Url;

/// Per-request curl settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurlOptions {
    /// Whole-request timeout.
    pub request_timeout: Duration,
    /// Connect phase timeout.
    pub connect_timeout: Duration,
    pub max_redirections: u32,
    /// Bodies larger than this abort the transfer.
    pub max_body_bytes: usize,
}

impl Default for CurlOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(20),
            connect_timeout: Duration::from_secs(10),
            max_redirections: 10,
            max_body_bytes: 8 * 1024 * 1024,
        }
    }
}

/// Production [`Transport`]: one curl Easy handle per request.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    opts: CurlOptions,
}

impl CurlTransport {
    pub fn new(opts: CurlOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &CurlOptions {
        &self.opts
    }

    fn perform(&self, target: &str, identity: &str) -> Result<RawResponse, ::curl::Error> {
        let mut body: Vec<u8> = Vec::new();
        let max_body = self.opts.max_body_bytes;

        let mut easy = ::curl::easy::Easy::new();
        easy.url(target)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.opts.max_redirections)?;
        easy.connect_timeout(self.opts.connect_timeout)?;
        easy.timeout(self.opts.request_timeout)?;
        easy.useragent(identity)?;
        // Empty string = every encoding libcurl can decode.
        easy.accept_encoding("")?;

        let mut list = ::curl::easy::List::new();
        list.append("Accept: text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")?;
        list.append("Accept-Language: en-US,en;q=0.9")?;
        list.append("Upgrade-Insecure-Requests: 1")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                if body.len() + data.len() > max_body {
                    tracing::debug!("response body exceeds {} bytes, aborting", max_body);
                    return Ok(0); // abort transfer
                }
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok(RawResponse {
            status: u16::try_from(code).unwrap_or(0),
            body,
        })
    }
}

/// Accepts only absolute http/https URLs with a host.
pub(crate) fn validate_target(target: &str) -> Result<Url, TransportError> {
    let url = Url::parse(target.trim())
        .map_err(|e| TransportError::InvalidTarget(format!("{}: {}", target, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(TransportError::InvalidTarget(format!(
            "unsupported scheme '{}' in {}",
            url.scheme(),
            target
        )));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(TransportError::InvalidTarget(format!("no host in {}", target)));
    }
    Ok(url)
}

fn map_curl_error(e: ::curl::Error) -> TransportError {
    let msg = e.to_string();
    if e.is_operation_timedout() {
        TransportError::Timeout(msg)
    } else if e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy() {
        TransportError::Resolve(msg)
    } else if e.is_couldnt_connect() {
        TransportError::Connect(msg)
    } else if e.is_url_malformed() || e.is_unsupported_protocol() {
        TransportError::InvalidTarget(msg)
    } else {
        TransportError::Other(msg)
    }
}

impl Transport for CurlTransport {
    fn fetch(&self, target: &str, identity: &str) -> Result<RawResponse, TransportError> {
        let url = validate_target(target)?;
        self.perform(url.as_str(), identity).map_err(map_curl_error)
    }
}
