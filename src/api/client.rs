//! HTTP transport for the explanation endpoint.
//!
//! One `reqwest::Client` is built per `ExplainClient` and reused for every
//! call. The client carries the connection pool and the fixed timeout
//! policy, so reconstructing it per request would throw both away. The
//! response body is read exactly once via `Response::text()`, which
//! consumes the response and releases the underlying connection on every
//! path.

use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use std::fmt;
use std::time::Duration;

use crate::api::types::ExplainRequest;
use crate::core::config::ResolvedConfig;

const JSON_UTF8: &str = "application/json; charset=utf-8";

// ============================================================================
// Error Type
// ============================================================================

/// Errors that can occur while fetching an explanation.
///
/// `Display` output is the user-facing message; each variant keeps a
/// distinct prefix so callers and tests can tell the failure modes apart.
#[derive(Debug)]
pub enum ExplainError {
    /// Endpoint URL is blank or still the placeholder sentinel.
    Config,
    /// The request body could not be serialized.
    Payload(String),
    /// A connect/read/write deadline elapsed. Retryable.
    Timeout(String),
    /// Any other connectivity failure (DNS, refused, reset). Retryable.
    Network(String),
    /// Non-2xx status, or a 2xx response with an empty body.
    Server { status: u16 },
    /// Anything else.
    Unexpected(String),
}

impl fmt::Display for ExplainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplainError::Config => {
                write!(f, "Configuration Error: explanation endpoint URL is not set.")
            }
            ExplainError::Payload(msg) => write!(f, "Error creating request (JSON): {msg}"),
            ExplainError::Timeout(msg) => {
                write!(f, "Network Timeout: {msg}. Please try again.")
            }
            ExplainError::Network(msg) => {
                write!(f, "Network Error: {msg}. Please check your connection.")
            }
            ExplainError::Server { status } => {
                write!(f, "Server Error: {status}. Please try again.")
            }
            ExplainError::Unexpected(msg) => {
                write!(f, "An unexpected error occurred: {msg}")
            }
        }
    }
}

impl std::error::Error for ExplainError {}

/// Maps a transport-level failure onto the error taxonomy. Timeouts are
/// checked first: reqwest flags them as request errors too.
fn classify_transport_error(e: reqwest::Error) -> ExplainError {
    if e.is_timeout() {
        ExplainError::Timeout(e.to_string())
    } else if e.is_connect() || e.is_request() || e.is_body() {
        ExplainError::Network(e.to_string())
    } else {
        ExplainError::Unexpected(e.to_string())
    }
}

// ============================================================================
// Client
// ============================================================================

/// Shared transport handle for the explanation endpoint.
///
/// Safe for concurrent use; internally the `reqwest::Client` is a
/// reference-counted pool and needs no external locking.
pub struct ExplainClient {
    http: reqwest::Client,
}

impl ExplainClient {
    /// Builds the shared HTTP client with the configured timeout policy.
    ///
    /// reqwest has no dedicated write-phase timer, so the write timeout is
    /// applied as the total request deadline; connect and read phases get
    /// their own timers.
    pub fn new(config: &ResolvedConfig) -> Result<Self, ExplainError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .read_timeout(Duration::from_millis(config.read_timeout_ms))
            .timeout(Duration::from_millis(config.write_timeout_ms))
            .build()
            .map_err(|e| ExplainError::Unexpected(e.to_string()))?;
        Ok(Self { http })
    }

    /// POSTs `{"acronym": ...}` to the endpoint and returns the response
    /// body verbatim.
    ///
    /// A 2xx status with a non-empty body is the only success shape; a 2xx
    /// with an empty body is classified as a server error, same as any
    /// non-2xx status.
    pub async fn fetch_explanation(
        &self,
        endpoint_url: &str,
        acronym: &str,
    ) -> Result<String, ExplainError> {
        let payload = ExplainRequest { acronym };
        let body = serde_json::to_string(&payload)
            .map_err(|e| ExplainError::Payload(e.to_string()))?;

        debug!("POST {} ({} byte body)", endpoint_url, body.len());

        let response = self
            .http
            .post(endpoint_url)
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        // Single consumption point: text() drains and releases the body.
        let text = response.text().await.map_err(classify_transport_error)?;

        if status.is_success() && !text.is_empty() {
            debug!("explanation received: {} bytes", text.len());
            return Ok(text);
        }

        // Full status line and body go to the log only; the user sees the
        // formatted Server Error message.
        warn!(
            "endpoint returned {} - {}\nBody: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("unknown"),
            text
        );
        Err(ExplainError::Server {
            status: status.as_u16(),
        })
    }
}
