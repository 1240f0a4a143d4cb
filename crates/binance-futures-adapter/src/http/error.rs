/*
[INPUT]:  Error sources (HTTP transport, exchange error bodies, serialization)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Main error type for the Binance futures adapter
#[derive(Error, Debug)]
pub enum BinanceError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Exchange returned an error response
    #[error("Binance API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// API key or secret missing where a signed endpoint requires them
    #[error("Missing API credentials for signed request")]
    MissingCredentials,

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Query-string encoding failed
    #[error("Query encoding error: {0}")]
    QueryEncode(#[from] serde_urlencoded::ser::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error body returned by Binance on non-2xx responses
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub code: i32,
    pub msg: String,
}

impl BinanceError {
    /// Check if the error came from a transient condition.
    ///
    /// Advisory only: this crate never retries on its own. Blind retry of
    /// an order-creation call without an idempotency key risks duplicate
    /// execution, so any retry decision belongs to the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            BinanceError::Http(err) => err.is_timeout() || err.is_connect(),
            // -1003 TOO_MANY_REQUESTS, -1021 timestamp outside recvWindow
            BinanceError::Api { code, .. } => matches!(code, -1003 | -1021),
            _ => false,
        }
    }

    /// Check if error indicates an authentication/permission failure
    pub fn is_auth_error(&self) -> bool {
        // -2014 API-key format invalid, -2015 invalid key/IP/permissions,
        // -1022 invalid signature
        matches!(self, BinanceError::Api { code, .. } if matches!(code, -2014 | -2015 | -1022))
    }

    /// Create an API error from an HTTP status and a raw body
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        BinanceError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, BinanceError>;
