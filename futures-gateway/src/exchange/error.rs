//! Exchange transport error types.

use thiserror::Error;

/// Result type for exchange operations.
pub type ExchangeResult<T> = Result<T, ExchangeError>;

/// Errors raised while talking to the exchange.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExchangeError {
    /// Client could not be configured (bad base URL, TLS setup, etc.)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request could not be sent or the response body could not be read
    #[error("Request error: {0}")]
    Request(String),

    /// Request exceeded the configured timeout
    #[error("Timeout: {0}")]
    Timeout(String),

    /// The exchange answered with an error body
    #[error("APIError(code={code}): {message}")]
    Api {
        /// HTTP status of the response
        status: u16,
        /// Exchange error code (negative for Binance)
        code: i32,
        /// Exchange error message, verbatim
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ExchangeError {
    /// Create an API error.
    pub fn api(status: u16, code: i32, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            code,
            message: message.into(),
        }
    }

    /// Returns the exchange error code if the exchange produced one.
    pub fn error_code(&self) -> Option<i32> {
        match self {
            ExchangeError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns true if the exchange itself answered (as opposed to a
    /// transport or decoding failure).
    pub fn is_api_error(&self) -> bool {
        matches!(self, ExchangeError::Api { .. })
    }

    /// Returns true if the exchange reports the order as unknown
    /// (already filled, canceled, or never existed).
    pub fn is_unknown_order(&self) -> bool {
        matches!(self, ExchangeError::Api { code: -2011 | -2013, .. })
    }
}

impl From<reqwest::Error> for ExchangeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ExchangeError::Timeout(e.to_string())
        } else if e.is_builder() {
            ExchangeError::Configuration(e.to_string())
        } else if e.is_decode() {
            ExchangeError::Parse(e.to_string())
        } else {
            ExchangeError::Request(e.to_string())
        }
    }
}
