//! Order gateway error types.

use thiserror::Error;

use crate::exchange::ExchangeError;
use crate::orders::IntentError;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors surfaced by [`OrderGateway`](super::OrderGateway).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Missing credentials or an unusable client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The exchange declined the order
    #[error("APIError(code={code}): {message}")]
    OrderRejected {
        /// HTTP status of the rejection
        status: u16,
        /// Exchange error code
        code: i32,
        /// Exchange error message, verbatim
        message: String,
    },

    /// Cancel target is unknown, already closed, or the cancel call failed
    #[error("Failed to cancel order {order_id} on {symbol}: {source}")]
    Cancel {
        symbol: String,
        order_id: i64,
        #[source]
        source: ExchangeError,
    },

    /// Request arguments rejected before anything was sent
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] IntentError),

    /// Transport or unexpected failure
    #[error(transparent)]
    Exchange(#[from] ExchangeError),
}

impl GatewayError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Configuration(_) => "configuration_error",
            GatewayError::OrderRejected { .. } => "order_rejected",
            GatewayError::Cancel { .. } => "cancel_error",
            GatewayError::InvalidInput(_) => "invalid_input",
            GatewayError::Exchange(_) => "gateway_error",
        }
    }

    /// Exchange error code, when the exchange produced one.
    pub fn code(&self) -> Option<i32> {
        match self {
            GatewayError::OrderRejected { code, .. } => Some(*code),
            GatewayError::Cancel { source, .. } => source.error_code(),
            GatewayError::Exchange(e) => e.error_code(),
            GatewayError::Configuration(_) | GatewayError::InvalidInput(_) => None,
        }
    }

    /// Classify a failed new-order call: exchange answers are rejections,
    /// everything else stays a transport error.
    pub(crate) fn from_order_failure(error: ExchangeError) -> Self {
        match error {
            ExchangeError::Api {
                status,
                code,
                message,
            } => GatewayError::OrderRejected {
                status,
                code,
                message,
            },
            other => GatewayError::Exchange(other),
        }
    }

    pub(crate) fn cancel(symbol: &str, order_id: i64, source: ExchangeError) -> Self {
        GatewayError::Cancel {
            symbol: symbol.to_string(),
            order_id,
            source,
        }
    }
}
