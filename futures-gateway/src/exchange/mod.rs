//! Binance USDT-M futures exchange access.
//!
//! # Components
//!
//! - [`FuturesExchange`]: the operations the gateway needs from an exchange
//! - [`FuturesRestClient`]: signed REST implementation of [`FuturesExchange`]
//! - [`HttpClient`]: authenticated HTTP client (signing, error decoding, timeout)
//! - [`BinanceHmacSigner`]: HMAC-SHA256 request signing
//! - [`FuturesEndpoints`]: production / testnet base URLs and REST paths
//! - Wire types: [`OrderRecord`], [`BalanceEntry`], [`PositionRisk`]
//!
//! # Example
//!
//! ```ignore
//! use futures_gateway::exchange::{Credentials, ExchangeConfig, FuturesRestClient};
//!
//! let config = ExchangeConfig::testnet();
//! let credentials = Credentials::from_env(&config.auth);
//! let client = FuturesRestClient::connect(&credentials, &config)?;
//! client.ping().await?;
//! ```

mod config;
mod endpoints;
mod error;
mod http;
mod rest_client;
mod signer;
mod types;

pub use config::{AuthConfig, Credentials, ExchangeConfig, RestConfig};
pub use endpoints::{paths, FuturesEndpoints};
pub use error::{ExchangeError, ExchangeResult};
pub use http::{build_query_string, HttpClient, RequestSigner};
pub use rest_client::FuturesRestClient;
pub use signer::BinanceHmacSigner;
pub use types::{BalanceEntry, OrderRecord, PositionRisk};

use async_trait::async_trait;

use crate::orders::OrderParams;

/// Exchange operations used by the order gateway.
///
/// Each call is one request/response exchange with the venue. Implementations
/// must not retry.
#[async_trait]
pub trait FuturesExchange: Send + Sync {
    /// Check connectivity.
    async fn ping(&self) -> ExchangeResult<()>;

    /// Submit a new order.
    async fn create_order(&self, params: &OrderParams) -> ExchangeResult<OrderRecord>;

    /// Open orders, optionally scoped to one symbol.
    async fn open_orders(&self, symbol: Option<&str>) -> ExchangeResult<Vec<OrderRecord>>;

    /// Cancel an open order by exchange order id.
    async fn cancel_order(&self, symbol: &str, order_id: i64) -> ExchangeResult<OrderRecord>;

    /// Full futures balance listing, one entry per asset.
    async fn balances(&self) -> ExchangeResult<Vec<BalanceEntry>>;

    /// Position risk for every symbol (including flat ones).
    async fn positions(&self) -> ExchangeResult<Vec<PositionRisk>>;
}
