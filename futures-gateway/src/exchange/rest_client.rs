//! REST client for the Binance USDT-M futures API.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::config::{Credentials, ExchangeConfig};
use super::endpoints::{paths, FuturesEndpoints};
use super::error::{ExchangeError, ExchangeResult};
use super::http::HttpClient;
use super::signer::BinanceHmacSigner;
use super::types::{BalanceEntry, OrderRecord, PositionRisk};
use super::FuturesExchange;
use crate::orders::OrderParams;

/// REST client for the futures API.
pub struct FuturesRestClient {
    http_client: Arc<HttpClient>,
}

impl FuturesRestClient {
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Build a signed client for the environment selected by `config`.
    ///
    /// Does not touch the network.
    pub fn connect(credentials: &Credentials, config: &ExchangeConfig) -> ExchangeResult<Self> {
        let base_url = if config.rest.base_url.is_empty() {
            FuturesEndpoints::for_environment(config.testnet).rest_url
        } else {
            config.rest.base_url.clone()
        };

        let signer = BinanceHmacSigner::new(&credentials.api_key, &credentials.api_secret);
        let http_client = HttpClient::new(base_url, Box::new(signer), config.rest.clone())?;

        Ok(Self::new(Arc::new(http_client)))
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }
}

#[async_trait]
impl FuturesExchange for FuturesRestClient {
    async fn ping(&self) -> ExchangeResult<()> {
        let _: serde_json::Value = self.http_client.get_public(paths::PING, &[]).await?;
        Ok(())
    }

    async fn create_order(&self, params: &OrderParams) -> ExchangeResult<OrderRecord> {
        let pairs = params.to_query_pairs();
        let params: Vec<(&str, &str)> = pairs.iter().map(|(k, v)| (*k, v.as_str())).collect();

        debug!("Submitting futures order: {:?}", params);

        self.http_client.post_signed(paths::ORDER, &params).await
    }

    async fn open_orders(&self, symbol: Option<&str>) -> ExchangeResult<Vec<OrderRecord>> {
        let params: Vec<(&str, &str)> = match symbol {
            Some(s) => vec![("symbol", s)],
            None => vec![],
        };

        self.http_client.get_signed(paths::OPEN_ORDERS, &params).await
    }

    async fn cancel_order(&self, symbol: &str, order_id: i64) -> ExchangeResult<OrderRecord> {
        if symbol.is_empty() {
            return Err(ExchangeError::Request(
                "symbol is required to cancel an order".to_string(),
            ));
        }

        let order_id_str = order_id.to_string();
        let params = [("symbol", symbol), ("orderId", order_id_str.as_str())];

        debug!("Cancelling futures order: {:?}", params);

        self.http_client.delete_signed(paths::ORDER, &params).await
    }

    async fn balances(&self) -> ExchangeResult<Vec<BalanceEntry>> {
        self.http_client.get_signed(paths::BALANCE, &[]).await
    }

    async fn positions(&self) -> ExchangeResult<Vec<PositionRisk>> {
        self.http_client.get_signed(paths::POSITION_RISK, &[]).await
    }
}
