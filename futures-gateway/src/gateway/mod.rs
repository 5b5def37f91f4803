//! Order gateway.
//!
//! One authenticated session to the exchange with a uniform request/response
//! contract on top:
//!
//! - `place_order` and `cancel_order` log, then surface typed errors
//! - `list_open_orders` and `account_balance` degrade to empty / zero on
//!   failure; `open_orders` and `usdt_balance` return the explicit outcome
//! - nothing is retried and nothing is cached
//!
//! # Example
//!
//! ```ignore
//! let config = ExchangeConfig::testnet();
//! let gateway = OrderGateway::initialize(&Credentials::from_env(&config.auth), &config).await?;
//!
//! let intent = TradingIntent::limit("ETHUSDT", OrderSide::Buy, dec!(0.5), dec!(2500))?;
//! let record = gateway.place_order(&intent).await?;
//! ```

mod error;

pub use error::{GatewayError, GatewayResult};

use rust_decimal::Decimal;
use tracing::{error, info, warn};

use crate::account::{find_usdt_balance, AccountSnapshot};
use crate::exchange::{Credentials, ExchangeConfig, FuturesExchange, FuturesRestClient, OrderRecord};
use crate::orders::{normalize_symbol, IntentError, OrderParams, TradingIntent};

/// Uniform request/response layer over a [`FuturesExchange`].
///
/// Holds no mutable state; share it behind an `Arc`.
pub struct OrderGateway {
    exchange: Box<dyn FuturesExchange>,
}

impl OrderGateway {
    /// Wrap an already-built exchange client.
    pub fn new(exchange: Box<dyn FuturesExchange>) -> Self {
        Self { exchange }
    }

    /// Validate credentials, open the REST session and check connectivity.
    ///
    /// Missing credentials fail before any client is built.
    pub async fn initialize(
        credentials: &Credentials,
        config: &ExchangeConfig,
    ) -> GatewayResult<Self> {
        let missing = credentials.missing_fields();
        if !missing.is_empty() {
            let message = format!("{} must be provided", missing.join(" and "));
            error!("Failed to initialize order gateway: {}", message);
            return Err(GatewayError::Configuration(message));
        }

        let client = FuturesRestClient::connect(credentials, config).map_err(|e| {
            error!("Failed to initialize order gateway: {}", e);
            GatewayError::Configuration(e.to_string())
        })?;

        info!(
            environment = config.environment_name(),
            base_url = client.base_url(),
            "Connecting to Binance Futures"
        );

        Self::connect(Box::new(client)).await
    }

    /// Ping `exchange` and wrap it once it answers.
    pub async fn connect(exchange: Box<dyn FuturesExchange>) -> GatewayResult<Self> {
        if let Err(e) = exchange.ping().await {
            error!("Failed to initialize order gateway: {}", e);
            return Err(e.into());
        }

        info!("Order gateway initialized");
        Ok(Self::new(exchange))
    }

    /// Submit one order built from `intent`.
    pub async fn place_order(&self, intent: &TradingIntent) -> GatewayResult<OrderRecord> {
        let params = OrderParams::from_intent(intent);
        info!("Placing order: {:?}", params);

        match self.exchange.create_order(&params).await {
            Ok(record) => {
                info!("Order placed successfully: {:?}", record);
                Ok(record)
            }
            Err(e) => {
                if e.is_api_error() {
                    warn!("Order rejected: {:?}", e);
                } else {
                    error!("Failed to place order: {:?}", e);
                }
                Err(GatewayError::from_order_failure(e))
            }
        }
    }

    /// Open orders, optionally scoped to one symbol.
    pub async fn open_orders(&self, symbol: Option<&str>) -> GatewayResult<Vec<OrderRecord>> {
        let symbol = symbol_filter(symbol).map_err(|e| {
            error!("Failed to get open orders: {}", e);
            GatewayError::from(e)
        })?;

        match self.exchange.open_orders(symbol.as_deref()).await {
            Ok(orders) => {
                info!(symbol = ?symbol, count = orders.len(), "Fetched open orders");
                Ok(orders)
            }
            Err(e) => {
                error!("Failed to get open orders: {:?}", e);
                Err(e.into())
            }
        }
    }

    /// Open orders, or an empty list if the fetch fails.
    ///
    /// An empty result does not distinguish "no orders" from "fetch failed";
    /// use [`open_orders`](Self::open_orders) when that matters.
    pub async fn list_open_orders(&self, symbol: Option<&str>) -> Vec<OrderRecord> {
        self.open_orders(symbol).await.unwrap_or_default()
    }

    /// Cancel an open order. The exchange decides whether the order is open.
    pub async fn cancel_order(&self, symbol: &str, order_id: i64) -> GatewayResult<OrderRecord> {
        let symbol = normalize_symbol(symbol).map_err(|e| {
            error!("Failed to cancel order {}: {}", order_id, e);
            GatewayError::from(e)
        })?;

        match self.exchange.cancel_order(&symbol, order_id).await {
            Ok(record) => {
                info!("Order cancelled: {:?}", record);
                Ok(record)
            }
            Err(e) => {
                if e.is_unknown_order() {
                    warn!("Order {} on {} is not open: {:?}", order_id, symbol, e);
                } else {
                    error!("Failed to cancel order {} on {}: {:?}", order_id, symbol, e);
                }
                Err(GatewayError::cancel(&symbol, order_id, e))
            }
        }
    }

    /// USDT wallet balance; `None` when the listing has no USDT entry.
    pub async fn usdt_balance(&self) -> GatewayResult<Option<Decimal>> {
        match self.exchange.balances().await {
            Ok(balances) => Ok(find_usdt_balance(&balances)),
            Err(e) => {
                error!("Failed to get account balance: {:?}", e);
                Err(e.into())
            }
        }
    }

    /// USDT wallet balance, or zero if absent or the fetch fails.
    pub async fn account_balance(&self) -> Decimal {
        self.usdt_balance()
            .await
            .ok()
            .flatten()
            .unwrap_or(Decimal::ZERO)
    }

    /// USDT balance plus non-flat positions.
    pub async fn account_snapshot(&self) -> GatewayResult<AccountSnapshot> {
        let balances = self.exchange.balances().await.map_err(|e| {
            error!("Failed to get account balance: {:?}", e);
            GatewayError::from(e)
        })?;
        let positions = self.exchange.positions().await.map_err(|e| {
            error!("Failed to get positions: {:?}", e);
            GatewayError::from(e)
        })?;

        Ok(AccountSnapshot::from_parts(&balances, &positions))
    }
}

/// Optional symbol filter; blank means all symbols.
fn symbol_filter(symbol: Option<&str>) -> Result<Option<String>, IntentError> {
    match symbol.map(str::trim) {
        Some(s) if !s.is_empty() => normalize_symbol(s).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::{BalanceEntry, ExchangeError};
    use crate::orders::OrderSide;
    use crate::testing::{sample_order, MockExchange, RecordedCall};
    use rust_decimal_macros::dec;

    #[test]
    fn test_symbol_filter() {
        assert_eq!(symbol_filter(Some(" btcusdt ")), Ok(Some("BTCUSDT".to_string())));
        assert_eq!(symbol_filter(Some("  ")), Ok(None));
        assert_eq!(symbol_filter(None), Ok(None));
        assert!(matches!(
            symbol_filter(Some("btcusdt&limit=1")),
            Err(IntentError::InvalidSymbol(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_symbols_never_reach_exchange() {
        let mock = MockExchange::new();
        let gateway = OrderGateway::new(Box::new(mock.clone()));

        let open = gateway.open_orders(Some("BTCUSDT&symbol=ETHUSDT")).await;
        assert!(matches!(open, Err(GatewayError::InvalidInput(_))));

        let cancel = gateway.cancel_order("btc usdt", 7).await;
        assert!(matches!(cancel, Err(GatewayError::InvalidInput(_))));

        let cancel = gateway.cancel_order("  ", 7).await;
        assert_eq!(
            cancel,
            Err(GatewayError::InvalidInput(IntentError::EmptySymbol))
        );

        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_initialize_rejects_missing_credentials() {
        for creds in [
            Credentials::new("", "secret"),
            Credentials::new("key", ""),
            Credentials::default(),
        ] {
            // Unroutable base URL: reaching the network would fail differently
            let mut config = ExchangeConfig::testnet();
            config.rest.base_url = "http://192.0.2.1:1".to_string();

            let result = OrderGateway::initialize(&creds, &config).await;
            assert!(matches!(result, Err(GatewayError::Configuration(_))));
        }
    }

    #[tokio::test]
    async fn test_place_order_sends_mapped_params() {
        let mock = MockExchange::new();
        mock.push_order_response(Ok(sample_order(1, "ETHUSDT", "NEW")));
        let gateway = OrderGateway::new(Box::new(mock.clone()));

        let intent =
            TradingIntent::limit("ethusdt", OrderSide::Buy, dec!(0.5), dec!(2500.00)).unwrap();
        let record = gateway.place_order(&intent).await.unwrap();

        assert_eq!(record.order_id, 1);
        assert_eq!(
            mock.calls(),
            vec![RecordedCall::CreateOrder(OrderParams::from_intent(&intent))]
        );
    }

    #[tokio::test]
    async fn test_list_open_orders_degrades_to_empty() {
        let mock = MockExchange::new();
        mock.push_open_orders_response(Err(ExchangeError::Request("connection reset".into())));
        let gateway = OrderGateway::new(Box::new(mock.clone()));

        assert!(gateway.list_open_orders(Some("btcusdt")).await.is_empty());
        assert_eq!(
            mock.calls(),
            vec![RecordedCall::OpenOrders(Some("BTCUSDT".to_string()))]
        );
    }

    #[tokio::test]
    async fn test_account_balance_reads_usdt() {
        let mock = MockExchange::new();
        mock.push_balances_response(Ok(vec![
            BalanceEntry::new("BNB", dec!(1)),
            BalanceEntry::new("USDT", dec!(1234.56)),
        ]));
        let gateway = OrderGateway::new(Box::new(mock));

        assert_eq!(gateway.account_balance().await, dec!(1234.56));
    }
}
