// futures-gateway: order gateway for Binance USDT-M futures.
// Used by futures-terminal (text menu and web dashboard).

pub mod account;
pub mod exchange;
pub mod gateway;
pub mod logging;
pub mod orders;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use account::{AccountSnapshot, PositionSnapshot};
pub use exchange::{
    Credentials, ExchangeConfig, ExchangeError, ExchangeResult, FuturesExchange,
    FuturesRestClient, OrderRecord,
};
pub use gateway::{GatewayError, GatewayResult, OrderGateway};
pub use orders::{IntentError, OrderKind, OrderParams, OrderSide, OrderType, TimeInForce, TradingIntent};
