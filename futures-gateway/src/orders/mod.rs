//! Trading intents and their translation into exchange order parameters.
//!
//! - [`TradingIntent`]: a validated request to place one order
//! - [`OrderKind`]: tagged variant carrying only the fields valid for each order type
//! - [`OrderParams`]: the exchange call parameters built from an intent
//!
//! # Example
//!
//! ```ignore
//! use futures_gateway::orders::{OrderParams, OrderSide, TradingIntent};
//! use rust_decimal_macros::dec;
//!
//! let intent = TradingIntent::limit("ethusdt", OrderSide::Buy, dec!(0.5), dec!(2500.00))?;
//! let params = OrderParams::from_intent(&intent);
//! assert_eq!(params.symbol, "ETHUSDT");
//! ```

mod intent;
mod params;
mod types;

pub use intent::{normalize_symbol, IntentError, OrderKind, TradingIntent};
pub use params::OrderParams;
pub use types::{OrderSide, OrderType, TimeInForce};
