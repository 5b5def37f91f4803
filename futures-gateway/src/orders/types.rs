//! Order enums shared by intents, parameters and exchange records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::intent::IntentError;

/// Order side indicating buy or sell direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    /// Buy (go long / reduce short)
    Buy,
    /// Sell (go short / reduce long)
    Sell,
}

impl OrderSide {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderSide {
    type Err = IntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(OrderSide::Buy),
            "SELL" => Ok(OrderSide::Sell),
            _ => Err(IntentError::UnknownSide(s.trim().to_string())),
        }
    }
}

/// Order types accepted by the gateway.
///
/// `Stop` is the exchange's stop-limit order: it rests as a limit order at
/// `price` once `stopPrice` is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Execute immediately at the best available price
    Market,
    /// Rest on the book at the given price
    Limit,
    /// Limit order armed when the stop price trades
    Stop,
}

impl OrderType {
    /// All order types, in menu order.
    pub const ALL: [OrderType; 3] = [OrderType::Market, OrderType::Limit, OrderType::Stop];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
            OrderType::Stop => "STOP",
        }
    }

    /// Returns true if this order type carries a limit price.
    pub fn requires_price(&self) -> bool {
        matches!(self, OrderType::Limit | OrderType::Stop)
    }

    /// Returns true if this order type carries a stop (trigger) price.
    pub fn requires_stop_price(&self) -> bool {
        matches!(self, OrderType::Stop)
    }

    /// Exchange parameter names sent for this order type, in wire order.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            OrderType::Market => &["symbol", "side", "type", "quantity"],
            OrderType::Limit => &["symbol", "side", "type", "quantity", "price", "timeInForce"],
            OrderType::Stop => &[
                "symbol",
                "side",
                "type",
                "quantity",
                "price",
                "stopPrice",
                "timeInForce",
            ],
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = IntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MARKET" => Ok(OrderType::Market),
            "LIMIT" => Ok(OrderType::Limit),
            "STOP" => Ok(OrderType::Stop),
            _ => Err(IntentError::UnknownOrderType(s.trim().to_string())),
        }
    }
}

/// Time in force sent with resting orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Good till canceled
    #[serde(rename = "GTC")]
    GoodTilCancel,
}

impl TimeInForce {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::GoodTilCancel => "GTC",
        }
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
