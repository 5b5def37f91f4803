//! Validated trading intents.

use rust_decimal::Decimal;
use thiserror::Error;

use super::types::{OrderSide, OrderType};

/// Reasons an intent cannot be constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntentError {
    #[error("Symbol must not be empty")]
    EmptySymbol,

    #[error("Invalid symbol: {0:?} (letters and digits only)")]
    InvalidSymbol(String),

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: Decimal },

    #[error("{order_type} order requires {field}")]
    MissingField {
        field: &'static str,
        order_type: OrderType,
    },

    #[error("{order_type} order does not accept {field}")]
    UnexpectedField {
        field: &'static str,
        order_type: OrderType,
    },

    #[error("Unknown side: {0:?} (expected BUY or SELL)")]
    UnknownSide(String),

    #[error("Unknown order type: {0:?} (expected MARKET, LIMIT or STOP)")]
    UnknownOrderType(String),

    #[error("Invalid {field}: {value:?} is not a number")]
    InvalidNumber { field: &'static str, value: String },
}

/// Price fields carried by each order type.
///
/// Only the fields valid for a type exist on its variant, so an intent can
/// never hold a price its type forbids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    Market,
    Limit { price: Decimal },
    Stop { price: Decimal, stop_price: Decimal },
}

impl OrderKind {
    pub fn order_type(&self) -> OrderType {
        match self {
            OrderKind::Market => OrderType::Market,
            OrderKind::Limit { .. } => OrderType::Limit,
            OrderKind::Stop { .. } => OrderType::Stop,
        }
    }

    pub fn price(&self) -> Option<Decimal> {
        match self {
            OrderKind::Market => None,
            OrderKind::Limit { price } | OrderKind::Stop { price, .. } => Some(*price),
        }
    }

    pub fn stop_price(&self) -> Option<Decimal> {
        match self {
            OrderKind::Stop { stop_price, .. } => Some(*stop_price),
            _ => None,
        }
    }
}

/// A fully specified request to place one order.
///
/// Constructed once, submitted once, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradingIntent {
    symbol: String,
    side: OrderSide,
    quantity: Decimal,
    kind: OrderKind,
}

impl TradingIntent {
    /// Market order.
    pub fn market(
        symbol: impl AsRef<str>,
        side: OrderSide,
        quantity: Decimal,
    ) -> Result<Self, IntentError> {
        Self::new(symbol.as_ref(), side, quantity, OrderKind::Market)
    }

    /// Limit order, good till canceled.
    pub fn limit(
        symbol: impl AsRef<str>,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<Self, IntentError> {
        ensure_positive("price", price)?;
        Self::new(symbol.as_ref(), side, quantity, OrderKind::Limit { price })
    }

    /// Stop-limit order, good till canceled.
    pub fn stop(
        symbol: impl AsRef<str>,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
        stop_price: Decimal,
    ) -> Result<Self, IntentError> {
        ensure_positive("price", price)?;
        ensure_positive("stopPrice", stop_price)?;
        Self::new(
            symbol.as_ref(),
            side,
            quantity,
            OrderKind::Stop { price, stop_price },
        )
    }

    /// Build an intent from loose fields, enforcing the field table:
    ///
    /// | type   | price    | stopPrice |
    /// |--------|----------|-----------|
    /// | MARKET | absent   | absent    |
    /// | LIMIT  | required | absent    |
    /// | STOP   | required | required  |
    pub fn from_parts(
        symbol: impl AsRef<str>,
        side: OrderSide,
        order_type: OrderType,
        quantity: Decimal,
        price: Option<Decimal>,
        stop_price: Option<Decimal>,
    ) -> Result<Self, IntentError> {
        let missing = |field| IntentError::MissingField { field, order_type };
        let unexpected = |field| IntentError::UnexpectedField { field, order_type };

        match order_type {
            OrderType::Market => {
                if price.is_some() {
                    return Err(unexpected("price"));
                }
                if stop_price.is_some() {
                    return Err(unexpected("stopPrice"));
                }
                Self::market(symbol, side, quantity)
            }
            OrderType::Limit => {
                if stop_price.is_some() {
                    return Err(unexpected("stopPrice"));
                }
                let price = price.ok_or_else(|| missing("price"))?;
                Self::limit(symbol, side, quantity, price)
            }
            OrderType::Stop => {
                let price = price.ok_or_else(|| missing("price"))?;
                let stop_price = stop_price.ok_or_else(|| missing("stopPrice"))?;
                Self::stop(symbol, side, quantity, price, stop_price)
            }
        }
    }

    fn new(
        symbol: &str,
        side: OrderSide,
        quantity: Decimal,
        kind: OrderKind,
    ) -> Result<Self, IntentError> {
        let symbol = normalize_symbol(symbol)?;
        ensure_positive("quantity", quantity)?;

        Ok(Self {
            symbol,
            side,
            quantity,
            kind,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn side(&self) -> OrderSide {
        self.side
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    pub fn order_type(&self) -> OrderType {
        self.kind.order_type()
    }

    pub fn price(&self) -> Option<Decimal> {
        self.kind.price()
    }

    pub fn stop_price(&self) -> Option<Decimal> {
        self.kind.stop_price()
    }
}

/// Trim and uppercase a trading pair, rejecting anything that is not a
/// plain alphanumeric instrument name.
///
/// Symbols are copied verbatim into the signed query string, so `&`, `=`
/// or whitespace would change the request itself.
pub fn normalize_symbol(symbol: &str) -> Result<String, IntentError> {
    let symbol = symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(IntentError::EmptySymbol);
    }
    if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(IntentError::InvalidSymbol(symbol));
    }
    Ok(symbol)
}

fn ensure_positive(field: &'static str, value: Decimal) -> Result<(), IntentError> {
    if value > Decimal::ZERO {
        Ok(())
    } else {
        Err(IntentError::NonPositive { field, value })
    }
}

/// Parse a user-entered decimal for `field`.
fn parse_decimal_field(field: &'static str, value: &str) -> Result<Decimal, IntentError> {
    value
        .trim()
        .parse::<Decimal>()
        .map_err(|_| IntentError::InvalidNumber {
            field,
            value: value.trim().to_string(),
        })
}

impl TradingIntent {
    /// Build an intent from raw text fields, as collected by a prompt or form.
    ///
    /// Empty `price` / `stop_price` strings count as absent.
    pub fn parse(
        symbol: &str,
        side: &str,
        order_type: &str,
        quantity: &str,
        price: Option<&str>,
        stop_price: Option<&str>,
    ) -> Result<Self, IntentError> {
        let side: OrderSide = side.parse()?;
        let order_type: OrderType = order_type.parse()?;
        let quantity = parse_decimal_field("quantity", quantity)?;
        let price = optional_decimal("price", price)?;
        let stop_price = optional_decimal("stopPrice", stop_price)?;

        Self::from_parts(symbol, side, order_type, quantity, price, stop_price)
    }
}

fn optional_decimal(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<Decimal>, IntentError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => parse_decimal_field(field, v).map(Some),
        _ => Ok(None),
    }
}
