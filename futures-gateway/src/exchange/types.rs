//! Futures REST API wire types.
//!
//! Decimal fields arrive as JSON strings and are parsed with the helpers at
//! the bottom of this file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::orders::OrderSide;

/// An order as reported by the exchange (new, open or canceled).
///
/// The gateway passes records through untouched. Fields not modeled here are
/// kept in `extra` and serialized back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Exchange order ID
    pub order_id: i64,
    /// Symbol
    pub symbol: String,
    /// Order status (NEW, PARTIALLY_FILLED, FILLED, CANCELED, ...)
    pub status: String,
    /// Client order ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    /// Side
    pub side: OrderSide,
    /// Order type as named by the exchange (may be wider than ours)
    #[serde(rename = "type")]
    pub order_type: String,
    /// Original quantity
    #[serde(deserialize_with = "deserialize_decimal")]
    pub orig_qty: Decimal,
    /// Limit price (absent for market orders)
    #[serde(
        default,
        deserialize_with = "deserialize_decimal_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    /// Trigger price (stop orders only)
    #[serde(
        default,
        deserialize_with = "deserialize_decimal_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub stop_price: Option<Decimal>,
    /// Every other field the exchange returned
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One row of the futures balance listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceEntry {
    /// Asset name
    pub asset: String,
    /// Wallet balance
    #[serde(deserialize_with = "deserialize_decimal")]
    pub balance: Decimal,
    /// Available balance
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub available_balance: Option<Decimal>,
    /// Unrealized profit of crossed positions
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub cross_un_pnl: Option<Decimal>,
}

impl BalanceEntry {
    pub fn new(asset: impl Into<String>, balance: Decimal) -> Self {
        Self {
            asset: asset.into(),
            balance,
            available_balance: None,
            cross_un_pnl: None,
        }
    }
}

/// Position risk for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRisk {
    /// Symbol
    pub symbol: String,
    /// Signed position size (negative = short)
    #[serde(deserialize_with = "deserialize_decimal")]
    pub position_amt: Decimal,
    /// Entry price
    #[serde(deserialize_with = "deserialize_decimal")]
    pub entry_price: Decimal,
    /// Mark price
    #[serde(deserialize_with = "deserialize_decimal")]
    pub mark_price: Decimal,
    /// Unrealized profit
    #[serde(rename = "unRealizedProfit", deserialize_with = "deserialize_decimal")]
    pub unrealized_profit: Decimal,
    /// Leverage
    #[serde(deserialize_with = "deserialize_decimal")]
    pub leverage: Decimal,
    /// Position side (BOTH in one-way mode)
    #[serde(default)]
    pub position_side: Option<String>,
}

fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    s.parse()
        .map_err(|e| serde::de::Error::custom(format!("invalid decimal {:?}: {}", s, e)))
}

/// Empty, unparseable and zero values all read as absent.
fn deserialize_decimal_opt<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.and_then(|s| s.parse::<Decimal>().ok())
        .filter(|d| !d.is_zero()))
}
