//! Exchange call parameters for new orders.

use rust_decimal::Decimal;
use serde::Serialize;

use super::intent::{OrderKind, TradingIntent};
use super::types::{OrderSide, OrderType, TimeInForce};

/// Parameters for one new-order call.
///
/// Built only through [`OrderParams::from_intent`], so the optional fields
/// always match `order_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderParams {
    pub symbol: String,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub quantity: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
}

impl OrderParams {
    /// Map an intent onto the parameter set its order type requires.
    pub fn from_intent(intent: &TradingIntent) -> Self {
        let (price, stop_price, time_in_force) = match intent.kind() {
            OrderKind::Market => (None, None, None),
            OrderKind::Limit { price } => (Some(price), None, Some(TimeInForce::GoodTilCancel)),
            OrderKind::Stop { price, stop_price } => (
                Some(price),
                Some(stop_price),
                Some(TimeInForce::GoodTilCancel),
            ),
        };

        Self {
            symbol: intent.symbol().to_string(),
            side: intent.side(),
            order_type: intent.order_type(),
            quantity: intent.quantity(),
            price,
            stop_price,
            time_in_force,
        }
    }

    /// Wire key/value pairs, in the order of [`OrderType::required_fields`].
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("symbol", self.symbol.clone()),
            ("side", self.side.as_str().to_string()),
            ("type", self.order_type.as_str().to_string()),
            ("quantity", self.quantity.normalize().to_string()),
        ];

        if let Some(price) = self.price {
            pairs.push(("price", price.normalize().to_string()));
        }
        if let Some(stop_price) = self.stop_price {
            pairs.push(("stopPrice", stop_price.normalize().to_string()));
        }
        if let Some(tif) = self.time_in_force {
            pairs.push(("timeInForce", tif.as_str().to_string()));
        }

        pairs
    }
}
