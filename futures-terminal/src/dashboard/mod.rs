//! Web dashboard: a single HTML page plus a small JSON API over the gateway.
//!
//! | Route | Result |
//! |-------|--------|
//! | `GET /` | dashboard page |
//! | `GET /api/symbols` | configured trading pairs |
//! | `POST /api/orders` | placed order |
//! | `GET /api/orders?symbol=` | open orders |
//! | `DELETE /api/orders/:symbol/:order_id` | canceled order + refresh pause |
//! | `GET /api/account` | balance and open positions |

mod handlers;
mod routes;

pub use handlers::{ApiError, CancelResponse, ErrorBody, OpenOrdersQuery, PlaceOrderRequest};
pub use routes::create_router;

use std::sync::Arc;

use futures_gateway::OrderGateway;

use crate::config::DashboardSettings;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<OrderGateway>,
    pub symbols: Arc<Vec<String>>,
    pub refresh_delay_ms: u64,
}

impl AppState {
    pub fn new(gateway: Arc<OrderGateway>, settings: &DashboardSettings) -> Self {
        Self {
            gateway,
            symbols: Arc::new(settings.symbols.clone()),
            refresh_delay_ms: settings.refresh_delay_ms,
        }
    }
}
