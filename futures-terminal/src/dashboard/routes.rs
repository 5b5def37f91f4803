use axum::routing::{delete, get};
use axum::Router;

use super::{handlers, AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/symbols", get(handlers::list_symbols))
        .route(
            "/api/orders",
            get(handlers::open_orders).post(handlers::place_order),
        )
        .route("/api/orders/:symbol/:order_id", delete(handlers::cancel_order))
        .route("/api/account", get(handlers::account))
        .with_state(state)
}
