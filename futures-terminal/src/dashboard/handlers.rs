use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use futures_gateway::{AccountSnapshot, GatewayError, IntentError, OrderRecord, TradingIntent};
use serde::{Deserialize, Serialize};

use super::AppState;

const DASHBOARD_HTML: &str = include_str!("../../templates/dashboard.html");

/// Order form fields, as text.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub symbol: String,
    pub side: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub quantity: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub stop_price: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OpenOrdersQuery {
    pub symbol: Option<String>,
}

/// Canceled order plus how long the page should wait before re-reading
/// open orders.
#[derive(Debug, Serialize)]
pub struct CancelResponse {
    pub record: OrderRecord,
    pub refresh_after_ms: u64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
}

/// Failure of an API call, rendered as JSON.
#[derive(Debug)]
pub enum ApiError {
    /// Path or body could not be extracted
    Malformed { status: StatusCode, message: String },
    Intent(IntentError),
    Gateway(GatewayError),
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Malformed {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Malformed {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<IntentError> for ApiError {
    fn from(e: IntentError) -> Self {
        ApiError::Intent(e)
    }
}

impl From<GatewayError> for ApiError {
    fn from(e: GatewayError) -> Self {
        ApiError::Gateway(e)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Malformed { status, .. } => *status,
            ApiError::Intent(_) => StatusCode::BAD_REQUEST,
            ApiError::Gateway(GatewayError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            ApiError::Gateway(GatewayError::OrderRejected { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Gateway(GatewayError::Cancel { .. }) => StatusCode::CONFLICT,
            ApiError::Gateway(GatewayError::Configuration(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Gateway(GatewayError::Exchange(_)) => StatusCode::BAD_GATEWAY,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::Malformed { message, .. } => ErrorBody {
                error: "invalid_request".to_string(),
                message: message.clone(),
                code: None,
            },
            ApiError::Intent(e) => ErrorBody {
                error: "invalid_order".to_string(),
                message: e.to_string(),
                code: None,
            },
            ApiError::Gateway(e) => ErrorBody {
                error: e.kind().to_string(),
                message: e.to_string(),
                code: e.code(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

pub async fn list_symbols(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.symbols.as_ref().clone())
}

pub async fn place_order(
    State(state): State<AppState>,
    request: Result<Json<PlaceOrderRequest>, JsonRejection>,
) -> Result<Json<OrderRecord>, ApiError> {
    let Json(request) = request?;
    let intent = TradingIntent::parse(
        &request.symbol,
        &request.side,
        &request.order_type,
        &request.quantity,
        request.price.as_deref(),
        request.stop_price.as_deref(),
    )?;

    let record = state.gateway.place_order(&intent).await?;
    Ok(Json(record))
}

pub async fn open_orders(
    State(state): State<AppState>,
    Query(query): Query<OpenOrdersQuery>,
) -> Result<Json<Vec<OrderRecord>>, ApiError> {
    let orders = state.gateway.open_orders(query.symbol.as_deref()).await?;
    Ok(Json(orders))
}

pub async fn cancel_order(
    State(state): State<AppState>,
    path: Result<Path<(String, i64)>, PathRejection>,
) -> Result<Json<CancelResponse>, ApiError> {
    let Path((symbol, order_id)) = path?;
    let record = state.gateway.cancel_order(&symbol, order_id).await?;
    Ok(Json(CancelResponse {
        record,
        refresh_after_ms: state.refresh_delay_ms,
    }))
}

pub async fn account(State(state): State<AppState>) -> Result<Json<AccountSnapshot>, ApiError> {
    let snapshot = state.gateway.account_snapshot().await?;
    Ok(Json(snapshot))
}
