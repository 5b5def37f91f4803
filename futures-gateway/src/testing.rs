//! In-memory exchange for tests.
//!
//! [`MockExchange`] records every call and answers from scripted response
//! queues. When a queue is empty it falls back to a plausible default:
//! orders are echoed back as `NEW`, listings are empty, cancels fail with
//! the exchange's unknown-order error.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::exchange::{
    BalanceEntry, ExchangeError, ExchangeResult, FuturesExchange, OrderRecord, PositionRisk,
};
use crate::orders::{OrderParams, OrderSide};

/// A call received by [`MockExchange`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Ping,
    CreateOrder(OrderParams),
    OpenOrders(Option<String>),
    CancelOrder { symbol: String, order_id: i64 },
    Balances,
    Positions,
}

#[derive(Default)]
struct MockState {
    calls: Vec<RecordedCall>,
    ping: VecDeque<ExchangeResult<()>>,
    orders: VecDeque<ExchangeResult<OrderRecord>>,
    open_orders: VecDeque<ExchangeResult<Vec<OrderRecord>>>,
    cancels: VecDeque<ExchangeResult<OrderRecord>>,
    balances: VecDeque<ExchangeResult<Vec<BalanceEntry>>>,
    positions: VecDeque<ExchangeResult<Vec<PositionRisk>>>,
}

/// Scriptable [`FuturesExchange`]. Clones share state.
#[derive(Clone, Default)]
pub struct MockExchange {
    state: Arc<Mutex<MockState>>,
}

impl MockExchange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    pub fn push_ping_response(&self, response: ExchangeResult<()>) {
        self.lock().ping.push_back(response);
    }

    pub fn push_order_response(&self, response: ExchangeResult<OrderRecord>) {
        self.lock().orders.push_back(response);
    }

    pub fn push_open_orders_response(&self, response: ExchangeResult<Vec<OrderRecord>>) {
        self.lock().open_orders.push_back(response);
    }

    pub fn push_cancel_response(&self, response: ExchangeResult<OrderRecord>) {
        self.lock().cancels.push_back(response);
    }

    pub fn push_balances_response(&self, response: ExchangeResult<Vec<BalanceEntry>>) {
        self.lock().balances.push_back(response);
    }

    pub fn push_positions_response(&self, response: ExchangeResult<Vec<PositionRisk>>) {
        self.lock().positions.push_back(response);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().expect("mock exchange state poisoned")
    }
}

#[async_trait]
impl FuturesExchange for MockExchange {
    async fn ping(&self) -> ExchangeResult<()> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::Ping);
        state.ping.pop_front().unwrap_or(Ok(()))
    }

    async fn create_order(&self, params: &OrderParams) -> ExchangeResult<OrderRecord> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::CreateOrder(params.clone()));
        let next_id = state.calls.len() as i64;
        state
            .orders
            .pop_front()
            .unwrap_or_else(|| Ok(echo_order(next_id, params)))
    }

    async fn open_orders(&self, symbol: Option<&str>) -> ExchangeResult<Vec<OrderRecord>> {
        let mut state = self.lock();
        state
            .calls
            .push(RecordedCall::OpenOrders(symbol.map(str::to_string)));
        state.open_orders.pop_front().unwrap_or(Ok(Vec::new()))
    }

    async fn cancel_order(&self, symbol: &str, order_id: i64) -> ExchangeResult<OrderRecord> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::CancelOrder {
            symbol: symbol.to_string(),
            order_id,
        });
        state
            .cancels
            .pop_front()
            .unwrap_or_else(|| Err(unknown_order()))
    }

    async fn balances(&self) -> ExchangeResult<Vec<BalanceEntry>> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::Balances);
        state.balances.pop_front().unwrap_or(Ok(Vec::new()))
    }

    async fn positions(&self) -> ExchangeResult<Vec<PositionRisk>> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::Positions);
        state.positions.pop_front().unwrap_or(Ok(Vec::new()))
    }
}

/// The exchange's answer to a cancel of an unknown order.
pub fn unknown_order() -> ExchangeError {
    ExchangeError::api(400, -2011, "Unknown order sent.")
}

/// A BUY LIMIT record for 1 unit at 100 with the given id, symbol and status.
pub fn sample_order(order_id: i64, symbol: &str, status: &str) -> OrderRecord {
    OrderRecord {
        order_id,
        symbol: symbol.to_string(),
        status: status.to_string(),
        client_order_id: None,
        side: OrderSide::Buy,
        order_type: "LIMIT".to_string(),
        orig_qty: Decimal::ONE,
        price: Some(Decimal::ONE_HUNDRED),
        stop_price: None,
        extra: serde_json::Map::new(),
    }
}

fn echo_order(order_id: i64, params: &OrderParams) -> OrderRecord {
    OrderRecord {
        order_id,
        symbol: params.symbol.clone(),
        status: "NEW".to_string(),
        client_order_id: None,
        side: params.side,
        order_type: params.order_type.as_str().to_string(),
        orig_qty: params.quantity,
        price: params.price,
        stop_price: params.stop_price,
        extra: serde_json::Map::new(),
    }
}
