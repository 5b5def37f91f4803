//! Request/response contract of the order gateway, exercised against the
//! in-memory exchange.

use futures_gateway::exchange::{BalanceEntry, ExchangeError, PositionRisk};
use futures_gateway::testing::{sample_order, unknown_order, MockExchange, RecordedCall};
use futures_gateway::{
    Credentials, ExchangeConfig, GatewayError, OrderGateway, OrderParams, OrderSide, OrderType,
    TimeInForce, TradingIntent,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn gateway_with(mock: &MockExchange) -> OrderGateway {
    OrderGateway::new(Box::new(mock.clone()))
}

fn submitted_params(mock: &MockExchange) -> Vec<OrderParams> {
    mock.calls()
        .into_iter()
        .filter_map(|call| match call {
            RecordedCall::CreateOrder(params) => Some(params),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn market_orders_carry_only_the_base_fields() {
    let mock = MockExchange::new();
    let gateway = gateway_with(&mock);

    for (side, qty) in [(OrderSide::Buy, dec!(0.001)), (OrderSide::Sell, dec!(12))] {
        let intent = TradingIntent::market("BTCUSDT", side, qty).unwrap();
        gateway.place_order(&intent).await.unwrap();
    }

    for params in submitted_params(&mock) {
        assert_eq!(params.order_type, OrderType::Market);
        assert_eq!(params.price, None);
        assert_eq!(params.stop_price, None);
        assert_eq!(params.time_in_force, None);
    }
}

#[tokio::test]
async fn limit_and_stop_orders_are_good_til_cancel() {
    let mock = MockExchange::new();
    let gateway = gateway_with(&mock);

    let limit = TradingIntent::limit("BNBUSDT", OrderSide::Sell, dec!(2), dec!(310.5)).unwrap();
    let stop =
        TradingIntent::stop("SOLUSDT", OrderSide::Buy, dec!(10), dec!(150), dec!(149)).unwrap();
    gateway.place_order(&limit).await.unwrap();
    gateway.place_order(&stop).await.unwrap();

    let params = submitted_params(&mock);
    assert_eq!(params[0].price, Some(dec!(310.5)));
    assert_eq!(params[0].stop_price, None);
    assert_eq!(params[0].time_in_force, Some(TimeInForce::GoodTilCancel));

    assert_eq!(params[1].price, Some(dec!(150)));
    assert_eq!(params[1].stop_price, Some(dec!(149)));
    assert_eq!(params[1].time_in_force, Some(TimeInForce::GoodTilCancel));
}

#[tokio::test]
async fn limit_intent_end_to_end() {
    let mock = MockExchange::new();
    let gateway = gateway_with(&mock);

    let intent = TradingIntent::parse("ETHUSDT", "BUY", "LIMIT", "0.5", Some("2500.00"), None)
        .unwrap();
    let record = gateway.place_order(&intent).await.unwrap();

    assert_eq!(record.symbol, "ETHUSDT");
    assert_eq!(record.status, "NEW");
    assert_eq!(record.orig_qty, dec!(0.5));
    assert_eq!(record.price, Some(dec!(2500.00)));

    let params = submitted_params(&mock);
    assert_eq!(params.len(), 1);
    assert_eq!(
        params[0].to_query_pairs(),
        vec![
            ("symbol", "ETHUSDT".to_string()),
            ("side", "BUY".to_string()),
            ("type", "LIMIT".to_string()),
            ("quantity", "0.5".to_string()),
            ("price", "2500".to_string()),
            ("timeInForce", "GTC".to_string()),
        ]
    );
}

#[tokio::test]
async fn exchange_rejection_surfaces_code_and_message() {
    let mock = MockExchange::new();
    mock.push_order_response(Err(ExchangeError::api(
        400,
        -1121,
        "Invalid symbol.",
    )));
    let gateway = gateway_with(&mock);

    let intent = TradingIntent::market("NOPEUSDT", OrderSide::Buy, dec!(1)).unwrap();
    let err = gateway.place_order(&intent).await.unwrap_err();

    assert_eq!(
        err,
        GatewayError::OrderRejected {
            status: 400,
            code: -1121,
            message: "Invalid symbol.".to_string(),
        }
    );
    // Exactly one attempt
    assert_eq!(submitted_params(&mock).len(), 1);
}

#[tokio::test]
async fn transport_failure_is_a_generic_gateway_error() {
    let mock = MockExchange::new();
    mock.push_order_response(Err(ExchangeError::Timeout("operation timed out".into())));
    let gateway = gateway_with(&mock);

    let intent = TradingIntent::market("BTCUSDT", OrderSide::Buy, dec!(1)).unwrap();
    let err = gateway.place_order(&intent).await.unwrap_err();

    assert!(matches!(err, GatewayError::Exchange(ExchangeError::Timeout(_))));
    assert_eq!(submitted_params(&mock).len(), 1);
}

#[tokio::test]
async fn missing_credentials_fail_before_any_network_call() {
    let config = ExchangeConfig::testnet();

    for creds in [
        Credentials::new("", ""),
        Credentials::new("key", ""),
        Credentials::new("", "secret"),
        Credentials::new("   ", "secret"),
    ] {
        let err = OrderGateway::initialize(&creds, &config)
            .await
            .err()
            .expect("initialize must fail");

        match err {
            GatewayError::Configuration(message) => assert!(message.contains("must be provided")),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn connect_pings_once_and_returns_a_working_gateway() {
    let mock = MockExchange::new();
    mock.push_ping_response(Ok(()));
    mock.push_open_orders_response(Ok(vec![sample_order(5, "BTCUSDT", "NEW")]));

    let gateway = OrderGateway::connect(Box::new(mock.clone()))
        .await
        .expect("connect must succeed when ping answers");
    let orders = gateway.open_orders(None).await.unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(
        mock.calls(),
        vec![RecordedCall::Ping, RecordedCall::OpenOrders(None)]
    );
}

#[tokio::test]
async fn connect_surfaces_ping_failure_as_gateway_error() {
    let mock = MockExchange::new();
    mock.push_ping_response(Err(ExchangeError::Timeout("operation timed out".into())));

    let err = OrderGateway::connect(Box::new(mock.clone()))
        .await
        .err()
        .expect("connect must fail when ping fails");

    assert!(matches!(err, GatewayError::Exchange(ExchangeError::Timeout(_))));
    assert_eq!(err.kind(), "gateway_error");
    assert_eq!(mock.calls(), vec![RecordedCall::Ping]);
}

#[tokio::test]
async fn injected_symbols_are_rejected_before_any_call() {
    let mock = MockExchange::new();
    let gateway = gateway_with(&mock);

    let intent = TradingIntent::market("btcusdt&side=sell&quantity=100", OrderSide::Buy, dec!(1));
    assert!(intent.is_err());

    assert!(gateway.list_open_orders(Some("ETHUSDT&x=1")).await.is_empty());
    assert!(matches!(
        gateway.cancel_order("BTCUSDT&orderId=1", 2).await,
        Err(GatewayError::InvalidInput(_))
    ));
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn account_balance_is_zero_without_usdt() {
    let mock = MockExchange::new();
    mock.push_balances_response(Ok(vec![BalanceEntry::new("BNB", dec!(3))]));
    let gateway = gateway_with(&mock);

    assert_eq!(gateway.account_balance().await, Decimal::ZERO);
}

#[tokio::test]
async fn account_balance_is_zero_on_error() {
    let mock = MockExchange::new();
    mock.push_balances_response(Err(ExchangeError::api(401, -2015, "Invalid API-key.")));
    mock.push_balances_response(Err(ExchangeError::api(401, -2015, "Invalid API-key.")));
    let gateway = gateway_with(&mock);

    assert_eq!(gateway.account_balance().await, Decimal::ZERO);
    assert!(gateway.usdt_balance().await.is_err());
}

#[tokio::test]
async fn account_balance_reads_the_exact_decimal() {
    let mock = MockExchange::new();
    let listing: Vec<BalanceEntry> =
        serde_json::from_str(r#"[{"asset":"USDT","balance":"1234.56"}]"#).unwrap();
    mock.push_balances_response(Ok(listing.clone()));
    mock.push_balances_response(Ok(listing));
    let gateway = gateway_with(&mock);

    assert_eq!(gateway.account_balance().await, dec!(1234.56));
    assert_eq!(gateway.usdt_balance().await, Ok(Some(dec!(1234.56))));
}

#[tokio::test]
async fn empty_and_failed_open_order_fetches_look_the_same() {
    let mock = MockExchange::new();
    mock.push_open_orders_response(Ok(Vec::new()));
    mock.push_open_orders_response(Err(ExchangeError::Request("connection refused".into())));
    let gateway = gateway_with(&mock);

    let no_orders = gateway.list_open_orders(None).await;
    let failed = gateway.list_open_orders(None).await;

    assert!(no_orders.is_empty());
    assert_eq!(no_orders, failed);
}

#[tokio::test]
async fn explicit_open_orders_distinguishes_failure() {
    let mock = MockExchange::new();
    mock.push_open_orders_response(Ok(Vec::new()));
    mock.push_open_orders_response(Err(ExchangeError::Request("connection refused".into())));
    let gateway = gateway_with(&mock);

    assert_eq!(gateway.open_orders(None).await, Ok(Vec::new()));
    assert!(matches!(
        gateway.open_orders(None).await,
        Err(GatewayError::Exchange(ExchangeError::Request(_)))
    ));
}

#[tokio::test]
async fn open_orders_scope_by_normalized_symbol() {
    let mock = MockExchange::new();
    mock.push_open_orders_response(Ok(vec![sample_order(5, "ETHUSDT", "NEW")]));
    let gateway = gateway_with(&mock);

    let orders = gateway.list_open_orders(Some(" ethusdt")).await;
    assert_eq!(orders.len(), 1);
    gateway.list_open_orders(Some("")).await;

    assert_eq!(
        mock.calls(),
        vec![
            RecordedCall::OpenOrders(Some("ETHUSDT".to_string())),
            RecordedCall::OpenOrders(None),
        ]
    );
}

#[tokio::test]
async fn cancel_unknown_order_is_a_cancel_error() {
    let mock = MockExchange::new();
    let gateway = gateway_with(&mock);

    let err = gateway.cancel_order("BTCUSDT", 999).await.unwrap_err();

    assert_eq!(
        err,
        GatewayError::Cancel {
            symbol: "BTCUSDT".to_string(),
            order_id: 999,
            source: unknown_order(),
        }
    );
    // One cancel call and nothing else
    assert_eq!(
        mock.calls(),
        vec![RecordedCall::CancelOrder {
            symbol: "BTCUSDT".to_string(),
            order_id: 999,
        }]
    );
}

#[tokio::test]
async fn cancel_transport_failure_is_also_a_cancel_error() {
    let mock = MockExchange::new();
    mock.push_cancel_response(Err(ExchangeError::Timeout("operation timed out".into())));
    let gateway = gateway_with(&mock);

    let err = gateway.cancel_order("ETHUSDT", 1).await.unwrap_err();
    assert!(matches!(
        err,
        GatewayError::Cancel {
            source: ExchangeError::Timeout(_),
            ..
        }
    ));
}

#[tokio::test]
async fn cancel_returns_the_canceled_record() {
    let mock = MockExchange::new();
    mock.push_cancel_response(Ok(sample_order(77, "XRPUSDT", "CANCELED")));
    let gateway = gateway_with(&mock);

    let record = gateway.cancel_order("xrpusdt", 77).await.unwrap();
    assert_eq!(record.status, "CANCELED");
    assert_eq!(
        mock.calls(),
        vec![RecordedCall::CancelOrder {
            symbol: "XRPUSDT".to_string(),
            order_id: 77,
        }]
    );
}

#[tokio::test]
async fn account_snapshot_lists_open_positions_only() {
    let mock = MockExchange::new();
    mock.push_balances_response(Ok(vec![BalanceEntry::new("USDT", dec!(10000))]));
    mock.push_positions_response(Ok(vec![
        PositionRisk {
            symbol: "BTCUSDT".to_string(),
            position_amt: dec!(0.01),
            entry_price: dec!(60000),
            mark_price: dec!(61000),
            unrealized_profit: dec!(10),
            leverage: dec!(10),
            position_side: None,
        },
        PositionRisk {
            symbol: "ETHUSDT".to_string(),
            position_amt: Decimal::ZERO,
            entry_price: Decimal::ZERO,
            mark_price: dec!(3000),
            unrealized_profit: Decimal::ZERO,
            leverage: dec!(20),
            position_side: None,
        },
    ]));
    let gateway = gateway_with(&mock);

    let snapshot = gateway.account_snapshot().await.unwrap();
    assert_eq!(snapshot.usdt_balance, dec!(10000));
    assert_eq!(snapshot.positions.len(), 1);
    assert_eq!(snapshot.positions[0].symbol, "BTCUSDT");
    assert_eq!(snapshot.positions[0].unrealized_pnl, dec!(10));
}
