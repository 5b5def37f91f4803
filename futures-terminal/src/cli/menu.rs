//! Menu command - interactive text front end

use std::io::{self, BufRead, Write};

use anyhow::Result;
use futures_gateway::{OrderGateway, OrderType, TradingIntent};
use rust_decimal::Decimal;
use tracing::info;

use crate::render::{format_amount, order_lines};

/// Execute the menu command on stdin / stdout
pub async fn execute(gateway: &OrderGateway, environment: &str) -> Result<()> {
    info!("Starting text menu ({})", environment);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_menu(gateway, environment, stdin.lock(), stdout.lock()).await?;
    Ok(())
}

/// Menu loop. Returns on option 5 or end of input.
pub async fn run_menu<R: BufRead, W: Write>(
    gateway: &OrderGateway,
    environment: &str,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "Connected to Binance Futures {}", environment)?;

    loop {
        writeln!(out)?;
        writeln!(out, "=== Binance Futures Trading Bot ===")?;
        writeln!(out, "1. Place Order")?;
        writeln!(out, "2. View Open Orders")?;
        writeln!(out, "3. Check Balance")?;
        writeln!(out, "4. Cancel Order")?;
        writeln!(out, "5. Exit")?;

        let Some(choice) = prompt(&mut input, &mut out, "Select an option (1-5)")? else {
            writeln!(out, "Exiting...")?;
            return Ok(());
        };

        match choice.as_str() {
            "1" => place_order(gateway, &mut input, &mut out).await?,
            "2" => view_open_orders(gateway, &mut input, &mut out).await?,
            "3" => check_balance(gateway, &mut out).await?,
            "4" => cancel_order(gateway, &mut input, &mut out).await?,
            "5" => {
                writeln!(out, "Exiting...")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
}

/// Print `label: ` and read one trimmed line; `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}: ", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

async fn place_order<R: BufRead, W: Write>(
    gateway: &OrderGateway,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(symbol) = prompt(input, out, "Trading pair (e.g. BTCUSDT)")? else {
        return Ok(());
    };
    let Some(side) = prompt(input, out, "Side (BUY/SELL)")? else {
        return Ok(());
    };
    let Some(order_type) = prompt(input, out, "Order type (MARKET/LIMIT/STOP)")? else {
        return Ok(());
    };
    let order_type: OrderType = match order_type.parse() {
        Ok(order_type) => order_type,
        Err(e) => {
            writeln!(out, "Invalid order: {}", e)?;
            return Ok(());
        }
    };
    let Some(quantity) = prompt(input, out, "Quantity")? else {
        return Ok(());
    };

    let mut price = None;
    if order_type.requires_price() {
        let Some(value) = prompt(input, out, "Price")? else {
            return Ok(());
        };
        price = Some(value);
    }
    let mut stop_price = None;
    if order_type.requires_stop_price() {
        let Some(value) = prompt(input, out, "Stop Price")? else {
            return Ok(());
        };
        stop_price = Some(value);
    }

    let intent = match TradingIntent::parse(
        &symbol,
        &side,
        order_type.as_str(),
        &quantity,
        price.as_deref(),
        stop_price.as_deref(),
    ) {
        Ok(intent) => intent,
        Err(e) => {
            writeln!(out, "Invalid order: {}", e)?;
            return Ok(());
        }
    };

    match gateway.place_order(&intent).await {
        Ok(record) => {
            writeln!(out, "Order placed successfully!")?;
            writeln!(out, "Order ID: {}", record.order_id)?;
            writeln!(out, "Status: {}", record.status)?;
        }
        Err(e) => writeln!(out, "Failed to place order: {}", e)?,
    }
    Ok(())
}

async fn view_open_orders<R: BufRead, W: Write>(
    gateway: &OrderGateway,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(symbol) = prompt(input, out, "Enter trading pair (leave empty for all)")? else {
        return Ok(());
    };
    let symbol = Some(symbol).filter(|s| !s.is_empty());

    match gateway.open_orders(symbol.as_deref()).await {
        Ok(orders) if orders.is_empty() => writeln!(out, "No open orders found")?,
        Ok(orders) => {
            writeln!(out, "Open Orders:")?;
            for record in &orders {
                for line in order_lines(record) {
                    writeln!(out, "{}", line)?;
                }
            }
        }
        Err(e) => writeln!(out, "Failed to fetch open orders: {}", e)?,
    }
    Ok(())
}

async fn check_balance<W: Write>(gateway: &OrderGateway, out: &mut W) -> io::Result<()> {
    match gateway.usdt_balance().await {
        Ok(balance) => writeln!(
            out,
            "USDT Balance: {}",
            format_amount(balance.unwrap_or(Decimal::ZERO))
        )?,
        Err(e) => writeln!(out, "Failed to fetch balance: {}", e)?,
    }
    Ok(())
}

async fn cancel_order<R: BufRead, W: Write>(
    gateway: &OrderGateway,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(symbol) = prompt(input, out, "Trading pair")? else {
        return Ok(());
    };
    let Some(order_id) = prompt(input, out, "Order ID to cancel")? else {
        return Ok(());
    };
    let order_id: i64 = match order_id.parse() {
        Ok(id) => id,
        Err(_) => {
            writeln!(out, "Invalid order ID: {}", order_id)?;
            return Ok(());
        }
    };

    match gateway.cancel_order(&symbol, order_id).await {
        Ok(_) => writeln!(out, "Order {} cancelled successfully!", order_id)?,
        Err(e) => writeln!(out, "Failed to cancel order: {}", e)?,
    }
    Ok(())
}
