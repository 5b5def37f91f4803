//! Text rendering for the menu front end.

use futures_gateway::OrderRecord;
use rust_decimal::Decimal;

/// Two decimals with thousands separators: `1234.5` becomes `1,234.50`.
pub fn format_amount(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.round_dp(2));
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Lines describing one order, header first.
pub fn order_lines(record: &OrderRecord) -> Vec<String> {
    let mut lines = vec![
        format!("{} {} {}", record.symbol, record.side, record.order_type),
        format!("  Order ID: {}", record.order_id),
        format!("  Quantity: {}", record.orig_qty.normalize()),
    ];
    if let Some(price) = record.price {
        lines.push(format!("  Price: {}", price.normalize()));
    }
    if let Some(stop_price) = record.stop_price {
        lines.push(format!("  Stop Price: {}", stop_price.normalize()));
    }
    lines.push(format!("  Status: {}", record.status));
    lines
}
