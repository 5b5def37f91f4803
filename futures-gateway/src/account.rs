//! Account view: USDT balance plus open positions.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::exchange::{BalanceEntry, PositionRisk};

/// Quote asset every balance figure is reported in.
pub const QUOTE_ASSET: &str = "USDT";

/// Point-in-time account view. Rebuilt on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSnapshot {
    /// USDT wallet balance (zero when the asset is not listed)
    pub usdt_balance: Decimal,
    /// Positions with non-zero size
    pub positions: Vec<PositionSnapshot>,
}

/// One open position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionSnapshot {
    pub symbol: String,
    /// Signed size (negative = short)
    pub size: Decimal,
    pub entry_price: Decimal,
    pub mark_price: Decimal,
    pub unrealized_pnl: Decimal,
    pub leverage: Decimal,
}

impl From<&PositionRisk> for PositionSnapshot {
    fn from(risk: &PositionRisk) -> Self {
        Self {
            symbol: risk.symbol.clone(),
            size: risk.position_amt,
            entry_price: risk.entry_price,
            mark_price: risk.mark_price,
            unrealized_pnl: risk.unrealized_profit,
            leverage: risk.leverage,
        }
    }
}

impl AccountSnapshot {
    /// Combine a balance listing and position risk rows, dropping flat positions.
    pub fn from_parts(balances: &[BalanceEntry], positions: &[PositionRisk]) -> Self {
        Self {
            usdt_balance: find_usdt_balance(balances).unwrap_or(Decimal::ZERO),
            positions: positions
                .iter()
                .filter(|p| !p.position_amt.is_zero())
                .map(PositionSnapshot::from)
                .collect(),
        }
    }

    /// Sum of unrealized P&L over open positions.
    pub fn total_unrealized_pnl(&self) -> Decimal {
        self.positions.iter().map(|p| p.unrealized_pnl).sum()
    }
}

/// Balance of the USDT entry, if the listing has one.
pub fn find_usdt_balance(balances: &[BalanceEntry]) -> Option<Decimal> {
    balances
        .iter()
        .find(|entry| entry.asset == QUOTE_ASSET)
        .map(|entry| entry.balance)
}
