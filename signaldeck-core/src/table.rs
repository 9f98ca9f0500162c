//! Signal table rows — display projection with selection flag and column sort.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::domain::{Direction, SignalId, SignalStatus, TradeSignal};
use crate::selection::Selection;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalRow {
    pub id: SignalId,
    pub symbol: String,
    pub direction: Direction,
    pub entry_price: f64,
    pub current_price: f64,
    pub stop_loss_price: f64,
    pub take_profit_price: f64,
    pub profit_and_loss: f64,
    pub profit_and_loss_percentage: f64,
    pub status: SignalStatus,
    pub timestamp: DateTime<Utc>,
    pub selected: bool,
}

impl SignalRow {
    pub fn from_signal(signal: &TradeSignal, selection: &Selection) -> Self {
        Self {
            id: signal.id.clone(),
            symbol: signal.symbol.clone(),
            direction: signal.direction,
            entry_price: signal.entry_price,
            current_price: signal.current_price,
            stop_loss_price: signal.stop_loss_price,
            take_profit_price: signal.take_profit_price,
            profit_and_loss: signal.profit_and_loss,
            profit_and_loss_percentage: signal.profit_and_loss_percentage,
            status: signal.status,
            timestamp: signal.timestamp,
            selected: selection.is_focused(&signal.symbol),
        }
    }
}

/// Rows in input order.
pub fn project_rows(signals: &[TradeSignal], selection: &Selection) -> Vec<SignalRow> {
    signals
        .iter()
        .map(|s| SignalRow::from_signal(s, selection))
        .collect()
}

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Symbol,
    Direction,
    Entry,
    Current,
    StopLoss,
    TakeProfit,
    Pnl,
    PnlPercentage,
    Status,
    Timestamp,
}

impl SortKey {
    fn compare(self, a: &SignalRow, b: &SignalRow) -> Ordering {
        match self {
            SortKey::Symbol => a.symbol.cmp(&b.symbol),
            SortKey::Direction => a.direction.cmp(&b.direction),
            SortKey::Entry => a.entry_price.total_cmp(&b.entry_price),
            SortKey::Current => a.current_price.total_cmp(&b.current_price),
            SortKey::StopLoss => a.stop_loss_price.total_cmp(&b.stop_loss_price),
            SortKey::TakeProfit => a.take_profit_price.total_cmp(&b.take_profit_price),
            SortKey::Pnl => a.profit_and_loss.total_cmp(&b.profit_and_loss),
            SortKey::PnlPercentage => a
                .profit_and_loss_percentage
                .total_cmp(&b.profit_and_loss_percentage),
            SortKey::Status => a.status.cmp(&b.status),
            SortKey::Timestamp => a.timestamp.cmp(&b.timestamp),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key '{0}'. Valid: symbol, direction, entry, current, sl, tp, pnl, pnl_pct, status, time")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "symbol" => Ok(SortKey::Symbol),
            "direction" | "type" => Ok(SortKey::Direction),
            "entry" => Ok(SortKey::Entry),
            "current" => Ok(SortKey::Current),
            "sl" | "stop_loss" => Ok(SortKey::StopLoss),
            "tp" | "take_profit" => Ok(SortKey::TakeProfit),
            "pnl" => Ok(SortKey::Pnl),
            "pnl_pct" | "pnl_percentage" => Ok(SortKey::PnlPercentage),
            "status" => Ok(SortKey::Status),
            "time" | "timestamp" => Ok(SortKey::Timestamp),
            _ => Err(ParseSortKeyError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Stable: rows that compare equal keep their display order in both directions.
pub fn sort_rows(rows: &mut [SignalRow], key: SortKey, order: SortOrder) {
    rows.sort_by(|a, b| {
        let ord = key.compare(a, b);
        match order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
}
