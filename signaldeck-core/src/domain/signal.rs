//! TradeSignal — a single trade recommendation with entry, risk and target levels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Signal identifier, unique across all categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalId(pub String);

impl SignalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Buy => "BUY",
            Direction::Sell => "SELL",
        }
    }
}

/// Lifecycle status of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalStatus {
    Active,
    Closed,
    Pending,
}

impl SignalStatus {
    pub fn label(self) -> &'static str {
        match self {
            SignalStatus::Active => "ACTIVE",
            SignalStatus::Closed => "CLOSED",
            SignalStatus::Pending => "PENDING",
        }
    }
}

/// An immutable trade signal record.
///
/// Prices carry no ordering invariant: a BUY may have its stop above entry
/// and nothing here will complain. P&L fields are supplied as-is and are
/// never recomputed from the prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSignal {
    // ── Identification ──
    pub id: SignalId,
    pub symbol: String,
    pub direction: Direction,

    // ── Price levels ──
    pub entry_price: f64,
    pub stop_loss_price: f64,
    pub take_profit_price: f64,
    pub current_price: f64,

    // ── PnL ──
    pub profit_and_loss: f64,
    pub profit_and_loss_percentage: f64,

    // ── Bookkeeping ──
    pub timestamp: DateTime<Utc>,
    pub status: SignalStatus,
    /// Shares for equities, base currency units for forex.
    pub volume: f64,
}

impl TradeSignal {
    /// Strictly positive P&L. Break-even is not a win.
    pub fn is_profitable(&self) -> bool {
        self.profit_and_loss > 0.0
    }

    /// The four charted price levels, in series order.
    pub fn price_levels(&self) -> [f64; 4] {
        [
            self.entry_price,
            self.current_price,
            self.stop_loss_price,
            self.take_profit_price,
        ]
    }
}
