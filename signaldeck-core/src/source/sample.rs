//! Compiled-in sample signals for both market categories.
//!
//! All signals sit on the 2025-01-27 session; timestamps are UTC.

use chrono::{DateTime, Duration, Utc};

use super::{SignalError, SignalSource};
use crate::domain::{Direction, MarketCategory, SignalId, SignalStatus, TradeSignal};

/// 2025-01-27T00:00:00Z as seconds since the Unix epoch.
const SESSION_EPOCH_SECS: i64 = 1_737_936_000;

const EQUITY_LOT: f64 = 100.0;
const FOREX_LOT: f64 = 100_000.0;

/// The built-in dataset. Always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSignals;

impl SignalSource for SampleSignals {
    fn name(&self) -> &str {
        "sample"
    }

    fn signals(&self, category: MarketCategory) -> Result<Vec<TradeSignal>, SignalError> {
        Ok(for_category(category))
    }
}

pub fn for_category(category: MarketCategory) -> Vec<TradeSignal> {
    match category {
        MarketCategory::DomesticEquity => domestic_equity(),
        MarketCategory::Forex => forex(),
    }
}

fn session_time(hour: i64, minute: i64) -> DateTime<Utc> {
    DateTime::<Utc>::default()
        + Duration::seconds(SESSION_EPOCH_SECS)
        + Duration::minutes(hour * 60 + minute)
}

/// Price levels in table order: entry, stop loss, take profit, current.
struct Levels(f64, f64, f64, f64);

#[allow(clippy::too_many_arguments)]
fn signal(
    id: &str,
    symbol: &str,
    direction: Direction,
    levels: Levels,
    pnl: f64,
    pnl_pct: f64,
    (hour, minute): (i64, i64),
    volume: f64,
) -> TradeSignal {
    let Levels(entry, stop_loss, take_profit, current) = levels;
    TradeSignal {
        id: SignalId::new(id),
        symbol: symbol.into(),
        direction,
        entry_price: entry,
        stop_loss_price: stop_loss,
        take_profit_price: take_profit,
        current_price: current,
        profit_and_loss: pnl,
        profit_and_loss_percentage: pnl_pct,
        timestamp: session_time(hour, minute),
        status: SignalStatus::Active,
        volume,
    }
}

#[rustfmt::skip]
pub fn domestic_equity() -> Vec<TradeSignal> {
    use Direction::{Buy, Sell};
    vec![
        signal("1", "RELIANCE", Buy, Levels(2850.00, 2780.00, 2950.00, 2895.50), 4550.00, 1.60, (9, 15), EQUITY_LOT),
        signal("2", "TATAMOTORS", Sell, Levels(485.20, 495.00, 465.00, 478.30), 690.00, 1.42, (10, 30), EQUITY_LOT),
        signal("3", "INFY", Buy, Levels(1845.00, 1800.00, 1920.00, 1832.50), -1250.00, -0.68, (11, 45), EQUITY_LOT),
        signal("4", "HDFCBANK", Buy, Levels(1620.00, 1580.00, 1680.00, 1655.80), 3580.00, 2.21, (12, 0), EQUITY_LOT),
        signal("5", "ICICIBANK", Sell, Levels(1285.50, 1310.00, 1240.00, 1255.20), 3030.00, 2.36, (13, 15), EQUITY_LOT),
    ]
}

#[rustfmt::skip]
pub fn forex() -> Vec<TradeSignal> {
    use Direction::{Buy, Sell};
    vec![
        signal("6", "EUR/USD", Buy, Levels(1.0825, 1.0780, 1.0890, 1.0845), 200.00, 0.18, (14, 0), FOREX_LOT),
        signal("7", "GBP/USD", Sell, Levels(1.2445, 1.2485, 1.2380, 1.2420), 250.00, 0.20, (15, 30), FOREX_LOT),
        signal("8", "USD/JPY", Buy, Levels(153.25, 152.50, 154.80, 152.95), -300.00, -0.20, (16, 15), FOREX_LOT),
        signal("9", "AUD/USD", Buy, Levels(0.6285, 0.6245, 0.6350, 0.6315), 300.00, 0.48, (17, 0), FOREX_LOT),
        signal("10", "USD/CAD", Sell, Levels(1.4125, 1.4165, 1.4065, 1.4095), 300.00, 0.21, (18, 30), FOREX_LOT),
    ]
}
