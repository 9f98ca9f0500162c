//! Summary statistics — pure functions over a signal slice.
//!
//! Every function here is total: empty input is a valid case with a defined
//! result, and no input produces NaN from a division.

use serde::{Deserialize, Serialize};

use crate::domain::TradeSignal;

/// Aggregate figures for the stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_pnl: f64,
    pub profitable_count: usize,
    pub total_count: usize,
    /// Percentage in `[0, 100]`.
    pub win_rate: f64,
}

impl Stats {
    pub fn compute(signals: &[TradeSignal]) -> Self {
        let profitable = profitable_count(signals);
        Self {
            total_pnl: total_pnl(signals),
            profitable_count: profitable,
            total_count: signals.len(),
            win_rate: win_rate(profitable, signals.len()),
        }
    }

    /// Break-even counts as positive for display tone.
    pub fn is_net_positive(&self) -> bool {
        self.total_pnl >= 0.0
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::compute(&[])
    }
}

pub fn compute_stats(signals: &[TradeSignal]) -> Stats {
    Stats::compute(signals)
}

// ─── Individual functions ───────────────────────────────────────────

/// Sum of supplied P&L. Starts from +0.0 so an empty slice never yields -0.0.
pub fn total_pnl(signals: &[TradeSignal]) -> f64 {
    signals
        .iter()
        .fold(0.0, |acc, signal| acc + signal.profit_and_loss)
}

/// Signals with strictly positive P&L.
pub fn profitable_count(signals: &[TradeSignal]) -> usize {
    signals.iter().filter(|s| s.is_profitable()).count()
}

/// Win rate as a percentage. Returns 0.0 when there are no signals.
pub fn win_rate(profitable: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    profitable as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::sample;

    #[test]
    fn empty_input() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_count, 0);
        assert_eq!(stats.profitable_count, 0);
        assert_eq!(stats.win_rate, 0.0);
        assert_eq!(stats.total_pnl, 0.0);
        assert!(stats.total_pnl.is_sign_positive());
        assert!(stats.is_net_positive());
    }

    #[test]
    fn domestic_sample() {
        let stats = compute_stats(&sample::domestic_equity());
        assert_eq!(stats.total_count, 5);
        assert_eq!(stats.profitable_count, 4);
        assert!((stats.total_pnl - 10_600.0).abs() < 1e-9);
        assert!((stats.win_rate - 80.0).abs() < 1e-9);
    }

    #[test]
    fn forex_sample() {
        let stats = compute_stats(&sample::forex());
        assert_eq!(stats.profitable_count, 4);
        assert!((stats.total_pnl - 750.0).abs() < 1e-9);
    }

    #[test]
    fn break_even_is_not_a_win() {
        let mut signals = sample::domestic_equity();
        for s in &mut signals {
            s.profit_and_loss = 0.0;
        }
        let stats = compute_stats(&signals);
        assert_eq!(stats.profitable_count, 0);
        assert_eq!(stats.win_rate, 0.0);
        assert!(stats.is_net_positive());
    }

    #[test]
    fn net_negative() {
        let mut signals = sample::forex();
        signals.retain(|s| s.profit_and_loss < 0.0);
        let stats = compute_stats(&signals);
        assert_eq!(stats.total_count, 1);
        assert!(!stats.is_net_positive());
        assert_eq!(stats.win_rate, 0.0);
    }

    #[test]
    fn win_rate_zero_total() {
        assert_eq!(win_rate(0, 0), 0.0);
        assert_eq!(win_rate(1, 4), 25.0);
    }
}
