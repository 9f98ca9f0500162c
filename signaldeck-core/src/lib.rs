//! SignalDeck Core — signal aggregation and selection engine.
//!
//! This crate contains the data side of a trading-signal dashboard:
//! - Domain types (signals, directions, statuses, market categories)
//! - Summary statistics over a signal list
//! - Selection state machine (optional focused symbol)
//! - Chart series builder, chart title and annotations
//! - Table row projection with stable column sort
//! - Dashboard session tying category, signals and selection together
//! - Signal sources (compiled-in sample data, JSON/TOML/CSV files)
//! - TOML configuration
//!
//! Everything except the sources and config loading is pure and infallible.

pub mod config;
pub mod dashboard;
pub mod domain;
pub mod selection;
pub mod series;
pub mod source;
pub mod stats;
pub mod table;

pub use config::{ConfigError, DashboardConfig};
pub use dashboard::{Dashboard, DashboardView};
pub use domain::{Direction, MarketCategory, SignalId, SignalStatus, TradeSignal};
pub use selection::Selection;
pub use series::{build_series, build_title, SeriesBuilder, SeriesBundle};
pub use source::{FileSignals, SampleSignals, SignalError, SignalSource};
pub use stats::{compute_stats, Stats};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: all core output types are Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        // Domain types
        require_send::<TradeSignal>();
        require_sync::<TradeSignal>();
        require_send::<MarketCategory>();
        require_sync::<MarketCategory>();

        // Engine outputs
        require_send::<Stats>();
        require_sync::<Stats>();
        require_send::<Selection>();
        require_sync::<Selection>();
        require_send::<SeriesBundle>();
        require_sync::<SeriesBundle>();
        require_send::<DashboardView>();
        require_sync::<DashboardView>();
        require_send::<table::SignalRow>();
        require_sync::<table::SignalRow>();

        // Sources and errors
        require_send::<SampleSignals>();
        require_sync::<SampleSignals>();
        require_send::<FileSignals>();
        require_sync::<FileSignals>();
        require_send::<SignalError>();
        require_sync::<SignalError>();
        require_send::<Dashboard<SampleSignals>>();
        require_sync::<Dashboard<SampleSignals>>();
    }

    /// Architecture contract: the aggregation and series functions take plain
    /// slices and return owned values. No source, selection or dashboard
    /// handle is needed to compute them.
    #[test]
    fn pure_functions_need_only_slices() {
        fn _check(signals: &[TradeSignal]) -> (Stats, SeriesBundle, String) {
            (
                compute_stats(signals),
                build_series(signals, None),
                build_title(MarketCategory::Forex, None),
            )
        }
        let (stats, bundle, title) = _check(&[]);
        assert_eq!(stats.total_count, 0);
        assert!(bundle.is_empty());
        assert_eq!(title, "Forex Market");
    }
}
