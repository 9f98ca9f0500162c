//! Criterion benchmarks for SignalDeck recompute paths.
//!
//! Every event recomputes stats, series and rows from scratch, so these
//! measure what one redraw costs as the signal list grows.
//!
//! Benchmarks:
//! 1. Stats aggregation
//! 2. Series build (unfocused and focused)
//! 3. Table projection and sort
//! 4. Full dashboard view snapshot

use chrono::{DateTime, Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use signaldeck_core::table::{project_rows, sort_rows, SortKey, SortOrder};
use signaldeck_core::{
    build_series, compute_stats, Dashboard, Direction, MarketCategory, Selection, SignalError,
    SignalId, SignalSource, SignalStatus, TradeSignal,
};

// ── Helpers ──────────────────────────────────────────────────────────

const SIZES: [usize; 3] = [10, 1_000, 10_000];

fn make_signals(n: usize) -> Vec<TradeSignal> {
    let start = DateTime::<Utc>::default();
    (0..n)
        .map(|i| {
            let entry = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            let current = entry + (i as f64 * 0.37).cos() * 2.0;
            TradeSignal {
                id: SignalId::new(i.to_string()),
                symbol: format!("SYM{}", i % 50),
                direction: if i % 3 == 0 { Direction::Sell } else { Direction::Buy },
                entry_price: entry,
                stop_loss_price: entry * 0.97,
                take_profit_price: entry * 1.05,
                current_price: current,
                profit_and_loss: (current - entry) * 100.0,
                profit_and_loss_percentage: (current - entry) / entry * 100.0,
                timestamp: start + Duration::minutes(i as i64),
                status: SignalStatus::Active,
                volume: 100.0,
            }
        })
        .collect()
}

struct Generated(Vec<TradeSignal>);

impl SignalSource for Generated {
    fn name(&self) -> &str {
        "generated"
    }

    fn signals(&self, _category: MarketCategory) -> Result<Vec<TradeSignal>, SignalError> {
        Ok(self.0.clone())
    }
}

// ── 1. Stats ─────────────────────────────────────────────────────────

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_stats");
    for &n in &SIZES {
        let signals = make_signals(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &signals, |b, signals| {
            b.iter(|| compute_stats(black_box(signals)));
        });
    }
    group.finish();
}

// ── 2. Series Build ──────────────────────────────────────────────────

fn bench_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_series");
    for &n in &SIZES {
        let signals = make_signals(n);
        group.bench_with_input(BenchmarkId::new("unfocused", n), &signals, |b, signals| {
            b.iter(|| build_series(black_box(signals), None));
        });
        group.bench_with_input(BenchmarkId::new("focused", n), &signals, |b, signals| {
            b.iter(|| build_series(black_box(signals), Some("SYM7")));
        });
    }
    group.finish();
}

// ── 3. Table ─────────────────────────────────────────────────────────

fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("table");
    let signals = make_signals(10_000);
    let mut selection = Selection::new();
    selection.on_symbol_clicked("SYM3");

    group.bench_function("project_10000", |b| {
        b.iter(|| project_rows(black_box(&signals), &selection));
    });
    group.bench_function("project_sort_pnl_desc_10000", |b| {
        b.iter(|| {
            let mut rows = project_rows(black_box(&signals), &selection);
            sort_rows(&mut rows, SortKey::Pnl, SortOrder::Descending);
            rows
        });
    });
    group.finish();
}

// ── 4. Dashboard View ────────────────────────────────────────────────

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard_view");
    for &n in &SIZES {
        let dash = match Dashboard::new(Generated(make_signals(n)), MarketCategory::Forex) {
            Ok(dash) => dash,
            Err(e) => panic!("generated source failed: {e}"),
        };
        group.bench_with_input(BenchmarkId::from_parameter(n), &dash, |b, dash| {
            b.iter(|| black_box(dash).view());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_stats, bench_series, bench_table, bench_view);
criterion_main!(benches);
