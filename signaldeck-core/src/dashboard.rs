//! Dashboard session — the active category, its signals and the selection.
//!
//! Holds no derived state. Stats, series, rows and titles are recomputed from
//! the current signal list and selection on every query, so nothing can go
//! stale between events.

use serde::Serialize;
use tracing::debug;

use crate::domain::{MarketCategory, TradeSignal};
use crate::selection::Selection;
use crate::series::{build_title, filter_by_focus, ChartAnnotations, SeriesBuilder, SeriesBundle};
use crate::source::{SignalError, SignalSource};
use crate::stats::Stats;
use crate::table::{project_rows, SignalRow};

/// Chart half of a view snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub annotations: ChartAnnotations,
    #[serde(flatten)]
    pub bundle: SeriesBundle,
}

/// Everything a presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub category: MarketCategory,
    pub title: String,
    pub focus: Option<String>,
    /// "Showing chart for: X" while a symbol is focused.
    pub focus_banner: Option<String>,
    pub stats: Stats,
    pub chart: ChartView,
    pub rows: Vec<SignalRow>,
}

pub struct Dashboard<S: SignalSource> {
    source: S,
    category: MarketCategory,
    signals: Vec<TradeSignal>,
    selection: Selection,
    builder: SeriesBuilder,
}

impl<S: SignalSource> Dashboard<S> {
    pub fn new(source: S, category: MarketCategory) -> Result<Self, SignalError> {
        let signals = source.signals(category)?;
        debug!(source = source.name(), %category, count = signals.len(), "dashboard opened");
        Ok(Self {
            source,
            category,
            signals,
            selection: Selection::new(),
            builder: SeriesBuilder::default(),
        })
    }

    pub fn with_series_builder(mut self, builder: SeriesBuilder) -> Self {
        self.builder = builder;
        self
    }

    // ── Events ──

    /// Switch tabs. Re-selecting the active category changes nothing.
    ///
    /// On a load failure the dashboard stays on the previous category with
    /// its selection intact.
    pub fn switch_category(&mut self, category: MarketCategory) -> Result<(), SignalError> {
        if category == self.category {
            return Ok(());
        }
        let signals = self.source.signals(category)?;
        debug!(from = %self.category, to = %category, count = signals.len(), "category changed");
        self.category = category;
        self.signals = signals;
        self.selection.on_category_changed();
        Ok(())
    }

    pub fn click_symbol(&mut self, symbol: &str) {
        self.selection.on_symbol_clicked(symbol);
    }

    // ── Queries ──

    pub fn category(&self) -> MarketCategory {
        self.category
    }

    pub fn signals(&self) -> &[TradeSignal] {
        &self.signals
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn focus(&self) -> Option<&str> {
        self.selection.current_focus()
    }

    pub fn stats(&self) -> Stats {
        Stats::compute(&self.signals)
    }

    pub fn chart_signals(&self) -> Vec<&TradeSignal> {
        filter_by_focus(&self.signals, self.focus())
    }

    pub fn series(&self) -> SeriesBundle {
        self.builder.build_filtered(&self.chart_signals())
    }

    pub fn title(&self) -> String {
        build_title(self.category, self.focus())
    }

    pub fn rows(&self) -> Vec<SignalRow> {
        project_rows(&self.signals, &self.selection)
    }

    pub fn view(&self) -> DashboardView {
        let title = self.title();
        let bundle = self.series();
        let annotations = ChartAnnotations::new(&title, self.focus(), bundle.len());
        DashboardView {
            category: self.category,
            focus: self.focus().map(str::to_string),
            focus_banner: self.focus().map(|s| format!("Showing chart for: {s}")),
            stats: self.stats(),
            chart: ChartView {
                annotations,
                bundle,
            },
            rows: self.rows(),
            title,
        }
    }
}
