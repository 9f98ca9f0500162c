//! Chart series builder — axis labels plus four aligned price series.
//!
//! Series order is fixed: Entry Price, Current Price, Stop Loss, Take Profit.
//! Each series carries a static style tag the renderer passes through
//! untouched; styles are a property of the series kind, never of the data.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::Serialize;

use crate::domain::{MarketCategory, TradeSignal};

/// Opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }

    /// Same colour with an alpha channel, as a CSS `rgba()` string.
    pub fn css_alpha(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

/// Pass-through rendering attributes for one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesStyle {
    pub line: Rgb,
    /// Alpha of the translucent fill colour (same hue as `line`).
    pub fill_alpha: f32,
    /// `None` draws a solid line.
    pub dash: Option<[u8; 2]>,
    pub tension: f32,
}

impl SeriesStyle {
    const FILL_ALPHA: f32 = 0.1;
    const TENSION: f32 = 0.1;
    const DASHED: [u8; 2] = [5, 5];

    const fn solid(line: Rgb) -> Self {
        Self {
            line,
            fill_alpha: Self::FILL_ALPHA,
            dash: None,
            tension: Self::TENSION,
        }
    }

    const fn dashed(line: Rgb) -> Self {
        Self {
            line,
            fill_alpha: Self::FILL_ALPHA,
            dash: Some(Self::DASHED),
            tension: Self::TENSION,
        }
    }

    pub fn is_dashed(&self) -> bool {
        self.dash.is_some()
    }

    pub fn fill_css(&self) -> String {
        self.line.css_alpha(self.fill_alpha)
    }
}

/// The four charted price levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    EntryPrice,
    CurrentPrice,
    StopLoss,
    TakeProfit,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 4] = [
        SeriesKind::EntryPrice,
        SeriesKind::CurrentPrice,
        SeriesKind::StopLoss,
        SeriesKind::TakeProfit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SeriesKind::EntryPrice => "Entry Price",
            SeriesKind::CurrentPrice => "Current Price",
            SeriesKind::StopLoss => "Stop Loss",
            SeriesKind::TakeProfit => "Take Profit",
        }
    }

    pub fn style(self) -> SeriesStyle {
        match self {
            SeriesKind::EntryPrice => SeriesStyle::solid(Rgb(59, 130, 246)),
            SeriesKind::CurrentPrice => SeriesStyle::solid(Rgb(16, 185, 129)),
            SeriesKind::StopLoss => SeriesStyle::dashed(Rgb(239, 68, 68)),
            SeriesKind::TakeProfit => SeriesStyle::dashed(Rgb(34, 197, 94)),
        }
    }

    pub fn value(self, signal: &TradeSignal) -> f64 {
        match self {
            SeriesKind::EntryPrice => signal.entry_price,
            SeriesKind::CurrentPrice => signal.current_price,
            SeriesKind::StopLoss => signal.stop_loss_price,
            SeriesKind::TakeProfit => signal.take_profit_price,
        }
    }
}

/// One named numeric series, index-aligned with `SeriesBundle::labels`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub kind: SeriesKind,
    pub label: &'static str,
    pub style: SeriesStyle,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesBundle {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl SeriesBundle {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, kind: SeriesKind) -> Option<&Series> {
        self.series.iter().find(|s| s.kind == kind)
    }
}

/// Restrict to the focused symbol, keeping input order. No focus keeps all.
pub fn filter_by_focus<'a>(signals: &'a [TradeSignal], focus: Option<&str>) -> Vec<&'a TradeSignal> {
    match focus {
        Some(symbol) => signals.iter().filter(|s| s.symbol == symbol).collect(),
        None => signals.iter().collect(),
    }
}

/// Builds series bundles, rendering time labels in a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesBuilder {
    offset: FixedOffset,
}

impl Default for SeriesBuilder {
    fn default() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }
}

impl SeriesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// 24-hour `HH:MM`.
    pub fn time_label(&self, timestamp: &DateTime<Utc>) -> String {
        timestamp.with_timezone(&self.offset).format("%H:%M").to_string()
    }

    pub fn build(&self, signals: &[TradeSignal], focus: Option<&str>) -> SeriesBundle {
        self.build_filtered(&filter_by_focus(signals, focus))
    }

    /// Build from an already-filtered sequence.
    pub fn build_filtered(&self, signals: &[&TradeSignal]) -> SeriesBundle {
        let single = signals.len() == 1;
        let labels = signals
            .iter()
            .map(|signal| {
                let time = self.time_label(&signal.timestamp);
                if single {
                    time
                } else {
                    format!("{} ({})", signal.symbol, time)
                }
            })
            .collect();

        let series = SeriesKind::ALL
            .iter()
            .map(|&kind| Series {
                kind,
                label: kind.label(),
                style: kind.style(),
                data: signals.iter().map(|s| kind.value(s)).collect(),
            })
            .collect();

        SeriesBundle { labels, series }
    }
}

/// Build with UTC time labels.
pub fn build_series(signals: &[TradeSignal], focus: Option<&str>) -> SeriesBundle {
    SeriesBuilder::default().build(signals, focus)
}

pub fn build_title(category: MarketCategory, focus: Option<&str>) -> String {
    match focus {
        Some(symbol) => format!("{} - {}", category.display_name(), symbol),
        None => category.display_name().to_string(),
    }
}

/// Chart chrome derived from the title, the focus and the point count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartAnnotations {
    pub heading: String,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    pub point_count_label: String,
    /// Show the "click a symbol" hint.
    pub show_selection_hint: bool,
}

impl ChartAnnotations {
    pub fn new(title: &str, focus: Option<&str>, points: usize) -> Self {
        let focused = focus.is_some();
        let view = if focused {
            "Individual Symbol View"
        } else {
            "All Symbols"
        };
        let plural = if points == 1 { "" } else { "s" };
        Self {
            heading: format!("{title} - Price Levels ({view})"),
            x_axis_title: if focused { "Time" } else { "Symbols / Time" },
            y_axis_title: "Price",
            point_count_label: format!("{points} data point{plural}"),
            show_selection_hint: !focused && points > 1,
        }
    }
}

/// Hover text for one data point.
pub fn tooltip_line(series_label: &str, value: f64, symbol: &str) -> String {
    if symbol.is_empty() {
        format!("{series_label}: {value:.4}")
    } else {
        format!("{series_label}: {value:.4} ({symbol})")
    }
}
