//! SignalDeck CLI — stats, chart series and signal tables for one market.
//!
//! Commands:
//! - `stats` — summary statistics as JSON
//! - `chart` — chart title, annotations and the four price series as JSON
//! - `table` — signal table as aligned text or CSV
//! - `replay` — apply click/switch events and print a view snapshot after each

use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use signaldeck_core::table::{sort_rows, SignalRow, SortKey, SortOrder};
use signaldeck_core::{
    Dashboard, DashboardConfig, FileSignals, MarketCategory, SampleSignals, SeriesBuilder,
    SignalSource,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "signaldeck",
    about = "SignalDeck CLI — trade signal stats, chart series and tables"
)]
struct Cli {
    /// Path to a TOML config file. Without one, sample data is used.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Market to show: indian or forex. Overrides the config's default_market.
    #[arg(long, global = true)]
    market: Option<MarketCategory>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print summary statistics as JSON.
    Stats,
    /// Print chart title, annotations and series as JSON.
    Chart {
        /// Focus the chart on one symbol.
        #[arg(long)]
        focus: Option<String>,
    },
    /// Print the signal table.
    Table {
        /// Mark one symbol as selected.
        #[arg(long)]
        focus: Option<String>,

        /// Sort column: symbol, direction, entry, current, sl, tp, pnl, pnl_pct, status, time.
        #[arg(long)]
        sort: Option<SortKey>,

        /// Sort descending.
        #[arg(long, default_value_t = false)]
        desc: bool,

        /// Emit CSV instead of an aligned text table.
        #[arg(long, default_value_t = false)]
        csv: bool,
    },
    /// Apply events in order, printing one JSON view per event.
    Replay {
        /// Events: click:SYMBOL or switch:MARKET.
        #[arg(required = true)]
        events: Vec<Event>,
    },
}

/// A user interaction fed to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Click(String),
    Switch(MarketCategory),
}

impl FromStr for Event {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, arg) = s
            .split_once(':')
            .ok_or_else(|| format!("invalid event '{s}'. Expected click:SYMBOL or switch:MARKET"))?;
        match kind {
            "click" if !arg.is_empty() => Ok(Event::Click(arg.to_string())),
            "click" => Err("click event needs a symbol".to_string()),
            "switch" => arg.parse().map(Event::Switch).map_err(|e| format!("{e}")),
            _ => Err(format!("unknown event kind '{kind}'. Valid: click, switch")),
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DashboardConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    let market = cli.market.unwrap_or(config.default_market);
    let builder = config.series_builder()?;

    let source: Box<dyn SignalSource> =
        if config.sources.indian.is_none() && config.sources.forex.is_none() {
            Box::new(SampleSignals)
        } else {
            Box::new(FileSignals::from_config(&config.sources))
        };
    info!(source = source.name(), %market, "opening dashboard");

    let mut dash = Dashboard::new(source, market)?.with_series_builder(builder);

    match cli.command {
        Commands::Stats => {
            println!("{}", serde_json::to_string_pretty(&dash.stats())?);
        }
        Commands::Chart { focus } => {
            if let Some(symbol) = focus {
                dash.click_symbol(&symbol);
            }
            let view = dash.view();
            let out = json!({
                "title": view.title,
                "focus": view.focus,
                "chart": view.chart,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Table {
            focus,
            sort,
            desc,
            csv,
        } => {
            if let Some(symbol) = focus {
                dash.click_symbol(&symbol);
            }
            let mut rows = dash.rows();
            if let Some(key) = sort {
                let order = if desc {
                    SortOrder::Descending
                } else {
                    SortOrder::Ascending
                };
                sort_rows(&mut rows, key, order);
            }
            if csv {
                write_csv(&rows)?;
            } else {
                print_table(market, &rows, &builder);
            }
        }
        Commands::Replay { events } => {
            for event in events {
                debug!(?event, "applying");
                match &event {
                    Event::Click(symbol) => dash.click_symbol(symbol),
                    Event::Switch(category) => dash
                        .switch_category(*category)
                        .with_context(|| format!("switching to {category}"))?,
                }
                println!("{}", serde_json::to_string(&dash.view())?);
            }
        }
    }

    Ok(())
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("SIGNALDECK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .compact()
        .with_env_filter(filter)
        .init();
}

fn write_csv(rows: &[SignalRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn print_table(market: MarketCategory, rows: &[SignalRow], builder: &SeriesBuilder) {
    let dp = market.price_decimals();
    println!("{}", market.table_heading());
    println!();
    println!(
        "  {:<12} {:<5} {:>12} {:>12} {:>12} {:>12} {:>12} {:>8} {:<8} {:<5}",
        "Symbol", "Type", "Entry", "Current", "SL", "TP", "P&L", "P&L %", "Status", "Time"
    );
    println!("{}", "-".repeat(112));
    for row in rows {
        let marker = if row.selected { '*' } else { ' ' };
        println!(
            "{marker} {:<12} {:<5} {:>12.*} {:>12.*} {:>12.*} {:>12.*} {:>12.2} {:>7.2}% {:<8} {:<5}",
            row.symbol,
            row.direction.label(),
            dp,
            row.entry_price,
            dp,
            row.current_price,
            dp,
            row.stop_loss_price,
            dp,
            row.take_profit_price,
            row.profit_and_loss,
            row.profit_and_loss_percentage,
            row.status.label(),
            builder.time_label(&row.timestamp),
        );
    }
    println!();
    println!("Prices in {}", market.currency_code());
}
