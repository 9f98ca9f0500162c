//! Market categories — a closed set, with every per-category label looked up
//! on the enum instead of through string keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which signal list is active.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum MarketCategory {
    #[default]
    #[serde(rename = "indian", alias = "domestic_equity")]
    DomesticEquity,
    #[serde(rename = "forex")]
    Forex,
}

impl MarketCategory {
    pub const ALL: [MarketCategory; 2] = [MarketCategory::DomesticEquity, MarketCategory::Forex];

    pub fn index(self) -> usize {
        match self {
            MarketCategory::DomesticEquity => 0,
            MarketCategory::Forex => 1,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Stable machine key, also accepted by `FromStr`.
    pub fn key(self) -> &'static str {
        match self {
            MarketCategory::DomesticEquity => "indian",
            MarketCategory::Forex => "forex",
        }
    }

    /// Human name used as the chart title base.
    pub fn display_name(self) -> &'static str {
        match self {
            MarketCategory::DomesticEquity => "Indian Market",
            MarketCategory::Forex => "Forex Market",
        }
    }

    /// Shorter label for tab navigation.
    pub fn tab_label(self) -> &'static str {
        match self {
            MarketCategory::DomesticEquity => "Indian Market",
            MarketCategory::Forex => "Forex",
        }
    }

    pub fn table_heading(self) -> String {
        format!("{} Trade Signals", self.tab_label())
    }

    /// ISO 4217 code the presentation layer should format P&L in.
    pub fn currency_code(self) -> &'static str {
        match self {
            MarketCategory::DomesticEquity => "INR",
            MarketCategory::Forex => "USD",
        }
    }

    /// Decimal places for price columns.
    pub fn price_decimals(self) -> usize {
        match self {
            MarketCategory::DomesticEquity => 2,
            MarketCategory::Forex => 4,
        }
    }
}

impl fmt::Display for MarketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown market '{0}'. Valid: indian, forex")]
pub struct ParseMarketError(pub String);

impl FromStr for MarketCategory {
    type Err = ParseMarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indian" | "domestic_equity" | "domestic" => Ok(MarketCategory::DomesticEquity),
            "forex" | "fx" => Ok(MarketCategory::Forex),
            _ => Err(ParseMarketError(s.to_string())),
        }
    }
}
