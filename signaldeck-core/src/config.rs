//! Dashboard configuration, loaded from TOML.
//!
//! ```toml
//! default_market = "forex"
//! label_utc_offset_minutes = 330
//!
//! [sources]
//! indian = "data/indian.csv"
//! forex = "data/forex.json"
//! ```
//!
//! Every field is optional. Relative source paths resolve against the
//! directory holding the config file.

use std::path::{Path, PathBuf};

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::MarketCategory;
use crate::series::SeriesBuilder;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("label_utc_offset_minutes out of range: {0} (must be within ±1439)")]
    InvalidOffset(i32),
}

/// Per-category signal file paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub indian: Option<PathBuf>,
    pub forex: Option<PathBuf>,
}

impl SourcesConfig {
    fn resolve_against(&mut self, base: &Path) {
        for path in [&mut self.indian, &mut self.forex].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Category shown on start.
    pub default_market: MarketCategory,
    /// Offset used when rendering chart time labels. 0 is UTC.
    pub label_utc_offset_minutes: i32,
    pub sources: SourcesConfig,
}

impl DashboardConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml(&content)?;
        if let Some(base) = path.parent() {
            config.sources.resolve_against(base);
        }
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.label_offset()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn label_offset(&self) -> Result<FixedOffset, ConfigError> {
        self.label_utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(ConfigError::InvalidOffset(self.label_utc_offset_minutes))
    }

    pub fn series_builder(&self) -> Result<SeriesBuilder, ConfigError> {
        Ok(SeriesBuilder::with_offset(self.label_offset()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_default() {
        let config = DashboardConfig::from_toml("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.default_market, MarketCategory::DomesticEquity);
        assert_eq!(config.label_offset().unwrap().local_minus_utc(), 0);
    }

    #[test]
    fn parses_all_fields() {
        let config = DashboardConfig::from_toml(
            r#"
default_market = "forex"
label_utc_offset_minutes = 330

[sources]
forex = "fx.json"
"#,
        )
        .unwrap();
        assert_eq!(config.default_market, MarketCategory::Forex);
        assert_eq!(config.label_offset().unwrap().local_minus_utc(), 330 * 60);
        assert_eq!(config.sources.forex, Some(PathBuf::from("fx.json")));
        assert!(config.sources.indian.is_none());
    }

    #[test]
    fn rejects_out_of_range_offset() {
        let err = DashboardConfig::from_toml("label_utc_offset_minutes = 1440").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOffset(1440)));
    }

    #[test]
    fn rejects_unknown_market() {
        assert!(DashboardConfig::from_toml("default_market = \"crypto\"").is_err());
    }

    #[test]
    fn relative_sources_resolve_against_config_dir() {
        let mut sources = SourcesConfig {
            indian: Some(PathBuf::from("indian.csv")),
            forex: Some(PathBuf::from("/abs/fx.json")),
        };
        sources.resolve_against(Path::new("/etc/signaldeck"));
        assert_eq!(sources.indian, Some(PathBuf::from("/etc/signaldeck/indian.csv")));
        assert_eq!(sources.forex, Some(PathBuf::from("/abs/fx.json")));
    }

    #[test]
    fn toml_roundtrip() {
        let config = DashboardConfig {
            default_market: MarketCategory::Forex,
            label_utc_offset_minutes: -300,
            sources: SourcesConfig {
                indian: Some(PathBuf::from("a.csv")),
                forex: None,
            },
        };
        let text = config.to_toml().unwrap();
        assert_eq!(DashboardConfig::from_toml(&text).unwrap(), config);
    }
}
