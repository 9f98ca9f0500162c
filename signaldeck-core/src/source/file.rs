//! File-backed signal source (JSON, TOML, CSV).
//!
//! Format is chosen by file extension:
//! - `.json` — a top-level array of signal objects
//! - `.toml` — `[[signals]]` tables, timestamps as quoted RFC 3339 strings
//! - `.csv`  — header row with the signal field names
//!
//! Every loaded record is validated before it is handed out.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::sample::SampleSignals;
use super::{validate_all, SignalError, SignalSource};
use crate::config::SourcesConfig;
use crate::domain::{MarketCategory, TradeSignal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
    Csv,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            "csv" => Some(FileFormat::Csv),
            _ => None,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FileFormat::Json => "JSON",
            FileFormat::Toml => "TOML",
            FileFormat::Csv => "CSV",
        })
    }
}

/// TOML document shape: `[[signals]]` array of tables.
#[derive(Debug, Serialize, Deserialize)]
struct TomlSignals {
    #[serde(default)]
    signals: Vec<TradeSignal>,
}

/// Read, parse and validate a signal file.
pub fn load_signals(path: &Path) -> Result<Vec<TradeSignal>, SignalError> {
    let format = FileFormat::from_path(path).ok_or_else(|| SignalError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = std::fs::read_to_string(path).map_err(|source| SignalError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let signals = parse_signals(&content, format, path)?;
    debug!(path = %path.display(), %format, count = signals.len(), "loaded signal file");
    Ok(signals)
}

/// Parse and validate signal text. `path` is only used in error messages.
pub fn parse_signals(
    content: &str,
    format: FileFormat,
    path: &Path,
) -> Result<Vec<TradeSignal>, SignalError> {
    let parse_err = |message: String| SignalError::Parse {
        path: path.to_path_buf(),
        format,
        message,
    };

    let signals: Vec<TradeSignal> = match format {
        FileFormat::Json => serde_json::from_str(content).map_err(|e| parse_err(e.to_string()))?,
        FileFormat::Toml => {
            let doc: TomlSignals = toml::from_str(content).map_err(|e| parse_err(e.to_string()))?;
            doc.signals
        }
        FileFormat::Csv => {
            let mut reader = csv::Reader::from_reader(content.as_bytes());
            reader
                .deserialize()
                .collect::<Result<Vec<TradeSignal>, csv::Error>>()
                .map_err(|e| parse_err(e.to_string()))?
        }
    };

    validate_all(&signals)?;
    Ok(signals)
}

/// Serialize signals in the given format. Output is accepted by `parse_signals`.
pub fn render_signals(signals: &[TradeSignal], format: FileFormat) -> Result<String, String> {
    match format {
        FileFormat::Json => serde_json::to_string_pretty(signals).map_err(|e| e.to_string()),
        FileFormat::Toml => {
            let doc = TomlSignals {
                signals: signals.to_vec(),
            };
            toml::to_string_pretty(&doc).map_err(|e| e.to_string())
        }
        FileFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            for signal in signals {
                wtr.serialize(signal).map_err(|e| e.to_string())?;
            }
            let bytes = wtr.into_inner().map_err(|e| e.to_string())?;
            String::from_utf8(bytes).map_err(|e| e.to_string())
        }
    }
}

/// Per-category signal files. Categories without a file use the sample data.
#[derive(Debug, Clone, Default)]
pub struct FileSignals {
    indian: Option<PathBuf>,
    forex: Option<PathBuf>,
    fallback: SampleSignals,
}

impl FileSignals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(sources: &SourcesConfig) -> Self {
        Self {
            indian: sources.indian.clone(),
            forex: sources.forex.clone(),
            fallback: SampleSignals,
        }
    }

    pub fn with_file(mut self, category: MarketCategory, path: impl Into<PathBuf>) -> Self {
        let path = Some(path.into());
        match category {
            MarketCategory::DomesticEquity => self.indian = path,
            MarketCategory::Forex => self.forex = path,
        }
        self
    }

    pub fn path_for(&self, category: MarketCategory) -> Option<&Path> {
        match category {
            MarketCategory::DomesticEquity => self.indian.as_deref(),
            MarketCategory::Forex => self.forex.as_deref(),
        }
    }
}

impl SignalSource for FileSignals {
    fn name(&self) -> &str {
        "file"
    }

    fn signals(&self, category: MarketCategory) -> Result<Vec<TradeSignal>, SignalError> {
        match self.path_for(category) {
            Some(path) => load_signals(path),
            None => {
                warn!(%category, "no signal file configured, using sample data");
                self.fallback.signals(category)
            }
        }
    }
}
