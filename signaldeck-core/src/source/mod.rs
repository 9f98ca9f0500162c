//! Signal sources and structured error types.
//!
//! The SignalSource trait abstracts over where a category's signals come from
//! (compiled-in sample data, files on disk) so the dashboard can swap
//! implementations and tests can inject their own.

pub mod file;
pub mod sample;

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{MarketCategory, TradeSignal};

pub use file::{load_signals, parse_signals, FileFormat, FileSignals};
pub use sample::SampleSignals;

/// Supplies the ordered signal list for a category.
///
/// Order is the category's display order; nothing downstream re-sorts it.
pub trait SignalSource {
    fn name(&self) -> &str;

    fn signals(&self, category: MarketCategory) -> Result<Vec<TradeSignal>, SignalError>;
}

impl<T: SignalSource + ?Sized> SignalSource for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn signals(&self, category: MarketCategory) -> Result<Vec<TradeSignal>, SignalError> {
        (**self).signals(category)
    }
}

impl<T: SignalSource + ?Sized> SignalSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn signals(&self, category: MarketCategory) -> Result<Vec<TradeSignal>, SignalError> {
        (**self).signals(category)
    }
}

/// Structured error types for loading signals.
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("failed to read signal file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {format} signal file {}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        format: FileFormat,
        message: String,
    },

    #[error("unsupported signal file {} (expected .json, .toml or .csv)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid signal '{id}': {field} {reason}")]
    Validation {
        id: String,
        field: &'static str,
        reason: String,
    },
}

/// Check a loaded record against the data model bounds.
///
/// Only shape is checked. Price ordering against direction is not: a BUY
/// with its stop above entry is still a valid record.
pub fn validate_signal(signal: &TradeSignal) -> Result<(), SignalError> {
    let invalid = |field: &'static str, reason: String| SignalError::Validation {
        id: signal.id.to_string(),
        field,
        reason,
    };

    if signal.id.as_str().trim().is_empty() {
        return Err(invalid("id", "must not be empty".into()));
    }
    if signal.symbol.trim().is_empty() {
        return Err(invalid("symbol", "must not be empty".into()));
    }

    let prices = [
        ("entry_price", signal.entry_price),
        ("stop_loss_price", signal.stop_loss_price),
        ("take_profit_price", signal.take_profit_price),
        ("current_price", signal.current_price),
    ];
    for (field, value) in prices {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(field, format!("must be a finite non-negative number, got {value}")));
        }
    }

    let signed = [
        ("profit_and_loss", signal.profit_and_loss),
        ("profit_and_loss_percentage", signal.profit_and_loss_percentage),
    ];
    for (field, value) in signed {
        if !value.is_finite() {
            return Err(invalid(field, format!("must be finite, got {value}")));
        }
    }

    if !signal.volume.is_finite() || signal.volume <= 0.0 {
        return Err(invalid(
            "volume",
            format!("must be a finite positive number, got {}", signal.volume),
        ));
    }

    Ok(())
}

pub fn validate_all(signals: &[TradeSignal]) -> Result<(), SignalError> {
    signals.iter().try_for_each(validate_signal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first() -> TradeSignal {
        sample::domestic_equity().remove(0)
    }

    #[test]
    fn sample_data_is_valid() {
        assert!(validate_all(&sample::domestic_equity()).is_ok());
        assert!(validate_all(&sample::forex()).is_ok());
    }

    #[test]
    fn rejects_negative_price() {
        let mut s = first();
        s.stop_loss_price = -1.0;
        match validate_signal(&s) {
            Err(SignalError::Validation { id, field, .. }) => {
                assert_eq!(id, "1");
                assert_eq!(field, "stop_loss_price");
            }
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn rejects_nan_pnl() {
        let mut s = first();
        s.profit_and_loss = f64::NAN;
        assert!(validate_signal(&s).is_err());
    }

    #[test]
    fn rejects_zero_volume() {
        let mut s = first();
        s.volume = 0.0;
        let err = validate_signal(&s).unwrap_err();
        assert!(err.to_string().contains("volume"));
    }

    #[test]
    fn accepts_inconsistent_direction() {
        let mut s = first();
        s.stop_loss_price = s.entry_price + 100.0;
        assert!(validate_signal(&s).is_ok());
    }

    #[test]
    fn accepts_negative_pnl() {
        let mut s = first();
        s.profit_and_loss = -5000.0;
        s.profit_and_loss_percentage = -2.0;
        assert!(validate_signal(&s).is_ok());
    }

    #[test]
    fn reference_source_delegates() {
        let source = SampleSignals;
        let by_ref: &dyn SignalSource = &source;
        let boxed: Box<dyn SignalSource> = Box::new(SampleSignals);
        assert_eq!(
            by_ref.signals(MarketCategory::Forex).unwrap(),
            boxed.signals(MarketCategory::Forex).unwrap()
        );
        assert_eq!(boxed.name(), "sample");
    }
}
