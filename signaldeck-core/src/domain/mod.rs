//! Domain types for SignalDeck

pub mod market;
pub mod signal;

pub use market::{MarketCategory, ParseMarketError};
pub use signal::{Direction, SignalId, SignalStatus, TradeSignal};
