//! Selection state machine — an optional focused symbol.
//!
//! Two states: unfocused (initial) and focused on one symbol. Clicking the
//! focused symbol again clears it; clicking any other symbol moves focus.
//! A category change always clears focus, even if the new category lists a
//! signal with the same symbol string.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    focus: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_symbol_clicked(&mut self, symbol: &str) {
        if self.focus.as_deref() == Some(symbol) {
            debug!(symbol, "selection cleared");
            self.focus = None;
        } else {
            debug!(symbol, "selection focused");
            self.focus = Some(symbol.to_string());
        }
    }

    pub fn on_category_changed(&mut self) {
        if let Some(prev) = self.focus.take() {
            debug!(symbol = %prev, "selection reset on category change");
        }
    }

    pub fn current_focus(&self) -> Option<&str> {
        self.focus.as_deref()
    }

    pub fn is_focused(&self, symbol: &str) -> bool {
        self.current_focus() == Some(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unfocused() {
        assert_eq!(Selection::new().current_focus(), None);
    }

    #[test]
    fn click_focuses_then_toggles_off() {
        let mut sel = Selection::new();
        sel.on_symbol_clicked("X");
        assert_eq!(sel.current_focus(), Some("X"));
        sel.on_symbol_clicked("X");
        assert_eq!(sel.current_focus(), None);
    }

    #[test]
    fn click_other_symbol_moves_focus() {
        let mut sel = Selection::new();
        sel.on_symbol_clicked("X");
        sel.on_symbol_clicked("Y");
        assert_eq!(sel.current_focus(), Some("Y"));
        assert!(sel.is_focused("Y"));
        assert!(!sel.is_focused("X"));
    }

    #[test]
    fn category_change_always_resets() {
        let mut sel = Selection::new();
        sel.on_symbol_clicked("X");
        sel.on_category_changed();
        assert_eq!(sel.current_focus(), None);

        // Already unfocused stays unfocused.
        sel.on_category_changed();
        assert_eq!(sel.current_focus(), None);
    }

    #[test]
    fn symbol_match_is_exact() {
        let mut sel = Selection::new();
        sel.on_symbol_clicked("EUR/USD");
        sel.on_symbol_clicked("eur/usd");
        assert_eq!(sel.current_focus(), Some("eur/usd"));
    }
}
