//! Catalog browsing state.
//!
//! The strategy list is loaded once and never mutated; the only state
//! layered on top of it is the selection cursor and the bookmark set.

use crate::catalog::Strategy;
use std::collections::HashSet;

/// State for the strategy catalog.
#[derive(Debug, Default)]
pub struct CatalogState {
    /// All loaded strategies.
    pub strategies: Vec<Strategy>,
    /// Currently selected strategy index.
    pub selected_index: Option<usize>,
    /// IDs of bookmarked strategies.
    pub bookmarked: HashSet<String>,
}

impl CatalogState {
    /// Create a catalog state over a loaded strategy list.
    pub fn with_strategies(strategies: Vec<Strategy>) -> Self {
        let selected_index = if strategies.is_empty() { None } else { Some(0) };
        Self {
            strategies,
            selected_index,
            bookmarked: HashSet::new(),
        }
    }

    /// Get the currently selected strategy.
    pub fn selected_strategy(&self) -> Option<&Strategy> {
        self.selected_index.and_then(|i| self.strategies.get(i))
    }

    /// Look up a strategy by ID.
    pub fn by_id(&self, id: &str) -> Option<&Strategy> {
        self.strategies.iter().find(|s| s.id == id)
    }

    /// Whether a strategy is bookmarked.
    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarked.contains(id)
    }

    /// Toggle the bookmark on a strategy: add if absent, remove if present.
    pub fn toggle_bookmark(&mut self, id: &str) {
        if !self.bookmarked.remove(id) {
            self.bookmarked.insert(id.to_string());
        }
    }

    /// Move the selection cursor, clamped to the list bounds.
    pub fn move_selection(&mut self, delta: i32) {
        if self.strategies.is_empty() {
            return;
        }
        let current = self.selected_index.unwrap_or(0) as i32;
        let max_index = self.strategies.len() - 1;
        self.selected_index = Some(((current + delta).max(0) as usize).min(max_index));
    }

    /// Select the first strategy.
    pub fn select_first(&mut self) {
        if !self.strategies.is_empty() {
            self.selected_index = Some(0);
        }
    }

    /// Select the last strategy.
    pub fn select_last(&mut self) {
        if !self.strategies.is_empty() {
            self.selected_index = Some(self.strategies.len() - 1);
        }
    }
}
