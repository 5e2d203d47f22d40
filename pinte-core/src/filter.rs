//! Category + search filtering of the event listing.

use crate::event::Event;
use crate::normalize::normalise_category;

/// Filter key matching every category.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// `"all"` or a normalised category
    active_category: String,
    /// Trimmed, lowercased search input
    search_term: String,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            active_category: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
        }
    }
}

impl FilterState {
    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Select a filter key; anything other than "all" is normalised.
    pub fn set_category(&mut self, key: &str) {
        let normalised = normalise_category(key);
        self.active_category = if normalised == ALL_CATEGORIES || normalised.is_empty() {
            ALL_CATEGORIES.to_string()
        } else {
            normalised
        };
    }

    pub fn set_search(&mut self, input: &str) {
        self.search_term = input.trim().to_lowercase();
    }

    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    pub fn matches(&self, event: &Event) -> bool {
        let category_ok = self.active_category == ALL_CATEGORIES
            || normalise_category(&event.category) == self.active_category;
        let search_ok =
            self.search_term.is_empty() || event.search_haystack().contains(&self.search_term);

        category_ok && search_ok
    }

    /// The subset of `events` passing the filter, in their original order.
    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        events.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}
