//! Search state owned by the controller
//!
//! Holds everything the presentation layer renders: form input, fetched
//! results and suggestions, loading and error flags, the visible-count cap,
//! and the record shown in the detail overlay.

use crate::provider::BookRecord;

/// Process-wide search state; created at start, never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Current search box text
    pub query_text: String,
    /// Selected genre, empty for no filter
    pub selected_genre: String,
    /// Records from the last successful result fetch
    pub results: Vec<BookRecord>,
    /// Titles from the last successful suggestion fetch
    pub suggestions: Vec<String>,
    /// Whether a result fetch is in flight
    pub is_loading: bool,
    /// User-facing error of the last result fetch, empty when none
    pub error_message: String,
    /// How many entries of `results` are exposed to the presentation layer
    pub visible_count: usize,
    /// Record shown in the detail overlay
    pub selected_record: Option<BookRecord>,
}

impl SearchState {
    /// Create the initial state with the given visible-count cap
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            query_text: String::new(),
            selected_genre: String::new(),
            results: Vec::new(),
            suggestions: Vec::new(),
            is_loading: false,
            error_message: String::new(),
            visible_count: page_size,
            selected_record: None,
        }
    }

    /// The slice of results currently exposed for rendering
    #[must_use]
    pub fn visible_results(&self) -> &[BookRecord] {
        let end = self.visible_count.min(self.results.len());
        &self.results[..end]
    }

    /// Whether fetched results exist beyond the visible cap
    #[must_use]
    pub fn has_hidden_results(&self) -> bool {
        self.visible_count < self.results.len()
    }

    /// Whether `record` is the one shown in the detail overlay
    #[must_use]
    pub fn is_selected(&self, record: &BookRecord) -> bool {
        self.selected_record
            .as_ref()
            .is_some_and(|selected| selected.id == record.id)
    }

    /// Genre as a subject filter, `None` when no genre is selected
    #[must_use]
    pub fn genre_filter(&self) -> Option<String> {
        if self.selected_genre.is_empty() {
            None
        } else {
            Some(self.selected_genre.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::books;

    #[test]
    fn test_initial_state() {
        let state = SearchState::new(18);
        assert!(state.query_text.is_empty());
        assert!(state.selected_genre.is_empty());
        assert_eq!(state.visible_count, 18);
        assert!(!state.is_loading);
        assert!(state.error_message.is_empty());
        assert!(state.selected_record.is_none());
    }

    #[test]
    fn test_visible_results_caps_at_visible_count() {
        let mut state = SearchState::new(18);
        state.results = books(30);

        assert_eq!(state.visible_results().len(), 18);
        assert!(state.has_hidden_results());

        state.visible_count = 30;
        assert_eq!(state.visible_results().len(), 30);
        assert!(!state.has_hidden_results());
    }

    #[test]
    fn test_visible_results_with_fewer_results_than_cap() {
        let mut state = SearchState::new(18);
        state.results = books(4);

        assert_eq!(state.visible_results().len(), 4);
        assert!(!state.has_hidden_results());
    }

    #[test]
    fn test_is_selected_compares_ids() {
        let mut state = SearchState::new(18);
        let records = books(2);
        state.selected_record = Some(records[1].clone());

        assert!(!state.is_selected(&records[0]));
        assert!(state.is_selected(&records[1]));
    }

    #[test]
    fn test_genre_filter() {
        let mut state = SearchState::new(18);
        assert_eq!(state.genre_filter(), None);

        state.selected_genre = "History".into();
        assert_eq!(state.genre_filter(), Some("History".to_string()));
    }
}
