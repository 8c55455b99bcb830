//! Search state controller
//!
//! The single authority over [`SearchState`]. User actions arrive as the
//! `on_*` operations, fetches leave through the [`FetchDispatcher`], and
//! completions come back through [`SearchController::apply`]. Nothing else
//! mutates the state or starts a fetch.
//!
//! # Races
//!
//! Fetches are never cancelled. Under [`FetchPolicy::LastResolved`] the last
//! response to resolve wins, even if it belongs to an older request, and any
//! completed result fetch clears the loading flag. Under
//! [`FetchPolicy::LatestIssued`] responses to superseded requests are dropped.

use super::dispatcher::FetchDispatcher;
use super::state::SearchState;
use super::types::{FetchKind, FetchOutcome, FetchPolicy, FetchRequest, RequestId};
use crate::config::NovelhuntConfig;
use crate::provider::BookRecord;

/// Message shown when a result fetch fails
pub const RESULT_FETCH_ERROR: &str = "Failed to fetch books. Please try again later.";

/// Tunables for the controller, usually taken from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSettings {
    /// Visible-count value restored by every search-triggering action
    pub page_size: usize,
    /// Minimum input length (chars) that triggers a suggestion fetch
    pub min_suggest_chars: usize,
    /// Maximum number of suggestions kept
    pub suggestion_limit: usize,
    /// Query fetched by [`SearchController::start`]
    pub default_query: String,
    /// Race reconciliation policy
    pub fetch_policy: FetchPolicy,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self::from(&NovelhuntConfig::default())
    }
}

impl From<&NovelhuntConfig> for ControllerSettings {
    fn from(config: &NovelhuntConfig) -> Self {
        Self {
            page_size: config.page_size,
            min_suggest_chars: config.min_suggest_chars,
            suggestion_limit: config.suggestion_limit,
            default_query: config.default_query.clone(),
            fetch_policy: config.fetch_policy,
        }
    }
}

/// Owns the search state and mediates user actions into fetches
pub struct SearchController<D: FetchDispatcher> {
    state: SearchState,
    settings: ControllerSettings,
    dispatcher: D,
    next_id: u64,
    latest_results: Option<RequestId>,
    latest_suggestions: Option<RequestId>,
}

impl<D: FetchDispatcher> SearchController<D> {
    /// Create a controller with fresh state; no fetch is started
    #[must_use]
    pub const fn new(settings: ControllerSettings, dispatcher: D) -> Self {
        Self {
            state: SearchState::new(settings.page_size),
            settings,
            dispatcher,
            next_id: 1,
            latest_results: None,
            latest_suggestions: None,
        }
    }

    /// Current state, for rendering
    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    /// Active settings
    #[must_use]
    pub const fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// The dispatcher fetches are handed to
    #[must_use]
    pub const fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Mount-time initial fetch for the default query
    ///
    /// The search box stays empty; only the results reflect the default query.
    pub fn start(&mut self) {
        let query = self.settings.default_query.clone();
        log::info!("Initial fetch for default query '{query}'");
        self.fetch_results(query, self.state.genre_filter());
    }

    /// The search box text changed
    ///
    /// Input shorter than the suggestion threshold leaves existing suggestions
    /// in place.
    pub fn on_text_input(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.state.query_text.clone_from(&value);
        self.reset_visible_count();

        if value.chars().count() >= self.settings.min_suggest_chars {
            self.fetch_suggestions(value);
        }
    }

    /// A genre was picked; empty string means "All Genres"
    ///
    /// Fetches immediately, even with an empty query.
    pub fn on_genre_select(&mut self, genre: impl Into<String>) {
        self.state.selected_genre = genre.into();
        self.reset_visible_count();
        self.fetch_results(self.state.query_text.clone(), self.state.genre_filter());
    }

    /// A suggestion from the dropdown was picked
    pub fn on_suggestion_select(&mut self, suggestion: impl Into<String>) {
        let suggestion = suggestion.into();
        self.state.query_text.clone_from(&suggestion);
        self.reset_visible_count();
        self.state.suggestions.clear();
        self.fetch_results(suggestion, self.state.genre_filter());
    }

    /// The search form was submitted
    ///
    /// A blank (or whitespace-only) query is a no-op.
    pub fn on_submit_search(&mut self) {
        if self.state.query_text.trim().is_empty() {
            log::debug!("Ignoring submit with blank query");
            return;
        }
        self.reset_visible_count();
        self.state.suggestions.clear();
        self.fetch_results(self.state.query_text.clone(), self.state.genre_filter());
    }

    /// Show a record in the detail overlay
    pub fn on_select_record(&mut self, record: BookRecord) {
        self.state.selected_record = Some(record);
    }

    /// Close the detail overlay
    pub fn on_close_detail(&mut self) {
        self.state.selected_record = None;
    }

    /// Expose every fetched result
    pub fn on_show_all(&mut self) {
        self.state.visible_count = self.state.results.len();
    }

    /// Apply a completed fetch
    ///
    /// Returns `false` when the outcome was discarded as stale.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        if self.is_stale(outcome.kind(), outcome.id()) {
            log::debug!("Discarding stale {:?} response {}", outcome.kind(), outcome.id());
            return false;
        }

        match outcome {
            FetchOutcome::Results { id, result } => {
                match result {
                    Ok(records) => {
                        log::info!("Result fetch {id} returned {} record(s)", records.len());
                        self.state.results = records;
                    }
                    Err(e) => {
                        log::warn!("Result fetch {id} failed: {e}");
                        self.state.error_message = RESULT_FETCH_ERROR.to_string();
                    }
                }
                self.state.is_loading = false;
            }
            FetchOutcome::Suggestions { id, result } => match result {
                Ok(mut titles) => {
                    titles.truncate(self.settings.suggestion_limit);
                    log::debug!("Suggestion fetch {id} returned {} title(s)", titles.len());
                    self.state.suggestions = titles;
                }
                Err(e) => log::debug!("Suggestion fetch {id} failed: {e}"),
            },
        }
        true
    }

    fn reset_visible_count(&mut self) {
        self.state.visible_count = self.settings.page_size;
    }

    fn next_request_id(&mut self) -> RequestId {
        let id = RequestId(self.next_id);
        self.next_id += 1;
        id
    }

    fn fetch_results(&mut self, title: String, genre: Option<String>) {
        let id = self.next_request_id();
        self.latest_results = Some(id);
        self.state.is_loading = true;
        self.state.error_message.clear();

        log::debug!("Dispatching result fetch {id} for '{title}' (genre: {genre:?})");
        self.dispatcher
            .dispatch(FetchRequest::Results { id, title, genre });
    }

    fn fetch_suggestions(&mut self, partial: String) {
        let id = self.next_request_id();
        self.latest_suggestions = Some(id);

        log::debug!("Dispatching suggestion fetch {id} for '{partial}'");
        self.dispatcher.dispatch(FetchRequest::Suggestions {
            id,
            partial,
            limit: self.settings.suggestion_limit,
        });
    }

    fn is_stale(&self, kind: FetchKind, id: RequestId) -> bool {
        match self.settings.fetch_policy {
            FetchPolicy::LastResolved => false,
            FetchPolicy::LatestIssued => {
                let latest = match kind {
                    FetchKind::Results => self.latest_results,
                    FetchKind::Suggestions => self.latest_suggestions,
                };
                latest != Some(id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;
    use crate::testing::{RecordingDispatcher, books};

    fn controller() -> SearchController<RecordingDispatcher> {
        SearchController::new(ControllerSettings::default(), RecordingDispatcher::default())
    }

    fn controller_with_policy(policy: FetchPolicy) -> SearchController<RecordingDispatcher> {
        let settings = ControllerSettings {
            fetch_policy: policy,
            ..ControllerSettings::default()
        };
        SearchController::new(settings, RecordingDispatcher::default())
    }

    fn last_results_id(c: &SearchController<RecordingDispatcher>) -> RequestId {
        c.dispatcher()
            .requests()
            .iter()
            .rev()
            .find(|r| r.kind() == FetchKind::Results)
            .map(FetchRequest::id)
            .expect("no result fetch dispatched")
    }

    fn complete_results(c: &mut SearchController<RecordingDispatcher>, records: Vec<BookRecord>) {
        let id = last_results_id(c);
        c.apply(FetchOutcome::Results {
            id,
            result: Ok(records),
        });
    }

    #[test]
    fn test_start_fetches_default_query() {
        let mut c = controller();
        c.start();

        assert_eq!(
            c.dispatcher().requests(),
            vec![FetchRequest::Results {
                id: RequestId(1),
                title: "Science".into(),
                genre: None,
            }]
        );
        assert!(c.state().is_loading);
        assert!(c.state().query_text.is_empty());
        assert_eq!(c.state().visible_count, 18);
    }

    #[test]
    fn test_short_input_keeps_suggestions_and_skips_fetch() {
        let mut c = controller();
        c.on_text_input("dune");
        let id = c.dispatcher().requests()[0].id();
        c.apply(FetchOutcome::Suggestions {
            id,
            result: Ok(vec!["Dune".into(), "Dune Messiah".into()]),
        });

        for short in ["", "d", "du", "  "] {
            c.on_text_input(short);
            assert_eq!(c.state().suggestions, vec!["Dune", "Dune Messiah"]);
            assert_eq!(c.state().query_text, short);
        }
        assert_eq!(c.dispatcher().requests().len(), 1);
    }

    #[test]
    fn test_suggestion_threshold_counts_characters() {
        let mut c = controller();
        c.on_text_input("éé");
        assert!(c.dispatcher().requests().is_empty());

        c.on_text_input("ééé");
        assert_eq!(
            c.dispatcher().requests(),
            vec![FetchRequest::Suggestions {
                id: RequestId(1),
                partial: "ééé".into(),
                limit: 5,
            }]
        );
    }

    #[test]
    fn test_suggestion_fetch_does_not_touch_loading_or_error() {
        let mut c = controller();
        c.on_text_input("harry");

        assert!(!c.state().is_loading);
        let id = c.dispatcher().requests()[0].id();
        c.apply(FetchOutcome::Suggestions {
            id,
            result: Err(ProviderError::Status { status: 500 }),
        });

        assert!(!c.state().is_loading);
        assert!(c.state().error_message.is_empty());
        assert!(c.state().suggestions.is_empty());
    }

    #[test]
    fn test_suggestions_are_truncated_to_limit() {
        let mut c = controller();
        c.on_text_input("the");
        let id = c.dispatcher().requests()[0].id();
        let titles = (0..8).map(|i| format!("The Book {i}")).collect();
        c.apply(FetchOutcome::Suggestions {
            id,
            result: Ok(titles),
        });

        assert_eq!(c.state().suggestions.len(), 5);
        assert_eq!(c.state().suggestions[0], "The Book 0");
    }

    #[test]
    fn test_text_input_resets_visible_count() {
        let mut c = controller();
        c.start();
        complete_results(&mut c, books(30));
        c.on_show_all();
        assert_eq!(c.state().visible_count, 30);

        c.on_text_input("x");
        assert_eq!(c.state().visible_count, 18);
    }

    #[test]
    fn test_genre_select_fetches_with_empty_query() {
        let mut c = controller();
        c.on_genre_select("Fantasy");

        assert_eq!(c.state().selected_genre, "Fantasy");
        assert_eq!(
            c.dispatcher().requests(),
            vec![FetchRequest::Results {
                id: RequestId(1),
                title: String::new(),
                genre: Some("Fantasy".into()),
            }]
        );
        assert!(c.state().is_loading);
    }

    #[test]
    fn test_genre_select_resets_visible_count() {
        let mut c = controller();
        c.start();
        complete_results(&mut c, books(30));
        c.on_show_all();
        assert_eq!(c.state().visible_count, 30);

        c.on_genre_select("History");
        assert_eq!(c.state().visible_count, 18);
    }

    #[test]
    fn test_submit_resets_visible_count() {
        let mut c = controller();
        c.start();
        complete_results(&mut c, books(30));
        c.on_show_all();
        c.on_text_input("rome");
        c.on_show_all();
        assert_eq!(c.state().visible_count, 30);

        c.on_submit_search();
        assert_eq!(c.state().visible_count, 18);
    }

    #[test]
    fn test_all_genres_clears_filter() {
        let mut c = controller();
        c.on_text_input("rome");
        c.on_genre_select("History");
        c.on_genre_select("");

        let last = c.dispatcher().requests().last().cloned().unwrap();
        assert_eq!(
            last,
            FetchRequest::Results {
                id: RequestId(3),
                title: "rome".into(),
                genre: None,
            }
        );
    }

    #[test]
    fn test_suggestion_select() {
        let mut c = controller();
        c.on_genre_select("Fiction");
        complete_results(&mut c, books(30));
        c.on_show_all();
        c.on_text_input("dun");
        let id = c.dispatcher().requests().last().unwrap().id();
        c.apply(FetchOutcome::Suggestions {
            id,
            result: Ok(vec!["Dune".into()]),
        });

        c.on_suggestion_select("Dune");

        assert_eq!(c.state().query_text, "Dune");
        assert!(c.state().suggestions.is_empty());
        assert_eq!(c.state().visible_count, 18);
        assert_eq!(
            c.dispatcher().requests().last().cloned().unwrap(),
            FetchRequest::Results {
                id: RequestId(3),
                title: "Dune".into(),
                genre: Some("Fiction".into()),
            }
        );
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut c = controller();
        c.on_text_input("   ");
        c.on_show_all();
        let before = c.state().clone();
        let dispatched = c.dispatcher().requests().len();

        c.on_submit_search();

        assert_eq!(c.state(), &before);
        assert_eq!(c.dispatcher().requests().len(), dispatched);
    }

    #[test]
    fn test_submit_clears_suggestions_and_fetches() {
        let mut c = controller();
        c.on_text_input("tolkien");
        let id = c.dispatcher().requests()[0].id();
        c.apply(FetchOutcome::Suggestions {
            id,
            result: Ok(vec!["Tolkien".into()]),
        });

        c.on_submit_search();

        assert!(c.state().suggestions.is_empty());
        assert!(c.state().is_loading);
        assert_eq!(
            c.dispatcher().requests().last().cloned().unwrap(),
            FetchRequest::Results {
                id: RequestId(2),
                title: "tolkien".into(),
                genre: None,
            }
        );
    }

    #[test]
    fn test_loading_flag_lifecycle_on_success() {
        let mut c = controller();
        assert!(!c.state().is_loading);

        c.start();
        assert!(c.state().is_loading);

        complete_results(&mut c, books(5));
        assert!(!c.state().is_loading);
        assert_eq!(c.state().results.len(), 5);
    }

    #[test]
    fn test_failure_sets_error_and_keeps_previous_results() {
        let mut c = controller();
        c.start();
        complete_results(&mut c, books(5));

        c.on_text_input("anything");
        c.on_submit_search();
        assert!(c.state().is_loading);
        let id = last_results_id(&c);
        c.apply(FetchOutcome::Results {
            id,
            result: Err(ProviderError::Status { status: 502 }),
        });

        assert!(!c.state().is_loading);
        assert_eq!(c.state().error_message, RESULT_FETCH_ERROR);
        assert_eq!(c.state().results.len(), 5);
    }

    #[test]
    fn test_new_fetch_clears_previous_error() {
        let mut c = controller();
        c.start();
        let id = last_results_id(&c);
        c.apply(FetchOutcome::Results {
            id,
            result: Err(ProviderError::Aborted("offline".into())),
        });
        assert!(!c.state().error_message.is_empty());

        c.on_genre_select("Science");
        assert!(c.state().error_message.is_empty());
        assert!(c.state().is_loading);
    }

    #[test]
    fn test_results_are_replaced_not_merged() {
        let mut c = controller();
        c.start();
        complete_results(&mut c, books(30));

        c.on_genre_select("History");
        complete_results(&mut c, books(2));

        assert_eq!(c.state().results, books(2));
    }

    #[test]
    fn test_thirty_results_show_all() {
        let mut c = controller();
        c.start();
        complete_results(&mut c, books(30));

        assert_eq!(c.state().results.len(), 30);
        assert_eq!(c.state().visible_results().len(), 18);
        assert!(c.state().has_hidden_results());

        c.on_show_all();
        assert_eq!(c.state().visible_results().len(), 30);
        assert!(!c.state().has_hidden_results());
    }

    #[test]
    fn test_select_and_close_detail() {
        let mut c = controller();
        let record = books(1).remove(0);

        c.on_select_record(record.clone());
        assert_eq!(c.state().selected_record, Some(record));

        c.on_close_detail();
        assert!(c.state().selected_record.is_none());
    }

    #[test]
    fn test_last_resolved_lets_older_response_win() {
        let mut c = controller();
        c.on_genre_select("Fiction");
        c.on_genre_select("History");
        let requests = c.dispatcher().requests();
        let (older, newer) = (requests[0].id(), requests[1].id());

        c.apply(FetchOutcome::Results {
            id: newer,
            result: Ok(books(3)),
        });
        assert!(!c.state().is_loading);
        assert!(c.apply(FetchOutcome::Results {
            id: older,
            result: Ok(books(7)),
        }));

        assert_eq!(c.state().results.len(), 7);
    }

    #[test]
    fn test_latest_issued_discards_stale_responses() {
        let mut c = controller_with_policy(FetchPolicy::LatestIssued);
        c.on_genre_select("Fiction");
        c.on_genre_select("History");
        let requests = c.dispatcher().requests();
        let (older, newer) = (requests[0].id(), requests[1].id());

        assert!(!c.apply(FetchOutcome::Results {
            id: older,
            result: Ok(books(7)),
        }));
        assert!(c.state().is_loading);
        assert!(c.state().results.is_empty());

        assert!(c.apply(FetchOutcome::Results {
            id: newer,
            result: Ok(books(3)),
        }));
        assert!(!c.state().is_loading);
        assert_eq!(c.state().results.len(), 3);
    }

    #[test]
    fn test_latest_issued_discards_stale_suggestions() {
        let mut c = controller_with_policy(FetchPolicy::LatestIssued);
        c.on_text_input("har");
        c.on_text_input("harr");
        let requests = c.dispatcher().requests();

        c.apply(FetchOutcome::Suggestions {
            id: requests[1].id(),
            result: Ok(vec!["Harry Potter".into()]),
        });
        c.apply(FetchOutcome::Suggestions {
            id: requests[0].id(),
            result: Ok(vec!["Harlem".into()]),
        });

        assert_eq!(c.state().suggestions, vec!["Harry Potter"]);
    }

    #[test]
    fn test_request_ids_increase() {
        let mut c = controller();
        c.start();
        c.on_text_input("abc");
        c.on_submit_search();

        let ids: Vec<u64> = c.dispatcher().requests().iter().map(|r| r.id().0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = NovelhuntConfig::default();
        config.page_size = 12;
        config.default_query = "Poetry".into();
        let settings = ControllerSettings::from(&config);

        let mut c = SearchController::new(settings, RecordingDispatcher::default());
        assert_eq!(c.state().visible_count, 12);
        c.start();
        assert!(matches!(
            &c.dispatcher().requests()[0],
            FetchRequest::Results { title, .. } if title == "Poetry"
        ));
    }
}
