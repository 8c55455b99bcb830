//! Presentation rules
//!
//! [`build_view`] derives everything the widgets draw from a
//! [`SearchState`]. Keeping these rules in a pure function lets them be tested
//! without a terminal:
//!
//! - a result fetch in flight hides the grid and any error
//! - otherwise an error message replaces the grid
//! - otherwise the first `visible_count` results are shown as cards, or
//!   "No books found." when there are none
//! - "View All" is offered only when not loading and results are hidden

use crate::provider::{BookRecord, CoverSize, ProviderLinks};
use crate::search::SearchState;

/// Text shown when a successful fetch returned nothing
pub const NO_RESULTS_TEXT: &str = "No books found.";

/// Text shown in place of a missing page count
pub const MISSING_PAGES_TEXT: &str = "N/A";

/// Inputs to [`build_view`] that don't live in the search state
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions<'a> {
    /// Link builder for covers and work pages
    pub links: &'a ProviderLinks,
    /// Whether the search box (or its dropdown) has focus
    pub search_focused: bool,
}

/// One result card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Record id
    pub id: String,
    /// Book title
    pub title: String,
    /// Authors joined with ", ", empty when unknown
    pub authors: String,
    /// Year of first publication
    pub year: Option<i32>,
    /// Medium cover URL, or the placeholder
    pub cover_url: String,
    /// Whether this record is open in the detail overlay
    pub selected: bool,
}

/// Contents of the detail overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Book title
    pub title: String,
    /// Authors joined with ", "
    pub authors: String,
    /// Year of first publication, empty when unknown
    pub first_published: String,
    /// Publishers joined with ", "
    pub publishers: String,
    /// Languages joined with ", "
    pub languages: String,
    /// Median page count, or "N/A"
    pub pages: String,
    /// Large cover URL, or the placeholder
    pub cover_url: String,
    /// Public page of the work
    pub work_url: String,
}

/// Main content area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// A result fetch is in flight
    Loading,
    /// The last result fetch failed
    Error(String),
    /// Visible result cards
    Grid(Vec<Card>),
    /// The last result fetch returned no records
    NoResults,
}

/// Everything the widgets render for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    /// Search box text
    pub query: String,
    /// Suggestion titles
    pub suggestions: Vec<String>,
    /// Whether the suggestion dropdown is shown
    pub show_suggestions: bool,
    /// Active genre, empty for all genres
    pub selected_genre: String,
    /// Main content
    pub body: Body,
    /// Whether the "View All" control is shown
    pub show_view_all: bool,
    /// Total number of fetched results
    pub result_count: usize,
    /// Detail overlay, present only while a record is selected
    pub detail: Option<DetailView>,
}

/// Whether the result grid (or its empty message) is on screen
#[must_use]
pub fn shows_grid(state: &SearchState) -> bool {
    !state.is_loading && state.error_message.is_empty()
}

/// Derive the view for the current state
#[must_use]
pub fn build_view(state: &SearchState, options: &ViewOptions<'_>) -> SearchView {
    let body = if state.is_loading {
        Body::Loading
    } else if !state.error_message.is_empty() {
        Body::Error(state.error_message.clone())
    } else if state.results.is_empty() {
        Body::NoResults
    } else {
        Body::Grid(
            state
                .visible_results()
                .iter()
                .map(|record| card(record, state.is_selected(record), options.links))
                .collect(),
        )
    };

    SearchView {
        query: state.query_text.clone(),
        suggestions: state.suggestions.clone(),
        show_suggestions: !state.suggestions.is_empty()
            && options.search_focused
            && !state.query_text.is_empty(),
        selected_genre: state.selected_genre.clone(),
        body,
        show_view_all: !state.is_loading && state.has_hidden_results(),
        result_count: state.results.len(),
        detail: state
            .selected_record
            .as_ref()
            .map(|record| detail(record, options.links)),
    }
}

fn card(record: &BookRecord, selected: bool, links: &ProviderLinks) -> Card {
    Card {
        id: record.id.clone(),
        title: record.title.clone(),
        authors: record.authors_joined(),
        year: record.first_publish_year,
        cover_url: links.cover(record.cover_image_id, CoverSize::Medium),
        selected,
    }
}

fn detail(record: &BookRecord, links: &ProviderLinks) -> DetailView {
    DetailView {
        title: record.title.clone(),
        authors: record.authors_joined(),
        first_published: record
            .first_publish_year
            .map(|year| year.to_string())
            .unwrap_or_default(),
        publishers: record.publishers.join(", "),
        languages: record.languages.join(", "),
        pages: record
            .median_page_count
            .filter(|pages| *pages > 0)
            .map_or_else(|| MISSING_PAGES_TEXT.to_string(), |pages| pages.to_string()),
        cover_url: links.cover(record.cover_image_id, CoverSize::Large),
        work_url: links.work(record),
    }
}
