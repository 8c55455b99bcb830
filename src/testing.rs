//! Testing utilities for novelhunt
//!
//! Stub providers, a recording dispatcher, and record fixtures for driving
//! the search controller and the UI without a network.
//!
//! Only available when compiled with `cfg(test)`.

use crate::provider::{BookRecord, ProviderError, Result, SearchProvider};
use crate::search::{FetchDispatcher, FetchRequest};
use std::sync::Mutex;

/// Build `count` distinct records with predictable ids and titles
///
/// Record `i` has id `/works/OL{i}W`, title `Book {i}`, one author, and a
/// cover id on every even index.
#[must_use]
pub fn books(count: usize) -> Vec<BookRecord> {
    (0..count)
        .map(|i| {
            let mut record = BookRecord::new(format!("/works/OL{i}W"), format!("Book {i}"));
            record.authors = vec![format!("Author {i}")];
            record.first_publish_year = i32::try_from(1900 + i).ok();
            record.publishers = vec!["Ace".to_string()];
            record.languages = vec!["eng".to_string()];
            record.cover_image_id = (i % 2 == 0).then_some(1000 + i as u64);
            record.median_page_count = Some(200);
            record
        })
        .collect()
}

/// Provider returning canned data and recording every call
#[derive(Default)]
pub struct StubProvider {
    records: Vec<BookRecord>,
    titles: Vec<String>,
    fail: bool,
    search_calls: Mutex<Vec<(String, Option<String>)>>,
    suggest_calls: Mutex<Vec<(String, usize)>>,
}

impl StubProvider {
    /// Provider whose searches return `records`
    #[must_use]
    pub fn with_records(records: Vec<BookRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Provider whose suggestion lookups return `titles`
    #[must_use]
    pub fn with_titles(titles: Vec<String>) -> Self {
        Self {
            titles,
            ..Self::default()
        }
    }

    /// Provider that fails every call with a server error
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Arguments of every `search` call so far
    ///
    /// # Panics
    /// Panics if the call log mutex is poisoned.
    #[must_use]
    pub fn search_calls(&self) -> Vec<(String, Option<String>)> {
        self.search_calls.lock().unwrap().clone()
    }

    /// Arguments of every `suggest` call so far
    ///
    /// # Panics
    /// Panics if the call log mutex is poisoned.
    #[must_use]
    pub fn suggest_calls(&self) -> Vec<(String, usize)> {
        self.suggest_calls.lock().unwrap().clone()
    }
}

impl SearchProvider for StubProvider {
    fn search(&self, title: &str, genre: Option<&str>) -> Result<Vec<BookRecord>> {
        self.search_calls
            .lock()
            .unwrap()
            .push((title.to_string(), genre.map(ToString::to_string)));
        if self.fail {
            return Err(ProviderError::Status { status: 500 });
        }
        Ok(self.records.clone())
    }

    fn suggest(&self, partial: &str, limit: usize) -> Result<Vec<String>> {
        self.suggest_calls
            .lock()
            .unwrap()
            .push((partial.to_string(), limit));
        if self.fail {
            return Err(ProviderError::Status { status: 500 });
        }
        Ok(self.titles.iter().take(limit).cloned().collect())
    }
}

/// Provider that panics on every call
pub struct PanickingProvider;

impl SearchProvider for PanickingProvider {
    fn search(&self, title: &str, _genre: Option<&str>) -> Result<Vec<BookRecord>> {
        panic!("search exploded for '{title}'")
    }

    fn suggest(&self, partial: &str, _limit: usize) -> Result<Vec<String>> {
        panic!("suggest exploded for '{partial}'")
    }
}

/// Dispatcher that only records requests; tests complete them by hand
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    requests: Vec<FetchRequest>,
}

impl RecordingDispatcher {
    /// Every request dispatched so far, oldest first
    #[must_use]
    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests.clone()
    }
}

impl FetchDispatcher for RecordingDispatcher {
    fn dispatch(&mut self, request: FetchRequest) {
        self.requests.push(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_books_are_distinct() {
        let records = books(3);
        assert_eq!(records[0].id, "/works/OL0W");
        assert_eq!(records[2].title, "Book 2");
        assert_eq!(records[0].cover_image_id, Some(1000));
        assert_eq!(records[1].cover_image_id, None);
    }

    #[test]
    fn test_stub_provider_records_calls() {
        let provider = StubProvider::with_titles(vec!["A".into(), "B".into(), "C".into()]);
        let titles = provider.suggest("abc", 2).unwrap();

        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(provider.suggest_calls(), vec![("abc".to_string(), 2)]);
        assert!(provider.search_calls().is_empty());
    }

    #[test]
    fn test_failing_provider() {
        let provider = StubProvider::failing();
        assert!(provider.search("x", None).is_err());
        assert!(provider.suggest("xyz", 5).is_err());
    }
}
