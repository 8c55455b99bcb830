//! Interface state for the terminal UI
//!
//! Everything here is presentation-only: focus, cursors, scroll position and
//! transient status messages. The search itself lives in the controller's
//! `SearchState`; the search box text is read from there and edits are sent
//! back through `on_text_input`.

use std::time::{Duration, Instant};

/// Label of the genre entry that clears the filter
pub const ALL_GENRES_LABEL: &str = "All Genres";

/// Which part of the screen receives key events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Search box
    #[default]
    Search,
    /// Suggestion dropdown below the search box
    Suggestions,
    /// Genre selector row
    Genres,
    /// Result grid
    Results,
}

impl Focus {
    /// Next focus target for Tab
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Search | Self::Suggestions => Self::Genres,
            Self::Genres => Self::Results,
            Self::Results => Self::Search,
        }
    }

    /// Previous focus target for Shift-Tab
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Search | Self::Suggestions => Self::Results,
            Self::Genres => Self::Search,
            Self::Results => Self::Genres,
        }
    }

    /// Whether the search box (or its dropdown) is focused
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search | Self::Suggestions)
    }
}

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
}

/// Severity of a status line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Presentation state of the interactive UI
#[derive(Debug)]
pub struct UiState {
    /// Focused area
    pub focus: Focus,
    /// Current UI mode
    pub mode: Mode,
    /// Byte offset of the cursor in the search box text
    pub query_cursor: usize,
    /// Highlighted suggestion
    pub suggestion_cursor: usize,
    /// Highlighted genre; 0 is "All Genres", `i` is `genres[i - 1]`
    pub genre_cursor: usize,
    /// Highlighted card among the visible results
    pub result_cursor: usize,
    /// First grid row on screen
    pub scroll_row: usize,
    /// Number of grid rows that fit on screen (set during render)
    pub visible_rows: usize,
    /// Configured genres, without the "All Genres" entry
    pub genres: Vec<String>,
    /// Number of grid columns
    pub columns: usize,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
}

impl UiState {
    /// Create UI state for the given genre list and grid width
    #[must_use]
    pub fn new(genres: Vec<String>, columns: usize) -> Self {
        Self {
            focus: Focus::Search,
            mode: Mode::Normal,
            query_cursor: 0,
            suggestion_cursor: 0,
            genre_cursor: 0,
            result_cursor: 0,
            scroll_row: 0,
            visible_rows: 3,
            genres,
            columns: columns.max(1),
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
        }
    }

    /// Number of genre entries, including "All Genres"
    #[must_use]
    pub fn genre_count(&self) -> usize {
        self.genres.len() + 1
    }

    /// Display label of genre entry `index`
    #[must_use]
    pub fn genre_label(&self, index: usize) -> &str {
        match index {
            0 => ALL_GENRES_LABEL,
            i => self.genres.get(i - 1).map_or("", String::as_str),
        }
    }

    /// Filter value of genre entry `index`; empty for "All Genres"
    #[must_use]
    pub fn genre_value(&self, index: usize) -> &str {
        match index {
            0 => "",
            i => self.genres.get(i - 1).map_or("", String::as_str),
        }
    }

    /// Move the genre highlight left, wrapping around
    pub fn genre_left(&mut self) {
        let count = self.genre_count();
        self.genre_cursor = (self.genre_cursor + count - 1) % count;
    }

    /// Move the genre highlight right, wrapping around
    pub fn genre_right(&mut self) {
        self.genre_cursor = (self.genre_cursor + 1) % self.genre_count();
    }

    /// Move the suggestion highlight up; returns `false` at the top
    pub const fn suggestion_up(&mut self) -> bool {
        if self.suggestion_cursor == 0 {
            false
        } else {
            self.suggestion_cursor -= 1;
            true
        }
    }

    /// Move the suggestion highlight down within `count` suggestions
    pub const fn suggestion_down(&mut self, count: usize) {
        if self.suggestion_cursor + 1 < count {
            self.suggestion_cursor += 1;
        }
    }

    /// Move the card cursor one column left
    pub fn result_left(&mut self) {
        if self.result_cursor % self.columns > 0 {
            self.result_cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move the card cursor one column right within `count` cards
    pub fn result_right(&mut self, count: usize) {
        if (self.result_cursor + 1) % self.columns != 0 && self.result_cursor + 1 < count {
            self.result_cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move the card cursor one row up; returns `false` on the first row
    pub fn result_up(&mut self) -> bool {
        if self.result_cursor < self.columns {
            return false;
        }
        self.result_cursor -= self.columns;
        self.adjust_scroll();
        true
    }

    /// Move the card cursor one row down within `count` cards
    ///
    /// On a partial last row the cursor lands on the last card.
    pub fn result_down(&mut self, count: usize) {
        let row = self.result_cursor / self.columns;
        let last_row = count.saturating_sub(1) / self.columns;
        if count > 0 && row < last_row {
            self.result_cursor = (self.result_cursor + self.columns).min(count - 1);
            self.adjust_scroll();
        }
    }

    /// Keep cursors inside the current suggestion and card counts
    pub fn clamp_cursors(&mut self, suggestions: usize, cards: usize) {
        self.suggestion_cursor = self.suggestion_cursor.min(suggestions.saturating_sub(1));
        self.result_cursor = self.result_cursor.min(cards.saturating_sub(1));
        self.adjust_scroll();
    }

    /// Reset the card cursor after a new result set arrived
    pub const fn reset_results(&mut self) {
        self.result_cursor = 0;
        self.scroll_row = 0;
    }

    /// Adjust scroll row to keep the card cursor visible
    fn adjust_scroll(&mut self) {
        let row = self.result_cursor / self.columns;
        let visible = self.visible_rows.max(1);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + visible {
            self.scroll_row = row + 1 - visible;
        }
    }

    /// Insert a character at the cursor, returning the new text
    #[must_use]
    pub fn insert_char(&mut self, query: &str, c: char) -> String {
        let cursor = self.cursor_in(query);
        let mut text = query.to_string();
        text.insert(cursor, c);
        self.query_cursor = cursor + c.len_utf8();
        text
    }

    /// Remove the character before the cursor
    ///
    /// Returns `None` when there is nothing to remove.
    #[must_use]
    pub fn backspace(&mut self, query: &str) -> Option<String> {
        let cursor = self.cursor_in(query);
        let (start, _) = query[..cursor].char_indices().next_back()?;
        let mut text = query.to_string();
        text.remove(start);
        self.query_cursor = start;
        Some(text)
    }

    /// Delete the character under the cursor
    ///
    /// Returns `None` when the cursor is at the end.
    #[must_use]
    pub fn delete(&mut self, query: &str) -> Option<String> {
        let cursor = self.cursor_in(query);
        if cursor >= query.len() {
            return None;
        }
        let mut text = query.to_string();
        text.remove(cursor);
        self.query_cursor = cursor;
        Some(text)
    }

    /// Delete the word before the cursor
    ///
    /// Returns `None` when the cursor is at the start.
    #[must_use]
    pub fn delete_word(&mut self, query: &str) -> Option<String> {
        let cursor = self.cursor_in(query);
        if cursor == 0 {
            return None;
        }
        let start = query[..cursor].trim_end().rfind(' ').map_or(0, |space| space + 1);
        let mut text = query.to_string();
        text.drain(start..cursor);
        self.query_cursor = start;
        Some(text)
    }

    /// Move the cursor one character left
    pub fn cursor_left(&mut self, query: &str) {
        let cursor = self.cursor_in(query);
        self.query_cursor = query[..cursor].char_indices().next_back().map_or(0, |(i, _)| i);
    }

    /// Move the cursor one character right
    pub fn cursor_right(&mut self, query: &str) {
        let cursor = self.cursor_in(query);
        self.query_cursor = query[cursor..]
            .char_indices()
            .nth(1)
            .map_or(query.len(), |(i, _)| cursor + i);
    }

    /// Put the cursor after the last character
    pub const fn cursor_to_end(&mut self, query: &str) {
        self.query_cursor = query.len();
    }

    /// Cursor position clamped to a char boundary of `query`
    #[must_use]
    pub fn cursor_in(&self, query: &str) -> usize {
        let mut cursor = self.query_cursor.min(query.len());
        while !query.is_char_boundary(cursor) {
            cursor -= 1;
        }
        cursor
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(StatusMessage::new(level, text.into()));
    }

    /// Get non-expired messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Clean up expired messages
    pub fn cleanup_messages(&mut self) {
        self.messages.retain(|m| !m.is_expired(self.message_ttl));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genres() -> Vec<String> {
        vec!["Fiction".into(), "History".into()]
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::Search.next(), Focus::Genres);
        assert_eq!(Focus::Genres.next(), Focus::Results);
        assert_eq!(Focus::Results.next(), Focus::Search);
        assert_eq!(Focus::Suggestions.next(), Focus::Genres);
        assert_eq!(Focus::Search.previous(), Focus::Results);
        assert_eq!(Focus::Results.previous(), Focus::Genres);
    }

    #[test]
    fn test_genre_entries() {
        let state = UiState::new(genres(), 6);
        assert_eq!(state.genre_count(), 3);
        assert_eq!(state.genre_label(0), ALL_GENRES_LABEL);
        assert_eq!(state.genre_value(0), "");
        assert_eq!(state.genre_label(2), "History");
        assert_eq!(state.genre_value(2), "History");
    }

    #[test]
    fn test_genre_cursor_wraps() {
        let mut state = UiState::new(genres(), 6);
        state.genre_left();
        assert_eq!(state.genre_cursor, 2);
        state.genre_right();
        assert_eq!(state.genre_cursor, 0);
        state.genre_right();
        assert_eq!(state.genre_cursor, 1);
    }

    #[test]
    fn test_grid_navigation() {
        let mut state = UiState::new(genres(), 6);
        state.visible_rows = 2;

        state.result_right(18);
        assert_eq!(state.result_cursor, 1);
        state.result_left();
        state.result_left();
        assert_eq!(state.result_cursor, 0);

        for _ in 0..10 {
            state.result_right(18);
        }
        assert_eq!(state.result_cursor, 5);

        state.result_down(18);
        assert_eq!(state.result_cursor, 11);
        state.result_down(18);
        assert_eq!(state.result_cursor, 17);
        assert_eq!(state.scroll_row, 1);
        state.result_down(18);
        assert_eq!(state.result_cursor, 17);

        assert!(state.result_up());
        assert!(state.result_up());
        assert_eq!(state.result_cursor, 5);
        assert_eq!(state.scroll_row, 0);
        assert!(!state.result_up());
    }

    #[test]
    fn test_result_down_on_partial_row() {
        let mut state = UiState::new(genres(), 6);
        state.result_cursor = 4;
        state.result_down(8);
        assert_eq!(state.result_cursor, 7);
    }

    #[test]
    fn test_clamp_cursors() {
        let mut state = UiState::new(genres(), 6);
        state.result_cursor = 20;
        state.suggestion_cursor = 4;

        state.clamp_cursors(2, 3);
        assert_eq!(state.result_cursor, 2);
        assert_eq!(state.suggestion_cursor, 1);

        state.clamp_cursors(0, 0);
        assert_eq!(state.result_cursor, 0);
        assert_eq!(state.suggestion_cursor, 0);
    }

    #[test]
    fn test_query_editing() {
        let mut state = UiState::new(genres(), 6);

        let mut query = String::new();
        for c in "hello".chars() {
            query = state.insert_char(&query, c);
        }
        assert_eq!(query, "hello");
        assert_eq!(state.query_cursor, 5);

        query = state.backspace(&query).unwrap();
        assert_eq!(query, "hell");
        assert_eq!(state.query_cursor, 4);

        state.cursor_left(&query);
        state.cursor_left(&query);
        assert_eq!(state.query_cursor, 2);

        query = state.insert_char(&query, 'y');
        assert_eq!(query, "heyll");

        query = state.delete(&query).unwrap();
        assert_eq!(query, "heyl");

        state.cursor_to_end(&query);
        assert!(state.delete(&query).is_none());
    }

    #[test]
    fn test_backspace_at_start() {
        let mut state = UiState::new(genres(), 6);
        assert!(state.backspace("abc").is_none());
    }

    #[test]
    fn test_multibyte_editing() {
        let mut state = UiState::new(genres(), 6);
        let query = state.insert_char("", 'é');
        let query = state.insert_char(&query, 'ß');
        assert_eq!(state.query_cursor, 4);

        state.cursor_left(&query);
        assert_eq!(state.query_cursor, 2);
        state.cursor_right(&query);
        assert_eq!(state.query_cursor, 4);

        let query = state.backspace(&query).unwrap();
        assert_eq!(query, "é");
    }

    #[test]
    fn test_cursor_clamped_to_shorter_text() {
        let mut state = UiState::new(genres(), 6);
        state.query_cursor = 10;
        assert_eq!(state.cursor_in("abc"), 3);
        state.query_cursor = 1;
        assert_eq!(state.cursor_in("é"), 0);
    }

    #[test]
    fn test_delete_word() {
        let mut state = UiState::new(genres(), 6);
        state.query_cursor = "the lord of".len();

        let query = state.delete_word("the lord of").unwrap();
        assert_eq!(query, "the lord ");
        let query = state.delete_word(&query).unwrap();
        assert_eq!(query, "the ");
        let query = state.delete_word(&query).unwrap();
        assert_eq!(query, "");
        assert!(state.delete_word(&query).is_none());
    }

    #[test]
    fn test_messages() {
        let mut state = UiState::new(genres(), 6);
        state.add_message(MessageLevel::Success, "Copied");
        assert_eq!(state.active_messages().len(), 1);

        state.message_ttl = Duration::ZERO;
        std::thread::sleep(Duration::from_millis(2));
        assert!(state.active_messages().is_empty());
        state.cleanup_messages();
        assert!(state.messages.is_empty());
    }
}
