//! Event handling for the terminal UI
//!
//! Translates key and mouse events into controller operations and UI state
//! changes. Side effects outside the search (quitting, opening a browser,
//! writing the clipboard) are returned as [`EventResult`]s for the event loop
//! to carry out.

use super::state::{Focus, Mode, UiState};
use super::view::shows_grid;
use crate::provider::ProviderLinks;
use crate::search::{FetchDispatcher, SearchController};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Leave the UI
    Quit,
    /// Open a URL in the default browser
    OpenInBrowser(String),
    /// Copy a URL to the clipboard
    CopyLink(String),
    /// No action taken
    Ignored,
}

/// Handle one key press
pub fn handle_key<D: FetchDispatcher>(
    controller: &mut SearchController<D>,
    ui: &mut UiState,
    links: &ProviderLinks,
    key: KeyEvent,
) -> EventResult {
    if key.kind != KeyEventKind::Press {
        return EventResult::Ignored;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return EventResult::Quit;
    }

    if ui.mode == Mode::Help {
        // Any key closes help
        ui.mode = Mode::Normal;
        return EventResult::Continue;
    }
    if controller.state().selected_record.is_some() {
        return handle_detail(controller, links, key);
    }

    if controller.state().is_loading {
        // The pending result fetch blocks input until it completes
        return match key.code {
            KeyCode::Esc => EventResult::Quit,
            _ => EventResult::Ignored,
        };
    }

    match key.code {
        KeyCode::F(1) => {
            ui.mode = Mode::Help;
            return EventResult::Continue;
        }
        KeyCode::Tab => {
            ui.focus = ui.focus.next();
            return EventResult::Continue;
        }
        KeyCode::BackTab => {
            ui.focus = ui.focus.previous();
            return EventResult::Continue;
        }
        _ => {}
    }

    match ui.focus {
        Focus::Search => handle_search(controller, ui, key),
        Focus::Suggestions => handle_suggestions(controller, ui, key),
        Focus::Genres => handle_genres(controller, ui, key),
        Focus::Results => handle_results(controller, ui, key),
    }
}

/// Keys while the detail overlay is open
fn handle_detail<D: FetchDispatcher>(
    controller: &mut SearchController<D>,
    links: &ProviderLinks,
    key: KeyEvent,
) -> EventResult {
    let Some(work_url) = controller.state().selected_record.as_ref().map(|r| links.work(r)) else {
        return EventResult::Ignored;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | 'x') => {
            controller.on_close_detail();
            EventResult::Continue
        }
        KeyCode::Char('o') => EventResult::OpenInBrowser(work_url),
        KeyCode::Char('y') => EventResult::CopyLink(work_url),
        _ => EventResult::Ignored,
    }
}

fn handle_search<D: FetchDispatcher>(
    controller: &mut SearchController<D>,
    ui: &mut UiState,
    key: KeyEvent,
) -> EventResult {
    let query = controller.state().query_text.clone();
    let edited = match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => return EventResult::Quit,
        (KeyCode::Enter, _) => {
            controller.on_submit_search();
            return EventResult::Continue;
        }
        (KeyCode::Down, _) => {
            if controller.state().suggestions.is_empty() || query.is_empty() {
                ui.focus = Focus::Results;
            } else {
                ui.focus = Focus::Suggestions;
                ui.suggestion_cursor = 0;
            }
            return EventResult::Continue;
        }
        (KeyCode::Left, _) => {
            ui.cursor_left(&query);
            return EventResult::Continue;
        }
        (KeyCode::Right, _) => {
            ui.cursor_right(&query);
            return EventResult::Continue;
        }
        (KeyCode::Home, _) => {
            ui.query_cursor = 0;
            return EventResult::Continue;
        }
        (KeyCode::End, _) => {
            ui.cursor_to_end(&query);
            return EventResult::Continue;
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            ui.query_cursor = 0;
            (!query.is_empty()).then(String::new)
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => ui.delete_word(&query),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            Some(ui.insert_char(&query, c))
        }
        (KeyCode::Backspace, _) => ui.backspace(&query),
        (KeyCode::Delete, _) => ui.delete(&query),
        _ => return EventResult::Ignored,
    };

    match edited {
        Some(text) => {
            controller.on_text_input(text);
            EventResult::Continue
        }
        None => EventResult::Ignored,
    }
}

fn handle_suggestions<D: FetchDispatcher>(
    controller: &mut SearchController<D>,
    ui: &mut UiState,
    key: KeyEvent,
) -> EventResult {
    let count = controller.state().suggestions.len();
    match key.code {
        KeyCode::Up => {
            if !ui.suggestion_up() {
                ui.focus = Focus::Search;
            }
            EventResult::Continue
        }
        KeyCode::Down => {
            ui.suggestion_down(count);
            EventResult::Continue
        }
        KeyCode::Enter => {
            let Some(suggestion) = controller.state().suggestions.get(ui.suggestion_cursor).cloned()
            else {
                ui.focus = Focus::Search;
                return EventResult::Continue;
            };
            ui.cursor_to_end(&suggestion);
            controller.on_suggestion_select(suggestion);
            ui.focus = Focus::Search;
            ui.reset_results();
            EventResult::Continue
        }
        KeyCode::Esc => {
            ui.focus = Focus::Search;
            EventResult::Continue
        }
        // Typing goes back to the search box
        _ => {
            ui.focus = Focus::Search;
            handle_search(controller, ui, key)
        }
    }
}

fn handle_genres<D: FetchDispatcher>(
    controller: &mut SearchController<D>,
    ui: &mut UiState,
    key: KeyEvent,
) -> EventResult {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            ui.genre_left();
            EventResult::Continue
        }
        KeyCode::Right | KeyCode::Char('l') => {
            ui.genre_right();
            EventResult::Continue
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let genre = ui.genre_value(ui.genre_cursor).to_string();
            controller.on_genre_select(genre);
            ui.reset_results();
            EventResult::Continue
        }
        KeyCode::Up => {
            ui.focus = Focus::Search;
            EventResult::Continue
        }
        KeyCode::Down => {
            ui.focus = Focus::Results;
            EventResult::Continue
        }
        KeyCode::Esc => EventResult::Quit,
        _ => EventResult::Ignored,
    }
}

fn handle_results<D: FetchDispatcher>(
    controller: &mut SearchController<D>,
    ui: &mut UiState,
    key: KeyEvent,
) -> EventResult {
    if key.code == KeyCode::Char('v') {
        let state = controller.state();
        if state.is_loading || !state.has_hidden_results() {
            return EventResult::Ignored;
        }
        controller.on_show_all();
        return EventResult::Continue;
    }

    if !shows_grid(controller.state()) {
        return match key.code {
            KeyCode::Esc => EventResult::Quit,
            KeyCode::Up => {
                ui.focus = Focus::Genres;
                EventResult::Continue
            }
            _ => EventResult::Ignored,
        };
    }

    let count = controller.state().visible_results().len();
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => ui.result_left(),
        KeyCode::Right | KeyCode::Char('l') => ui.result_right(count),
        KeyCode::Down | KeyCode::Char('j') => ui.result_down(count),
        KeyCode::Up | KeyCode::Char('k') => {
            if !ui.result_up() {
                ui.focus = Focus::Genres;
            }
        }
        KeyCode::Enter => {
            let record = controller.state().visible_results().get(ui.result_cursor).cloned();
            match record {
                Some(record) => controller.on_select_record(record),
                None => return EventResult::Ignored,
            }
        }
        KeyCode::Esc => return EventResult::Quit,
        _ => return EventResult::Ignored,
    }
    EventResult::Continue
}

/// Handle mouse events
fn handle_mouse<D: FetchDispatcher>(
    controller: &SearchController<D>,
    ui: &mut UiState,
    mouse: MouseEvent,
) -> EventResult {
    if ui.focus != Focus::Results || !shows_grid(controller.state()) {
        return EventResult::Ignored;
    }
    let count = controller.state().visible_results().len();
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            ui.result_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            ui.result_down(count);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle<D: FetchDispatcher>(
    controller: &mut SearchController<D>,
    ui: &mut UiState,
    links: &ProviderLinks,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(controller, ui, links, key),
        Event::Mouse(mouse) => handle_mouse(controller, ui, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
