//! Interactive search screen
//!
//! Owns the terminal for the lifetime of the UI. Each tick drains completed
//! fetches into the controller, renders the derived view, then waits up to
//! [`TICK`] for one input event.

use super::error::{Result, UiError};
use super::events::{EventResult, poll_and_handle};
use super::state::{Focus, MessageLevel, Mode, UiState};
use super::theme::Theme;
use super::view::{Body, SearchView, ViewOptions, build_view};
use super::widgets::{
    DetailsModal, GenreBar, HelpBar, HelpOverlay, KeyHint, ResultGrid, SearchBar, StatusBar,
    SuggestionList,
};
use crate::config::NovelhuntConfig;
use crate::provider::{ProviderLinks, SearchProvider};
use crate::search::{
    ControllerSettings, FetchDispatcher, FetchKind, FetchOutcome, SearchController,
    ThreadDispatcher,
};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// Event poll timeout; also bounds how long a completed fetch waits to be shown
pub const TICK: Duration = Duration::from_millis(100);

/// Width of the app name column left of the search box
const BRAND_WIDTH: u16 = 13;

/// Interactive book search application
pub struct App {
    settings: ControllerSettings,
    links: ProviderLinks,
    genres: Vec<String>,
    columns: usize,
    theme: Theme,
    hints: Vec<KeyHint>,
}

impl App {
    /// Create the application from configuration
    #[must_use]
    pub fn new(config: &NovelhuntConfig) -> Self {
        Self {
            settings: ControllerSettings::from(config),
            links: ProviderLinks::from(config),
            genres: config.genres.clone(),
            columns: config.grid_columns,
            theme: Theme::default(),
            hints: HelpBar::default_hints(),
        }
    }

    /// Replace the query fetched at startup
    #[must_use]
    pub fn with_default_query(mut self, query: impl Into<String>) -> Self {
        self.settings.default_query = query.into();
        self
    }

    /// Run the UI until the user quits
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal cannot be set up, drawn to, or
    /// restored, or if reading input fails.
    pub fn run(&self, provider: Arc<dyn SearchProvider>) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal, provider);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            log::error!("Terminal cleanup failed: {e}");
        }

        result
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        provider: Arc<dyn SearchProvider>,
    ) -> Result<()> {
        let (dispatcher, outcomes) = ThreadDispatcher::new(provider);
        let mut controller = SearchController::new(self.settings.clone(), dispatcher);
        let mut ui = UiState::new(self.genres.clone(), self.columns);

        log::info!("Starting interactive search");
        controller.start();

        loop {
            Self::drain_outcomes(&mut controller, &mut ui, &outcomes);

            let cards = controller.state().visible_results().len();
            ui.clamp_cursors(controller.state().suggestions.len(), cards);
            ui.cleanup_messages();

            let view = build_view(
                controller.state(),
                &ViewOptions {
                    links: &self.links,
                    search_focused: ui.focus.is_search(),
                },
            );
            if ui.focus == Focus::Suggestions && !view.show_suggestions {
                ui.focus = Focus::Search;
            }

            terminal.draw(|frame| self.render(frame, &view, &mut ui))?;

            match poll_and_handle(&mut controller, &mut ui, &self.links, TICK)? {
                EventResult::Quit => break,
                EventResult::OpenInBrowser(url) => match open_link(&url) {
                    Ok(()) => ui.add_message(MessageLevel::Success, "Opened in browser"),
                    Err(e) => ui.add_message(MessageLevel::Error, e.to_string()),
                },
                EventResult::CopyLink(url) => match copy_link(&url) {
                    Ok(()) => ui.add_message(MessageLevel::Success, "Copied link to clipboard"),
                    Err(e) => ui.add_message(MessageLevel::Error, e.to_string()),
                },
                EventResult::Continue | EventResult::Ignored => {}
            }
        }

        log::info!("Leaving interactive search");
        Ok(())
    }

    /// Apply every completed fetch; a new result set moves the card cursor home
    fn drain_outcomes<D: FetchDispatcher>(
        controller: &mut SearchController<D>,
        ui: &mut UiState,
        outcomes: &Receiver<FetchOutcome>,
    ) {
        while let Ok(outcome) = outcomes.try_recv() {
            let kind = outcome.kind();
            if controller.apply(outcome) && kind == FetchKind::Results {
                ui.reset_results();
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame, view: &SearchView, ui: &mut UiState) {
        let [header, genres, results, status, footer] = Layout::vertical([
            Constraint::Length(3), // Search bar
            Constraint::Length(3), // Genre row
            Constraint::Min(6),    // Result grid
            Constraint::Length(3), // Status bar
            Constraint::Length(1), // Help bar
        ])
        .areas(frame.area());

        ui.visible_rows = ResultGrid::rows_fitting(results.height);

        let cursor = ui.cursor_in(&view.query);
        let search_bar =
            SearchBar::new(&view.query, cursor, &self.theme).focused(ui.focus.is_search());
        frame.render_widget(search_bar, header);

        frame.render_widget(GenreBar::new(ui, &view.selected_genre, &self.theme), genres);
        frame.render_widget(ResultGrid::new(view, ui, &self.theme), results);

        let messages = ui.active_messages();
        let summary = if matches!(view.body, Body::Loading) {
            "Loading...".to_string()
        } else {
            format!("{} book(s)", view.result_count)
        };
        frame.render_widget(StatusBar::new(&messages, &self.theme, summary), status);
        frame.render_widget(HelpBar::new(&self.hints, &self.theme), footer);

        // Overlays
        if view.show_suggestions {
            let cursor = (ui.focus == Focus::Suggestions).then_some(ui.suggestion_cursor);
            let dropdown = SuggestionList::new(&view.suggestions, cursor, &self.theme);
            let area = Rect {
                x: header.x + BRAND_WIDTH,
                y: header.bottom().saturating_sub(1),
                width: header.width.saturating_sub(BRAND_WIDTH),
                height: dropdown.height(),
            }
            .intersection(frame.area());
            frame.render_widget(dropdown, area);
        }
        if let Some(detail) = &view.detail {
            frame.render_widget(DetailsModal::new(detail, &self.theme), frame.area());
        }
        if ui.mode == Mode::Help {
            frame.render_widget(HelpOverlay::new(&self.theme), frame.area());
        }
    }
}

fn open_link(url: &str) -> Result<()> {
    log::debug!("Opening {url}");
    open::that(url).map_err(|e| UiError::BrowserError(e.to_string()))
}

fn copy_link(url: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| UiError::ClipboardError(e.to_string()))?;
    clipboard
        .set_text(url)
        .map_err(|e| UiError::ClipboardError(e.to_string()))
}
