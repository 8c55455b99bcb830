//! Terminal presentation layer
//!
//! Renders the search state with ratatui and feeds crossterm input back into
//! the search controller.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  key events   ┌──────────────────┐  FetchRequest  ┌──────────────────┐
//! │  events.rs   │ ────────────▶ │ SearchController │ ─────────────▶ │ ThreadDispatcher │
//! └──────────────┘               └──────────────────┘                └────────┬─────────┘
//!        ▲                          │ state     ▲ apply()                      │ worker thread
//!        │                          ▼           │                              ▼
//! ┌──────────────┐  SearchView ┌──────────┐  FetchOutcome (mpsc)     ┌────────────────┐
//! │   widgets    │ ◀────────── │ view.rs  │ ◀─────────────────────── │ SearchProvider │
//! └──────────────┘             └──────────┘                          └────────────────┘
//! ```
//!
//! [`view::build_view`] holds every rule about what is visible; widgets only
//! draw what it returns.

mod app;
mod error;
mod events;
mod state;
mod theme;
pub mod view;
pub mod widgets;

pub use app::{App, TICK};
pub use error::{Result, UiError};
pub use events::{EventResult, handle_key, poll_and_handle};
pub use state::{ALL_GENRES_LABEL, Focus, MessageLevel, Mode, StatusMessage, UiState};
pub use theme::Theme;
pub use view::{Body, Card, DetailView, SearchView, ViewOptions, build_view};
