//! Ratatui widgets for the search screen

mod details_modal;
mod genre_bar;
mod help_bar;
mod help_overlay;
mod result_grid;
mod search_bar;
mod status_bar;
mod suggestion_list;

pub use details_modal::DetailsModal;
pub use genre_bar::GenreBar;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use result_grid::{CARD_HEIGHT, ResultGrid};
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
pub use suggestion_list::SuggestionList;
