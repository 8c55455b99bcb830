//! Genre selector row

use crate::ui::state::UiState;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Row of genre choices; the active genre is bracketed
pub struct GenreBar<'a> {
    /// Genre list and highlight
    ui: &'a UiState,
    /// Genre currently applied to the search, empty for all genres
    active: &'a str,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> GenreBar<'a> {
    /// Create a new genre bar
    #[must_use]
    pub const fn new(ui: &'a UiState, active: &'a str, theme: &'a Theme) -> Self {
        Self { ui, active, theme }
    }
}

impl Widget for GenreBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.ui.focus == crate::ui::state::Focus::Genres;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if focused {
                self.theme.focus_style()
            } else {
                self.theme.border_style()
            })
            .title(" Filter by Genre ");

        let mut spans = Vec::new();
        for index in 0..self.ui.genre_count() {
            if index > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            let label = self.ui.genre_label(index);
            let is_active = self.ui.genre_value(index) == self.active;
            let text = if is_active {
                format!("[{label}]")
            } else {
                format!(" {label} ")
            };

            let mut style = if focused && index == self.ui.genre_cursor {
                self.theme.selected_style()
            } else {
                self.theme.normal_style()
            };
            if is_active {
                style = style.add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(text, style));
        }

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}
