//! Header with the app name and the search box

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const APP_NAME: &str = "NovelHunt";
const PLACEHOLDER: &str = "Search for books...";

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Cursor position in the query (byte offset on a char boundary)
    cursor: usize,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the widget has focus
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            theme,
            focused: true,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn cursor_span(&self) -> Span<'static> {
        if self.focused {
            Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK))
        } else {
            Span::raw("")
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [brand_area, input_area] =
            Layout::horizontal([Constraint::Length(13), Constraint::Min(10)]).areas(area);

        Paragraph::new(Line::from(Span::styled(APP_NAME, self.theme.brand_style())))
            .centered()
            .render(
                Rect {
                    y: brand_area.y + brand_area.height / 2,
                    height: 1,
                    ..brand_area
                },
                buf,
            );

        let border_style = if self.focused {
            self.theme.focus_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search ")
            .title_bottom(
                Line::styled(" Enter: Find Books ", self.theme.dimmed_style()).right_aligned(),
            );

        let inner = block.inner(input_area);
        block.render(input_area, buf);

        let mut spans = Vec::new();
        if self.query.is_empty() {
            spans.push(self.cursor_span());
            spans.push(Span::styled(PLACEHOLDER, self.theme.dimmed_style()));
        } else {
            let (before, after) = self.query.split_at(self.cursor.min(self.query.len()));
            spans.push(Span::raw(before));
            spans.push(self.cursor_span());
            spans.push(Span::raw(after));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
