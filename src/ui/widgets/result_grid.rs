//! Result grid widget
//!
//! Renders the body of a [`SearchView`]: a loading indicator, the error
//! message, the "no results" text, or a grid of book cards followed by the
//! "View All" hint.

use crate::ui::state::{Focus, UiState};
use crate::ui::theme::Theme;
use crate::ui::view::{Body, Card, NO_RESULTS_TEXT, SearchView};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Rows taken by one card, borders included
pub const CARD_HEIGHT: u16 = 6;

const LOADING_TEXT: &str = "Loading books...";
const VIEW_ALL_TEXT: &str = "[ View All ]  press v";

/// Grid of result cards
pub struct ResultGrid<'a> {
    /// View to render
    view: &'a SearchView,
    /// Cursor, scroll position and column count
    ui: &'a UiState,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> ResultGrid<'a> {
    /// Create a new result grid
    #[must_use]
    pub const fn new(view: &'a SearchView, ui: &'a UiState, theme: &'a Theme) -> Self {
        Self { view, ui, theme }
    }

    /// Number of card rows that fit in an area of the given height
    #[must_use]
    pub fn rows_fitting(height: u16) -> usize {
        // Border plus the "View All" line
        usize::from(height.saturating_sub(3) / CARD_HEIGHT).max(1)
    }

    fn render_message(area: Rect, buf: &mut Buffer, line: Line<'_>) {
        let y = area.y + area.height / 2;
        let row = Rect {
            y,
            height: area.height.min(2),
            ..area
        };
        Paragraph::new(line)
            .centered()
            .wrap(Wrap { trim: true })
            .render(row, buf);
    }

    fn render_card(&self, card: &Card, is_cursor: bool, area: Rect, buf: &mut Buffer) {
        let border_style = if is_cursor {
            self.theme.focus_style()
        } else {
            self.theme.border_style()
        };
        let mut block = Block::default().borders(Borders::ALL).border_style(border_style);
        if card.selected {
            block = block.style(self.theme.opened_style());
        }

        let title_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style().add_modifier(Modifier::BOLD)
        };

        let year = card.year.map(|y| y.to_string()).unwrap_or_default();
        let lines = vec![
            Line::from(Span::styled(card.title.as_str(), title_style)),
            Line::from(Span::styled(card.authors.as_str(), self.theme.author_style())),
            Line::from(Span::raw(year)),
            Line::from(Span::styled(card.cover_url.as_str(), self.theme.dimmed_style())),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }

    fn render_cards(&self, cards: &[Card], area: Rect, buf: &mut Buffer) {
        let columns = self.ui.columns;
        let rows = usize::from(area.height / CARD_HEIGHT);
        let focused = self.ui.focus == Focus::Results;

        let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows]).split(area);
        let ratio = Constraint::Ratio(1, u32::try_from(columns).unwrap_or(1));
        let column_constraints = vec![ratio; columns];

        for (row_offset, row_area) in row_areas.iter().enumerate() {
            let row = self.ui.scroll_row + row_offset;
            let cell_areas = Layout::horizontal(column_constraints.clone()).split(*row_area);
            for (column, cell_area) in cell_areas.iter().enumerate() {
                let index = row * columns + column;
                let Some(card) = cards.get(index) else {
                    return;
                };
                let is_cursor = focused && index == self.ui.result_cursor;
                self.render_card(card, is_cursor, *cell_area, buf);
            }
        }
    }
}

impl Widget for ResultGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Results ({}) ", self.view.result_count);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if self.ui.focus == Focus::Results {
                self.theme.focus_style()
            } else {
                self.theme.border_style()
            })
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let [cards_area, footer_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        match &self.view.body {
            Body::Loading => Self::render_message(
                cards_area,
                buf,
                Line::styled(LOADING_TEXT, self.theme.info_style()),
            ),
            Body::Error(message) => Self::render_message(
                cards_area,
                buf,
                Line::styled(message.as_str(), self.theme.error_style()),
            ),
            Body::NoResults => Self::render_message(cards_area, buf, Line::raw(NO_RESULTS_TEXT)),
            Body::Grid(cards) => self.render_cards(cards, cards_area, buf),
        }

        if self.view.show_view_all {
            Paragraph::new(Line::styled(VIEW_ALL_TEXT, self.theme.focus_style()))
                .centered()
                .render(footer_area, buf);
        }
    }
}
