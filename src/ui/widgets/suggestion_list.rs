//! Suggestion dropdown shown below the search box

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Widget},
};

/// Dropdown listing suggested titles
pub struct SuggestionList<'a> {
    /// Suggested titles
    suggestions: &'a [String],
    /// Highlighted entry, `None` while the search box has focus
    cursor: Option<usize>,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> SuggestionList<'a> {
    /// Create a new suggestion dropdown
    #[must_use]
    pub const fn new(suggestions: &'a [String], cursor: Option<usize>, theme: &'a Theme) -> Self {
        Self {
            suggestions,
            cursor,
            theme,
        }
    }

    /// Height needed to show every suggestion, borders included
    #[must_use]
    pub fn height(&self) -> u16 {
        u16::try_from(self.suggestions.len()).unwrap_or(u16::MAX).saturating_add(2)
    }
}

impl Widget for SuggestionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = Rect {
            height: self.height().min(area.height),
            ..area
        };
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Suggestions ");

        let items: Vec<ListItem> = self
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, title)| {
                let is_cursor = self.cursor == Some(i);
                let marker = if is_cursor { "> " } else { "  " };
                let line = Line::from(vec![
                    Span::styled(marker, self.theme.focus_style()),
                    Span::raw(title.as_str()),
                ]);
                if is_cursor {
                    ListItem::new(line).style(self.theme.selected_style())
                } else {
                    ListItem::new(line)
                }
            })
            .collect();

        List::new(items).block(block).render(area, buf);
    }
}
