//! Details modal widget for displaying a book record

use crate::ui::theme::Theme;
use crate::ui::view::DetailView;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Details modal widget that displays book information
pub struct DetailsModal<'a> {
    /// Book details to display
    details: &'a DetailView,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> DetailsModal<'a> {
    /// Create a new details modal
    #[must_use]
    pub const fn new(details: &'a DetailView, theme: &'a Theme) -> Self {
        Self { details, theme }
    }

    /// Calculate centered area for the modal
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height.min(90)) / 2),
            Constraint::Percentage(height.min(90)),
            Constraint::Percentage((100 - height.min(90)) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width.min(90)) / 2),
            Constraint::Percentage(width.min(90)),
            Constraint::Percentage((100 - width.min(90)) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn field(&self, label: &'static str, value: &str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<17}"), self.theme.label_style()),
            Span::raw(value.to_string()),
        ])
    }

    /// Build content lines for the modal
    fn build_content(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                self.details.title.clone(),
                self.theme.brand_style(),
            )),
            Line::from("─".repeat(70)),
            Line::default(),
            self.field("Author:", &self.details.authors),
            self.field("First Published:", &self.details.first_published),
            self.field("Publisher:", &self.details.publishers),
            self.field("Language:", &self.details.languages),
            self.field("Pages:", &self.details.pages),
            Line::default(),
            self.field("Cover:", &self.details.cover_url),
            self.field("Link:", &self.details.work_url),
            Line::default(),
            Line::from("─".repeat(70)),
            Line::from(Span::styled(
                "o: open in browser   y: copy link   Esc: close",
                self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
            )),
        ]
    }
}

impl Widget for DetailsModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(70, 60, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focus_style())
            .title(" Book Details ")
            .title_alignment(Alignment::Center);

        let paragraph = Paragraph::new(self.build_content())
            .block(block)
            .wrap(Wrap { trim: false });
        paragraph.render(popup_area, buf);
    }
}
