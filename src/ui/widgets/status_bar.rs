//! Status bar widget for displaying messages

use crate::ui::state::{MessageLevel, StatusMessage};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget that displays the latest message and a result summary
pub struct StatusBar<'a> {
    /// Messages to display
    messages: &'a [&'a StatusMessage],
    /// Theme for styling
    theme: &'a Theme,
    /// Summary shown on the right (result count or loading)
    summary: String,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(messages: &'a [&'a StatusMessage], theme: &'a Theme, summary: String) -> Self {
        Self {
            messages,
            theme,
            summary,
        }
    }

    /// Get style for a message level
    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] = Layout::horizontal([
            Constraint::Percentage(75),
            Constraint::Percentage(25),
        ])
        .areas(inner);

        // Show the most recent message
        if let Some(msg) = self.messages.last() {
            let style = self.style_for_level(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(left, buf);
        }

        Paragraph::new(Line::styled(self.summary, self.theme.dimmed_style()))
            .right_aligned()
            .render(right, buf);
    }
}
