//! Help overlay widget for displaying the full keybind reference

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn section(&self, title: &'static str) -> Line<'static> {
        Line::styled(title, self.theme.focus_style().add_modifier(Modifier::UNDERLINED))
    }

    /// Create a help line with key and description
    fn help_line(&self, key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{key:<14}"), self.theme.info_style()),
            Span::raw(desc),
        ])
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'static>> {
        vec![
            Line::default(),
            self.section("  Search box"),
            Line::default(),
            self.help_line("  Type", "Edit query (3+ chars suggest titles)"),
            self.help_line("  Enter", "Find books"),
            self.help_line("  ↓", "Enter suggestions"),
            self.help_line("  Ctrl+U", "Clear query"),
            self.help_line("  Ctrl+W", "Delete word"),
            Line::default(),
            self.section("  Genres and results"),
            Line::default(),
            self.help_line("  TAB/S-TAB", "Cycle focus"),
            self.help_line("  ←/→", "Pick genre / move in grid"),
            self.help_line("  Enter", "Apply genre / open details"),
            self.help_line("  v", "View all results"),
            Line::default(),
            self.section("  Details"),
            Line::default(),
            self.help_line("  o", "Open in browser"),
            self.help_line("  y", "Copy link"),
            self.help_line("  ESC", "Close"),
            Line::default(),
            Line::styled("  Press any key to close", self.theme.dimmed_style()),
            Line::default(),
        ]
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 70, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focus_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        let paragraph = Paragraph::new(self.build_content()).block(block);
        paragraph.render(popup_area, buf);
    }
}
