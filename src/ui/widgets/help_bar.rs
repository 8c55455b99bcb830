//! Footer with the app name and keybind hints

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// Key combination (e.g., "TAB", "F1")
    pub key: String,
    /// Action description (e.g., "focus", "help")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Default hints for the search screen
    #[must_use]
    pub fn default_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("TAB", "focus"),
            KeyHint::new("Enter", "search/open"),
            KeyHint::new("←↑↓→", "move"),
            KeyHint::new("v", "view all"),
            KeyHint::new("ESC", "quit"),
            KeyHint::new("F1", "help"),
        ]
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled("NovelHunt", self.theme.brand_style()),
            Span::styled("  │  ", self.theme.dimmed_style()),
        ];

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.focus_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
