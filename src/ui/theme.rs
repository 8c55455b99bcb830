//! Color theme definitions for the terminal UI
//!
//! Defines colors and styles used throughout the application.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for the app name and focused borders
    pub accent: Color,
    /// Background color for the card under the cursor
    pub selection_bg: Color,
    /// Foreground color for the card under the cursor
    pub selection_fg: Color,
    /// Background for the card shown in the detail overlay
    pub opened_bg: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for author names
    pub author: Color,
    /// Color for field labels in the detail view
    pub label: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            accent: Color::LightBlue,
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            opened_bg: Color::DarkGray,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            author: Color::Magenta,
            label: Color::LightBlue,
        }
    }

    /// Style for the app name
    #[must_use]
    pub fn brand_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for the item under the cursor
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the card whose details are open
    #[must_use]
    pub fn opened_style(&self) -> Style {
        Style::default().bg(self.opened_bg)
    }

    /// Style for unselected items
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for focused borders and key names
    #[must_use]
    pub fn focus_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for warning messages
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for author names
    #[must_use]
    pub fn author_style(&self) -> Style {
        Style::default().fg(self.author)
    }

    /// Style for field labels
    #[must_use]
    pub fn label_style(&self) -> Style {
        Style::default().fg(self.label).add_modifier(Modifier::BOLD)
    }
}
