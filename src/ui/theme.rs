//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Border color of unfocused controls.
    pub border: Color,
    /// Border color of the focused control.
    pub focus: Color,
    /// Plot frame color.
    pub frame: Color,
    /// Curve color.
    pub curve: Color,
    /// Cursor foreground color.
    pub cursor_fg: Color,
    /// Cursor background color.
    pub cursor_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                border: Color::Rgb(102, 92, 84),
                focus: Color::Rgb(250, 189, 47),
                frame: Color::Rgb(131, 165, 152),
                curve: Color::Rgb(142, 192, 124),
                cursor_fg: Color::Rgb(40, 40, 40),
                cursor_bg: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                border: Color::Rgb(213, 196, 161),
                focus: Color::Rgb(181, 118, 20),
                frame: Color::Rgb(7, 102, 120),
                curve: Color::Rgb(102, 123, 3),
                cursor_fg: Color::Rgb(251, 245, 234),
                cursor_bg: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
            },
        }
    }
}
