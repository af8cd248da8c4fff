//! TUI color semantics and style constants.
//!
//! - Cyan: the focused, interactive button
//! - Bold: the button label
//! - Dim: de-emphasized text (unmounted placeholder, help line)

use ratatui::style::{Color, Modifier, Style};

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Border of the focused button.
pub const STYLE_BUTTON_BORDER: Style = Style::new().fg(Color::Cyan);

/// Button label text.
pub const STYLE_BUTTON_LABEL: Style = Style::new().add_modifier(Modifier::BOLD);

/// Placeholder shown while nothing is mounted.
pub const STYLE_PLACEHOLDER: Style = Style::new()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::ITALIC);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_border_is_interactive_cyan() {
        assert_eq!(STYLE_BUTTON_BORDER.fg, Some(Color::Cyan));
    }

    #[test]
    fn label_is_bold() {
        assert!(STYLE_BUTTON_LABEL.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn placeholder_is_italic() {
        assert!(STYLE_PLACEHOLDER.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn de_emphasized_styles_are_dark_gray() {
        assert_eq!(STYLE_PLACEHOLDER.fg, Some(Color::DarkGray));
        assert_eq!(STYLE_HELP.fg, Some(Color::DarkGray));
    }
}
