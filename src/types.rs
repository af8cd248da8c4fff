//! Shared data types: output format, TUI configuration, render reports.

use serde::{Deserialize, Serialize};

use crate::button::Button;

// ============================================================================
// ENUMS
// ============================================================================

/// Output format for the headless render report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The label on a single line.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// CONFIG
// ============================================================================

/// Configuration for the interactive terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuiConfig {
    /// Capture mouse events so clicking the button activates it.
    pub mouse: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        TuiConfig { mouse: true }
    }
}

// ============================================================================
// REPORTS
// ============================================================================

/// Snapshot of a button: how many activations, and what it displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderReport {
    pub clicks: u64,
    pub label: String,
}

impl RenderReport {
    pub fn from_button(button: &Button) -> Self {
        RenderReport {
            clicks: button.count(),
            label: button.label(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_defaults_to_human() {
        assert_eq!(OutputFormat::default(), OutputFormat::Human);
    }

    #[test]
    fn tui_config_enables_mouse_by_default() {
        assert!(TuiConfig::default().mouse);
    }

    #[test]
    fn report_from_fresh_button() {
        let button = Button::mount();
        let report = RenderReport::from_button(&button);
        assert_eq!(report.clicks, 0);
        assert_eq!(report.label, "esto es un boton 0");
    }

    #[test]
    fn report_tracks_activations() {
        let mut button = Button::mount();
        button.activate();
        button.activate();
        let report = RenderReport::from_button(&button);
        assert_eq!(report.clicks, 2);
        assert_eq!(report.label, "esto es un boton 2");
    }

    #[test]
    fn report_json_field_names() {
        let report = RenderReport {
            clicks: 3,
            label: "esto es un boton 3".into(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["clicks"], 3);
        assert_eq!(json["label"], "esto es un boton 3");
    }
}
