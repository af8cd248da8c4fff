//! Report formatting for headless renders.
//!
//! Pure functions: (RenderReport, OutputFormat) → String. No I/O.

use crate::types::{OutputFormat, RenderReport};

/// Format a render report for output.
pub fn format_report(report: &RenderReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Human => Ok(format_human(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

fn format_human(report: &RenderReport) -> String {
    format!("{}\n", report.label)
}

// ============================================================================
// TESTS
// ============================================================================
