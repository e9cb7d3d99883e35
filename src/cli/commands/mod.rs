//! CLI command handlers for `GpaCalc`.
//!
//! Each calculator validates its raw input, runs the grade engine and
//! renders a report. Failures are returned as ready-to-print messages.

pub mod config;
pub mod gpa;
pub mod projection;
pub mod weighted;

use gpa_calc::core::report::{Report, ReportFormat};
use gpa_calc::core::{ErrorKind, GradeError};
use gpa_calc::{error, info};
use std::path::Path;

/// Format a validation failure the way it is shown to the user
pub fn describe(err: &GradeError) -> String {
    let title = match err.kind() {
        ErrorKind::User => "Input error",
        ErrorKind::Range => "Value error",
        ErrorKind::WeightSum => "Weight error",
    };
    format!("✗ {title}: {err}")
}

/// Render `report` and print it, or write it to `output` when given
pub fn emit(report: &Report, format: ReportFormat, output: Option<&Path>) -> Result<(), String> {
    let generator = format.generator();
    if let Some(path) = output {
        generator.generate(report, path).map_err(|e| {
            error!("Failed to write {format} report to {}: {e}", path.display());
            format!("✗ Failed to write report to {}: {e}", path.display())
        })?;
        println!("✓ Report written to: {}", path.display());
        info!("{} report written to {}", report.title, path.display());
    } else {
        let content = generator
            .render(report)
            .map_err(|e| format!("✗ Failed to render {format} report: {e}"))?;
        print!("{content}");
    }
    Ok(())
}
