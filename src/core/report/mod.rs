//! Report generation for calculation results
//!
//! Each calculator builds a [`Report`] (a title, a table of inputs and a
//! result line) which is then rendered in the requested [`ReportFormat`].

pub mod formats;

use crate::core::engine::RequiredGrade;
use crate::core::models::{AcademicStanding, Course, LetterGrade, GRADE_SCALE};
use crate::core::schemes::{score_band, Scheme, SchemeResult, SCORE_BANDS};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat, TextReporter};

/// One table row in a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Row label
    pub label: String,
    /// Secondary description
    pub detail: String,
    /// Formatted value
    pub value: String,
}

impl ReportRow {
    /// Create a row
    #[must_use]
    pub fn new(label: impl Into<String>, detail: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: detail.into(),
            value: value.into(),
        }
    }
}

/// Rendered-ready summary of one calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Report heading
    pub title: String,
    /// Input table
    pub rows: Vec<ReportRow>,
    /// Label of the headline result
    pub result_label: String,
    /// Formatted headline result
    pub result: String,
    /// Extra line under the result; empty when there is nothing to add
    pub note: String,
}

fn num(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

fn grade_label(grade: LetterGrade) -> String {
    format!("{grade} ({:.1})", grade.points())
}

impl Report {
    /// Report for a cumulative GPA calculation
    #[must_use]
    pub fn cumulative(courses: &[Course], gpa: f64, decimals: usize) -> Self {
        let total_hours: u64 = courses.iter().map(|c| u64::from(c.credit_hours)).sum();
        Self {
            title: "Cumulative GPA".to_string(),
            rows: courses
                .iter()
                .map(|c| {
                    ReportRow::new(
                        c.name.clone(),
                        format!("{} hrs", c.credit_hours),
                        grade_label(c.grade),
                    )
                })
                .collect(),
            result_label: "Cumulative GPA".to_string(),
            result: num(gpa, decimals),
            note: format!("Total hours: {total_hours}"),
        }
    }

    /// Report for a weighted scheme, including each component's contribution
    #[must_use]
    pub fn scheme(scheme: Scheme, result: &SchemeResult, decimals: usize) -> Self {
        Self {
            title: scheme.name().to_string(),
            rows: result
                .components
                .iter()
                .map(|c| {
                    ReportRow::new(
                        c.label.clone(),
                        format!("{} x {}%", num(c.score, decimals), num(c.weight, 0)),
                        num(c.contribution(), decimals),
                    )
                })
                .collect(),
            result_label: scheme.name().to_string(),
            result: format!("{}%", num(result.total, decimals)),
            note: match (scheme, score_band(result.total)) {
                (Scheme::HighSchool, Some(band)) => {
                    format!("{} (band {})", result.rating, band.letter)
                }
                _ => result.rating.label().to_string(),
            },
        }
    }

    /// Report for a required-grade projection
    #[must_use]
    pub fn required(
        standing: &AcademicStanding,
        new_credit_hours: u32,
        target_gpa: f64,
        outcome: &RequiredGrade,
        decimals: usize,
    ) -> Self {
        let mut rows = standing_rows(standing, new_credit_hours, decimals);
        rows.push(ReportRow::new("Target GPA", "", num(target_gpa, decimals)));

        let result = match outcome {
            RequiredGrade::Unreachable { .. } => "Not possible".to_string(),
            RequiredGrade::TriviallyMet { .. } => "Any grade".to_string(),
            RequiredGrade::Achievable { grade, .. } => grade.to_string(),
        };
        let note = match outcome {
            RequiredGrade::Unreachable { required_average } => format!(
                "The target needs an average of {} points, above the 4.0 maximum",
                num(*required_average, decimals)
            ),
            RequiredGrade::TriviallyMet { .. } => {
                "The target GPA is reached whatever grade is earned".to_string()
            }
            RequiredGrade::Achievable {
                required_average, ..
            } => format!(
                "At least {} points on average",
                num(*required_average, decimals)
            ),
        };

        Self {
            title: "Required grade".to_string(),
            rows,
            result_label: "Required grade".to_string(),
            result,
            note,
        }
    }

    /// Report for a possible-GPA projection
    #[must_use]
    pub fn possible(
        standing: &AcademicStanding,
        new_credit_hours: u32,
        projected: LetterGrade,
        gpa: f64,
        decimals: usize,
    ) -> Self {
        let mut rows = standing_rows(standing, new_credit_hours, decimals);
        rows.push(ReportRow::new("Projected grade", "", grade_label(projected)));

        Self {
            title: "Expected GPA".to_string(),
            rows,
            result_label: "Expected GPA".to_string(),
            result: num(gpa, decimals),
            note: format!(
                "Total hours: {}",
                u64::from(standing.current_credit_hours()) + u64::from(new_credit_hours)
            ),
        }
    }

    /// Report listing the grade-point scale
    #[must_use]
    pub fn grade_scale() -> Self {
        Self {
            title: "Grade scale".to_string(),
            rows: GRADE_SCALE
                .iter()
                .map(|(grade, points)| ReportRow::new(grade.as_str(), "", format!("{points:.1}")))
                .collect(),
            result_label: "Maximum".to_string(),
            result: "4.0".to_string(),
            note: String::new(),
        }
    }

    /// Report listing the high-school letter bands
    #[must_use]
    pub fn score_bands() -> Self {
        Self {
            title: "Score bands".to_string(),
            rows: SCORE_BANDS
                .iter()
                .map(|band| {
                    ReportRow::new(
                        band.letter.to_string(),
                        "",
                        format!("{}-{}", band.min, band.max),
                    )
                })
                .collect(),
            result_label: "Lowest banded score".to_string(),
            result: "50".to_string(),
            note: "Scores below 50 have no band".to_string(),
        }
    }
}

fn standing_rows(
    standing: &AcademicStanding,
    new_credit_hours: u32,
    decimals: usize,
) -> Vec<ReportRow> {
    vec![
        ReportRow::new("Current GPA", "", num(standing.current_gpa(), decimals)),
        ReportRow::new(
            "Completed hours",
            "",
            standing.current_credit_hours().to_string(),
        ),
        ReportRow::new("New hours", "", new_credit_hours.to_string()),
    ]
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.title)?;
        let width = self.rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
        for row in &self.rows {
            if row.detail.is_empty() {
                writeln!(f, "  {:<width$}  {}", row.label, row.value)?;
            } else {
                writeln!(f, "  {:<width$}  {}  {}", row.label, row.detail, row.value)?;
            }
        }
        writeln!(f, "{}: {}", self.result_label, self.result)?;
        if !self.note.is_empty() {
            writeln!(f, "{}", self.note)?;
        }
        Ok(())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render(&self, report: &Report) -> Result<String, Box<dyn Error>>;

    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if rendering or writing the file fails
    fn generate(&self, report: &Report, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(report)?;
        fs::write(output_path, content)?;
        Ok(())
    }
}
