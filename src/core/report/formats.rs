//! Report format implementations
//!
//! Plain text goes through `Display`; Markdown and HTML are rendered from askama
//! templates in `templates/`.

use super::{Report, ReportGenerator};
use askama::Template;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain text for the terminal
    Text,
    /// Markdown table
    Markdown,
    /// Standalone HTML page
    Html,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }

    /// Generator for this format
    #[must_use]
    pub fn generator(&self) -> Box<dyn ReportGenerator> {
        match self {
            Self::Text => Box::new(TextReporter),
            Self::Markdown => Box::new(MarkdownReporter),
            Self::Html => Box::new(HtmlReporter),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "md" | "markdown" => Ok(Self::Markdown),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Markdown => write!(f, "markdown"),
            Self::Html => write!(f, "html"),
        }
    }
}

/// Plain-text report generator
pub struct TextReporter;

impl ReportGenerator for TextReporter {
    fn render(&self, report: &Report) -> Result<String, Box<dyn Error>> {
        Ok(report.to_string())
    }
}

mod filters {
    use std::fmt::Display;

    /// Make a value safe inside a Markdown table cell
    #[allow(clippy::unnecessary_wraps)]
    pub fn md_cell<T: Display>(value: T) -> askama::Result<String> {
        Ok(value.to_string().replace('|', "\\|").replace(['\r', '\n'], " "))
    }
}

#[derive(Template)]
#[template(path = "report.md", escape = "none")]
struct MarkdownTemplate<'a> {
    report: &'a Report,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl ReportGenerator for MarkdownReporter {
    fn render(&self, report: &Report) -> Result<String, Box<dyn Error>> {
        Ok(MarkdownTemplate { report }.render()?)
    }
}

#[derive(Template)]
#[template(path = "report.html")]
struct HtmlTemplate<'a> {
    report: &'a Report,
}

/// HTML report generator
pub struct HtmlReporter;

impl ReportGenerator for HtmlReporter {
    fn render(&self, report: &Report) -> Result<String, Box<dyn Error>> {
        Ok(HtmlTemplate { report }.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::ReportRow;

    fn sample() -> Report {
        Report {
            title: "Sample <report>".to_string(),
            rows: vec![ReportRow::new("Calculus", "3 hrs", "A (4.0)")],
            result_label: "Cumulative GPA".to_string(),
            result: "4.00".to_string(),
            note: "Total hours: 3".to_string(),
        }
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("md".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!("HTML".parse::<ReportFormat>(), Ok(ReportFormat::Html));
        assert_eq!("txt".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert!("pdf".parse::<ReportFormat>().is_err());
        assert_eq!(ReportFormat::Markdown.extension(), "md");
        assert_eq!(ReportFormat::Html.to_string(), "html");
    }

    #[test]
    fn test_markdown_render() {
        let out = MarkdownReporter.render(&sample()).unwrap();
        assert!(out.contains("# Sample <report>"));
        assert!(out.contains("| Calculus | 3 hrs | A (4.0) |"));
        assert!(out.contains("**Cumulative GPA:** 4.00"));
        assert!(out.contains("Total hours: 3"));
    }

    #[test]
    fn test_markdown_escapes_cell_pipes() {
        let mut report = sample();
        report.rows = vec![ReportRow::new("Theory | Practice", "3 hrs", "B (3.0)")];
        let out = MarkdownReporter.render(&report).unwrap();
        assert!(out.contains("| Theory \\| Practice | 3 hrs | B (3.0) |"));

        let row = out.lines().find(|l| l.contains("Theory")).unwrap();
        assert_eq!(row.matches(" | ").count(), 2);
    }

    #[test]
    fn test_html_render_escapes() {
        let out = HtmlReporter.render(&sample()).unwrap();
        assert!(out.contains("Sample &lt;report&gt;"));
        assert!(out.contains("<td>Calculus</td>"));
        assert!(out.contains("4.00"));
    }

    #[test]
    fn test_text_render() {
        let out = ReportFormat::Text.generator().render(&sample()).unwrap();
        assert!(out.starts_with("=== Sample <report> ==="));
        assert!(out.contains("Cumulative GPA: 4.00"));
    }
}
