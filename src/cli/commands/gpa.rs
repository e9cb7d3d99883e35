//! Cumulative GPA and grade table commands

use super::{describe, emit};
use gpa_calc::config::Config;
use gpa_calc::core::input::parse_course;
use gpa_calc::core::models::CourseList;
use gpa_calc::core::report::Report;
use gpa_calc::core::{cumulative_gpa, GradeError};
use gpa_calc::{info, verbose};
use std::path::Path;

/// Run the cumulative GPA calculator.
///
/// # Arguments
/// * `specs` - Courses as `NAME,HOURS,GRADE`
/// * `output` - Optional report file
/// * `config` - Display settings
pub fn run(specs: &[String], output: Option<&Path>, config: &Config) -> Result<(), String> {
    let list = build_course_list(specs).map_err(|e| describe(&e))?;
    let gpa = cumulative_gpa(list.courses()).map_err(|e| describe(&e))?;

    info!(
        "Cumulative GPA {gpa:.4} over {} courses ({} hours)",
        list.len(),
        list.total_credit_hours()
    );
    let report = Report::cumulative(list.courses(), gpa, config.display.decimals);
    emit(&report, config.report_format(), output)
}

fn build_course_list(specs: &[String]) -> Result<CourseList, GradeError> {
    let mut list = CourseList::new();
    for raw in specs {
        let spec = parse_course(raw)?;
        let id = list.add(spec.name, spec.hours, spec.grade);
        verbose!("✓ Added course #{id}: {raw}");
    }
    Ok(list)
}

/// Print the grade-point table.
pub fn run_grades(output: Option<&Path>, config: &Config) -> Result<(), String> {
    emit(&Report::grade_scale(), config.report_format(), output)
}
