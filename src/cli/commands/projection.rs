//! Required-grade and possible-GPA commands

use super::{describe, emit};
use gpa_calc::config::Config;
use gpa_calc::core::input::{parse_grade, parse_hours, parse_number, require_all};
use gpa_calc::core::models::{AcademicStanding, LetterGrade};
use gpa_calc::core::report::Report;
use gpa_calc::core::{possible_gpa, required_future_grade, GradeError, RequiredGrade};
use gpa_calc::info;
use std::path::Path;

/// Raw standing inputs shared by both projections
pub struct StandingInput<'a> {
    /// Current GPA text
    pub current_gpa: Option<&'a str>,
    /// Completed hours text
    pub current_hours: Option<&'a str>,
    /// Upcoming hours text
    pub new_hours: Option<&'a str>,
}

impl StandingInput<'_> {
    fn fields(&self) -> [(&'static str, Option<&str>); 3] {
        [
            (CURRENT_GPA, self.current_gpa),
            (CURRENT_HOURS, self.current_hours),
            (NEW_HOURS, self.new_hours),
        ]
    }
}

const CURRENT_GPA: &str = "current GPA";
const CURRENT_HOURS: &str = "current hours";
const NEW_HOURS: &str = "new hours";

/// Parse the standing fields; range checks are left to the caller.
fn parse_standing(input: &StandingInput) -> Result<(f64, u32, u32), GradeError> {
    let gpa = parse_number(CURRENT_GPA, input.current_gpa)?;
    let hours = parse_hours(CURRENT_HOURS, input.current_hours)?;
    let new_hours = parse_hours(NEW_HOURS, input.new_hours)?;
    Ok((gpa, hours, new_hours))
}

fn evaluate_required(
    input: &StandingInput,
    target: Option<&str>,
) -> Result<(AcademicStanding, u32, f64, RequiredGrade), GradeError> {
    let [gpa, hours, new_hours] = input.fields();
    require_all(&[gpa, hours, new_hours, ("target GPA", target)])?;

    let (gpa, hours, new_hours) = parse_standing(input)?;
    let target_gpa = parse_number("target GPA", target)?;
    let standing = AcademicStanding::new(gpa, hours)?;
    let outcome = required_future_grade(&standing, new_hours, target_gpa)?;
    Ok((standing, new_hours, target_gpa, outcome))
}

fn evaluate_possible(
    input: &StandingInput,
    grade: Option<&str>,
) -> Result<(AcademicStanding, u32, LetterGrade, f64), GradeError> {
    let [gpa, hours, new_hours] = input.fields();
    require_all(&[gpa, hours, new_hours, ("grade", grade)])?;

    let (gpa, hours, new_hours) = parse_standing(input)?;
    let grade = parse_grade("grade", grade)?;
    let standing = AcademicStanding::new(gpa, hours)?;
    let projected = possible_gpa(&standing, new_hours, grade);
    Ok((standing, new_hours, grade, projected))
}

/// Run the required-grade calculator.
pub fn run_required(
    input: &StandingInput,
    target: Option<&str>,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let (standing, new_hours, target_gpa, outcome) =
        evaluate_required(input, target).map_err(|e| describe(&e))?;

    info!(
        "Required grade for target {target_gpa}: {outcome} (average {:.4})",
        outcome.required_average()
    );
    let report = Report::required(
        &standing,
        new_hours,
        target_gpa,
        &outcome,
        config.display.decimals,
    );
    emit(&report, config.report_format(), output)
}

/// Run the possible-GPA calculator.
pub fn run_possible(
    input: &StandingInput,
    grade: Option<&str>,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let (standing, new_hours, grade, gpa) =
        evaluate_possible(input, grade).map_err(|e| describe(&e))?;

    info!("Expected GPA with {grade} over {new_hours} hours: {gpa:.4}");
    let report = Report::possible(&standing, new_hours, grade, gpa, config.display.decimals);
    emit(&report, config.report_format(), output)
}
