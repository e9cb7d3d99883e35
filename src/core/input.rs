//! Conversion of raw text input into typed values
//!
//! Everything a user types passes through here before reaching the engine, so
//! a missing or unparseable field is reported as a user error and no
//! calculation is attempted.

use crate::core::error::GradeError;
use crate::core::models::LetterGrade;

/// A course description parsed from `NAME,HOURS,GRADE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSpec {
    /// Course name
    pub name: String,
    /// Credit hours
    pub hours: u32,
    /// Letter grade
    pub grade: LetterGrade,
}

/// Return the trimmed value of a required field.
///
/// # Errors
/// Returns [`GradeError::MissingField`] if `raw` is `None`, empty or whitespace.
pub fn require<'a>(field: &str, raw: Option<&'a str>) -> Result<&'a str, GradeError> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| GradeError::MissingField(field.to_string()))
}

/// Check that every `(field, raw)` pair has a value.
///
/// Lets a calculator report the first missing field before it parses or
/// range-checks anything else.
///
/// # Errors
/// Returns [`GradeError::MissingField`] for the first absent or blank field.
pub fn require_all(fields: &[(&str, Option<&str>)]) -> Result<(), GradeError> {
    fields
        .iter()
        .try_for_each(|(field, raw)| require(field, *raw).map(|_| ()))
}

/// Parse a required decimal number.
///
/// # Errors
/// Returns a missing-field error for empty input and
/// [`GradeError::InvalidNumber`] for text that is not a finite number.
pub fn parse_number(field: &str, raw: Option<&str>) -> Result<f64, GradeError> {
    let value = require(field, raw)?;
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| GradeError::InvalidNumber {
            field: field.to_string(),
            raw: value.to_string(),
        })
}

/// Parse a required positive whole number of credit hours.
///
/// # Errors
/// Returns a missing-field or invalid-number error for bad text and
/// [`GradeError::NonPositiveHours`] for zero or negative values.
pub fn parse_hours(field: &str, raw: Option<&str>) -> Result<u32, GradeError> {
    let value = require(field, raw)?;
    let hours = value
        .parse::<i64>()
        .map_err(|_| GradeError::InvalidNumber {
            field: field.to_string(),
            raw: value.to_string(),
        })?;

    if hours <= 0 {
        return Err(GradeError::NonPositiveHours {
            field: field.to_string(),
            value: hours,
        });
    }
    u32::try_from(hours).map_err(|_| GradeError::InvalidNumber {
        field: field.to_string(),
        raw: value.to_string(),
    })
}

/// Parse a required letter grade.
///
/// # Errors
/// Returns a missing-field error for empty input and
/// [`GradeError::UnknownGrade`] for anything off the scale.
pub fn parse_grade(field: &str, raw: Option<&str>) -> Result<LetterGrade, GradeError> {
    let value = require(field, raw)?;
    value
        .parse::<LetterGrade>()
        .map_err(|_| GradeError::UnknownGrade {
            field: field.to_string(),
            raw: value.to_string(),
        })
}

/// Parse a course given as `NAME,HOURS,GRADE`.
///
/// The name is everything before the last two commas, so it may contain commas.
///
/// # Errors
/// Returns [`GradeError::MalformedCourse`] if the text does not have three parts
/// or the name is blank, and hour/grade errors for the other fields.
pub fn parse_course(spec: &str) -> Result<CourseSpec, GradeError> {
    let mut parts = spec.rsplitn(3, ',');
    let (Some(grade), Some(hours), Some(name)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(GradeError::MalformedCourse(spec.to_string()));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(GradeError::MalformedCourse(spec.to_string()));
    }

    Ok(CourseSpec {
        name: name.to_string(),
        hours: parse_hours(&format!("credit hours for '{name}'"), Some(hours))?,
        grade: parse_grade(&format!("grade for '{name}'"), Some(grade))?,
    })
}

/// Parse a comma-separated list of weights (e.g. `30,30,40`).
///
/// # Errors
/// Returns a missing-field or invalid-number error for any blank or bad entry.
pub fn parse_weights(raw: &str) -> Result<Vec<f64>, GradeError> {
    raw.split(',')
        .enumerate()
        .map(|(idx, part)| parse_number(&format!("weight {}", idx + 1), Some(part)))
        .collect()
}
