//! Validation failures raised by the grade engine and its input boundary

use thiserror::Error;

/// Broad category of a [`GradeError`], used by the CLI to pick a message prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required input is missing or could not be understood
    User,
    /// A score, GPA or hour count lies outside its allowed bounds
    Range,
    /// Component weights do not add up to 100
    WeightSum,
}

/// Errors returned by engine operations and input parsing
///
/// None of these are fatal: they are reported to the user and the calculation
/// is simply not performed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// A required field was left empty
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A numeric field could not be parsed
    #[error("invalid number for {field}: '{raw}'")]
    InvalidNumber {
        /// Field name
        field: String,
        /// Text that failed to parse
        raw: String,
    },

    /// A letter grade outside the fixed scale
    #[error("unknown letter grade for {field}: '{raw}' (expected one of A+, A, B+, B, C+, C, D+, D, F)")]
    UnknownGrade {
        /// Field name
        field: String,
        /// Text that failed to parse
        raw: String,
    },

    /// A course specification that is not `NAME,HOURS,GRADE`
    #[error("malformed course '{0}': expected NAME,HOURS,GRADE")]
    MalformedCourse(String),

    /// Cumulative GPA was requested without any courses
    #[error("no courses to calculate; add at least one course first")]
    NoCourses,

    /// A weighted scheme received the wrong number of scores or weights
    #[error("{scheme} expects {expected} values, got {actual}")]
    ComponentCount {
        /// Scheme name
        scheme: String,
        /// Number of components the scheme defines
        expected: usize,
        /// Number of values received
        actual: usize,
    },

    /// A value outside its closed range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Field name
        field: String,
        /// Offending value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// Credit hours must be a positive integer
    #[error("{field} must be a positive whole number of hours, got {value}")]
    NonPositiveHours {
        /// Field name
        field: String,
        /// Offending value
        value: i64,
    },

    /// Component weights do not total 100
    #[error("weights must sum to 100%, got {total}%")]
    WeightSum {
        /// Actual sum of the weights
        total: f64,
    },
}

impl GradeError {
    /// Category of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField(_)
            | Self::InvalidNumber { .. }
            | Self::UnknownGrade { .. }
            | Self::MalformedCourse(_)
            | Self::NoCourses
            | Self::ComponentCount { .. } => ErrorKind::User,
            Self::OutOfRange { .. } | Self::NonPositiveHours { .. } => ErrorKind::Range,
            Self::WeightSum { .. } => ErrorKind::WeightSum,
        }
    }

    pub(crate) fn out_of_range(field: &str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(GradeError::NoCourses.kind(), ErrorKind::User);
        assert_eq!(
            GradeError::MissingField("target".to_string()).kind(),
            ErrorKind::User
        );
        assert_eq!(
            GradeError::out_of_range("score", 120.0, 0.0, 100.0).kind(),
            ErrorKind::Range
        );
        assert_eq!(
            GradeError::WeightSum { total: 99.0 }.kind(),
            ErrorKind::WeightSum
        );
    }

    #[test]
    fn test_messages() {
        let err = GradeError::out_of_range("current GPA", 4.5, 0.0, 4.0);
        assert_eq!(err.to_string(), "current GPA must be between 0 and 4, got 4.5");

        let err = GradeError::WeightSum { total: 101.0 };
        assert_eq!(err.to_string(), "weights must sum to 100%, got 101%");
    }
}
