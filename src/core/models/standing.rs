//! Academic standing used as the basis for GPA projections

use super::grade::MAX_GRADE_POINTS;
use crate::core::error::GradeError;

/// Accumulated GPA and credit hours before the next term
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcademicStanding {
    current_gpa: f64,
    current_credit_hours: u32,
}

impl AcademicStanding {
    /// Create a validated standing
    ///
    /// # Errors
    /// Returns a range error if `current_gpa` is outside `[0, 4.0]` or
    /// `current_credit_hours` is zero.
    pub fn new(current_gpa: f64, current_credit_hours: u32) -> Result<Self, GradeError> {
        if !(0.0..=MAX_GRADE_POINTS).contains(&current_gpa) {
            return Err(GradeError::out_of_range(
                "current GPA",
                current_gpa,
                0.0,
                MAX_GRADE_POINTS,
            ));
        }
        if current_credit_hours == 0 {
            return Err(GradeError::NonPositiveHours {
                field: "current credit hours".to_string(),
                value: 0,
            });
        }
        Ok(Self {
            current_gpa,
            current_credit_hours,
        })
    }

    /// Current cumulative GPA
    #[must_use]
    pub const fn current_gpa(&self) -> f64 {
        self.current_gpa
    }

    /// Credit hours completed so far
    #[must_use]
    pub const fn current_credit_hours(&self) -> u32 {
        self.current_credit_hours
    }

    /// Quality points accumulated so far
    #[must_use]
    pub fn quality_points(&self) -> f64 {
        self.current_gpa * f64::from(self.current_credit_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    #[test]
    fn test_valid_standing() {
        let standing = AcademicStanding::new(3.0, 60).unwrap();
        assert!((standing.quality_points() - 180.0).abs() < f64::EPSILON);
        assert_eq!(standing.current_credit_hours(), 60);
    }

    #[test]
    fn test_gpa_bounds() {
        assert!(AcademicStanding::new(0.0, 1).is_ok());
        assert!(AcademicStanding::new(4.0, 1).is_ok());
        let err = AcademicStanding::new(4.01, 30).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(AcademicStanding::new(-0.1, 30).is_err());
        assert!(AcademicStanding::new(f64::NAN, 30).is_err());
    }

    #[test]
    fn test_zero_hours_rejected() {
        let err = AcademicStanding::new(3.2, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }
}
