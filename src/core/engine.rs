//! Grade calculations
//!
//! Every function here is pure: results depend only on the arguments, and no
//! state is kept between calls.

use crate::core::error::GradeError;
use crate::core::models::grade::{GRADE_SCALE, MAX_GRADE_POINTS};
use crate::core::models::{AcademicStanding, Course, LetterGrade, WeightedComponent};
use crate::debug;
use std::fmt;

/// Target total for component weights
pub const WEIGHT_TOTAL: f64 = 100.0;

/// Default slack allowed when comparing a weight sum against 100
pub const DEFAULT_WEIGHT_TOLERANCE: f64 = 1e-9;

/// How strictly the weights of a weighted average must add up to 100
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightSumPolicy {
    /// Floating-point equality with 100
    Exact,
    /// Accept sums within the given absolute distance of 100
    Tolerance(f64),
}

impl WeightSumPolicy {
    /// Build a policy from a configured tolerance; zero or less means [`Self::Exact`]
    #[must_use]
    pub fn from_tolerance(tolerance: f64) -> Self {
        if tolerance > 0.0 {
            Self::Tolerance(tolerance)
        } else {
            Self::Exact
        }
    }

    /// Whether `total` counts as a valid weight sum
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn accepts(self, total: f64) -> bool {
        match self {
            Self::Exact => total == WEIGHT_TOTAL,
            Self::Tolerance(eps) => (total - WEIGHT_TOTAL).abs() <= eps,
        }
    }
}

impl Default for WeightSumPolicy {
    fn default() -> Self {
        Self::Tolerance(DEFAULT_WEIGHT_TOLERANCE)
    }
}

/// Outcome of a required-grade projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequiredGrade {
    /// The target needs an average above 4.0
    Unreachable {
        /// Grade-point average the new hours would need
        required_average: f64,
    },
    /// The target holds even with the lowest grade
    TriviallyMet {
        /// Grade-point average the new hours would need (negative)
        required_average: f64,
    },
    /// The lowest letter grade that reaches the target
    Achievable {
        /// Minimum sufficient letter grade
        grade: LetterGrade,
        /// Grade-point average the new hours would need
        required_average: f64,
    },
}

impl RequiredGrade {
    /// Required grade-point average at full precision
    #[must_use]
    pub const fn required_average(&self) -> f64 {
        match self {
            Self::Unreachable { required_average }
            | Self::TriviallyMet { required_average }
            | Self::Achievable {
                required_average, ..
            } => *required_average,
        }
    }

    /// The minimum sufficient grade, if the target is reachable and not already met
    #[must_use]
    pub const fn grade(&self) -> Option<LetterGrade> {
        match self {
            Self::Achievable { grade, .. } => Some(*grade),
            _ => None,
        }
    }
}

impl fmt::Display for RequiredGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable { required_average } => write!(
                f,
                "Not possible: the target needs an average of {required_average:.2} points"
            ),
            Self::TriviallyMet { .. } => {
                write!(f, "Target is met with any grade")
            }
            Self::Achievable {
                grade,
                required_average,
            } => write!(f, "{grade} ({required_average:.2} points at least)"),
        }
    }
}

/// Compute a cumulative GPA from graded courses.
///
/// # Errors
/// Returns [`GradeError::NoCourses`] for an empty slice and
/// [`GradeError::NonPositiveHours`] for a course with zero credit hours.
pub fn cumulative_gpa(courses: &[Course]) -> Result<f64, GradeError> {
    if courses.is_empty() {
        return Err(GradeError::NoCourses);
    }

    let mut total_points = 0.0;
    let mut total_hours = 0.0;
    for course in courses {
        if course.credit_hours == 0 {
            return Err(GradeError::NonPositiveHours {
                field: format!("credit hours for '{}'", course.name),
                value: 0,
            });
        }
        total_points += course.quality_points();
        total_hours += f64::from(course.credit_hours);
    }

    let gpa = total_points / total_hours;
    debug!(
        "cumulative GPA over {} courses: {total_points} points / {total_hours} hours = {gpa}",
        courses.len()
    );
    Ok(gpa)
}

/// Compute a weighted average of percentage scores.
///
/// Scores are checked first, then each weight, then the weight sum.
///
/// # Errors
/// Returns a range error for a score or weight outside `[0, 100]`, and
/// [`GradeError::WeightSum`] when the weights do not total 100 under `policy`.
pub fn weighted_average(
    components: &[WeightedComponent],
    policy: WeightSumPolicy,
) -> Result<f64, GradeError> {
    if let Some(bad) = components
        .iter()
        .find(|c| !(0.0..=WEIGHT_TOTAL).contains(&c.score))
    {
        return Err(GradeError::out_of_range(
            &format!("{} score", bad.label),
            bad.score,
            0.0,
            WEIGHT_TOTAL,
        ));
    }
    if let Some(bad) = components
        .iter()
        .find(|c| !(0.0..=WEIGHT_TOTAL).contains(&c.weight))
    {
        return Err(GradeError::out_of_range(
            &format!("{} weight", bad.label),
            bad.weight,
            0.0,
            WEIGHT_TOTAL,
        ));
    }

    let total_weight: f64 = components.iter().map(|c| c.weight).sum();
    if !policy.accepts(total_weight) {
        return Err(GradeError::WeightSum {
            total: total_weight,
        });
    }

    let average = components.iter().map(WeightedComponent::contribution).sum();
    debug!("weighted average of {} components = {average}", components.len());
    Ok(average)
}

/// Find the lowest letter grade needed over `new_credit_hours` to reach `target_gpa`.
///
/// # Errors
/// Returns a range error if `target_gpa` is outside `[0, 4.0]` or
/// `new_credit_hours` is zero.
pub fn required_future_grade(
    standing: &AcademicStanding,
    new_credit_hours: u32,
    target_gpa: f64,
) -> Result<RequiredGrade, GradeError> {
    if !(0.0..=MAX_GRADE_POINTS).contains(&target_gpa) {
        return Err(GradeError::out_of_range(
            "target GPA",
            target_gpa,
            0.0,
            MAX_GRADE_POINTS,
        ));
    }
    if new_credit_hours == 0 {
        return Err(GradeError::NonPositiveHours {
            field: "new credit hours".to_string(),
            value: 0,
        });
    }

    let total_hours =
        f64::from(standing.current_credit_hours()) + f64::from(new_credit_hours);
    let points_needed = target_gpa.mul_add(total_hours, -standing.quality_points());
    let required_average = points_needed / f64::from(new_credit_hours);
    debug!("points needed {points_needed}, required average {required_average}");

    if required_average > MAX_GRADE_POINTS {
        return Ok(RequiredGrade::Unreachable { required_average });
    }
    if required_average < 0.0 {
        return Ok(RequiredGrade::TriviallyMet { required_average });
    }

    Ok(lowest_sufficient_grade(required_average).map_or(
        RequiredGrade::Unreachable { required_average },
        |grade| RequiredGrade::Achievable {
            grade,
            required_average,
        },
    ))
}

/// Scan the whole scale for the smallest point value still `>= required`.
/// On a tie the grade listed later wins, so 4.0 reports A rather than A+.
fn lowest_sufficient_grade(required: f64) -> Option<LetterGrade> {
    let mut best: Option<(LetterGrade, f64)> = None;
    for (grade, points) in GRADE_SCALE {
        if points < required {
            continue;
        }
        if best.is_none_or(|(_, best_points)| points <= best_points) {
            best = Some((grade, points));
        }
    }
    best.map(|(grade, _)| grade)
}

/// GPA after `new_credit_hours` more hours all earned at `projected_grade`
#[must_use]
pub fn possible_gpa(
    standing: &AcademicStanding,
    new_credit_hours: u32,
    projected_grade: LetterGrade,
) -> f64 {
    let new_hours = f64::from(new_credit_hours);
    let total_points = projected_grade
        .points()
        .mul_add(new_hours, standing.quality_points());
    let total_hours = f64::from(standing.current_credit_hours()) + new_hours;
    total_points / total_hours
}
