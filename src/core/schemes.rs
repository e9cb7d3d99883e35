//! Weighted-average schemes: university admission score and high-school average
//!
//! Both schemes run the same weighted average over three components; they
//! differ only in component labels, default weights, and the rating bands used
//! to describe the result.

use crate::core::engine::{weighted_average, WeightSumPolicy};
use crate::core::error::GradeError;
use crate::core::models::WeightedComponent;
use std::fmt;
use std::str::FromStr;

/// Number of components in every scheme
pub const COMPONENT_COUNT: usize = 3;

/// A weighted-average calculator preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Composite admission score from aptitude test, achievement test and high-school grade
    Admission,
    /// Three-year high-school average
    HighSchool,
}

/// Qualitative description of a weighted result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    /// Excellent, upper band
    ExcellentHigh,
    /// Excellent
    Excellent,
    /// Very good, upper band
    VeryGoodHigh,
    /// Very good
    VeryGood,
    /// Good, upper band
    GoodHigh,
    /// Good
    Good,
    /// Acceptable, upper band
    AcceptableHigh,
    /// Acceptable
    Acceptable,
    /// Below passing
    Weak,
}

impl Rating {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ExcellentHigh => "Excellent (High)",
            Self::Excellent => "Excellent",
            Self::VeryGoodHigh => "Very Good (High)",
            Self::VeryGood => "Very Good",
            Self::GoodHigh => "Good (High)",
            Self::Good => "Good",
            Self::AcceptableHigh => "Acceptable (High)",
            Self::Acceptable => "Acceptable",
            Self::Weak => "Weak",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const ADMISSION_BANDS: [(f64, Rating); 4] = [
    (90.0, Rating::Excellent),
    (80.0, Rating::VeryGood),
    (70.0, Rating::Good),
    (60.0, Rating::Acceptable),
];

const HIGH_SCHOOL_BANDS: [(f64, Rating); 8] = [
    (95.0, Rating::ExcellentHigh),
    (90.0, Rating::Excellent),
    (85.0, Rating::VeryGoodHigh),
    (80.0, Rating::VeryGood),
    (75.0, Rating::GoodHigh),
    (70.0, Rating::Good),
    (65.0, Rating::AcceptableHigh),
    (60.0, Rating::Acceptable),
];

/// One row of the high-school letter-band table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBand {
    /// Band letter
    pub letter: char,
    /// Lowest score in the band
    pub min: f64,
    /// Highest score shown for the band
    pub max: f64,
}

/// Letter bands for percentage averages, highest first. Scores below 50 have no band.
pub const SCORE_BANDS: [ScoreBand; 5] = [
    ScoreBand { letter: 'A', min: 90.0, max: 100.0 },
    ScoreBand { letter: 'B', min: 80.0, max: 89.0 },
    ScoreBand { letter: 'C', min: 70.0, max: 79.0 },
    ScoreBand { letter: 'D', min: 60.0, max: 69.0 },
    ScoreBand { letter: 'E', min: 50.0, max: 59.0 },
];

/// Letter band containing `score`, if any
///
/// Scores between two listed ranges (e.g. 89.5) fall into the lower band.
#[must_use]
pub fn score_band(score: f64) -> Option<ScoreBand> {
    SCORE_BANDS.iter().find(|band| score >= band.min).copied()
}

/// Result of evaluating a scheme
#[derive(Debug, Clone, PartialEq)]
pub struct SchemeResult {
    /// Weighted total in percent
    pub total: f64,
    /// Rating band for the total
    pub rating: Rating,
    /// Components with their scores and weights, in scheme order
    pub components: Vec<WeightedComponent>,
}

impl SchemeResult {
    /// Per-component contribution to the total
    #[must_use]
    pub fn contributions(&self) -> Vec<(&str, f64)> {
        self.components
            .iter()
            .map(|c| (c.label.as_str(), c.contribution()))
            .collect()
    }
}

impl Scheme {
    /// Human-readable scheme name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Admission => "Admission score",
            Self::HighSchool => "High-school average",
        }
    }

    /// Component labels in input order
    #[must_use]
    pub const fn labels(self) -> [&'static str; COMPONENT_COUNT] {
        match self {
            Self::Admission => ["Aptitude test", "Achievement test", "High school"],
            Self::HighSchool => ["Year one", "Year two", "Year three"],
        }
    }

    /// Default weights in percent, matching [`Self::labels`]
    #[must_use]
    pub const fn default_weights(self) -> [f64; COMPONENT_COUNT] {
        match self {
            Self::Admission => [30.0, 30.0, 40.0],
            Self::HighSchool => [25.0, 35.0, 40.0],
        }
    }

    /// Rating band for a weighted total
    #[must_use]
    pub fn rate(self, score: f64) -> Rating {
        let bands: &[(f64, Rating)] = match self {
            Self::Admission => &ADMISSION_BANDS,
            Self::HighSchool => &HIGH_SCHOOL_BANDS,
        };
        bands
            .iter()
            .find(|(min, _)| score >= *min)
            .map_or(Rating::Weak, |(_, rating)| *rating)
    }

    /// Evaluate the scheme for the given scores
    ///
    /// `weights` falls back to [`Self::default_weights`] when `None`.
    ///
    /// # Errors
    /// Returns [`GradeError::ComponentCount`] if `scores` or `weights` do not have
    /// exactly three entries, plus any error from [`weighted_average`].
    pub fn evaluate(
        self,
        scores: &[f64],
        weights: Option<&[f64]>,
        policy: WeightSumPolicy,
    ) -> Result<SchemeResult, GradeError> {
        let defaults = self.default_weights();
        let weights = weights.unwrap_or(&defaults);

        for values in [scores, weights] {
            if values.len() != COMPONENT_COUNT {
                return Err(GradeError::ComponentCount {
                    scheme: self.name().to_string(),
                    expected: COMPONENT_COUNT,
                    actual: values.len(),
                });
            }
        }

        let components: Vec<WeightedComponent> = self
            .labels()
            .iter()
            .zip(scores.iter().zip(weights))
            .map(|(label, (score, weight))| WeightedComponent::new(*label, *score, *weight))
            .collect();

        let total = weighted_average(&components, policy)?;
        Ok(SchemeResult {
            total,
            rating: self.rate(total),
            components,
        })
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admission" => Ok(Self::Admission),
            "high-school" | "highschool" | "high_school" => Ok(Self::HighSchool),
            _ => Err(format!("Unknown scheme: {s}")),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
