//! Letter grades and the grade-point scale

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A letter grade on the 4.0 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    /// A+ (4.0)
    #[serde(rename = "A+")]
    APlus,
    /// A (4.0)
    A,
    /// B+ (3.5)
    #[serde(rename = "B+")]
    BPlus,
    /// B (3.0)
    B,
    /// C+ (2.5)
    #[serde(rename = "C+")]
    CPlus,
    /// C (2.0)
    C,
    /// D+ (1.5)
    #[serde(rename = "D+")]
    DPlus,
    /// D (1.0)
    D,
    /// F (0.0)
    F,
}

/// Fixed grade-point table, highest grade first.
///
/// A+ and A share 4.0, so point values are not strictly decreasing.
pub const GRADE_SCALE: [(LetterGrade, f64); 9] = [
    (LetterGrade::APlus, 4.0),
    (LetterGrade::A, 4.0),
    (LetterGrade::BPlus, 3.5),
    (LetterGrade::B, 3.0),
    (LetterGrade::CPlus, 2.5),
    (LetterGrade::C, 2.0),
    (LetterGrade::DPlus, 1.5),
    (LetterGrade::D, 1.0),
    (LetterGrade::F, 0.0),
];

/// Highest grade-point value on the scale
pub const MAX_GRADE_POINTS: f64 = 4.0;

impl LetterGrade {
    /// Grade-point value of this grade
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::APlus | Self::A => 4.0,
            Self::BPlus => 3.5,
            Self::B => 3.0,
            Self::CPlus => 2.5,
            Self::C => 2.0,
            Self::DPlus => 1.5,
            Self::D => 1.0,
            Self::F => 0.0,
        }
    }

    /// Canonical letter form (e.g. "B+")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Iterate over every grade in scale order
    pub fn all() -> impl Iterator<Item = Self> {
        GRADE_SCALE.iter().map(|(grade, _)| *grade)
    }
}

impl FromStr for LetterGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Self::all()
            .find(|grade| grade.as_str() == normalized)
            .ok_or_else(|| format!("Unknown letter grade: {s}"))
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
