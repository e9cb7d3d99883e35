//! Weighted score component

use serde::{Deserialize, Serialize};

/// Upper bound for scores and weights (percentages)
pub const MAX_PERCENT: f64 = 100.0;

/// A (score, weight) pair contributing to a weighted average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedComponent {
    /// Display label (e.g., "Aptitude test")
    pub label: String,
    /// Score in `[0, 100]`
    pub score: f64,
    /// Weight in percent, `[0, 100]`
    pub weight: f64,
}

impl WeightedComponent {
    /// Create a new component
    #[must_use]
    pub fn new(label: impl Into<String>, score: f64, weight: f64) -> Self {
        Self {
            label: label.into(),
            score,
            weight,
        }
    }

    /// Points this component adds to the weighted average
    #[must_use]
    pub fn contribution(&self) -> f64 {
        self.score * self.weight / MAX_PERCENT
    }
}
