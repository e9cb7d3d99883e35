//! Core module for grade calculations

pub mod engine;
pub mod error;
pub mod input;
pub mod models;
pub mod report;
pub mod schemes;

pub use engine::{
    cumulative_gpa, possible_gpa, required_future_grade, weighted_average, RequiredGrade,
    WeightSumPolicy,
};
pub use error::{ErrorKind, GradeError};

/// Returns the current version of the `GpaCalc` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
