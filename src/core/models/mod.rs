//! Data models for `GpaCalc`

pub mod component;
pub mod course;
pub mod grade;
pub mod standing;

pub use component::WeightedComponent;
pub use course::{Course, CourseList};
pub use grade::{LetterGrade, GRADE_SCALE};
pub use standing::AcademicStanding;
