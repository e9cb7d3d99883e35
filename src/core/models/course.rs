//! Course model

use super::grade::LetterGrade;
use serde::{Deserialize, Serialize};

/// A graded course counted toward a cumulative GPA
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Identifier assigned when the course was added to a [`CourseList`]
    pub id: u64,

    /// Course name (e.g., "Calculus I")
    pub name: String,

    /// Credit hours, normally between 1 and 6
    pub credit_hours: u32,

    /// Final letter grade
    pub grade: LetterGrade,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `id` - Opaque identifier
    /// * `name` - Course name
    /// * `credit_hours` - Credit hours
    /// * `grade` - Letter grade earned
    #[must_use]
    pub const fn new(id: u64, name: String, credit_hours: u32, grade: LetterGrade) -> Self {
        Self {
            id,
            name,
            credit_hours,
            grade,
        }
    }

    /// Quality points earned (grade points x credit hours)
    #[must_use]
    pub fn quality_points(&self) -> f64 {
        self.grade.points() * f64::from(self.credit_hours)
    }
}

/// Ordered list of courses; insertion order is display order
#[derive(Debug, Clone, Default)]
pub struct CourseList {
    courses: Vec<Course>,
    next_id: u64,
}

impl CourseList {
    /// Create an empty course list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            courses: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a course and return its freshly assigned id
    pub fn add(&mut self, name: String, credit_hours: u32, grade: LetterGrade) -> u64 {
        // Default leaves next_id at 0; ids start at 1 either way
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        self.courses.push(Course::new(id, name, credit_hours, grade));
        id
    }

    /// Remove the course with the given id. Returns `true` if one was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.courses.len();
        self.courses.retain(|course| course.id != id);
        self.courses.len() != before
    }

    /// Courses in insertion order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the list holds no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Sum of credit hours across all courses
    #[must_use]
    pub fn total_credit_hours(&self) -> u64 {
        self.courses.iter().map(|c| u64::from(c.credit_hours)).sum()
    }
}
