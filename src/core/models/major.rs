//! Major model

use super::Course;
use serde::{Deserialize, Serialize};

/// Represents a major (degree program) and its required courses
///
/// The order of `required_courses` is the catalog/curricular order and is
/// significant: it determines default term placement in a roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Major {
    /// Major name (e.g., "Software Engineering")
    pub name: String,

    /// Required courses in catalog order
    pub required_courses: Vec<Course>,
}

impl Major {
    /// Create a new major with no required courses
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            required_courses: Vec::new(),
        }
    }

    /// Add a required course, preserving catalog order
    ///
    /// Courses already present (by normalized code) are not duplicated.
    pub fn add_course(&mut self, course: Course) {
        if !self.requires(&course.code) {
            self.required_courses.push(course);
        }
    }

    /// Whether the major requires the given course code
    #[must_use]
    pub fn requires(&self, code: &str) -> bool {
        self.required_courses.iter().any(|c| c.is_same(code))
    }

    /// Total number of required courses
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.required_courses.len()
    }
}
