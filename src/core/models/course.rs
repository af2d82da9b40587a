//! Course model

use crate::core::matcher::normalize;
use serde::{Deserialize, Serialize};

/// Represents a required course in a major's catalog
///
/// Two `Course` values refer to the same entity iff their normalized codes
/// match; display strings like `"CMPE 102"` and `"cmpe102"` are the same
/// course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course code as displayed in the catalog (e.g., "CMPE 102")
    pub code: String,

    /// Course title (e.g., "Assembly Language Programming")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Course {
    /// Create a new course from its catalog code
    #[must_use]
    pub const fn new(code: String) -> Self {
        Self { code, title: None }
    }

    /// Create a new course with a title
    #[must_use]
    pub const fn with_title(code: String, title: String) -> Self {
        Self {
            code,
            title: Some(title),
        }
    }

    /// Get the identity key for lookups (normalized code)
    ///
    /// # Returns
    /// The code lowercased with all whitespace removed (e.g., "cmpe102")
    #[must_use]
    pub fn key(&self) -> String {
        normalize(&self.code)
    }

    /// Whether this course has the same identity as another code
    ///
    /// # Arguments
    /// * `code` - A course code in any casing/spacing
    #[must_use]
    pub fn is_same(&self, code: &str) -> bool {
        self.key() == normalize(code)
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.title {
            Some(title) => write!(f, "{} - {title}", self.code),
            None => write!(f, "{}", self.code),
        }
    }
}
