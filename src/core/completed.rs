//! Completed-course tracking and the cross-page session handoff
//!
//! The set stores normalized course codes, so membership and toggling are
//! case- and whitespace-insensitive like course identity everywhere else.
//! The handoff payload mirrors the two session keys the selection page
//! writes for the roadmap page (`selectedMajor`, `completedCourses`);
//! decoding tolerates absent or malformed data by yielding defaults.

use crate::core::matcher::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Set of completed course codes, keyed by normalized code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedCourseSet {
    codes: HashSet<String>,
}

impl CompletedCourseSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from an iterator of course codes (any casing/spacing)
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            codes: codes.into_iter().map(|c| normalize(c.as_ref())).collect(),
        }
    }

    /// Toggle a course: add it if absent, remove it if present
    ///
    /// Toggling twice with the same course restores the original set.
    pub fn toggle(&mut self, code: &str) {
        let key = normalize(code);
        if !self.codes.remove(&key) {
            self.codes.insert(key);
        }
    }

    /// Whether the set contains the course (by normalized code)
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(&normalize(code))
    }

    /// Number of completed courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether no courses are completed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Encode the set as a JSON array of codes
    ///
    /// The set itself has no ordering invariant; the payload lists codes
    /// in sorted order so identical sets always encode identically.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut codes: Vec<&String> = self.codes.iter().collect();
        codes.sort();
        serde_json::to_string(&codes).unwrap_or_else(|_| "[]".to_string())
    }

    /// Decode a JSON array payload into a set
    ///
    /// Malformed input yields the empty set; this never fails.
    #[must_use]
    pub fn decode(payload: &str) -> Self {
        let codes: Vec<String> = serde_json::from_str(payload).unwrap_or_default();
        Self::from_codes(codes)
    }
}

/// State handed off between the major-selection step and the roadmap step
///
/// `completed_courses` stays a JSON-encoded string list rather than a
/// nested array: session stores hold the two values as independent string
/// entries, and round-tripping payloads written that way requires keeping
/// the double encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHandoff {
    /// Chosen major name, if one was selected
    #[serde(default, rename = "selectedMajor", skip_serializing_if = "Option::is_none")]
    pub selected_major: Option<String>,

    /// JSON-encoded ordered list of completed course codes
    #[serde(default, rename = "completedCourses")]
    pub completed_courses: String,
}

impl SessionHandoff {
    /// Build a handoff payload from a selection
    #[must_use]
    pub fn new(selected_major: Option<String>, completed: &CompletedCourseSet) -> Self {
        Self {
            selected_major,
            completed_courses: completed.encode(),
        }
    }

    /// Encode the handoff as a JSON object string
    #[must_use]
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Decode a handoff payload
    ///
    /// Absent fields and malformed JSON yield defaults (no major selected,
    /// empty completed list); this never fails.
    #[must_use]
    pub fn decode(payload: &str) -> Self {
        serde_json::from_str(payload).unwrap_or_default()
    }

    /// The completed-course set carried by this handoff
    #[must_use]
    pub fn completed(&self) -> CompletedCourseSet {
        CompletedCourseSet::decode(&self.completed_courses)
    }
}
