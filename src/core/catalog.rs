//! Course catalog: injected reference data for the planning core
//!
//! The catalog is supplied by the caller (here, loaded from a JSON file);
//! the core depends on its shape only and never fetches or caches data
//! itself.

use crate::core::matcher::normalize;
use crate::core::models::{Major, MeetingTime, Section, Weekday};
use serde::Deserialize;
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Raw section row as it appears in the catalog file, with display-string
/// days and time
#[derive(Debug, Clone, Deserialize)]
struct RawSection {
    course: String,
    section_id: String,
    professor: String,
    semester: String,
    days: String,
    time: String,
}

/// Raw catalog file shape
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    majors: Vec<Major>,
    #[serde(default)]
    sections: Vec<RawSection>,
}

/// Reference data for planning: majors with their required courses, plus
/// the table of offered sections
///
/// Both lists preserve catalog order; lookups never re-sort.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    /// Majors in catalog order
    pub majors: Vec<Major>,
    /// Offered sections in catalog order
    pub sections: Vec<Section>,
}

impl CourseCatalog {
    /// Parse a catalog from its JSON representation
    ///
    /// Day and time strings are parsed into typed values here; a section
    /// whose non-TBA day or time string cannot be parsed is a data error.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or a section row carries
    /// an unparseable day or time string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut sections = Vec::with_capacity(file.sections.len());
        for raw in file.sections {
            let days = Weekday::parse_days(&raw.days).ok_or_else(|| {
                format!(
                    "Section {} ({}): invalid day string '{}'",
                    raw.section_id, raw.course, raw.days
                )
            })?;
            let time = MeetingTime::parse(&raw.time).ok_or_else(|| {
                format!(
                    "Section {} ({}): invalid time string '{}'",
                    raw.section_id, raw.course, raw.time
                )
            })?;

            sections.push(Section {
                course: raw.course,
                section_id: raw.section_id,
                professor: raw.professor,
                semester: raw.semester,
                days,
                time,
            });
        }

        Ok(Self {
            majors: file.majors,
            sections,
        })
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Look up a major by its exact name
    #[must_use]
    pub fn major(&self, name: &str) -> Option<&Major> {
        self.majors.iter().find(|m| m.name == name)
    }

    /// Offered sections for a course, by normalized code, in catalog order
    #[must_use]
    pub fn sections_for(&self, course_code: &str) -> Vec<&Section> {
        let key = normalize(course_code);
        self.sections
            .iter()
            .filter(|s| normalize(&s.course) == key)
            .collect()
    }

    /// Section table keyed by normalized course code
    ///
    /// Each course's candidate list preserves catalog order; this is the
    /// `sections_by_course` input the schedule selector consumes.
    #[must_use]
    pub fn section_table(&self) -> HashMap<String, Vec<Section>> {
        let mut table: HashMap<String, Vec<Section>> = HashMap::new();
        for section in &self.sections {
            table
                .entry(normalize(&section.course))
                .or_default()
                .push(section.clone());
        }
        table
    }
}
