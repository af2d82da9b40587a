//! Query matching for course and professor lookup
//!
//! Pure string normalization and stable containment filtering; the search
//! result preserves the input row order and is never re-ranked.

use crate::core::models::Section;

/// Search field selector
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SearchMode {
    /// Match against the section's course code, whitespace-insensitive
    Course,
    /// Match against the professor name, whitespace-sensitive
    Professor,
}

/// Canonicalize a string for identity comparison
///
/// Lowercases and removes all whitespace; `normalize` is idempotent, so
/// `normalize(normalize(s)) == normalize(s)`.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether a section matches a query under the given mode
///
/// Course mode compares normalized codes (case- and whitespace-
/// insensitive): "cmpe102" finds "CMPE 102". Professor mode lowercases
/// but preserves whitespace, so "Singh Harsh" matches while "SinghHarsh"
/// does not. The asymmetry is intentional: course codes vary in spacing
/// between feeds, person names do not.
#[must_use]
pub fn matches(query: &str, section: &Section, mode: SearchMode) -> bool {
    match mode {
        SearchMode::Course => normalize(&section.course).contains(&normalize(query)),
        SearchMode::Professor => section
            .professor
            .to_lowercase()
            .contains(&query.to_lowercase()),
    }
}

/// Filter section rows by a query, preserving input order
///
/// A query that trims to empty returns an empty result by contract: the
/// caller renders nothing at all, which is distinct from rendering an
/// explicit "no matches" message for a non-empty query.
#[must_use]
pub fn search<'a>(query: &str, mode: SearchMode, rows: &'a [Section]) -> Vec<&'a Section> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    rows.iter().filter(|row| matches(query, row, mode)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{MeetingTime, Weekday};

    fn section(course: &str, professor: &str) -> Section {
        Section {
            course: course.to_string(),
            section_id: "1".to_string(),
            professor: professor.to_string(),
            semester: "Spring 2022".to_string(),
            days: Weekday::parse_days("MW").unwrap(),
            time: MeetingTime::parse("01:30PM-02:45PM").unwrap(),
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("BIOL  10");
        assert_eq!(once, "biol10");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalize_collapses_case_and_whitespace() {
        assert_eq!(normalize("BIOL  10"), normalize("biol10"));
        assert_eq!(normalize(" C M P E 102 "), "cmpe102");
    }

    #[test]
    fn test_course_mode_ignores_spacing() {
        let rows = vec![section("CMPE 102", "Bhawandeep Singh Harsh")];

        assert_eq!(search("cmpe102", SearchMode::Course, &rows).len(), 1);
        assert_eq!(search("CMPE  102", SearchMode::Course, &rows).len(), 1);
        assert_eq!(search("102", SearchMode::Course, &rows).len(), 1);
    }

    #[test]
    fn test_professor_mode_preserves_whitespace() {
        let rows = vec![section("CMPE 102", "Bhawandeep Singh Harsh")];

        assert_eq!(search("singh harsh", SearchMode::Professor, &rows).len(), 1);
        // Whitespace matters for professor names
        assert!(search("singhharsh", SearchMode::Professor, &rows).is_empty());
    }

    #[test]
    fn test_empty_query_displays_nothing() {
        let rows = vec![
            section("BIOL 10", "Sonia Cuellar-Ortiz"),
            section("CMPE 102", "Michael Lam"),
        ];

        assert!(search("", SearchMode::Course, &rows).is_empty());
        assert!(search("   ", SearchMode::Course, &rows).is_empty());
        assert!(search("\t", SearchMode::Professor, &rows).is_empty());
    }

    #[test]
    fn test_search_is_a_stable_filter() {
        let rows = vec![
            section("BIOL 10", "Sonia Cuellar-Ortiz"),
            section("CMPE 102", "Michael Lam"),
            section("BIOL 10", "Brandon White"),
        ];

        let results = search("biol", SearchMode::Course, &rows);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].professor, "Sonia Cuellar-Ortiz");
        assert_eq!(results[1].professor, "Brandon White");
    }

    #[test]
    fn test_zero_matches_is_empty_not_error() {
        let rows = vec![section("BIOL 10", "Sonia Cuellar-Ortiz")];
        assert!(search("math", SearchMode::Course, &rows).is_empty());
    }
}
