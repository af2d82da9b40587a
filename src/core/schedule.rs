//! Schedule-section selection via backtracking search
//!
//! For each required course exactly one offered section is chosen such
//! that no two chosen sections conflict. Courses are processed in the
//! order given and candidates in catalog order, so results are
//! deterministic with first-found tie-breaking; there is no optimization
//! objective (e.g., minimizing gaps).

use crate::core::matcher::normalize;
use crate::core::models::{Course, Section};
use std::collections::HashMap;

/// Default cap on the number of schedule options returned
pub const DEFAULT_MAX_OPTIONS: usize = 3;

/// One complete, internally conflict-free assignment of sections
///
/// `sections[i]` is the chosen section for the i-th required course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleOption {
    /// Chosen sections, aligned with the required-course order
    pub sections: Vec<Section>,
}

/// Find up to `max_options` conflict-free section assignments
///
/// For each course in `required_courses`, candidates are taken from
/// `sections_by_course` (keyed by normalized course code) in catalog
/// order. The search backtracks whenever a candidate conflicts with any
/// already-chosen section; a course with no viable candidate under the
/// current partial assignment sends the search back to the previous
/// course's next candidate. A course with no offered sections at all
/// simply makes the search space empty.
///
/// The search stops after `max_options` complete assignments or when the
/// space is exhausted; zero results is a valid outcome, not an error.
/// Worst-case cost is exponential in the number of courses; callers
/// needing latency guarantees should cap `max_options` and candidate
/// counts.
#[must_use]
pub fn find_options(
    required_courses: &[Course],
    sections_by_course: &HashMap<String, Vec<Section>>,
    max_options: usize,
) -> Vec<ScheduleOption> {
    if max_options == 0 {
        return Vec::new();
    }

    static EMPTY: Vec<Section> = Vec::new();
    let groups: Vec<&Vec<Section>> = required_courses
        .iter()
        .map(|course| sections_by_course.get(&course.key()).unwrap_or(&EMPTY))
        .collect();

    let mut options = Vec::new();
    let mut chosen: Vec<&Section> = Vec::with_capacity(groups.len());
    assign(&groups, &mut chosen, &mut options, max_options);
    options
}

/// Depth-first assignment over candidate groups
fn assign<'a>(
    groups: &[&'a Vec<Section>],
    chosen: &mut Vec<&'a Section>,
    options: &mut Vec<ScheduleOption>,
    max_options: usize,
) {
    if options.len() >= max_options {
        return;
    }

    let Some(group) = groups.get(chosen.len()) else {
        options.push(ScheduleOption {
            sections: chosen.iter().map(|&s| s.clone()).collect(),
        });
        return;
    };

    for candidate in *group {
        if chosen.iter().any(|c| c.conflicts_with(candidate)) {
            continue;
        }

        chosen.push(candidate);
        assign(groups, chosen, options, max_options);
        chosen.pop();

        if options.len() >= max_options {
            return;
        }
    }
}

/// Convenience wrapper matching required courses given as display codes
///
/// Builds `Course` values from the codes and delegates to
/// [`find_options`].
#[must_use]
pub fn find_options_for_codes(
    required_codes: &[String],
    sections_by_course: &HashMap<String, Vec<Section>>,
    max_options: usize,
) -> Vec<ScheduleOption> {
    let courses: Vec<Course> = required_codes
        .iter()
        .map(|code| Course::new(code.clone()))
        .collect();
    find_options(&courses, sections_by_course, max_options)
}

/// Build a candidate table from a flat section list
///
/// Groups sections by normalized course code, preserving input order
/// within each group.
#[must_use]
pub fn group_sections(sections: &[Section]) -> HashMap<String, Vec<Section>> {
    let mut table: HashMap<String, Vec<Section>> = HashMap::new();
    for section in sections {
        table
            .entry(normalize(&section.course))
            .or_default()
            .push(section.clone());
    }
    table
}
