//! Roadmap generation: partition remaining required courses into terms
//!
//! The generator is deterministic over its explicit inputs; the only
//! notion of "now" is the caller-supplied start term.

use crate::core::catalog::CourseCatalog;
use crate::core::completed::CompletedCourseSet;
use crate::core::error::PlanError;
use crate::core::models::{Course, Season, Term, TermSequence};
use serde::{Deserialize, Serialize};

/// Default number of courses per generated term
pub const DEFAULT_TERM_CAPACITY: usize = 5;

/// Default recommended units per term
pub const DEFAULT_UNIT_TARGET: u32 = 16;

/// Configuration for roadmap generation
///
/// All three values are caller-supplied: the catalog has no per-course
/// credit weights and no calendar rule, so the unit target and the
/// term-advance cycle are configuration rather than derived data.
#[derive(Debug, Clone)]
pub struct RoadmapConfig {
    /// Maximum courses per term
    pub term_capacity: usize,
    /// Recommended units attached to every generated term
    pub unit_target: u32,
    /// Season cycle used to advance from one term to the next
    pub sequence: TermSequence,
}

impl Default for RoadmapConfig {
    fn default() -> Self {
        Self {
            term_capacity: DEFAULT_TERM_CAPACITY,
            unit_target: DEFAULT_UNIT_TARGET,
            sequence: TermSequence::default(),
        }
    }
}

/// Complete term-by-term roadmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapPlan {
    /// Major the plan was generated for
    pub major: String,
    /// Non-empty terms, in chronological order
    pub terms: Vec<Term>,
}

impl RoadmapPlan {
    /// Total number of courses across all terms
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.terms.iter().map(Term::course_count).sum()
    }

    /// All planned courses in order, concatenated across terms
    #[must_use]
    pub fn all_courses(&self) -> Vec<&Course> {
        self.terms.iter().flat_map(|t| t.courses.iter()).collect()
    }
}

/// Roadmap generator over a borrowed catalog
pub struct RoadmapGenerator<'a> {
    catalog: &'a CourseCatalog,
    config: RoadmapConfig,
}

impl<'a> RoadmapGenerator<'a> {
    /// Create a generator for a catalog with the given configuration
    #[must_use]
    pub const fn new(catalog: &'a CourseCatalog, config: RoadmapConfig) -> Self {
        Self { catalog, config }
    }

    /// Generate a roadmap for a major
    ///
    /// Remaining courses are the major's required courses minus the
    /// completed set, in catalog order (a set difference, never
    /// re-sorted). They are partitioned into consecutive chunks of
    /// `term_capacity`, one term per chunk, advancing through the
    /// configured season cycle from `start`. Completed codes that are not
    /// required by the major are ignored. A fully completed major yields
    /// a plan with zero terms.
    ///
    /// # Arguments
    /// * `major_name` - Exact catalog name of the major
    /// * `completed` - Courses already completed
    /// * `start` - Season and year of the first planned term
    ///
    /// # Errors
    /// * [`PlanError::MajorNotFound`] if the major is not in the catalog;
    ///   another major is never silently substituted
    /// * [`PlanError::InvalidTermCapacity`] if the configured capacity is
    ///   zero
    pub fn generate(
        &self,
        major_name: &str,
        completed: &CompletedCourseSet,
        start: (Season, i32),
    ) -> Result<RoadmapPlan, PlanError> {
        if self.config.term_capacity == 0 {
            return Err(PlanError::InvalidTermCapacity(self.config.term_capacity));
        }

        let major = self
            .catalog
            .major(major_name)
            .ok_or_else(|| PlanError::MajorNotFound(major_name.to_string()))?;

        let remaining: Vec<&Course> = major
            .required_courses
            .iter()
            .filter(|course| !completed.contains(&course.code))
            .collect();

        let (mut season, mut year) = start;
        let mut terms = Vec::new();

        for chunk in remaining.chunks(self.config.term_capacity) {
            let mut term = Term::new(season, year, self.config.unit_target);
            term.courses = chunk.iter().map(|&c| c.clone()).collect();
            terms.push(term);

            (season, year) = self.config.sequence.next(season, year);
        }

        Ok(RoadmapPlan {
            major: major.name.clone(),
            terms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Major;

    fn catalog() -> CourseCatalog {
        let mut major = Major::new("Software Engineering".to_string());
        for code in ["Biol 10", "Chem 1A", "CMPE 30", "CMPE 50", "CMPE 102"] {
            major.add_course(Course::new(code.to_string()));
        }

        CourseCatalog {
            majors: vec![major],
            sections: Vec::new(),
        }
    }

    fn config(capacity: usize) -> RoadmapConfig {
        RoadmapConfig {
            term_capacity: capacity,
            ..RoadmapConfig::default()
        }
    }

    #[test]
    fn test_partitions_remaining_in_catalog_order() {
        let catalog = catalog();
        let generator = RoadmapGenerator::new(&catalog, config(3));
        let completed = CompletedCourseSet::from_codes(["CMPE 50"]);

        let plan = generator
            .generate("Software Engineering", &completed, (Season::Spring, 2026))
            .unwrap();

        assert_eq!(plan.terms.len(), 2);
        assert_eq!(plan.terms[0].label(), "Spring 2026");
        let first: Vec<&str> = plan.terms[0].courses.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(first, vec!["Biol 10", "Chem 1A", "CMPE 30"]);

        assert_eq!(plan.terms[1].label(), "Fall 2026");
        let second: Vec<&str> = plan.terms[1].courses.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(second, vec!["CMPE 102"]);
    }

    #[test]
    fn test_nothing_completed_plans_every_required_course() {
        let catalog = catalog();
        let generator = RoadmapGenerator::new(&catalog, config(2));

        let plan = generator
            .generate(
                "Software Engineering",
                &CompletedCourseSet::new(),
                (Season::Fall, 2026),
            )
            .unwrap();

        let planned: Vec<&str> = plan.all_courses().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(
            planned,
            vec!["Biol 10", "Chem 1A", "CMPE 30", "CMPE 50", "CMPE 102"]
        );
        assert_eq!(plan.terms.len(), 3);
        // Fall 2026 -> Spring 2027 -> Fall 2027
        assert_eq!(plan.terms[1].label(), "Spring 2027");
        assert_eq!(plan.terms[2].label(), "Fall 2027");
    }

    #[test]
    fn test_all_completed_yields_zero_terms() {
        let catalog = catalog();
        let generator = RoadmapGenerator::new(&catalog, config(3));
        let completed = CompletedCourseSet::from_codes([
            "Biol 10", "Chem 1A", "CMPE 30", "CMPE 50", "CMPE 102",
        ]);

        let plan = generator
            .generate("Software Engineering", &completed, (Season::Spring, 2026))
            .unwrap();

        assert!(plan.terms.is_empty());
        assert_eq!(plan.course_count(), 0);
    }

    #[test]
    fn test_unknown_completed_codes_are_ignored() {
        let catalog = catalog();
        let generator = RoadmapGenerator::new(&catalog, config(5));
        let completed = CompletedCourseSet::from_codes(["ART 101", "CMPE 50"]);

        let plan = generator
            .generate("Software Engineering", &completed, (Season::Spring, 2026))
            .unwrap();

        assert_eq!(plan.course_count(), 4);
        assert!(!plan.all_courses().iter().any(|c| c.is_same("CMPE 50")));
    }

    #[test]
    fn test_unknown_major_is_an_error() {
        let catalog = catalog();
        let generator = RoadmapGenerator::new(&catalog, config(3));

        let result = generator.generate(
            "Electrical Engineering",
            &CompletedCourseSet::new(),
            (Season::Spring, 2026),
        );

        assert_eq!(
            result.unwrap_err(),
            PlanError::MajorNotFound("Electrical Engineering".to_string())
        );
    }

    #[test]
    fn test_zero_capacity_fails_fast() {
        let catalog = catalog();
        let generator = RoadmapGenerator::new(&catalog, config(0));

        let result = generator.generate(
            "Software Engineering",
            &CompletedCourseSet::new(),
            (Season::Spring, 2026),
        );

        assert_eq!(result.unwrap_err(), PlanError::InvalidTermCapacity(0));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let catalog = catalog();
        let generator = RoadmapGenerator::new(&catalog, config(2));
        let completed = CompletedCourseSet::from_codes(["Chem 1A"]);

        let a = generator
            .generate("Software Engineering", &completed, (Season::Spring, 2026))
            .unwrap();
        let b = generator
            .generate("Software Engineering", &completed, (Season::Spring, 2026))
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_completed_matching_is_normalized() {
        let catalog = catalog();
        let generator = RoadmapGenerator::new(&catalog, config(5));
        let completed = CompletedCourseSet::from_codes(["cmpe50", "BIOL  10"]);

        let plan = generator
            .generate("Software Engineering", &completed, (Season::Spring, 2026))
            .unwrap();

        let planned: Vec<&str> = plan.all_courses().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(planned, vec!["Chem 1A", "CMPE 30", "CMPE 102"]);
    }
}
