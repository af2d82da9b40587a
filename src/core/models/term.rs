//! Term and season models

use super::Course;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Academic season of a term
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    /// Spring term
    Spring,
    /// Summer term
    Summer,
    /// Fall term
    Fall,
    /// Winter term
    Winter,
}

impl Season {
    /// Position of the season within a calendar year, used to order terms
    /// when advancing from a season that is not part of the configured cycle
    #[must_use]
    pub const fn calendar_order(self) -> u8 {
        match self {
            Self::Spring => 0,
            Self::Summer => 1,
            Self::Fall => 2,
            Self::Winter => 3,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
            Self::Winter => "Winter",
        };
        write!(f, "{as_str}")
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "fall" | "autumn" => Ok(Self::Fall),
            "winter" => Ok(Self::Winter),
            other => Err(format!("Unknown season: '{other}'")),
        }
    }
}

/// Caller-configurable term-advance rule
///
/// The cycle lists the seasons in which terms are offered, in calendar
/// order (e.g., `[Spring, Fall]` for a two-semester year). Advancing past
/// the last season of the cycle wraps to the first season of the next
/// year. The advance rule is configuration, not a hardcoded calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermSequence {
    /// Seasons offered per academic year, in calendar order
    pub seasons: Vec<Season>,
}

impl TermSequence {
    /// Create a sequence from an explicit season cycle
    #[must_use]
    pub const fn new(seasons: Vec<Season>) -> Self {
        Self { seasons }
    }

    /// The term following `(season, year)` under this cycle
    ///
    /// A season that is not part of the cycle advances to the next cycle
    /// season later in the same calendar year, or wraps to the first cycle
    /// season of the following year.
    #[must_use]
    pub fn next(&self, season: Season, year: i32) -> (Season, i32) {
        if self.seasons.is_empty() {
            return (season, year + 1);
        }

        if let Some(pos) = self.seasons.iter().position(|&s| s == season) {
            if pos + 1 < self.seasons.len() {
                return (self.seasons[pos + 1], year);
            }
            return (self.seasons[0], year + 1);
        }

        // Off-cycle start: find the next cycle season within the same year
        self.seasons
            .iter()
            .find(|s| s.calendar_order() > season.calendar_order())
            .map_or((self.seasons[0], year + 1), |&s| (s, year))
    }
}

impl Default for TermSequence {
    fn default() -> Self {
        Self::new(vec![Season::Spring, Season::Fall])
    }
}

/// A single term in a roadmap with its assigned courses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Season the term takes place in
    pub season: Season,
    /// Calendar year of the term
    pub year: i32,
    /// Courses assigned to this term, in catalog order
    pub courses: Vec<Course>,
    /// Recommended units for the term (fixed configuration value; the
    /// catalog carries no per-course credit weights)
    pub unit_target: u32,
}

impl Term {
    /// Create a new empty term
    #[must_use]
    pub const fn new(season: Season, year: i32, unit_target: u32) -> Self {
        Self {
            season,
            year,
            courses: Vec::new(),
            unit_target,
        }
    }

    /// Display label for the term (e.g., "Spring 2026")
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.season, self.year)
    }

    /// Number of courses assigned to this term
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.courses.len()
    }
}
