//! Roadmap command handler

use super::load_catalog;
use course_compass::config::Config;
use course_compass::core::completed::CompletedCourseSet;
use course_compass::core::models::{Season, TermSequence};
use course_compass::core::roadmap::{
    RoadmapConfig, RoadmapGenerator, DEFAULT_TERM_CAPACITY, DEFAULT_UNIT_TARGET,
};
use course_compass::{info, warn};

/// Run the roadmap command
pub fn run(major: &str, completed_codes: &[String], start: (Season, i32), config: &Config) {
    let Some(catalog) = load_catalog(config) else {
        return;
    };

    let completed = CompletedCourseSet::from_codes(completed_codes);
    let generator = RoadmapGenerator::new(&catalog, planner_config(config));

    let plan = match generator.generate(major, &completed, start) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };

    info!(
        "Generated roadmap for {major}: {} courses over {} terms",
        plan.course_count(),
        plan.terms.len()
    );

    if plan.terms.is_empty() {
        println!("✓ All required courses for {major} are completed, nothing left to plan.");
        return;
    }

    let unit_target = plan.terms[0].unit_target;
    println!("Roadmap for {major} ({unit_target} units recommended per term)\n");

    for term in &plan.terms {
        println!("{}:", term.label());
        for course in &term.courses {
            println!("  - {course}");
        }
        println!();
    }
}

/// Build the generator configuration from the loaded config
///
/// Unset numeric values fall back to the library defaults; a season list
/// with unparseable entries falls back to the default cycle.
fn planner_config(config: &Config) -> RoadmapConfig {
    let term_capacity = if config.planner.term_capacity == 0 {
        DEFAULT_TERM_CAPACITY
    } else {
        config.planner.term_capacity
    };
    let unit_target = if config.planner.unit_target == 0 {
        DEFAULT_UNIT_TARGET
    } else {
        config.planner.unit_target
    };

    let mut seasons = Vec::new();
    for name in &config.planner.seasons {
        match name.parse::<Season>() {
            Ok(season) => seasons.push(season),
            Err(e) => {
                warn!("Ignoring configured season list: {e}");
                seasons.clear();
                break;
            }
        }
    }
    let sequence = if seasons.is_empty() {
        TermSequence::default()
    } else {
        TermSequence::new(seasons)
    };

    RoadmapConfig {
        term_capacity,
        unit_target,
        sequence,
    }
}
