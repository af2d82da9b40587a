//! Schedule command handler

use super::load_catalog;
use course_compass::config::Config;
use course_compass::core::completed::CompletedCourseSet;
use course_compass::core::models::{Course, Section};
use course_compass::core::schedule::{find_options, group_sections, ScheduleOption};
use course_compass::info;

/// Run the schedule command
///
/// The courses to schedule come either from an explicit `--courses` list
/// or from a major's required courses minus the completed set. When a
/// term is given, only sections offered in that term are considered.
pub fn run(
    major: Option<&str>,
    courses: &[String],
    completed_codes: &[String],
    term: Option<&str>,
    max_options: usize,
    config: &Config,
) {
    let Some(catalog) = load_catalog(config) else {
        return;
    };

    let completed = CompletedCourseSet::from_codes(completed_codes);

    let required: Vec<Course> = if let Some(major_name) = major {
        let Some(major) = catalog.major(major_name) else {
            eprintln!("✗ Major '{major_name}' not found in catalog");
            return;
        };
        major
            .required_courses
            .iter()
            .filter(|c| !completed.contains(&c.code))
            .cloned()
            .collect()
    } else if courses.is_empty() {
        eprintln!("✗ Provide either --major or --courses to schedule.");
        return;
    } else {
        courses.iter().map(|c| Course::new(c.clone())).collect()
    };

    if required.is_empty() {
        println!("✓ Nothing to schedule: every requested course is completed.");
        return;
    }

    let pool: Vec<Section> = catalog
        .sections
        .iter()
        .filter(|s| term.is_none_or(|t| s.semester == t))
        .cloned()
        .collect();
    let table = group_sections(&pool);

    let options = find_options(&required, &table, max_options);
    info!(
        "Schedule search over {} courses found {} option(s)",
        required.len(),
        options.len()
    );

    if options.is_empty() {
        println!("No conflict-free schedule found for the requested courses.");
        return;
    }

    for (idx, option) in options.iter().enumerate() {
        println!("Option {}:", idx + 1);
        print_option(option);
        println!();
    }
}

/// Print one schedule option as a fixed-width table
fn print_option(option: &ScheduleOption) {
    println!(
        "  {:<10} {:<11} {:<28} {:<5} {}",
        "Course", "Course No.", "Professor", "Day", "Time"
    );
    for section in &option.sections {
        println!(
            "  {:<10} {:<11} {:<28} {:<5} {}",
            section.course,
            section.section_id,
            section.professor,
            section.days_label(),
            section.time
        );
    }
}
