//! Search command handler

use super::load_catalog;
use course_compass::config::Config;
use course_compass::core::matcher::{search, SearchMode};
use course_compass::core::models::Section;
use course_compass::info;

/// Run the search command
///
/// An empty query prints nothing by contract; zero matches for a
/// non-empty query print an explicit "not found" line.
pub fn run(query: &str, mode: SearchMode, config: &Config) {
    let Some(catalog) = load_catalog(config) else {
        return;
    };

    if query.trim().is_empty() {
        return;
    }

    let results = search(query, mode, &catalog.sections);
    info!(
        "Search '{query}' matched {} of {} sections",
        results.len(),
        catalog.sections.len()
    );

    if results.is_empty() {
        match mode {
            SearchMode::Course => println!("No courses found matching \"{query}\""),
            SearchMode::Professor => println!("No professors found matching \"{query}\""),
        }
        return;
    }

    print_rows(&results);
}

/// Print matched sections as a fixed-width table
fn print_rows(rows: &[&Section]) {
    println!(
        "{:<14} {:<10} {:<10} {:<28} {:<5} {}",
        "Semester", "Course", "Section", "Professor", "Day", "Time"
    );
    for row in rows {
        println!(
            "{:<14} {:<10} {:<10} {:<28} {:<5} {}",
            row.semester,
            row.course,
            row.section_id,
            row.professor,
            row.days_label(),
            row.time
        );
    }
}
