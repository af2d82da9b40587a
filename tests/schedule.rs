//! Integration tests for schedule-option search

use course_compass::core::catalog::CourseCatalog;
use course_compass::core::models::{Course, MeetingTime, Section, Weekday};
use course_compass::core::schedule::{find_options, group_sections};

fn load_sample() -> CourseCatalog {
    CourseCatalog::load("samples/catalog.json").expect("sample catalog should load")
}

fn spring_2026_table(catalog: &CourseCatalog) -> std::collections::HashMap<String, Vec<Section>> {
    let pool: Vec<Section> = catalog
        .sections
        .iter()
        .filter(|s| s.semester == "Spring 2026")
        .cloned()
        .collect();
    group_sections(&pool)
}

#[test]
fn test_full_major_has_a_conflict_free_option() {
    let catalog = load_sample();
    let major = catalog.major("Software Engineering").expect("major exists");
    let table = spring_2026_table(&catalog);

    let options = find_options(&major.required_courses, &table, 3);

    assert_eq!(options.len(), 1, "one section per course -> one option");
    let option = &options[0];
    assert_eq!(option.sections.len(), major.course_count());

    // Every pair in the option must be conflict-free
    for (i, a) in option.sections.iter().enumerate() {
        for b in &option.sections[i + 1..] {
            assert!(
                !a.conflicts_with(b),
                "sections {} and {} conflict",
                a.section_id,
                b.section_id
            );
        }
    }
}

#[test]
fn test_option_follows_required_course_order() {
    let catalog = load_sample();
    let major = catalog.major("Software Engineering").expect("major exists");
    let table = spring_2026_table(&catalog);

    let options = find_options(&major.required_courses, &table, 1);
    let option = &options[0];

    for (course, section) in major.required_courses.iter().zip(&option.sections) {
        assert!(
            course.is_same(&section.course),
            "expected section for {}, got {}",
            course.code,
            section.course
        );
    }
}

#[test]
fn test_overlapping_sections_never_share_an_option() {
    let sections = vec![
        section("BIOL 10", "1", "MW", "01:30PM-02:45PM"),
        section("CMPE 102", "2", "MW", "01:00PM-02:00PM"),
        section("CMPE 102", "3", "TR", "01:00PM-02:00PM"),
    ];
    let table = group_sections(&sections);
    let required = vec![
        Course::new("Biol 10".to_string()),
        Course::new("CMPE 102".to_string()),
    ];

    let options = find_options(&required, &table, 10);

    assert_eq!(options.len(), 1);
    assert_eq!(options[0].sections[1].section_id, "3");
}

#[test]
fn test_tba_section_is_always_placeable() {
    let catalog = load_sample();
    let table = spring_2026_table(&catalog);

    // BIOL 10's only Spring 2026 section is fully TBA
    let biol = &table["biol10"][0];
    assert!(biol.is_tba());
    assert_eq!(biol.time, MeetingTime::Tba);

    for group in table.values() {
        for other in group {
            assert!(!biol.conflicts_with(other));
        }
    }
}

#[test]
fn test_exhausted_search_reports_zero_options() {
    let sections = vec![
        section("BIOL 10", "1", "MW", "01:00PM-02:00PM"),
        section("CHEM 1A", "2", "MW", "01:30PM-02:30PM"),
    ];
    let table = group_sections(&sections);
    let required = vec![
        Course::new("Biol 10".to_string()),
        Course::new("Chem 1A".to_string()),
    ];

    let options = find_options(&required, &table, 5);
    assert!(options.is_empty());
}

#[test]
fn test_max_options_bounds_the_search() {
    let sections = vec![
        section("BIOL 10", "1", "MW", "09:00AM-10:00AM"),
        section("BIOL 10", "2", "TR", "09:00AM-10:00AM"),
        section("BIOL 10", "3", "F", "09:00AM-10:00AM"),
        section("CHEM 1A", "4", "MW", "10:00AM-11:00AM"),
        section("CHEM 1A", "5", "TR", "10:00AM-11:00AM"),
    ];
    let table = group_sections(&sections);
    let required = vec![
        Course::new("Biol 10".to_string()),
        Course::new("Chem 1A".to_string()),
    ];

    assert_eq!(find_options(&required, &table, 100).len(), 6);
    assert_eq!(find_options(&required, &table, 2).len(), 2);
}

fn section(course: &str, id: &str, days: &str, time: &str) -> Section {
    Section {
        course: course.to_string(),
        section_id: id.to_string(),
        professor: "Staff".to_string(),
        semester: "Spring 2026".to_string(),
        days: Weekday::parse_days(days).unwrap(),
        time: MeetingTime::parse(time).unwrap(),
    }
}
