//! Smoke tests: the sample catalog loads and the crate reports a version

use course_compass::core::catalog::CourseCatalog;
use course_compass::get_version;

#[test]
fn test_version_is_set() {
    assert!(!get_version().is_empty());
}

#[test]
fn test_sample_catalog_loads() {
    let catalog = CourseCatalog::load("samples/catalog.json").expect("sample catalog should load");

    assert_eq!(catalog.majors.len(), 4);
    assert!(catalog.major("Software Engineering").is_some());
    assert!(
        catalog.sections.len() >= 13,
        "expected the full section table, got {}",
        catalog.sections.len()
    );

    // Every major's required courses have a normalized identity
    for major in &catalog.majors {
        assert!(!major.required_courses.is_empty());
        for course in &major.required_courses {
            assert!(!course.key().is_empty());
            assert!(!course.key().contains(' '));
        }
    }
}
