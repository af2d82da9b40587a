//! Integration tests for configuration management

use course_compass::config::{Config, ConfigOverrides};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.catalog.is_empty(),
        "Default catalog path should not be empty"
    );
    assert!(
        config.planner.term_capacity > 0,
        "Default term capacity should be positive"
    );
    assert!(
        config.planner.unit_target > 0,
        "Default unit target should be positive"
    );
    assert!(
        !config.planner.seasons.is_empty(),
        "Default season cycle should not be empty"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[planner]
term_capacity = 4
unit_target = 15
seasons = ["Spring", "Summer", "Fall"]

[paths]
catalog = "./catalog.json"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.planner.term_capacity, 4);
    assert_eq!(config.planner.unit_target, 15);
    assert_eq!(config.planner.seasons, vec!["Spring", "Summer", "Fall"]);
    assert_eq!(config.paths.catalog, "./catalog.json");
}

#[test]
fn test_config_from_toml_partial() {
    // Test that missing fields within sections use defaults
    let toml_str = r#"
[logging]
level = "error"

[planner]

[paths]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, ""); // Default empty
    assert!(!config.logging.verbose); // Default false
    assert_eq!(config.planner.term_capacity, 0); // Default zero
    assert!(config.planner.seasons.is_empty());
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$COURSE_COMPASS/test.log"

[planner]

[paths]
catalog = "$COURSE_COMPASS/catalog.json"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    // Variable should be expanded to actual path
    assert!(config.logging.file.contains("coursecompass"));
    assert!(!config.logging.file.contains("$COURSE_COMPASS"));
    assert!(config.paths.catalog.contains("coursecompass"));
    assert!(!config.paths.catalog.contains("$COURSE_COMPASS"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    // Test get
    let level = config.get("level");
    assert!(level.is_some());

    // Test set
    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("term_capacity", "4")
        .expect("Failed to set term_capacity");
    assert_eq!(config.planner.term_capacity, 4);

    config
        .set("seasons", "Spring, Summer, Fall")
        .expect("Failed to set seasons");
    assert_eq!(config.planner.seasons, vec!["Spring", "Summer", "Fall"]);

    // Invalid values are rejected
    assert!(config.set("term_capacity", "lots").is_err());
    assert!(config.set("verbose", "maybe").is_err());

    // Test unknown key
    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    // Change a value
    config.set("unit_target", "12").expect("Failed to set unit_target");
    assert_eq!(config.planner.unit_target, 12);

    // Unset should restore default
    config
        .unset("unit_target", &defaults)
        .expect("Failed to unset unit_target");
    assert_eq!(config.planner.unit_target, defaults.planner.unit_target);
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    // Create and save a config
    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("catalog", "/data/cat.json").expect("Failed to set catalog");

    // Manually save to our test location
    if let Some(parent) = config_file.parent() {
        fs::create_dir_all(parent).expect("Failed to create dir");
    }
    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    // Load and verify
    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded_config = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded_config.logging.level, "info");
    assert_eq!(loaded_config.paths.catalog, "/data/cat.json");
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        term_capacity: Some(3),
        unit_target: Some(12),
        catalog: Some("./custom_catalog.json".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.planner.term_capacity, 3);
    assert_eq!(config.planner.unit_target, 12);
    assert_eq!(config.paths.catalog, "./custom_catalog.json");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let original_capacity = config.planner.term_capacity;

    // Apply partial overrides - only level changes
    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.planner.term_capacity, original_capacity);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    // Should contain section headers (lowercase)
    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[planner]"));
    assert!(display_str.contains("[paths]"));

    // Should contain field names
    assert!(display_str.contains("level"));
    assert!(display_str.contains("term_capacity"));
    assert!(display_str.contains("catalog"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    // Create a minimal config with empty fields
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false

[planner]
term_capacity = 0
unit_target = 0
seasons = []

[paths]
catalog = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    // Merge should add missing fields from defaults
    let changed = config.merge_defaults(&defaults);

    assert!(
        changed,
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.planner.term_capacity, defaults.planner.term_capacity);
    assert_eq!(config.paths.catalog, defaults.paths.catalog);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false

[planner]
term_capacity = 7
unit_target = 0
seasons = []

[paths]
catalog = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    // Custom values should be preserved
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.planner.term_capacity, 7);
}

#[test]
fn test_get_coursecompass_dir() {
    let dir = Config::get_coursecompass_dir();

    // Should contain "coursecompass" in the path
    assert!(dir.to_string_lossy().contains("coursecompass"));

    // Should not be empty or just "."
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    // Should end with config.toml or dconfig.toml
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
