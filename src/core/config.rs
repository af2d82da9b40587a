//! Configuration module for `CourseCompass`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Planner defaults configuration
///
/// These are the caller-supplied planning knobs: the catalog carries no
/// credit weights or calendar rule, so they live in config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Courses per generated roadmap term
    #[serde(default)]
    pub term_capacity: usize,
    /// Recommended units attached to each term
    #[serde(default)]
    pub unit_target: u32,
    /// Season cycle for term advancement (e.g., ["Spring", "Fall"])
    #[serde(default)]
    pub seasons: Vec<String>,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Path to the catalog JSON file
    #[serde(default)]
    pub catalog: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Planner defaults
    #[serde(default)]
    pub planner: PlannerConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override term capacity
    pub term_capacity: Option<usize>,
    /// Override unit target
    pub unit_target: Option<u32>,
    /// Override catalog path
    pub catalog: Option<String>,
}

impl Config {
    /// Get the `$COURSE_COMPASS` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/coursecompass`
    /// - macOS: `~/Library/Application Support/coursecompass`
    /// - Windows: `%APPDATA%\coursecompass`
    #[must_use]
    pub fn get_coursecompass_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("coursecompass")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Ensures newly added configuration fields are populated after an
    /// upgrade. Only fields that are empty (or zero) in the current config
    /// and set in defaults are updated.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.planner.term_capacity == 0 && defaults.planner.term_capacity != 0 {
            self.planner.term_capacity = defaults.planner.term_capacity;
            changed = true;
        }
        if self.planner.unit_target == 0 && defaults.planner.unit_target != 0 {
            self.planner.unit_target = defaults.planner.unit_target;
            changed = true;
        }
        if self.planner.seasons.is_empty() && !defaults.planner.seasons.is_empty() {
            self.planner.seasons.clone_from(&defaults.planner.seasons);
            changed = true;
        }

        if self.paths.catalog.is_empty() && !defaults.paths.catalog.is_empty() {
            self.paths.catalog.clone_from(&defaults.paths.catalog);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Command-line arguments override configuration file values without
    /// modifying the persistent file. Only non-`None` values in the
    /// overrides struct replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(term_capacity) = overrides.term_capacity {
            self.planner.term_capacity = term_capacity;
        }
        if let Some(unit_target) = overrides.unit_target {
            self.planner.unit_target = unit_target;
        }

        if let Some(catalog) = &overrides.catalog {
            self.paths.catalog.clone_from(catalog);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside the directory returned by [`get_coursecompass_dir`].
    ///
    /// [`get_coursecompass_dir`]: Self::get_coursecompass_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_coursecompass_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$COURSE_COMPASS` variable in a string
    ///
    /// Replaces occurrences of `$COURSE_COMPASS` with the actual config
    /// directory path so values can reference it dynamically.
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$COURSE_COMPASS") {
            let dir = Self::get_coursecompass_dir();
            value.replace("$COURSE_COMPASS", dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Parses a TOML configuration string and expands any
    /// `$COURSE_COMPASS` variables in path values. Missing fields use
    /// their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.catalog = Self::expand_variables(&config.paths.catalog);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// The defaults differ between debug and release builds
    /// (`DefaultCLIConfigDebug.toml` / `DefaultCLIConfigRelease.toml`).
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. This
    /// should never happen since the defaults are compiled into the
    /// binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - Config file exists: load it, merge missing fields from defaults,
    ///   save the updated config.
    /// - First run: create the config directory, save the defaults.
    ///
    /// Falls back to defaults if any error occurs during loading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// Serializes to TOML and writes to the platform config file, creating
    /// the directory if needed.
    ///
    /// # Errors
    /// Returns an error if serialization fails, the directory cannot be
    /// created, or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys:
    /// - `level`: Logging level ("debug", "info", "warn", "error")
    /// - `file`: Log file path
    /// - `verbose`: Verbose logging boolean
    /// - `term_capacity`: Courses per roadmap term
    /// - `unit_target`: Recommended units per term
    /// - `seasons`: Season cycle, comma-joined
    /// - `catalog`: Catalog JSON path
    ///
    /// # Returns
    /// - `Some(String)`: The configuration value as a string
    /// - `None`: If the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "term_capacity" | "term-capacity" => Some(self.planner.term_capacity.to_string()),
            "unit_target" | "unit-target" => Some(self.planner.unit_target.to_string()),
            "seasons" => Some(self.planner.seasons.join(",")),
            "catalog" => Some(self.paths.catalog.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Values are validated and converted to the appropriate type;
    /// `seasons` takes a comma-separated list (e.g., "Spring,Fall").
    ///
    /// Note: This updates the in-memory config. Call
    /// [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot
    /// be parsed
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "term_capacity" | "term-capacity" => {
                self.planner.term_capacity = value
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid number for 'term_capacity': '{value}'"))?;
            }
            "unit_target" | "unit-target" => {
                self.planner.unit_target = value
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid number for 'unit_target': '{value}'"))?;
            }
            "seasons" => {
                self.planner.seasons = value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            "catalog" => self.paths.catalog = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Note: This updates the in-memory config. Call
    /// [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "term_capacity" | "term-capacity" => {
                self.planner.term_capacity = defaults.planner.term_capacity;
            }
            "unit_target" | "unit-target" => {
                self.planner.unit_target = defaults.planner.unit_target;
            }
            "seasons" => self.planner.seasons.clone_from(&defaults.planner.seasons),
            "catalog" => self.paths.catalog.clone_from(&defaults.paths.catalog),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file, causing the next
    /// [`load()`](Config::load) to recreate it from defaults. Succeeds
    /// silently if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[planner]")?;
        writeln!(f, "  term_capacity = {}", self.planner.term_capacity)?;
        writeln!(f, "  unit_target = {}", self.planner.unit_target)?;
        writeln!(f, "  seasons = [{}]", self.planner.seasons.join(", "))?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  catalog = \"{}\"", self.paths.catalog)?;

        Ok(())
    }
}
