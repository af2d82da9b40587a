//! CLI argument definitions for `CourseCompass`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use course_compass::config::ConfigOverrides;
use course_compass::core::matcher::SearchMode;
use course_compass::core::models::Season;
use course_compass::core::schedule::DEFAULT_MAX_OPTIONS;
use course_compass::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime
/// use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// CLI search mode argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum SearchModeArg {
    /// Search by course code
    Course,
    /// Search by professor name
    Professor,
}

impl From<SearchModeArg> for SearchMode {
    fn from(arg: SearchModeArg) -> Self {
        match arg {
            SearchModeArg::Course => Self::Course,
            SearchModeArg::Professor => Self::Professor,
        }
    }
}

impl std::fmt::Display for SearchModeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Course => "course",
            Self::Professor => "professor",
        };
        write!(f, "{as_str}")
    }
}

/// CLI season argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum SeasonArg {
    /// Spring term
    Spring,
    /// Summer term
    Summer,
    /// Fall term
    Fall,
    /// Winter term
    Winter,
}

impl From<SeasonArg> for Season {
    fn from(arg: SeasonArg) -> Self {
        match arg {
            SeasonArg::Spring => Self::Spring,
            SeasonArg::Summer => Self::Summer,
            SeasonArg::Fall => Self::Fall,
            SeasonArg::Winter => Self::Winter,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `catalog`,
        /// `term_capacity`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Search offered sections by course code or professor name.
    Search {
        /// Search query (e.g., "cmpe102" or a professor's name)
        #[arg(value_name = "QUERY")]
        query: String,

        /// Search field: by course code or by professor name
        #[arg(short, long, value_enum, default_value_t = SearchModeArg::Course)]
        mode: SearchModeArg,
    },
    /// Generate a multi-term roadmap of remaining required courses.
    Roadmap {
        /// Major to plan (exact catalog name)
        #[arg(short, long, value_name = "NAME")]
        major: String,

        /// Completed course codes (any casing/spacing)
        #[arg(short, long, value_name = "CODE", num_args = 0..)]
        completed: Vec<String>,

        /// Season of the first planned term
        #[arg(long, value_enum, value_name = "SEASON")]
        start_season: SeasonArg,

        /// Calendar year of the first planned term
        #[arg(long, value_name = "YEAR")]
        start_year: i32,
    },
    /// Find conflict-free section schedules for a set of courses.
    Schedule {
        /// Major whose required courses should be scheduled
        #[arg(short, long, value_name = "NAME", conflicts_with = "courses")]
        major: Option<String>,

        /// Explicit course codes to schedule (instead of a major)
        #[arg(long, value_name = "CODE", num_args = 1..)]
        courses: Vec<String>,

        /// Completed course codes to exclude (only with --major)
        #[arg(short, long, value_name = "CODE", num_args = 0..)]
        completed: Vec<String>,

        /// Only consider sections offered in this term (e.g., "Spring 2026")
        #[arg(short, long, value_name = "TERM")]
        term: Option<String>,

        /// Maximum number of schedule options to report
        #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_OPTIONS)]
        max_options: usize,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "coursecompass",
    about = "CourseCompass command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the catalog JSON file for this run
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Override courses per roadmap term for this run
    #[arg(long = "term-capacity", value_name = "N")]
    pub term_capacity: Option<usize>,

    /// Override recommended units per term for this run
    #[arg(long = "unit-target", value_name = "N")]
    pub unit_target: Option<u32>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration without persisting the values.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None`
    /// means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            term_capacity: self.term_capacity,
            unit_target: self.unit_target,
            catalog: self
                .catalog
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
