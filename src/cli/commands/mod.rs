//! Subcommand handlers for the `CourseCompass` CLI

pub mod config;
pub mod roadmap;
pub mod schedule;
pub mod search;

use course_compass::config::Config;
use course_compass::core::catalog::CourseCatalog;
use course_compass::error;

/// Load the catalog configured in `paths.catalog`
///
/// Prints an error and returns `None` if the catalog cannot be loaded;
/// callers simply return, matching the CLI's fail-and-report style.
pub fn load_catalog(config: &Config) -> Option<CourseCatalog> {
    let path = &config.paths.catalog;
    if path.is_empty() {
        eprintln!("✗ No catalog configured. Set one with: coursecompass config set catalog <FILE>");
        return None;
    }

    match CourseCatalog::load(path) {
        Ok(catalog) => Some(catalog),
        Err(e) => {
            error!("Failed to load catalog {path}: {e}");
            eprintln!("✗ Failed to load catalog {path}: {e}");
            None
        }
    }
}
