//! Shared library for `CourseCompass`
//! Contains the planning core used by the CLI: catalog models, query
//! matching, completed-course tracking, roadmap generation, and
//! schedule-section selection.

pub mod core;
pub mod logger;
pub mod shared;

pub use crate::core::config;
pub use shared::*;
