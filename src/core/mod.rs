//! Core module for the planning library
//!
//! The four planning components (`matcher`, `completed`, `roadmap`,
//! `schedule`) are pure functions over explicit inputs; they share only the
//! catalog data shapes and never call each other.

pub mod catalog;
pub mod completed;
pub mod config;
pub mod error;
pub mod matcher;
pub mod models;
pub mod roadmap;
pub mod schedule;

/// Returns the current version of the `CourseCompass` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
