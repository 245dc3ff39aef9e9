#![forbid(unsafe_code)]

//! Core domain model and formulas for the fitness tracker.
//!
//! This crate provides:
//! - Domain types (workout kinds, sensor packages, locales)
//! - Workout formulas (distance, mean speed, calories)
//! - Dispatch from sensor codes to workouts
//! - Summary reports and their message lines
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod workout;
pub mod dispatch;
pub mod report;
pub mod samples;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use workout::{Effort, Workout};
pub use dispatch::{build_workout, read_package, read_packages};
pub use report::SummaryReport;
pub use samples::sample_packages;
