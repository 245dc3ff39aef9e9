//! Core domain types for the tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Workout kinds and their short sensor codes
//! - Raw sensor packages as delivered by the device
//! - Message locales for rendered summaries

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Workout Kinds
// ============================================================================

/// Kind of workout, selected by the sensor code
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    WalkingWithPoles,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Running,
        WorkoutKind::WalkingWithPoles,
        WorkoutKind::Swimming,
    ];

    /// Short code used by the sensor packages
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::WalkingWithPoles => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Label printed in summaries (the variant name, verbatim)
    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::WalkingWithPoles => "WalkingWithPoles",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of positional sensor values this kind is built from
    pub fn arity(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::WalkingWithPoles => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    /// Meters covered per step or stroke
    pub fn step_length_m(self) -> f64 {
        match self {
            WorkoutKind::Running | WorkoutKind::WalkingWithPoles => 0.65,
            WorkoutKind::Swimming => 1.38,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = Error;

    /// Exact, case-sensitive lookup of the sensor code
    fn from_str(code: &str) -> Result<Self> {
        match code {
            "RUN" => Ok(WorkoutKind::Running),
            "WLK" => Ok(WorkoutKind::WalkingWithPoles),
            "SWM" => Ok(WorkoutKind::Swimming),
            other => Err(Error::UnknownWorkoutType(other.to_string())),
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Sensor Packages
// ============================================================================

/// One raw reading from the tracker: a workout code and its positional values
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SensorPackage {
    pub code: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }
}

// ============================================================================
// Message Locale
// ============================================================================

/// Label set used when rendering a summary line
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessageLocale {
    #[default]
    English,
    Russian,
}

impl FromStr for MessageLocale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(MessageLocale::English),
            "ru" | "russian" => Ok(MessageLocale::Russian),
            other => Err(Error::Config(format!("Unknown locale: {}", other))),
        }
    }
}
