//! Error types for the tracker_core library.

use crate::WorkoutKind;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for tracker_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Workout code not in {SWM, RUN, WLK}
    #[error("Unknown workout type: {0:?}")]
    UnknownWorkoutType(String),

    /// Wrong number of sensor values for the workout kind
    #[error("{kind:?} expects {expected} sensor values, got {received}")]
    ArgumentMismatch {
        kind: WorkoutKind,
        expected: usize,
        received: usize,
    },

    /// A sensor value has the wrong type for its position
    #[error("{kind:?}: invalid value {value} for {position}")]
    InvalidArgument {
        kind: WorkoutKind,
        position: &'static str,
        value: f64,
    },

    /// Division by zero inside a formula
    #[error("Arithmetic fault: {0}")]
    ArithmeticFault(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input text that isn't valid UTF-8
    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True for both the count and the type flavour of argument mismatch
    pub fn is_argument_mismatch(&self) -> bool {
        matches!(
            self,
            Error::ArgumentMismatch { .. } | Error::InvalidArgument { .. }
        )
    }
}
