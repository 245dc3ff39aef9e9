//! Sensor package dispatch.
//!
//! Maps a short workout code onto its workout kind and binds the positional
//! sensor values to that kind's fields, in declared order:
//! - `RUN`: action_count, duration_hours, weight_kg
//! - `WLK`: action_count, duration_hours, weight_kg, height_cm
//! - `SWM`: action_count, duration_hours, weight_kg, pool_length_m, pool_lap_count

use crate::{Error, Result, SensorPackage, Workout, WorkoutKind};

/// Build a workout from a sensor code and its positional values
///
/// Returns `UnknownWorkoutType` for codes outside {SWM, RUN, WLK} and an
/// argument-mismatch error when the values don't fit the kind's fields.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout> {
    let kind: WorkoutKind = code.parse()?;
    build_workout(kind, data)
}

/// Build a workout of a known kind from its positional values
pub fn build_workout(kind: WorkoutKind, data: &[f64]) -> Result<Workout> {
    if data.len() != kind.arity() {
        return Err(Error::ArgumentMismatch {
            kind,
            expected: kind.arity(),
            received: data.len(),
        });
    }

    let args = Args { kind, data };
    let workout = match kind {
        WorkoutKind::Running => Workout::running(
            args.count(0, "action_count")?,
            args.real(1, "duration_hours")?,
            args.real(2, "weight_kg")?,
        ),
        WorkoutKind::WalkingWithPoles => Workout::walking_with_poles(
            args.count(0, "action_count")?,
            args.real(1, "duration_hours")?,
            args.real(2, "weight_kg")?,
            args.real(3, "height_cm")?,
        ),
        WorkoutKind::Swimming => Workout::swimming(
            args.count(0, "action_count")?,
            args.real(1, "duration_hours")?,
            args.real(2, "weight_kg")?,
            args.real(3, "pool_length_m")?,
            args.count(4, "pool_lap_count")?,
        ),
    };

    tracing::debug!("Built {} workout from {:?}", kind, data);
    Ok(workout)
}

/// Build every package in order, stopping at the first failure
pub fn read_packages(packages: &[SensorPackage]) -> Result<Vec<Workout>> {
    packages.iter().map(SensorPackage::to_workout).collect()
}

impl SensorPackage {
    pub fn to_workout(&self) -> Result<Workout> {
        read_package(&self.code, &self.data)
    }
}

/// Positional view over the raw values of one package
struct Args<'a> {
    kind: WorkoutKind,
    data: &'a [f64],
}

impl Args<'_> {
    fn real(&self, index: usize, position: &'static str) -> Result<f64> {
        let value = self.data[index];
        if !value.is_finite() {
            return Err(self.invalid(position, value));
        }
        Ok(value)
    }

    /// Counts must be finite, non-negative whole numbers
    fn count(&self, index: usize, position: &'static str) -> Result<u64> {
        let value = self.real(index, position)?;
        if value < 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
            return Err(self.invalid(position, value));
        }
        Ok(value as u64)
    }

    fn invalid(&self, position: &'static str, value: f64) -> Error {
        Error::InvalidArgument {
            kind: self.kind,
            position,
            value,
        }
    }
}
