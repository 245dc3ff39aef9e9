//! Workout records and their formulas.
//!
//! Running and walking share the step-based distance and speed. Swimming
//! reports a stroke-based distance but derives its speed from the pool
//! geometry instead:
//! - Running: calories from mean speed and weight
//! - Walking with poles: calories from weight, speed and height
//! - Swimming: calories from pool speed and weight

use crate::{Error, Result, WorkoutKind};

pub const METERS_PER_KM: f64 = 1000.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

const WALK_WEIGHT_COEFF: f64 = 0.035;
const WALK_SPEED_WEIGHT_COEFF: f64 = 0.029;
const KMH_TO_MS: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Readings shared by every workout kind
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Effort {
    /// Steps or strokes
    pub action_count: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

/// A single workout built from one sensor package
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Workout {
    Running {
        effort: Effort,
    },
    WalkingWithPoles {
        effort: Effort,
        height_cm: f64,
    },
    Swimming {
        effort: Effort,
        pool_length_m: f64,
        pool_lap_count: u64,
    },
}

impl Workout {
    pub fn running(action_count: u64, duration_hours: f64, weight_kg: f64) -> Self {
        Workout::Running {
            effort: Effort {
                action_count,
                duration_hours,
                weight_kg,
            },
        }
    }

    pub fn walking_with_poles(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Self {
        Workout::WalkingWithPoles {
            effort: Effort {
                action_count,
                duration_hours,
                weight_kg,
            },
            height_cm,
        }
    }

    pub fn swimming(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lap_count: u64,
    ) -> Self {
        Workout::Swimming {
            effort: Effort {
                action_count,
                duration_hours,
                weight_kg,
            },
            pool_length_m,
            pool_lap_count,
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running { .. } => WorkoutKind::Running,
            Workout::WalkingWithPoles { .. } => WorkoutKind::WalkingWithPoles,
            Workout::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    pub fn effort(&self) -> &Effort {
        match self {
            Workout::Running { effort }
            | Workout::WalkingWithPoles { effort, .. }
            | Workout::Swimming { effort, .. } => effort,
        }
    }

    pub fn duration_hours(&self) -> f64 {
        self.effort().duration_hours
    }

    pub fn weight_kg(&self) -> f64 {
        self.effort().weight_kg
    }

    /// Distance in kilometers, from the action count and the kind's step length.
    ///
    /// Swimming reports this stroke-based figure too, even though its speed
    /// ignores it.
    pub fn distance(&self) -> f64 {
        self.effort().action_count as f64 * self.kind().step_length_m() / METERS_PER_KM
    }

    /// Average speed in km/h over the whole duration
    pub fn mean_speed(&self) -> Result<f64> {
        let duration = self.checked_duration()?;
        match self {
            Workout::Swimming {
                pool_length_m,
                pool_lap_count,
                ..
            } => Ok(pool_length_m * *pool_lap_count as f64 / METERS_PER_KM / duration),
            _ => Ok(self.distance() / duration),
        }
    }

    /// Kilocalories burned
    pub fn calories(&self) -> Result<f64> {
        let speed = self.mean_speed()?;
        let Effort {
            duration_hours,
            weight_kg,
            ..
        } = *self.effort();

        match self {
            Workout::Running { .. } => Ok((RUN_SPEED_MULTIPLIER * speed + RUN_SPEED_SHIFT)
                * weight_kg
                / METERS_PER_KM
                * duration_hours
                * MINUTES_PER_HOUR),
            Workout::WalkingWithPoles { height_cm, .. } => {
                if *height_cm == 0.0 {
                    return Err(Error::ArithmeticFault(
                        "height_cm is zero in walking calorie formula".into(),
                    ));
                }
                Ok((WALK_WEIGHT_COEFF * weight_kg
                    + (speed * KMH_TO_MS).powi(2) / (height_cm / CM_IN_M)
                        * WALK_SPEED_WEIGHT_COEFF
                        * weight_kg)
                    * duration_hours
                    * MINUTES_PER_HOUR)
            }
            Workout::Swimming { .. } => Ok((speed + SWIM_SPEED_SHIFT)
                * SWIM_WEIGHT_MULTIPLIER
                * weight_kg
                * duration_hours),
        }
    }

    fn checked_duration(&self) -> Result<f64> {
        let duration = self.duration_hours();
        if duration == 0.0 {
            return Err(Error::ArithmeticFault(format!(
                "{} workout has zero duration",
                self.kind()
            )));
        }
        Ok(duration)
    }
}
