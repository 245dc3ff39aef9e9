//! Workout summaries and their rendered message lines.

use crate::{MessageLocale, Result, Workout};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of everything printed about one workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SummaryReport {
    pub kind: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl Workout {
    /// Compute the full summary, or fail without a partial report
    pub fn summary(&self) -> Result<SummaryReport> {
        Ok(SummaryReport {
            kind: self.kind().label().to_string(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance(),
            mean_speed_kmh: self.mean_speed()?,
            calories: self.calories()?,
        })
    }
}

impl SummaryReport {
    /// English summary line
    pub fn message(&self) -> String {
        self.render(MessageLocale::English)
    }

    /// Summary line with the labels of the given locale; numbers always get 3 decimals
    pub fn render(&self, locale: MessageLocale) -> String {
        match locale {
            MessageLocale::English => format!(
                "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; \
                 Avg speed: {:.3} km/h; Calories burned: {:.3}.",
                self.kind, self.duration_hours, self.distance_km, self.mean_speed_kmh, self.calories
            ),
            MessageLocale::Russian => format!(
                "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
                 Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
                self.kind, self.duration_hours, self.distance_km, self.mean_speed_kmh, self.calories
            ),
        }
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
