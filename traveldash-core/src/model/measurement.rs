use serde::{Deserialize, Serialize};

use super::{TravelMetricsError, TravelMode};

/// distance and duration reported by a routing provider for a single mode
/// between a fixed origin and destination.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TravelModeMeasurement {
    pub mode: TravelMode,
    pub distance_miles: f64,
    pub duration_hours: f64,
}

impl TravelModeMeasurement {
    pub fn from_miles_and_hours(mode: TravelMode, distance_miles: f64, duration_hours: f64) -> Self {
        Self {
            mode,
            distance_miles,
            duration_hours,
        }
    }

    /// the measurement recorded when the provider finds no route for a mode.
    pub fn no_route(mode: TravelMode) -> Self {
        Self::from_miles_and_hours(mode, 0.0, 0.0)
    }

    /// distance and duration must both be finite and non-negative. values are
    /// never clamped.
    pub fn validate(&self) -> Result<(), TravelMetricsError> {
        let checks = [
            ("distance", self.distance_miles, "miles"),
            ("duration", self.duration_hours, "hours"),
        ];
        for (name, value, unit) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(TravelMetricsError::InvalidMeasurement {
                    mode: self.mode,
                    message: format!("{name} must be a non-negative number, found {value} {unit}"),
                });
            }
        }
        Ok(())
    }
}
