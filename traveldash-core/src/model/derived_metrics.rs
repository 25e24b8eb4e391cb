use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{ModeCoefficients, TravelMetricsError, TravelMode, TravelModeMeasurement};
use crate::util::rounding::round_display;

const MINUTES_PER_HOUR: f64 = 60.0;

/// comparison metrics computed from a [`TravelModeMeasurement`]. all values
/// are rounded to two decimal places.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub mode: TravelMode,
    pub distance_miles: f64,
    pub cost_dollars: f64,
    pub emissions_lbs: f64,
    pub duration_minutes: f64,
}

/// the attributes of a [`DerivedMetrics`] that take part in a weighted score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetricAttribute {
    Cost,
    Emissions,
    Duration,
}

impl DerivedMetrics {
    pub fn from_measurement(
        measurement: &TravelModeMeasurement,
        coefficients: &ModeCoefficients,
    ) -> Result<DerivedMetrics, TravelMetricsError> {
        measurement.validate()?;
        let miles = measurement.distance_miles;
        Ok(DerivedMetrics {
            mode: measurement.mode,
            distance_miles: round_display(miles),
            cost_dollars: round_display(miles * coefficients.cost_per_mile),
            emissions_lbs: round_display(miles * coefficients.emissions_per_mile),
            duration_minutes: round_display(measurement.duration_hours * MINUTES_PER_HOUR),
        })
    }

    pub fn attribute(&self, attribute: MetricAttribute) -> f64 {
        match attribute {
            MetricAttribute::Cost => self.cost_dollars,
            MetricAttribute::Emissions => self.emissions_lbs,
            MetricAttribute::Duration => self.duration_minutes,
        }
    }
}

impl Display for MetricAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MetricAttribute::Cost => "cost",
            MetricAttribute::Emissions => "emissions",
            MetricAttribute::Duration => "duration",
        };
        write!(f, "{s}")
    }
}
