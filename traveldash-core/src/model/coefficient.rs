use serde::{Deserialize, Serialize};

use super::{TravelMetricsError, TravelMode};

/// per-mile multipliers converting a travel distance into cost and emissions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ModeCoefficients {
    /// dollars per mile
    pub cost_per_mile: f64,
    /// pounds of CO2 per mile
    pub emissions_per_mile: f64,
}

impl ModeCoefficients {
    pub const ZERO: ModeCoefficients = ModeCoefficients::new(0.0, 0.0);

    pub const fn new(cost_per_mile: f64, emissions_per_mile: f64) -> Self {
        Self {
            cost_per_mile,
            emissions_per_mile,
        }
    }

    fn validate(&self, mode: TravelMode) -> Result<(), TravelMetricsError> {
        let values = [
            ("cost_per_mile", self.cost_per_mile),
            ("emissions_per_mile", self.emissions_per_mile),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(TravelMetricsError::InvalidCoefficient {
                    mode,
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// the coefficients for every [`TravelMode`]. one field per mode, so a lookup
/// can never miss. any mode omitted from a configuration falls back to the
/// default values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CoefficientTable {
    pub walking: ModeCoefficients,
    pub biking: ModeCoefficients,
    pub driving: ModeCoefficients,
    pub transit: ModeCoefficients,
}

impl Default for CoefficientTable {
    fn default() -> Self {
        Self {
            walking: ModeCoefficients::ZERO,
            biking: ModeCoefficients::ZERO,
            driving: ModeCoefficients::new(0.58, 0.96),
            transit: ModeCoefficients::new(0.28, 0.45),
        }
    }
}

impl CoefficientTable {
    pub fn get(&self, mode: TravelMode) -> &ModeCoefficients {
        match mode {
            TravelMode::Walking => &self.walking,
            TravelMode::Biking => &self.biking,
            TravelMode::Driving => &self.driving,
            TravelMode::Transit => &self.transit,
        }
    }

    pub fn validate(&self) -> Result<(), TravelMetricsError> {
        for mode in TravelMode::ALL {
            self.get(mode).validate(mode)?;
        }
        Ok(())
    }
}
