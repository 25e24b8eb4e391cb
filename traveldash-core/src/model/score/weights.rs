use serde::{Deserialize, Serialize};

use crate::model::TravelMetricsError;

/// user preference weights applied to each standardized attribute.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ScoreWeights {
    pub cost_weight: f64,
    pub emission_weight: f64,
    pub time_weight: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            cost_weight: 1.0,
            emission_weight: 1.0,
            time_weight: 1.0,
        }
    }
}

impl ScoreWeights {
    pub fn new(cost_weight: f64, emission_weight: f64, time_weight: f64) -> Self {
        Self {
            cost_weight,
            emission_weight,
            time_weight,
        }
    }

    pub fn validate(&self) -> Result<(), TravelMetricsError> {
        let weights = [
            ("cost_weight", self.cost_weight),
            ("emission_weight", self.emission_weight),
            ("time_weight", self.time_weight),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(TravelMetricsError::InvalidWeight {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}
