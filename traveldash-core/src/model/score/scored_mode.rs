use serde::{Deserialize, Serialize};

use crate::model::TravelMode;

/// standardized, weighted coordinates of a single mode. the ideal mode sits
/// at the origin.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ScoredMode {
    pub mode: TravelMode,
    pub weighted_cost: f64,
    pub weighted_emission: f64,
    pub weighted_time: f64,
}

impl ScoredMode {
    /// euclidean distance from the origin. smaller is more preferred.
    pub fn norm(&self) -> f64 {
        (self.weighted_cost.powi(2) + self.weighted_emission.powi(2) + self.weighted_time.powi(2))
            .sqrt()
    }
}

/// a [`ScoredMode`] with its position in a ranking (1 = most preferred).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RankedMode {
    pub rank: usize,
    #[serde(flatten)]
    pub score: ScoredMode,
    pub norm: f64,
}
