use serde::{Deserialize, Serialize};

use super::{score::RankedMode, DerivedMetrics, TravelMode};

/// derived metrics for every measured mode, and the ranking of the subset
/// of modes that were compared.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Comparison {
    pub metrics: Vec<DerivedMetrics>,
    pub ranking: Vec<RankedMode>,
    /// selected modes that had no measurement and so were left out of the
    /// ranking
    #[serde(default)]
    pub unmeasured_modes: Vec<TravelMode>,
}
