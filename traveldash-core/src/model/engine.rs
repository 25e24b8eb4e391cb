use itertools::Itertools;

use super::{
    score::{self, ScoreWeights, ScoredMode},
    travel_mode::ensure_distinct_modes,
    CoefficientTable, Comparison, DerivedMetrics, TravelMetricsError, TravelMode,
    TravelModeMeasurement,
};

/// derives cost, emissions and duration for travel mode measurements and
/// scores modes against each other. holds no mutable state, so a single
/// engine can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct TravelMetricsEngine {
    coefficients: CoefficientTable,
}

impl TravelMetricsEngine {
    pub fn new(coefficients: CoefficientTable) -> Result<Self, TravelMetricsError> {
        coefficients.validate()?;
        Ok(Self { coefficients })
    }

    pub fn coefficients(&self) -> &CoefficientTable {
        &self.coefficients
    }

    /// computes the [`DerivedMetrics`] of each measurement, in input order.
    pub fn derive_metrics(
        &self,
        measurements: &[TravelModeMeasurement],
    ) -> Result<Vec<DerivedMetrics>, TravelMetricsError> {
        ensure_distinct_modes(measurements.iter().map(|m| m.mode))?;
        measurements
            .iter()
            .map(|m| DerivedMetrics::from_measurement(m, self.coefficients.get(m.mode)))
            .collect()
    }

    /// see [`score::normalize_and_score`].
    pub fn normalize_and_score(
        &self,
        metrics: &[DerivedMetrics],
        weights: &ScoreWeights,
    ) -> Result<Vec<ScoredMode>, TravelMetricsError> {
        score::normalize_and_score(metrics, weights)
    }

    /// derives metrics for all measurements, then scores and ranks those
    /// whose mode is listed in `modes`.
    pub fn compare(
        &self,
        measurements: &[TravelModeMeasurement],
        modes: &[TravelMode],
        weights: &ScoreWeights,
    ) -> Result<Comparison, TravelMetricsError> {
        ensure_distinct_modes(modes.iter().copied())?;
        let metrics = self.derive_metrics(measurements)?;
        let compared = metrics
            .iter()
            .filter(|m| modes.contains(&m.mode))
            .copied()
            .collect_vec();
        log::debug!(
            "comparing modes [{}] of [{}]",
            compared.iter().map(|m| m.mode).join(", "),
            metrics.iter().map(|m| m.mode).join(", ")
        );
        let unmeasured_modes = modes
            .iter()
            .filter(|mode| !metrics.iter().any(|m| m.mode == **mode))
            .copied()
            .collect_vec();
        if !unmeasured_modes.is_empty() {
            log::warn!(
                "no measurement for selected modes [{}], ranking without them",
                unmeasured_modes.iter().join(", ")
            );
        }
        let scores = self.normalize_and_score(&compared, weights)?;
        let ranking = score::rank(&scores);
        Ok(Comparison {
            metrics,
            ranking,
            unmeasured_modes,
        })
    }
}
