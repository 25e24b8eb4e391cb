use itertools::{izip, Itertools};

use super::{RankedMode, ScoreWeights, ScoredMode};
use crate::{
    model::{travel_mode::ensure_distinct_modes, DerivedMetrics, MetricAttribute, TravelMetricsError},
    util::stats,
};

/// standardizes cost, emissions and duration across the supplied modes
/// (z-score with the sample standard deviation) and scales each by its weight.
/// output order matches input order.
pub fn normalize_and_score(
    metrics: &[DerivedMetrics],
    weights: &ScoreWeights,
) -> Result<Vec<ScoredMode>, TravelMetricsError> {
    weights.validate()?;
    if metrics.len() < 2 {
        return Err(TravelMetricsError::InsufficientData(metrics.len()));
    }
    ensure_distinct_modes(metrics.iter().map(|m| m.mode))?;

    let cost = standardize(metrics, MetricAttribute::Cost)?;
    let emissions = standardize(metrics, MetricAttribute::Emissions)?;
    let time = standardize(metrics, MetricAttribute::Duration)?;

    let scores = izip!(metrics, cost, emissions, time)
        .map(|(m, c, e, t)| ScoredMode {
            mode: m.mode,
            weighted_cost: c * weights.cost_weight,
            weighted_emission: e * weights.emission_weight,
            weighted_time: t * weights.time_weight,
        })
        .collect_vec();
    Ok(scores)
}

/// orders scores by distance to the ideal point, nearest first. ties keep
/// their input order.
pub fn rank(scores: &[ScoredMode]) -> Vec<RankedMode> {
    scores
        .iter()
        .sorted_by(|a, b| a.norm().total_cmp(&b.norm()))
        .enumerate()
        .map(|(idx, score)| RankedMode {
            rank: idx + 1,
            score: *score,
            norm: score.norm(),
        })
        .collect_vec()
}

fn standardize(
    metrics: &[DerivedMetrics],
    attribute: MetricAttribute,
) -> Result<Vec<f64>, TravelMetricsError> {
    let values = metrics.iter().map(|m| m.attribute(attribute)).collect_vec();
    if values.iter().all_equal() {
        return Err(TravelMetricsError::DegenerateDistribution(attribute));
    }
    let (mean, std_dev) = match (stats::mean(&values), stats::sample_std_dev(&values)) {
        (Some(mean), Some(std_dev)) => (mean, std_dev),
        _ => return Err(TravelMetricsError::InsufficientData(values.len())),
    };
    if std_dev == 0.0 {
        return Err(TravelMetricsError::DegenerateDistribution(attribute));
    }
    let standardized = values.iter().map(|v| (v - mean) / std_dev).collect_vec();
    log::debug!("standardized {attribute} with mean {mean:.4}, std dev {std_dev:.4}");
    Ok(standardized)
}
