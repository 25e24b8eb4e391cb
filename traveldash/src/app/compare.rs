use itertools::Itertools;
use serde::Serialize;
use traveldash_core::model::{
    score::ScoreWeights, Comparison, TravelMetricsEngine, TravelMode, TravelModeMeasurement,
};
use traveldash_provider::{
    distance_matrix::{collect_transportation_data, TransportationData},
    location::CityState,
};

use super::{TravelDashConfig, TravelDashError};

/// a comparison along with the inputs that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub compared_modes: Vec<TravelMode>,
    pub weights: ScoreWeights,
    #[serde(flatten)]
    pub comparison: Comparison,
}

/// the report of the compare command, with the routes fetched per mode.
#[derive(Debug, Clone, Serialize)]
pub struct RouteComparisonReport {
    pub transportation: TransportationData,
    #[serde(flatten)]
    pub report: ComparisonReport,
}

/// fetches routes for every mode between `origin` and `destination` and
/// ranks the modes listed in `modes`.
pub fn run(
    config: &TravelDashConfig,
    origin: &CityState,
    destination: &CityState,
    modes: &[TravelMode],
    weights: &ScoreWeights,
) -> Result<RouteComparisonReport, TravelDashError> {
    let engine = config.engine()?;
    let client = config.distance_matrix()?.build()?;
    log::info!("fetching routes from '{origin}' to '{destination}'");
    let transportation = collect_transportation_data(&client, origin, destination)?;
    let report = build_report(&engine, &transportation.measurements(), modes, weights)?;
    Ok(RouteComparisonReport {
        transportation,
        report,
    })
}

pub fn build_report(
    engine: &TravelMetricsEngine,
    measurements: &[TravelModeMeasurement],
    modes: &[TravelMode],
    weights: &ScoreWeights,
) -> Result<ComparisonReport, TravelDashError> {
    let comparison = engine.compare(measurements, modes, weights)?;
    if let Some(best) = comparison.ranking.first() {
        log::info!(
            "most preferred of [{}]: {} (distance to ideal {:.3})",
            modes.iter().join(", "),
            best.score.mode,
            best.norm
        );
    }
    Ok(ComparisonReport {
        compared_modes: modes.to_vec(),
        weights: *weights,
        comparison,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use traveldash_core::model::TravelMetricsError;

    fn measurements() -> Vec<TravelModeMeasurement> {
        vec![
            TravelModeMeasurement::from_miles_and_hours(TravelMode::Walking, 3.2, 1.1),
            TravelModeMeasurement::from_miles_and_hours(TravelMode::Biking, 3.5, 0.35),
            TravelModeMeasurement::from_miles_and_hours(TravelMode::Driving, 10.0, 0.5),
            TravelModeMeasurement::from_miles_and_hours(TravelMode::Transit, 12.0, 0.8),
        ]
    }

    #[test]
    fn test_build_report() {
        let engine = TravelMetricsEngine::default();
        let weights = ScoreWeights::default();
        let report = build_report(&engine, &measurements(), &TravelMode::VEHICULAR, &weights)
            .expect("report");
        assert_eq!(report.compared_modes, TravelMode::VEHICULAR.to_vec());
        assert_eq!(report.comparison.metrics.len(), 4);
        assert_eq!(report.comparison.ranking.len(), 2);

        let json = serde_json::to_value(&report).expect("report serializes");
        assert_eq!(json["metrics"][2]["mode"], "driving");
        assert_eq!(json["metrics"][2]["cost_dollars"], 5.8);
        assert_eq!(json["ranking"][0]["rank"], 1);
        assert!(json["ranking"][0]["weighted_cost"].is_number());
        assert_eq!(json["weights"]["time_weight"], 1.0);
    }

    #[test]
    fn test_build_report_with_single_mode() {
        let engine = TravelMetricsEngine::default();
        let result = build_report(
            &engine,
            &measurements(),
            &[TravelMode::Transit],
            &ScoreWeights::default(),
        );
        assert!(matches!(
            result,
            Err(TravelDashError::Metrics(TravelMetricsError::InsufficientData(1)))
        ));
    }

    #[test]
    fn test_run_requires_distance_matrix_config() {
        let config = TravelDashConfig::default();
        let result = run(
            &config,
            &CityState::new("Cambridge", "MA"),
            &CityState::new("Boston", "MA"),
            &TravelMode::VEHICULAR,
            &ScoreWeights::default(),
        );
        assert!(matches!(result, Err(TravelDashError::Configuration(_))));
    }
}
