use std::path::Path;

use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use traveldash_core::model::{
    score::ScoreWeights, CoefficientTable, TravelMetricsEngine, TravelMode,
};
use traveldash_provider::{distance_matrix::DistanceMatrixConfig, weather::WeatherConfig};

use super::TravelDashError;

/// prefix of environment variables that override file configuration, e.g.
/// `TRAVELDASH_DISTANCE_MATRIX__API_KEY`.
pub const ENV_PREFIX: &str = "TRAVELDASH";

/// application configuration. provider sections are only required by the
/// commands that call those providers.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TravelDashConfig {
    pub distance_matrix: Option<DistanceMatrixConfig>,
    pub weather: Option<WeatherConfig>,
    #[serde(default)]
    pub coefficients: CoefficientTable,
    #[serde(default)]
    pub weights: ScoreWeights,
    /// modes scored against each other when none are selected
    #[serde(default = "default_compare_modes")]
    pub compare_modes: Vec<TravelMode>,
}

fn default_compare_modes() -> Vec<TravelMode> {
    TravelMode::VEHICULAR.to_vec()
}

impl Default for TravelDashConfig {
    fn default() -> Self {
        Self {
            distance_matrix: None,
            weather: None,
            coefficients: CoefficientTable::default(),
            weights: ScoreWeights::default(),
            compare_modes: default_compare_modes(),
        }
    }
}

impl TravelDashConfig {
    /// loads configuration from an optional TOML file layered beneath
    /// `TRAVELDASH_*` environment variables.
    pub fn load(configuration_file: Option<&Path>) -> Result<Self, TravelDashError> {
        let mut builder = Config::builder();
        let source = match configuration_file {
            Some(path) => {
                builder = builder.add_source(File::from(path));
                format!("file '{}'", path.display())
            }
            None => String::from("environment"),
        };
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );
        Self::from_builder(builder, &source)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, TravelDashError> {
        let builder = Config::builder().add_source(File::from_str(contents, FileFormat::Toml));
        Self::from_builder(builder, "toml string")
    }

    fn from_builder(
        builder: ConfigBuilder<DefaultState>,
        source: &str,
    ) -> Result<Self, TravelDashError> {
        let config = builder.build().map_err(|e| {
            TravelDashError::Configuration(format!("{source} produced error: {e}"))
        })?;
        let app_config: TravelDashConfig = config.try_deserialize().map_err(|e| {
            TravelDashError::Configuration(format!("failure reading {source}: {e}"))
        })?;
        log::debug!("loaded configuration from {source}");
        Ok(app_config)
    }

    pub fn engine(&self) -> Result<TravelMetricsEngine, TravelDashError> {
        Ok(TravelMetricsEngine::new(self.coefficients.clone())?)
    }

    pub fn distance_matrix(&self) -> Result<&DistanceMatrixConfig, TravelDashError> {
        self.distance_matrix.as_ref().ok_or_else(|| {
            TravelDashError::Configuration(String::from(
                "missing [distance_matrix] section, required to fetch routes",
            ))
        })
    }

    pub fn weather(&self) -> Result<&WeatherConfig, TravelDashError> {
        self.weather.as_ref().ok_or_else(|| {
            TravelDashError::Configuration(String::from(
                "missing [weather] section, required to fetch forecasts",
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use traveldash_core::model::ModeCoefficients;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = TravelDashConfig::from_toml_str("").expect("empty config is valid");
        assert!(config.distance_matrix.is_none());
        assert!(config.weather.is_none());
        assert_eq!(config.coefficients, CoefficientTable::default());
        assert_eq!(config.weights, ScoreWeights::default());
        assert_eq!(config.compare_modes, TravelMode::VEHICULAR.to_vec());
        assert!(config.distance_matrix().is_err());
    }

    #[test]
    fn test_full_config() {
        let toml = r#"
            compare_modes = ["walking", "biking", "driving", "transit"]

            [distance_matrix]
            api_key = "dm-key"
            timeout_seconds = 10

            [weather]
            base_url = "http://localhost:8080/v1"
            api_key = "weather-key"

            [coefficients.driving]
            cost_per_mile = 0.65
            emissions_per_mile = 0.89

            [weights]
            time_weight = 4.0
        "#;
        let config = TravelDashConfig::from_toml_str(toml).expect("valid config");

        let dm = config.distance_matrix().expect("distance matrix section");
        assert_eq!(dm.api_key, "dm-key");
        assert_eq!(
            dm.base_url,
            "https://maps.googleapis.com/maps/api/distancematrix/json"
        );
        assert_eq!(dm.timeout_seconds, Some(10));

        let weather = config.weather().expect("weather section");
        assert_eq!(weather.base_url, "http://localhost:8080/v1");
        assert_eq!(weather.timeout_seconds, None);

        assert_eq!(config.coefficients.driving, ModeCoefficients::new(0.65, 0.89));
        assert_eq!(
            config.coefficients.transit,
            CoefficientTable::default().transit
        );
        assert_eq!(config.weights, ScoreWeights::new(1.0, 1.0, 4.0));
        assert_eq!(config.compare_modes, TravelMode::ALL.to_vec());
    }

    #[test]
    fn test_invalid_mode_in_config() {
        let result = TravelDashConfig::from_toml_str(r#"compare_modes = ["flying"]"#);
        assert!(matches!(result, Err(TravelDashError::Configuration(_))));
    }

    #[test]
    fn test_negative_coefficient_fails_engine() {
        let toml = r#"
            [coefficients.transit]
            cost_per_mile = -0.28
            emissions_per_mile = 0.45
        "#;
        let config = TravelDashConfig::from_toml_str(toml).expect("parses");
        assert!(matches!(
            config.engine(),
            Err(TravelDashError::Metrics(_))
        ));
    }
}
