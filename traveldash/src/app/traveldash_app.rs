use std::path::Path;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use traveldash_core::model::{score::ScoreWeights, TravelMode};
use traveldash_provider::{location::CityState, weather::TemperatureUnit};

use super::{compare, forecast, measurement_file, output, TravelDashConfig, TravelDashError};

/// Command line tool comparing travel modes (time, cost, emissions, distance)
/// and weather forecasts between cities
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TravelDashApp {
    /// TOML configuration file. any value may be overridden by a
    /// TRAVELDASH_* environment variable, e.g. TRAVELDASH_WEATHER__API_KEY.
    #[arg(short, long, global = true)]
    pub configuration_file: Option<String>,

    #[command(subcommand)]
    pub op: TravelDashOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum TravelDashOperation {
    /// fetch routes for every travel mode between two cities, derive cost,
    /// emissions and time, and rank the compared modes.
    Compare {
        /// origin as "City ST", e.g. "Cambridge MA"
        #[arg(long)]
        origin: CityState,

        /// destination as "City ST", e.g. "Boston MA"
        #[arg(long)]
        destination: CityState,

        #[command(flatten)]
        scoring: ScoringArgs,

        /// write the JSON report here instead of stdout
        #[arg(short, long)]
        output_file: Option<String>,
    },
    /// derive and rank metrics from a CSV of measurements with columns
    /// mode,distance_miles,duration_hours. makes no network requests.
    Metrics {
        #[arg(short, long)]
        input_file: String,

        #[command(flatten)]
        scoring: ScoringArgs,

        /// write the JSON report here instead of stdout
        #[arg(short, long)]
        output_file: Option<String>,
    },
    /// summarize the weather forecast for a city over a range of dates.
    Forecast {
        #[arg(long)]
        city: String,

        /// first forecast date (YYYY-MM-DD). defaults to today.
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// last forecast date (YYYY-MM-DD). defaults to the start date.
        #[arg(long)]
        end_date: Option<NaiveDate>,

        #[arg(long, default_value_t = TemperatureUnit::Fahrenheit)]
        units: TemperatureUnit,

        /// write the JSON report here instead of stdout
        #[arg(short, long)]
        output_file: Option<String>,
    },
}

/// mode selection and preference weights. unset values fall back to the
/// configuration.
#[derive(Debug, Clone, Args)]
pub struct ScoringArgs {
    /// comma-delimited modes to rank, e.g. driving,transit
    #[arg(long, value_delimiter = ',')]
    pub modes: Option<Vec<TravelMode>>,

    #[arg(long)]
    pub cost_weight: Option<f64>,

    #[arg(long)]
    pub emission_weight: Option<f64>,

    #[arg(long)]
    pub time_weight: Option<f64>,
}

impl ScoringArgs {
    pub fn modes(&self, config: &TravelDashConfig) -> Vec<TravelMode> {
        self.modes
            .clone()
            .unwrap_or_else(|| config.compare_modes.clone())
    }

    pub fn weights(&self, config: &TravelDashConfig) -> ScoreWeights {
        let defaults = config.weights;
        ScoreWeights::new(
            self.cost_weight.unwrap_or(defaults.cost_weight),
            self.emission_weight.unwrap_or(defaults.emission_weight),
            self.time_weight.unwrap_or(defaults.time_weight),
        )
    }
}

impl TravelDashApp {
    pub fn run(&self) -> Result<(), TravelDashError> {
        let config = TravelDashConfig::load(self.configuration_file.as_deref().map(Path::new))?;
        self.op.run(&config)
    }
}

impl TravelDashOperation {
    pub fn run(&self, config: &TravelDashConfig) -> Result<(), TravelDashError> {
        match self {
            TravelDashOperation::Compare {
                origin,
                destination,
                scoring,
                output_file,
            } => {
                let report = compare::run(
                    config,
                    origin,
                    destination,
                    &scoring.modes(config),
                    &scoring.weights(config),
                )?;
                output::write_json(&report, output_file.as_deref())
            }
            TravelDashOperation::Metrics {
                input_file,
                scoring,
                output_file,
            } => {
                let measurements = measurement_file::read_measurements_file(Path::new(input_file))?;
                let report = compare::build_report(
                    &config.engine()?,
                    &measurements,
                    &scoring.modes(config),
                    &scoring.weights(config),
                )?;
                output::write_json(&report, output_file.as_deref())
            }
            TravelDashOperation::Forecast {
                city,
                start_date,
                end_date,
                units,
                output_file,
            } => {
                let today = chrono::Local::now().date_naive();
                let report =
                    forecast::run(config, city, start_date.unwrap_or(today), *end_date, *units, today)?;
                output::write_json(&report, output_file.as_deref())
            }
        }
    }
}
