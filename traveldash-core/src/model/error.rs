use super::{MetricAttribute, TravelMode};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TravelMetricsError {
    #[error("invalid measurement for mode '{mode}': {message}")]
    InvalidMeasurement { mode: TravelMode, message: String },
    #[error("at least 2 travel modes are required to normalize metrics, found {0}")]
    InsufficientData(usize),
    #[error("{0} has zero standard deviation across the compared modes")]
    DegenerateDistribution(MetricAttribute),
    #[error("unknown travel mode '{0}', expected one of [walking, biking, driving, transit]")]
    UnknownMode(String),
    #[error("travel mode '{0}' was provided more than once")]
    DuplicateMode(TravelMode),
    #[error("weight '{name}' must be a non-negative finite number, found {value}")]
    InvalidWeight { name: String, value: f64 },
    #[error("{name} for mode '{mode}' must be a non-negative finite number, found {value}")]
    InvalidCoefficient {
        mode: TravelMode,
        name: String,
        value: f64,
    },
}
