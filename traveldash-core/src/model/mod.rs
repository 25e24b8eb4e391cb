mod coefficient;
mod comparison;
mod derived_metrics;
mod engine;
mod error;
mod measurement;
pub mod score;
mod travel_mode;

pub use coefficient::{CoefficientTable, ModeCoefficients};
pub use comparison::Comparison;
pub use derived_metrics::{DerivedMetrics, MetricAttribute};
pub use engine::TravelMetricsEngine;
pub use error::TravelMetricsError;
pub use measurement::TravelModeMeasurement;
pub use travel_mode::TravelMode;
