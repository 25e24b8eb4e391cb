use std::path::PathBuf;

use traveldash_core::model::TravelMetricsError;
use traveldash_provider::ProviderError;

#[derive(thiserror::Error, Debug)]
pub enum TravelDashError {
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Metrics(#[from] TravelMetricsError),
    #[error("Error reading from '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("Error writing to '{path}': {message}")]
    WriteError { path: PathBuf, message: String },
    #[error("Failed to serialize output: {0}")]
    Serialization(String),
}
