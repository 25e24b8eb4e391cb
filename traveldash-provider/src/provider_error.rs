#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    #[error("invalid location '{0}': expected a city name followed by a state code, e.g. 'Cambridge MA'")]
    InvalidLocation(String),
    #[error("invalid input: {0}")]
    InvalidUserInput(String),
    #[error("failed to build http client: {0}")]
    ClientBuild(String),
    #[error("request to '{url}' failed: {message}")]
    Http { url: String, message: String },
    #[error("failed to deserialize response from '{url}': {message}")]
    Deserialize { url: String, message: String },
    #[error("{provider} returned status '{status}': {message}")]
    ApiStatus {
        provider: String,
        status: String,
        message: String,
    },
    #[error("response is missing expected data: {0}")]
    MissingData(String),
    #[error("invalid date range: {0}")]
    InvalidDateRange(String),
}
