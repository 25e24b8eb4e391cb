use serde::{Deserialize, Serialize};

use super::WeatherClient;
use crate::{provider_ops, ProviderError};

pub const DEFAULT_WEATHER_URL: &str = "https://api.weatherapi.com/v1";

/// Serializable configuration for the WeatherAPI forecast provider.
/// Builds to a [`WeatherClient`]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WeatherConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub api_key: String,
    /// request timeout. if not provided, the http client default applies.
    pub timeout_seconds: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_WEATHER_URL.to_string()
}

impl WeatherConfig {
    pub fn new(api_key: &str) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: api_key.to_string(),
            timeout_seconds: None,
        }
    }

    pub fn build(&self) -> Result<WeatherClient, ProviderError> {
        if self.api_key.trim().is_empty() {
            return Err(ProviderError::ClientBuild(String::from(
                "weather api_key is empty",
            )));
        }
        let http = provider_ops::build_http_client(self.timeout_seconds)?;
        Ok(WeatherClient::new(&self.base_url, &self.api_key, http))
    }
}
