use reqwest::blocking::Client;

use super::{response::WeatherApiErrorResponse, ForecastResponse};
use crate::{provider_ops, ProviderError};

/// a source of daily forecasts for a location query.
pub trait WeatherProvider {
    /// requests `days` days of forecast, beginning today.
    fn forecast(&self, query: &str, days: u32) -> Result<ForecastResponse, ProviderError>;
}

/// blocking client for the WeatherAPI forecast endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(base_url: &str, api_key: &str, http: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            http,
        }
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast.json", self.base_url)
    }
}

impl WeatherProvider for WeatherClient {
    fn forecast(&self, query: &str, days: u32) -> Result<ForecastResponse, ProviderError> {
        let url = self.forecast_url();
        let days_param = days.to_string();
        log::debug!("requesting {days} day forecast for '{query}'");
        let params = [
            ("key", self.api_key.as_str()),
            ("q", query),
            ("days", days_param.as_str()),
            ("aqi", "no"),
            ("alerts", "no"),
        ];
        let (status, body) = provider_ops::get_text(&self.http, &url, &params)?;
        if !status.is_success() {
            let message = match serde_json::from_str::<WeatherApiErrorResponse>(&body) {
                Ok(e) => format!("{} (code {})", e.error.message, e.error.code),
                Err(_) => body,
            };
            return Err(ProviderError::ApiStatus {
                provider: String::from("weather"),
                status: status.to_string(),
                message,
            });
        }
        provider_ops::deserialize_body(&url, &body)
    }
}
