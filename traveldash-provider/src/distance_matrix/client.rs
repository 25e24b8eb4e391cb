use reqwest::blocking::Client;
use traveldash_core::model::TravelMode;

use super::DistanceMatrixResponse;
use crate::{location::CityState, provider_ops, ProviderError};

/// a source of single origin/destination routing responses for a mode.
pub trait RouteProvider {
    fn route(
        &self,
        origin: &CityState,
        destination: &CityState,
        mode: TravelMode,
    ) -> Result<DistanceMatrixResponse, ProviderError>;
}

/// blocking client for the Google Distance Matrix API. distances are
/// requested in imperial units; the key is passed as a query parameter.
#[derive(Debug, Clone)]
pub struct DistanceMatrixClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl DistanceMatrixClient {
    pub fn new(base_url: &str, api_key: &str, http: Client) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            http,
        }
    }
}

impl RouteProvider for DistanceMatrixClient {
    fn route(
        &self,
        origin: &CityState,
        destination: &CityState,
        mode: TravelMode,
    ) -> Result<DistanceMatrixResponse, ProviderError> {
        let origins = origin.to_string();
        let destinations = destination.to_string();
        log::debug!("requesting {mode} route from '{origins}' to '{destinations}'");
        let query = [
            ("origins", origins.as_str()),
            ("destinations", destinations.as_str()),
            ("units", "imperial"),
            ("mode", mode.distance_matrix_name()),
            ("key", self.api_key.as_str()),
        ];
        let (status, body) = provider_ops::get_text(&self.http, &self.base_url, &query)?;
        if !status.is_success() {
            return Err(ProviderError::ApiStatus {
                provider: String::from("distance matrix"),
                status: status.to_string(),
                message: body,
            });
        }
        provider_ops::deserialize_body(&self.base_url, &body)
    }
}
