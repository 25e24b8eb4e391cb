use serde::{Deserialize, Serialize};

use super::DistanceMatrixClient;
use crate::{provider_ops, ProviderError};

pub const DEFAULT_DISTANCE_MATRIX_URL: &str =
    "https://maps.googleapis.com/maps/api/distancematrix/json";

/// Serializable configuration for the Distance Matrix routing provider.
/// Builds to a [`DistanceMatrixClient`]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DistanceMatrixConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub api_key: String,
    /// request timeout. if not provided, the http client default applies.
    pub timeout_seconds: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_DISTANCE_MATRIX_URL.to_string()
}

impl DistanceMatrixConfig {
    pub fn new(api_key: &str) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: api_key.to_string(),
            timeout_seconds: None,
        }
    }

    pub fn build(&self) -> Result<DistanceMatrixClient, ProviderError> {
        if self.api_key.trim().is_empty() {
            return Err(ProviderError::ClientBuild(String::from(
                "distance matrix api_key is empty",
            )));
        }
        let http = provider_ops::build_http_client(self.timeout_seconds)?;
        Ok(DistanceMatrixClient::new(&self.base_url, &self.api_key, http))
    }
}
