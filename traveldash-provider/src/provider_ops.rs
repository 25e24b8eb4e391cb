use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ProviderError;

/// builds the blocking http client shared by a provider's requests.
pub fn build_http_client(timeout_seconds: Option<u64>) -> Result<Client, ProviderError> {
    let mut builder = Client::builder();
    if let Some(secs) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| ProviderError::ClientBuild(e.to_string()))
}

/// sends a GET request with url-encoded query parameters and returns the
/// status code along with the raw response body.
pub fn get_text<Q: Serialize + ?Sized>(
    http: &Client,
    url: &str,
    query: &Q,
) -> Result<(reqwest::StatusCode, String), ProviderError> {
    let response = http
        .get(url)
        .query(query)
        .send()
        .map_err(|e| ProviderError::Http {
            url: url.to_string(),
            message: e.to_string(),
        })?;
    let status = response.status();
    let body = response.text().map_err(|e| ProviderError::Http {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    log::debug!("GET {url} returned {status} ({} bytes)", body.len());
    Ok((status, body))
}

pub fn deserialize_body<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, ProviderError> {
    serde_json::from_str(body).map_err(|e| ProviderError::Deserialize {
        url: url.to_string(),
        message: e.to_string(),
    })
}
