use serde::{Deserialize, Serialize};
use traveldash_core::model::TravelMode;
use uom::si::{
    f64::{Length, Time},
    length::{meter, mile},
    time::{hour, second},
};

use super::ModeRoute;
use crate::ProviderError;

/// body of a Distance Matrix API response. only the fields used by
/// TravelDash are captured.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DistanceMatrixResponse {
    pub status: String,
    #[serde(default)]
    pub origin_addresses: Vec<String>,
    #[serde(default)]
    pub destination_addresses: Vec<String>,
    #[serde(default)]
    pub rows: Vec<DistanceMatrixRow>,
    pub error_message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DistanceMatrixRow {
    pub elements: Vec<DistanceMatrixElement>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DistanceMatrixElement {
    pub status: String,
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
}

/// a human-readable text alongside its numeric value (meters or seconds).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TextValue {
    pub text: String,
    pub value: f64,
}

const STATUS_OK: &str = "OK";
const NO_ROUTE_STATUSES: [&str; 2] = ["ZERO_RESULTS", "MAX_ROUTE_LENGTH_EXCEEDED"];

impl DistanceMatrixResponse {
    pub fn origin_address(&self) -> Option<&str> {
        self.origin_addresses.first().map(String::as_str)
    }

    pub fn destination_address(&self) -> Option<&str> {
        self.destination_addresses.first().map(String::as_str)
    }

    /// reads the first element of a single origin/destination response as
    /// the route for `mode`. an element reporting no route becomes a zero
    /// distance, zero duration route.
    pub fn into_route(self, mode: TravelMode) -> Result<ModeRoute, ProviderError> {
        if self.status != STATUS_OK {
            return Err(ProviderError::ApiStatus {
                provider: String::from("distance matrix"),
                status: self.status,
                message: self.error_message.unwrap_or_default(),
            });
        }
        let element = self
            .rows
            .into_iter()
            .next()
            .and_then(|row| row.elements.into_iter().next())
            .ok_or_else(|| {
                ProviderError::MissingData(format!("no route element for mode '{mode}'"))
            })?;

        match (element.status.as_str(), element.distance, element.duration) {
            (STATUS_OK, Some(distance), Some(duration)) => {
                let miles = Length::new::<meter>(distance.value).get::<mile>();
                let hours = Time::new::<second>(duration.value).get::<hour>();
                Ok(ModeRoute {
                    mode,
                    distance_miles: miles,
                    duration_hours: hours,
                    distance_text: Some(distance.text),
                    duration_text: Some(duration.text),
                })
            }
            (STATUS_OK, _, _) => {
                log::warn!("route for mode '{mode}' has status OK but no distance or duration, treating as no route");
                Ok(ModeRoute::no_route(mode))
            }
            (status, _, _) if NO_ROUTE_STATUSES.contains(&status) => {
                log::info!("no route found for mode '{mode}' (status {status})");
                Ok(ModeRoute::no_route(mode))
            }
            (status, _, _) => Err(ProviderError::ApiStatus {
                provider: String::from("distance matrix"),
                status: status.to_string(),
                message: format!("route element for mode '{mode}' could not be computed"),
            }),
        }
    }
}
