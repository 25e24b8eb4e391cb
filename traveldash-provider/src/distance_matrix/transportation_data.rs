use itertools::Itertools;
use serde::{Deserialize, Serialize};
use traveldash_core::model::{TravelMode, TravelModeMeasurement};

use super::RouteProvider;
use crate::{location::CityState, ProviderError};

/// the route reported for a single mode, in miles and hours.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModeRoute {
    pub mode: TravelMode,
    pub distance_miles: f64,
    pub duration_hours: f64,
    pub distance_text: Option<String>,
    pub duration_text: Option<String>,
}

/// the routes for every [`TravelMode`] between one origin and destination.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransportationData {
    pub origin: CityState,
    pub destination: CityState,
    pub origin_address: Option<String>,
    pub destination_address: Option<String>,
    pub routes: Vec<ModeRoute>,
}

impl ModeRoute {
    pub fn no_route(mode: TravelMode) -> Self {
        Self {
            mode,
            distance_miles: 0.0,
            duration_hours: 0.0,
            distance_text: None,
            duration_text: None,
        }
    }

    pub fn measurement(&self) -> TravelModeMeasurement {
        TravelModeMeasurement::from_miles_and_hours(
            self.mode,
            self.distance_miles,
            self.duration_hours,
        )
    }
}

impl TransportationData {
    pub fn measurements(&self) -> Vec<TravelModeMeasurement> {
        self.routes.iter().map(ModeRoute::measurement).collect_vec()
    }
}

/// requests a route for each travel mode, one request per mode, and collects
/// them with the addresses resolved by the provider.
pub fn collect_transportation_data(
    provider: &dyn RouteProvider,
    origin: &CityState,
    destination: &CityState,
) -> Result<TransportationData, ProviderError> {
    let mut origin_address = None;
    let mut destination_address = None;
    let mut routes = Vec::with_capacity(TravelMode::ALL.len());
    for mode in TravelMode::ALL {
        let response = provider.route(origin, destination, mode)?;
        if origin_address.is_none() {
            origin_address = response.origin_address().map(String::from);
        }
        if destination_address.is_none() {
            destination_address = response.destination_address().map(String::from);
        }
        let route = response.into_route(mode)?;
        log::info!(
            "{mode}: {:.2} mi, {:.2} h",
            route.distance_miles,
            route.duration_hours
        );
        routes.push(route);
    }
    Ok(TransportationData {
        origin: origin.clone(),
        destination: destination.clone(),
        origin_address,
        destination_address,
        routes,
    })
}
