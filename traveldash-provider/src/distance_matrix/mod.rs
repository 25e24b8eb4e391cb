mod client;
mod config;
mod response;
mod transportation_data;

pub use client::{DistanceMatrixClient, RouteProvider};
pub use config::DistanceMatrixConfig;
pub use response::{DistanceMatrixElement, DistanceMatrixResponse, DistanceMatrixRow, TextValue};
pub use transportation_data::{collect_transportation_data, ModeRoute, TransportationData};
