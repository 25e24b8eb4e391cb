mod app_config;
mod app_error;
pub mod compare;
pub mod forecast;
pub mod measurement_file;
mod output;
mod traveldash_app;

pub use app_config::TravelDashConfig;
pub use app_error::TravelDashError;
pub use traveldash_app::{ScoringArgs, TravelDashApp, TravelDashOperation};
