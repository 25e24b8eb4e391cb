pub mod distance_matrix;
pub mod location;
mod provider_error;
mod provider_ops;
pub mod weather;

pub use provider_error::ProviderError;
