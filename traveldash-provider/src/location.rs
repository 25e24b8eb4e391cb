use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ProviderError;

/// a city paired with its state code, as selected from the city dropdown
/// (e.g. "Cambridge MA", "New York NY").
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CityState {
    pub city: String,
    pub state: String,
}

impl CityState {
    pub fn new(city: &str, state: &str) -> Self {
        Self {
            city: city.to_string(),
            state: state.to_string(),
        }
    }
}

impl FromStr for CityState {
    type Err = ProviderError;

    /// the state code is the last whitespace-separated token; everything
    /// before it is the city.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().rsplit_once(char::is_whitespace) {
            Some((city, state)) if !city.trim().is_empty() && !state.is_empty() => {
                Ok(CityState::new(city.trim(), state))
            }
            _ => Err(ProviderError::InvalidLocation(s.to_string())),
        }
    }
}

/// formats as the "City, ST" query value expected by the providers.
impl Display for CityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.city, self.state)
    }
}
