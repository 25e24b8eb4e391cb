use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ProviderError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Celsius => "°C",
        }
    }

    /// formats a temperature with its unit symbol, e.g. "71.2°F".
    pub fn label(&self, value: f64) -> String {
        format!("{value}{}", self.symbol())
    }
}

impl Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Celsius => "celsius",
        };
        write!(f, "{s}")
    }
}

impl FromStr for TemperatureUnit {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fahrenheit" | "f" => Ok(TemperatureUnit::Fahrenheit),
            "celsius" | "c" => Ok(TemperatureUnit::Celsius),
            other => Err(ProviderError::InvalidUserInput(format!(
                "unknown temperature unit '{other}', expected 'fahrenheit' or 'celsius'"
            ))),
        }
    }
}
