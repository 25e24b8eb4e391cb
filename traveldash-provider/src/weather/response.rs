use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::TemperatureUnit;
use crate::ProviderError;

/// body of a WeatherAPI `forecast.json` response, limited to the fields
/// TravelDash reads.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ForecastResponse {
    pub location: WeatherLocation,
    pub forecast: Forecast,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeatherLocation {
    pub name: String,
    pub region: String,
    #[serde(default)]
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ForecastDay {
    pub date: NaiveDate,
    #[serde(default)]
    pub hour: Vec<HourForecast>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HourForecast {
    /// unix timestamp of the hour
    pub time_epoch: i64,
    /// local time at the location, formatted "YYYY-MM-DD HH:MM"
    pub time: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub condition: Condition,
    #[serde(default)]
    pub chance_of_rain: f64,
    #[serde(default)]
    pub chance_of_snow: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Condition {
    pub text: String,
    pub icon: String,
}

/// error body returned by WeatherAPI on a failed request.
#[derive(Deserialize, Debug)]
pub(crate) struct WeatherApiErrorResponse {
    pub error: WeatherApiError,
}

#[derive(Deserialize, Debug)]
pub(crate) struct WeatherApiError {
    pub code: i64,
    pub message: String,
}

impl HourForecast {
    pub fn timestamp(&self) -> Result<DateTime<Utc>, ProviderError> {
        DateTime::<Utc>::from_timestamp(self.time_epoch, 0).ok_or_else(|| {
            ProviderError::MissingData(format!(
                "hour '{}' has out of range time_epoch {}",
                self.time, self.time_epoch
            ))
        })
    }

    pub fn temperature(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Fahrenheit => self.temp_f,
            TemperatureUnit::Celsius => self.temp_c,
        }
    }

    pub fn feels_like(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Fahrenheit => self.feelslike_f,
            TemperatureUnit::Celsius => self.feelslike_c,
        }
    }

    /// chance of any precipitation, the sum of the chances of rain and snow.
    pub fn precipitation_chance(&self) -> f64 {
        self.chance_of_rain + self.chance_of_snow
    }
}
