use chrono::{DateTime, NaiveDateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{ForecastDay, HourForecast, TemperatureUnit};
use crate::ProviderError;

/// hours of the day sampled for the hourly summary table.
pub const SUMMARY_HOURS: [usize; 6] = [0, 4, 8, 12, 16, 20];

const HOUR_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// conditions at one hour of a forecast day, in a caller-chosen unit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HourlyConditions {
    /// local time of day, "HH:MM"
    pub time: String,
    pub condition: String,
    pub icon: String,
    pub unit: TemperatureUnit,
    pub temperature: f64,
    pub feels_like: f64,
    /// percent chance of rain or snow
    pub precipitation_chance: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HourlyTemperature {
    /// instant of the reading, from the forecast's unix timestamp
    pub timestamp: DateTime<Utc>,
    /// local time at the location
    pub time: NaiveDateTime,
    pub temperature: f64,
}

impl HourlyConditions {
    pub fn new(hour: &HourForecast, unit: TemperatureUnit) -> Result<Self, ProviderError> {
        let time = parse_hour_time(&hour.time)?.format("%H:%M").to_string();
        Ok(Self {
            time,
            condition: hour.condition.text.clone(),
            icon: hour.condition.icon.clone(),
            unit,
            temperature: hour.temperature(unit),
            feels_like: hour.feels_like(unit),
            precipitation_chance: hour.precipitation_chance(),
        })
    }

    pub fn temperature_label(&self) -> String {
        self.unit.label(self.temperature)
    }

    pub fn feels_like_label(&self) -> String {
        self.unit.label(self.feels_like)
    }

    pub fn precipitation_label(&self) -> String {
        format!("{}%", self.precipitation_chance)
    }
}

/// conditions every four hours across a forecast day, beginning at midnight.
pub fn hourly_summary(
    day: &ForecastDay,
    unit: TemperatureUnit,
) -> Result<Vec<HourlyConditions>, ProviderError> {
    SUMMARY_HOURS
        .iter()
        .map(|h| {
            let hour = day.hour.get(*h).ok_or_else(|| {
                ProviderError::MissingData(format!(
                    "forecast for {} has {} hours, missing hour {h}",
                    day.date,
                    day.hour.len()
                ))
            })?;
            HourlyConditions::new(hour, unit)
        })
        .collect()
}

/// every hourly temperature across the given days, in time order.
pub fn hourly_temperatures(
    days: &[&ForecastDay],
    unit: TemperatureUnit,
) -> Result<Vec<HourlyTemperature>, ProviderError> {
    let temps = days
        .iter()
        .flat_map(|d| d.hour.iter())
        .map(|h| {
            Ok(HourlyTemperature {
                timestamp: h.timestamp()?,
                time: parse_hour_time(&h.time)?,
                temperature: h.temperature(unit),
            })
        })
        .collect::<Result<Vec<_>, ProviderError>>()?;
    Ok(temps.into_iter().sorted_by_key(|t| t.timestamp).collect_vec())
}

fn parse_hour_time(time: &str) -> Result<NaiveDateTime, ProviderError> {
    NaiveDateTime::parse_from_str(time, HOUR_TIME_FORMAT).map_err(|e| {
        ProviderError::MissingData(format!(
            "hour time '{time}' does not match '{HOUR_TIME_FORMAT}': {e}"
        ))
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    /// a forecast day with 24 hours; temperature in fahrenheit equals the hour.
    pub(crate) fn mock_day(date: &str) -> ForecastDay {
        let day = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .expect("test invariant failed: bad mock date");
        let hours = (0..24u32)
            .map(|h| {
                let temp_f = h as f64;
                let feelslike_f = temp_f - 2.0;
                let time_epoch = day
                    .and_hms_opt(h, 0, 0)
                    .expect("test invariant failed: bad mock hour")
                    .and_utc()
                    .timestamp();
                json!({
                    "time_epoch": time_epoch,
                    "time": format!("{date} {h:02}:00"),
                    "temp_c": 10.5,
                    "temp_f": temp_f,
                    "feelslike_c": 9.0,
                    "feelslike_f": feelslike_f,
                    "condition": { "text": "Partly cloudy", "icon": "//cdn.weatherapi.com/116.png", "code": 1003 },
                    "chance_of_rain": 40,
                    "chance_of_snow": 5
                })
            })
            .collect_vec();
        serde_json::from_value(json!({ "date": date, "hour": hours }))
            .expect("test invariant failed: mock day should deserialize")
    }

    #[test]
    fn test_hourly_summary_samples_every_four_hours() {
        let day = mock_day("2023-04-04");
        let summary = hourly_summary(&day, TemperatureUnit::Fahrenheit).expect("summary");
        let times = summary.iter().map(|h| h.time.as_str()).collect_vec();
        assert_eq!(times, vec!["00:00", "04:00", "08:00", "12:00", "16:00", "20:00"]);
        assert_eq!(summary[2].temperature, 8.0);
        assert_eq!(summary[2].feels_like, 6.0);
        assert_eq!(summary[2].temperature_label(), "8°F");
        assert_eq!(summary[2].condition, "Partly cloudy");
        assert_eq!(summary[2].precipitation_chance, 45.0);
        assert_eq!(summary[2].precipitation_label(), "45%");
    }

    #[test]
    fn test_hourly_summary_celsius() {
        let day = mock_day("2023-04-04");
        let summary = hourly_summary(&day, TemperatureUnit::Celsius).expect("summary");
        assert_eq!(summary[0].temperature_label(), "10.5°C");
        assert_eq!(summary[0].feels_like_label(), "9°C");
    }

    #[test]
    fn test_hourly_summary_missing_hours() {
        let mut day = mock_day("2023-04-04");
        day.hour.truncate(10);
        let result = hourly_summary(&day, TemperatureUnit::Fahrenheit);
        assert!(matches!(result, Err(ProviderError::MissingData(_))));
    }

    #[test]
    fn test_hourly_temperatures_in_order() {
        let first = mock_day("2023-04-04");
        let second = mock_day("2023-04-05");
        let temps = hourly_temperatures(&[&second, &first], TemperatureUnit::Fahrenheit)
            .expect("temperatures");
        assert_eq!(temps.len(), 48);
        assert!(temps.windows(2).all(|w| w[0].time < w[1].time));
        assert!(temps.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        assert_eq!(temps[0].temperature, 0.0);
        assert_eq!(temps[47].temperature, 23.0);
        assert_eq!(temps[1].timestamp.to_rfc3339(), "2023-04-04T01:00:00+00:00");
    }

    #[test]
    fn test_hourly_temperatures_ordered_by_timestamp() {
        let mut day = mock_day("2023-04-04");
        day.hour.truncate(2);
        // local time strings disagree with the instants, as around a clock change
        day.hour[0].time = String::from("2023-04-04 01:00");
        day.hour[1].time = String::from("2023-04-04 00:00");
        let temps = hourly_temperatures(&[&day], TemperatureUnit::Fahrenheit).expect("temperatures");
        assert_eq!(temps[0].temperature, 0.0);
        assert_eq!(temps[1].temperature, 1.0);
    }

    #[test]
    fn test_hourly_temperatures_bad_timestamp() {
        let mut day = mock_day("2023-04-04");
        day.hour[3].time_epoch = i64::MAX;
        let result = hourly_temperatures(&[&day], TemperatureUnit::Fahrenheit);
        assert!(matches!(result, Err(ProviderError::MissingData(_))));
    }
}
