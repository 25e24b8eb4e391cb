use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    hourly_summary, hourly_temperatures, ForecastWindow, HourlyConditions, HourlyTemperature,
    TemperatureUnit, WeatherLocation, WeatherProvider,
};
use crate::ProviderError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub hours: Vec<HourlyConditions>,
}

/// forecast data for a city over a date window.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ForecastReport {
    pub location: WeatherLocation,
    pub window: ForecastWindow,
    pub unit: TemperatureUnit,
    pub hourly_temperatures: Vec<HourlyTemperature>,
    pub daily: Vec<DailySummary>,
}

/// requests enough forecast days to cover `window` and summarizes the days
/// that fall inside it.
pub fn collect_forecast(
    provider: &dyn WeatherProvider,
    query: &str,
    window: &ForecastWindow,
    today: NaiveDate,
    unit: TemperatureUnit,
) -> Result<ForecastReport, ProviderError> {
    let days = window.days_requested(today)?;
    let response = provider.forecast(query, days)?;
    let in_window = window.filter(&response.forecast.forecastday);
    if in_window.is_empty() {
        log::warn!(
            "forecast for '{query}' has no days between {} and {}",
            window.start_date,
            window.end_date
        );
    }
    let hourly_temperatures = hourly_temperatures(&in_window, unit)?;
    let daily = in_window
        .iter()
        .map(|d| {
            Ok(DailySummary {
                date: d.date,
                hours: hourly_summary(d, unit)?,
            })
        })
        .collect::<Result<Vec<_>, ProviderError>>()?;
    log::info!(
        "forecast for {}, {}: {} days, {} hourly readings",
        response.location.name,
        response.location.region,
        daily.len(),
        hourly_temperatures.len()
    );
    Ok(ForecastReport {
        location: response.location,
        window: *window,
        unit,
        hourly_temperatures,
        daily,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::{hourly::tests::mock_day, Forecast, ForecastResponse};
    use std::cell::Cell;

    struct MockWeather {
        requested_days: Cell<u32>,
    }

    impl WeatherProvider for MockWeather {
        fn forecast(&self, _query: &str, days: u32) -> Result<ForecastResponse, ProviderError> {
            self.requested_days.set(days);
            let start = date("2023-04-04");
            let forecastday = start
                .iter_days()
                .take(days as usize)
                .map(|d| mock_day(&d.format("%Y-%m-%d").to_string()))
                .collect();
            Ok(ForecastResponse {
                location: WeatherLocation {
                    name: String::from("Boston"),
                    region: String::from("Massachusetts"),
                    country: String::from("United States of America"),
                    lat: 42.36,
                    lon: -71.06,
                },
                forecast: Forecast { forecastday },
            })
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test invariant failed: bad date")
    }

    #[test]
    fn test_collect_forecast() {
        let provider = MockWeather {
            requested_days: Cell::new(0),
        };
        let window = ForecastWindow::new(date("2023-04-05"), Some(date("2023-04-06")))
            .expect("valid window");
        let report = collect_forecast(
            &provider,
            "Boston",
            &window,
            date("2023-04-04"),
            TemperatureUnit::Celsius,
        )
        .expect("forecast");

        assert_eq!(provider.requested_days.get(), 3);
        assert_eq!(report.location.name, "Boston");
        assert_eq!(report.daily.len(), 2);
        assert_eq!(report.daily[0].date, date("2023-04-05"));
        assert_eq!(report.daily[1].hours.len(), 6);
        assert_eq!(report.hourly_temperatures.len(), 48);
        assert_eq!(report.unit, TemperatureUnit::Celsius);
    }

    #[test]
    fn test_window_in_past() {
        let provider = MockWeather {
            requested_days: Cell::new(0),
        };
        let window = ForecastWindow::new(date("2023-04-01"), None).expect("valid window");
        let result = collect_forecast(
            &provider,
            "Boston",
            &window,
            date("2023-04-04"),
            TemperatureUnit::Fahrenheit,
        );
        assert!(matches!(result, Err(ProviderError::InvalidDateRange(_))));
        assert_eq!(provider.requested_days.get(), 0);
    }
}
