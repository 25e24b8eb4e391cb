mod client;
mod config;
mod forecast_window;
mod hourly;
mod report;
mod response;
mod temperature_unit;

pub use client::{WeatherClient, WeatherProvider};
pub use config::WeatherConfig;
pub use forecast_window::ForecastWindow;
pub use hourly::{hourly_summary, hourly_temperatures, HourlyConditions, HourlyTemperature};
pub use report::{collect_forecast, DailySummary, ForecastReport};
pub use response::{
    Condition, Forecast, ForecastDay, ForecastResponse, HourForecast, WeatherLocation,
};
pub use temperature_unit::TemperatureUnit;
