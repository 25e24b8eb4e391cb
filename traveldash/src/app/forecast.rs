use chrono::NaiveDate;
use traveldash_provider::weather::{
    collect_forecast, ForecastReport, ForecastWindow, TemperatureUnit,
};

use super::{TravelDashConfig, TravelDashError};

/// fetches the forecast for `city` and summarizes the days from
/// `start_date` through `end_date` (or just `start_date`).
pub fn run(
    config: &TravelDashConfig,
    city: &str,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    unit: TemperatureUnit,
    today: NaiveDate,
) -> Result<ForecastReport, TravelDashError> {
    if city.trim().is_empty() {
        return Err(TravelDashError::InvalidUserInput(String::from(
            "forecast city cannot be empty",
        )));
    }
    let window = ForecastWindow::new(start_date, end_date)?;
    let client = config.weather()?.build()?;
    log::info!(
        "fetching forecast for '{city}' from {} to {}",
        window.start_date,
        window.end_date
    );
    Ok(collect_forecast(&client, city, &window, today, unit)?)
}
