use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::ForecastDay;
use crate::ProviderError;

/// an inclusive range of forecast dates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ForecastWindow {
    /// builds a window from a start date and an optional end date. without an
    /// end date the window covers the start date only.
    pub fn new(start_date: NaiveDate, end_date: Option<NaiveDate>) -> Result<Self, ProviderError> {
        let end_date = end_date.unwrap_or(start_date);
        if end_date < start_date {
            return Err(ProviderError::InvalidDateRange(format!(
                "end date {end_date} is before start date {start_date}"
            )));
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// number of forecast days to request, counting from `today`, so that
    /// the end date is covered.
    pub fn days_requested(&self, today: NaiveDate) -> Result<u32, ProviderError> {
        let days = (self.end_date - today).num_days() + 1;
        u32::try_from(days)
            .ok()
            .filter(|d| *d > 0)
            .ok_or_else(|| {
                ProviderError::InvalidDateRange(format!(
                    "end date {} is before today ({today}), forecasts cannot look backward",
                    self.end_date
                ))
            })
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.start_date <= *date && *date <= self.end_date
    }

    /// keeps the forecast days that fall within this window.
    pub fn filter<'a>(&self, days: &'a [ForecastDay]) -> Vec<&'a ForecastDay> {
        days.iter().filter(|d| self.contains(&d.date)).collect_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test invariant failed: bad date")
    }

    fn day(s: &str) -> ForecastDay {
        ForecastDay {
            date: date(s),
            hour: vec![],
        }
    }

    #[test]
    fn test_end_defaults_to_start() {
        let window = ForecastWindow::new(date("2023-04-05"), None).expect("valid window");
        assert_eq!(window.end_date, date("2023-04-05"));
    }

    #[test]
    fn test_end_before_start() {
        let result = ForecastWindow::new(date("2023-04-05"), Some(date("2023-04-04")));
        assert!(matches!(result, Err(ProviderError::InvalidDateRange(_))));
    }

    #[test]
    fn test_days_requested() {
        let today = date("2023-04-04");
        let window =
            ForecastWindow::new(date("2023-04-05"), Some(date("2023-04-07"))).expect("window");
        assert_eq!(window.days_requested(today).expect("days"), 4);

        let today_only = ForecastWindow::new(today, None).expect("window");
        assert_eq!(today_only.days_requested(today).expect("days"), 1);

        let past = ForecastWindow::new(date("2023-04-01"), None).expect("window");
        assert!(past.days_requested(today).is_err());
    }

    #[test]
    fn test_filter() {
        let days = vec![
            day("2023-04-04"),
            day("2023-04-05"),
            day("2023-04-06"),
            day("2023-04-07"),
        ];
        let window =
            ForecastWindow::new(date("2023-04-05"), Some(date("2023-04-06"))).expect("window");
        let kept = window.filter(&days).iter().map(|d| d.date).collect_vec();
        assert_eq!(kept, vec![date("2023-04-05"), date("2023-04-06")]);
    }
}
