use std::{fs::File, io::Read, path::Path};

use serde::Deserialize;
use traveldash_core::model::{TravelMode, TravelModeMeasurement};

use super::TravelDashError;

/// a row of a measurements CSV file.
#[derive(Debug, Deserialize)]
struct MeasurementRow {
    mode: String,
    distance_miles: f64,
    duration_hours: f64,
}

pub fn read_measurements_file(path: &Path) -> Result<Vec<TravelModeMeasurement>, TravelDashError> {
    let file = File::open(path).map_err(|e| TravelDashError::ReadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let measurements = read_measurements(file).map_err(|e| match e {
        TravelDashError::InvalidUserInput(message) => TravelDashError::ReadError {
            path: path.to_path_buf(),
            message,
        },
        other => other,
    })?;
    log::info!(
        "read {} measurements from '{}'",
        measurements.len(),
        path.display()
    );
    Ok(measurements)
}

/// reads `mode,distance_miles,duration_hours` rows. mode names are parsed
/// here, so an unknown mode fails with [`TravelMetricsError::UnknownMode`].
///
/// [`TravelMetricsError::UnknownMode`]: traveldash_core::model::TravelMetricsError::UnknownMode
pub fn read_measurements<R: Read>(reader: R) -> Result<Vec<TravelModeMeasurement>, TravelDashError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut measurements = vec![];
    for (idx, row) in csv_reader.deserialize::<MeasurementRow>().enumerate() {
        let row = row.map_err(|e| {
            TravelDashError::InvalidUserInput(format!("measurement row {idx}: {e}"))
        })?;
        let mode = row.mode.parse::<TravelMode>()?;
        measurements.push(TravelModeMeasurement::from_miles_and_hours(
            mode,
            row.distance_miles,
            row.duration_hours,
        ));
    }
    Ok(measurements)
}
