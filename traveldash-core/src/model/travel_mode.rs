use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::TravelMetricsError;

/// a transportation method being compared for an origin/destination pair.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Walking,
    #[serde(alias = "bicycling")]
    Biking,
    Driving,
    Transit,
}

impl TravelMode {
    pub const ALL: [TravelMode; 4] = [
        TravelMode::Walking,
        TravelMode::Biking,
        TravelMode::Driving,
        TravelMode::Transit,
    ];

    /// modes that accrue cost and emissions. these are the modes compared
    /// in a weighted score when no selection is made.
    pub const VEHICULAR: [TravelMode; 2] = [TravelMode::Driving, TravelMode::Transit];

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Walking => "walking",
            TravelMode::Biking => "biking",
            TravelMode::Driving => "driving",
            TravelMode::Transit => "transit",
        }
    }

    /// the value of the `mode` query parameter in a Distance Matrix request.
    pub fn distance_matrix_name(&self) -> &'static str {
        match self {
            TravelMode::Biking => "bicycling",
            other => other.as_str(),
        }
    }
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = TravelMetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "walking" => Ok(TravelMode::Walking),
            "biking" | "bicycling" => Ok(TravelMode::Biking),
            "driving" => Ok(TravelMode::Driving),
            "transit" => Ok(TravelMode::Transit),
            _ => Err(TravelMetricsError::UnknownMode(s.to_string())),
        }
    }
}

/// fails with the first mode that appears more than once.
pub(crate) fn ensure_distinct_modes(
    modes: impl Iterator<Item = TravelMode>,
) -> Result<(), TravelMetricsError> {
    match modes.duplicates().next() {
        Some(mode) => Err(TravelMetricsError::DuplicateMode(mode)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!("walking".parse::<TravelMode>(), Ok(TravelMode::Walking));
        assert_eq!(" Driving ".parse::<TravelMode>(), Ok(TravelMode::Driving));
        assert_eq!("bicycling".parse::<TravelMode>(), Ok(TravelMode::Biking));
        assert_eq!(
            "flying".parse::<TravelMode>(),
            Err(TravelMetricsError::UnknownMode(String::from("flying")))
        );
    }

    #[test]
    fn test_display_matches_serde() {
        for mode in TravelMode::ALL {
            let json = serde_json::to_string(&mode).expect("mode should serialize");
            assert_eq!(json, format!("\"{mode}\""));
        }
        let biking: TravelMode =
            serde_json::from_str("\"bicycling\"").expect("alias should deserialize");
        assert_eq!(biking, TravelMode::Biking);
    }

    #[test]
    fn test_distance_matrix_name() {
        assert_eq!(TravelMode::Biking.distance_matrix_name(), "bicycling");
        assert_eq!(TravelMode::Transit.distance_matrix_name(), "transit");
    }

    #[test]
    fn test_ensure_distinct_modes() {
        let distinct = TravelMode::ALL.into_iter();
        assert!(ensure_distinct_modes(distinct).is_ok());
        let repeated = [TravelMode::Driving, TravelMode::Transit, TravelMode::Driving];
        assert_eq!(
            ensure_distinct_modes(repeated.into_iter()),
            Err(TravelMetricsError::DuplicateMode(TravelMode::Driving))
        );
    }
}
