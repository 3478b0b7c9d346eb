use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ProcessingError, Result};
use crate::utils::dates::parse_date;
use crate::utils::numeric::round_opt;

/// One row as read from an observation file, before date parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    pub station_id: u32,
    pub date: String,
    pub temp_max: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_avg: Option<f64>,
    pub precipitation: Option<f64>,
    // Sentinel codes already replaced by None
    pub snow_depth: Option<f64>,
}

/// A cleansed daily observation for one station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DailyRecord {
    pub station_id: u32,
    pub date: NaiveDate,

    // °C, one decimal
    #[validate(range(min = -90.0, max = 60.0))]
    pub temp_max: Option<f64>,

    #[validate(range(min = -90.0, max = 60.0))]
    pub temp_min: Option<f64>,

    #[validate(range(min = -90.0, max = 60.0))]
    pub temp_avg: Option<f64>,

    // mm, one decimal
    #[validate(range(min = 0.0, max = 2000.0))]
    pub precipitation: Option<f64>,

    // cm
    #[validate(range(min = 0, max = 1000))]
    pub snow_depth: Option<i32>,
}

impl DailyRecord {
    /// Build a record, normalizing temperatures and precipitation to one
    /// decimal.
    pub fn new(
        station_id: u32,
        date: NaiveDate,
        temp_max: Option<f64>,
        temp_min: Option<f64>,
        temp_avg: Option<f64>,
        precipitation: Option<f64>,
        snow_depth: Option<i32>,
    ) -> Self {
        Self {
            station_id,
            date,
            temp_max: round_opt(temp_max, 1),
            temp_min: round_opt(temp_min, 1),
            temp_avg: round_opt(temp_avg, 1),
            precipitation: round_opt(precipitation, 1),
            snow_depth,
        }
    }

    /// Parse the date and normalize the measurements of a raw row.
    pub fn from_raw(raw: &RawObservation) -> Result<Self> {
        let date = parse_date(&raw.date)?;
        let snow_depth = match raw.snow_depth {
            Some(depth) if depth.is_finite() => Some(depth.trunc() as i32),
            Some(depth) => {
                return Err(ProcessingError::InvalidFormat(format!(
                    "Snow depth {} on {} is not a number",
                    depth, raw.date
                )))
            }
            None => None,
        };

        Ok(Self::new(
            raw.station_id,
            date,
            raw.temp_max,
            raw.temp_min,
            raw.temp_avg,
            raw.precipitation,
            snow_depth,
        ))
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str) -> RawObservation {
        RawObservation {
            station_id: 11816,
            date: date.to_string(),
            temp_max: Some(38.24),
            temp_min: Some(21.05),
            temp_avg: None,
            precipitation: Some(0.35),
            snow_depth: Some(12.0),
        }
    }

    #[test]
    fn test_from_raw_normalizes() {
        let record = DailyRecord::from_raw(&raw("10.07.2015")).unwrap();

        assert_eq!(record.date, NaiveDate::from_ymd_opt(2015, 7, 10).unwrap());
        assert_eq!(record.year(), 2015);
        assert_eq!(record.month(), 7);
        assert_eq!(record.temp_max, Some(38.2));
        assert_eq!(record.temp_avg, None);
        assert_eq!(record.snow_depth, Some(12));
    }

    #[test]
    fn test_from_raw_rejects_bad_date() {
        let err = DailyRecord::from_raw(&raw("2015-07-10")).unwrap_err();
        assert!(matches!(err, ProcessingError::InvalidDate(_)));
    }

    #[test]
    fn test_validation_ranges() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        let ok = DailyRecord::new(1, date, Some(-3.1), Some(-12.0), Some(-8.5), None, Some(40));
        assert!(ok.validate().is_ok());

        let bad = DailyRecord::new(1, date, Some(75.0), None, None, None, None);
        assert!(bad.validate().is_err());

        let deep = DailyRecord::new(1, date, None, None, None, None, Some(1200));
        assert!(deep.validate().is_err());
    }
}
