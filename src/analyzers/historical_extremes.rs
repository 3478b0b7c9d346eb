use crate::error::{ProcessingError, Result};
use crate::models::{DailyRecord, ExtremeEntry, ExtremeValue, HistoricalExtremes, Occurrence};
use crate::utils::constants::{COL_PRECIPITATION, COL_SNOW, COL_TMAX, COL_TMIN};
use chrono::NaiveDate;
use std::cmp::Ordering;
use tracing::debug;

/// Finds the whole-history extremes of a dataset with the date they
/// occurred on. The first row reaching the extreme wins.
pub struct HistoricalExtremesFinder;

impl HistoricalExtremesFinder {
    pub fn new() -> Self {
        Self
    }

    pub fn find(&self, records: &[DailyRecord]) -> Result<HistoricalExtremes> {
        let temp_max = first_extreme(records, |r| r.temp_max, Ordering::Greater)
            .ok_or_else(|| ProcessingError::EmptySeries(COL_TMAX.to_string()))?;
        let temp_min = first_extreme(records, |r| r.temp_min, Ordering::Less)
            .ok_or_else(|| ProcessingError::EmptySeries(COL_TMIN.to_string()))?;
        let precipitation = first_extreme(records, |r| r.precipitation, Ordering::Greater)
            .ok_or_else(|| ProcessingError::EmptySeries(COL_PRECIPITATION.to_string()))?;
        let snow_depth = highest_snow_depth(records)
            .ok_or_else(|| ProcessingError::EmptySeries(COL_SNOW.to_string()))?;

        debug!("Historical extremes found over {} records", records.len());

        Ok(HistoricalExtremes {
            temp_max: decimal_entry(temp_max),
            temp_min: decimal_entry(temp_min),
            precipitation: decimal_entry(precipitation),
            snow_depth,
        })
    }
}

impl Default for HistoricalExtremesFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Highest snow depth in the daily data, dated.
pub fn highest_snow_depth(records: &[DailyRecord]) -> Option<ExtremeEntry> {
    first_extreme(
        records,
        |r| r.snow_depth.map(f64::from),
        Ordering::Greater,
    )
    .map(|(value, date)| {
        ExtremeEntry::new(
            ExtremeValue::Integer(value as i64),
            Some(Occurrence::Date(date)),
        )
    })
}

fn decimal_entry((value, date): (f64, NaiveDate)) -> ExtremeEntry {
    ExtremeEntry::new(ExtremeValue::Decimal(value), Some(Occurrence::Date(date)))
}

/// Scan in row order keeping the first value that beats the current best
/// in the `wanted` direction.
fn first_extreme<F>(records: &[DailyRecord], get: F, wanted: Ordering) -> Option<(f64, NaiveDate)>
where
    F: Fn(&DailyRecord) -> Option<f64>,
{
    let mut best: Option<(f64, NaiveDate)> = None;
    for record in records {
        let Some(value) = get(record) else {
            continue;
        };
        let replace = match best {
            None => true,
            Some((current, _)) => value.partial_cmp(&current) == Some(wanted),
        };
        if replace {
            best = Some((value, record.date));
        }
    }
    best
}
