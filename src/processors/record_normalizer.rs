use crate::error::{ProcessingError, Result};
use crate::models::{DailyRecord, RawObservation};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use validator::Validate;

#[derive(Debug, Clone, Default)]
pub struct NormalizationReport {
    pub total_rows: usize,
    pub accepted_rows: usize,
    pub invalid_dates: usize,
    pub range_violations: Vec<RangeViolation>,
    pub station_rows: BTreeMap<u32, usize>,
}

#[derive(Debug, Clone)]
pub struct RangeViolation {
    pub station_id: u32,
    pub date: NaiveDate,
    pub details: String,
}

impl NormalizationReport {
    pub fn summary(&self) -> String {
        format!(
            "Rows: {} read, {} accepted, {} with invalid dates, {} out of range, {} station(s)",
            self.total_rows,
            self.accepted_rows,
            self.invalid_dates,
            self.range_violations.len(),
            self.station_rows.len()
        )
    }
}

/// Turns raw observation rows into dated, rounded [`DailyRecord`]s.
pub struct RecordNormalizer;

impl RecordNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize the rows, sorted by station then date.
    ///
    /// Rows with unparseable dates are dropped and counted. Values outside
    /// the plausible ranges are reported but kept.
    pub fn normalize(&self, rows: &[RawObservation]) -> Result<(Vec<DailyRecord>, NormalizationReport)> {
        let mut report = NormalizationReport::default();
        let mut records = Vec::with_capacity(rows.len());

        for row in rows {
            report.total_rows += 1;

            let record = match DailyRecord::from_raw(row) {
                Ok(record) => record,
                Err(ProcessingError::InvalidDate(text)) => {
                    debug!("Dropping row of station {} with date '{}'", row.station_id, text);
                    report.invalid_dates += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            if let Err(errors) = record.validate() {
                report.range_violations.push(RangeViolation {
                    station_id: record.station_id,
                    date: record.date,
                    details: errors.to_string(),
                });
            }

            *report.station_rows.entry(record.station_id).or_default() += 1;
            records.push(record);
        }

        if report.invalid_dates > 0 {
            warn!("Dropped {} row(s) with unparseable dates", report.invalid_dates);
        }
        for violation in &report.range_violations {
            warn!(
                "Station {} on {}: {}",
                violation.station_id, violation.date, violation.details
            );
        }

        records.sort_by(|a, b| a.station_id.cmp(&b.station_id).then_with(|| a.date.cmp(&b.date)));
        report.accepted_rows = records.len();

        info!("{}", report.summary());
        Ok((records, report))
    }
}

/// The records of one station, in their existing order.
pub fn station_records(records: &[DailyRecord], station_id: u32) -> Result<Vec<DailyRecord>> {
    let selected: Vec<DailyRecord> = records
        .iter()
        .filter(|record| record.station_id == station_id)
        .cloned()
        .collect();

    if selected.is_empty() {
        return Err(ProcessingError::NoDataForStation { station_id });
    }
    debug!("Station {} has {} records", station_id, selected.len());
    Ok(selected)
}

impl Default for RecordNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
