use crate::error::Result;
use crate::models::DailyRecord;
use crate::processors::MonthlyAggregator;
use crate::utils::dates::format_date;
use crate::utils::progress::ProgressReporter;
use chrono::NaiveDate;
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

/// Data coverage of one station after monthly aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct StationCoverage {
    pub station_id: u32,
    pub days: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub months: usize,
    pub years: usize,
    pub snow_days: u32,
}

impl StationCoverage {
    pub fn summary(&self) -> String {
        format!(
            "Station {}: {} days ({} - {}), {} months in {} years, {} days with snow",
            self.station_id,
            self.days,
            format_date(self.first_date),
            format_date(self.last_date),
            self.months,
            self.years,
            self.snow_days
        )
    }
}

/// Aggregates every station of a dataset on a worker pool.
pub struct ParallelValidator {
    max_workers: usize,
}

impl ParallelValidator {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers: max_workers.max(1),
        }
    }

    /// Coverage per station, sorted by station id.
    pub fn validate(
        &self,
        records: &[DailyRecord],
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<StationCoverage>> {
        let mut stations: BTreeMap<u32, Vec<&DailyRecord>> = BTreeMap::new();
        for record in records {
            stations.entry(record.station_id).or_default().push(record);
        }

        if let Some(p) = progress {
            p.set_message(&format!("Aggregating {} stations...", stations.len()));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()?;

        let coverage: Vec<StationCoverage> = pool.install(|| {
            stations
                .par_iter()
                .filter_map(|(station_id, days)| {
                    let result = Self::station_coverage(*station_id, days);
                    if let Some(p) = progress {
                        p.increment(1);
                    }
                    result
                })
                .collect()
        });

        if let Some(p) = progress {
            p.finish_with_message(&format!("Validated {} stations", coverage.len()));
        }

        Ok(coverage)
    }

    fn station_coverage(station_id: u32, days: &[&DailyRecord]) -> Option<StationCoverage> {
        let owned: Vec<DailyRecord> = days.iter().map(|r| (*r).clone()).collect();
        let monthly = MonthlyAggregator::new().aggregate(&owned);

        let first_date = owned.iter().map(|r| r.date).min()?;
        let last_date = owned.iter().map(|r| r.date).max()?;
        let mut years: Vec<i32> = monthly.iter().map(|m| m.year).collect();
        years.dedup();

        debug!("Station {} aggregated into {} months", station_id, monthly.len());

        Some(StationCoverage {
            station_id,
            days: owned.len(),
            first_date,
            last_date,
            months: monthly.len(),
            years: years.len(),
            snow_days: monthly.iter().map(|m| m.snow_count).sum(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn station(id: u32, start: NaiveDate, days: i64) -> Vec<DailyRecord> {
        (0..days)
            .map(|i| {
                let snow = (i % 3 == 0).then_some(5);
                DailyRecord::new(id, start + Duration::days(i), Some(1.0), None, None, None, snow)
            })
            .collect()
    }

    #[test]
    fn test_every_station_is_aggregated() {
        let start = NaiveDate::from_ymd_opt(1999, 12, 1).unwrap();
        let mut records = station(3, start, 62);
        records.extend(station(1, start, 10));
        records.extend(station(2, start, 400));

        let coverage = ParallelValidator::new(2).validate(&records, None).unwrap();
        let ids: Vec<u32> = coverage.iter().map(|c| c.station_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let third = &coverage[2];
        assert_eq!(third.days, 62);
        assert_eq!(third.months, 2);
        assert_eq!(third.years, 2);
        assert_eq!(third.snow_days, 21);
        assert_eq!(third.last_date, NaiveDate::from_ymd_opt(2000, 1, 31).unwrap());
    }

    #[test]
    fn test_empty_dataset() {
        let coverage = ParallelValidator::new(1).validate(&[], None).unwrap();
        assert!(coverage.is_empty());
    }
}
