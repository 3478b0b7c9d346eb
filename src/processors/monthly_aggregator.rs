use crate::models::{DailyRecord, MonthlyStat};
use crate::utils::constants::{
    ARCTIC_DAY_MINUS_10, ICE_DAY_0, SUMMER_DAY_25, TROPICAL_DAY_30, TROPICAL_DAY_35,
};
use crate::utils::numeric::{max_present, mean_present, min_present, round_opt, round_to};
use std::collections::BTreeMap;
use tracing::debug;

/// Groups daily records into one [`MonthlyStat`] per (year, month).
pub struct MonthlyAggregator;

impl MonthlyAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate `records` of a single station, sorted by (year, month).
    pub fn aggregate(&self, records: &[DailyRecord]) -> Vec<MonthlyStat> {
        let mut groups: BTreeMap<(i32, u32), Vec<&DailyRecord>> = BTreeMap::new();
        for record in records {
            groups
                .entry((record.year(), record.month()))
                .or_default()
                .push(record);
        }

        debug!("Aggregating {} records into {} months", records.len(), groups.len());

        groups
            .into_iter()
            .map(|((year, month), days)| Self::month_stat(year, month, &days))
            .collect()
    }

    fn month_stat(year: i32, month: u32, days: &[&DailyRecord]) -> MonthlyStat {
        let tmax = || days.iter().map(|d| d.temp_max);
        let tmin = || days.iter().map(|d| d.temp_min);
        let tavg = || days.iter().map(|d| d.temp_avg);
        let precip = || days.iter().map(|d| d.precipitation);

        let count_tmax = |predicate: &dyn Fn(f64) -> bool| {
            tmax().flatten().filter(|t| predicate(*t)).count() as u32
        };

        let snow: Vec<i32> = days.iter().filter_map(|d| d.snow_depth).collect();

        MonthlyStat {
            year,
            month,

            tmax_min: min_present(tmax()),
            tmax_max: max_present(tmax()),
            tmax_mean: round_opt(mean_present(tmax()), 1),
            tmin_min: min_present(tmin()),
            tmin_max: max_present(tmin()),
            tmin_mean: round_opt(mean_present(tmin()), 1),
            tavg_min: min_present(tavg()),
            tavg_max: max_present(tavg()),
            tavg_mean: round_opt(mean_present(tavg()), 1),

            precip_max: max_present(precip()),
            precip_count: precip().flatten().count() as u32,
            precip_sum: round_to(precip().flatten().sum(), 1),

            snow_max: snow.iter().copied().max().unwrap_or(0),
            snow_count: snow.len() as u32,
            snow_sum: snow.iter().map(|s| i64::from(*s)).sum(),

            tmax_days_35: count_tmax(&|t: f64| t >= TROPICAL_DAY_35),
            tmax_days_30: count_tmax(&|t: f64| t >= TROPICAL_DAY_30),
            tmax_days_25: count_tmax(&|t: f64| t >= SUMMER_DAY_25),
            tmax_days_below_0: count_tmax(&|t: f64| t < ICE_DAY_0),
            tmax_days_below_minus_10: count_tmax(&|t: f64| t < ARCTIC_DAY_MINUS_10),
        }
    }
}

impl Default for MonthlyAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32, m: u32, y: i32, tmax: Option<f64>, snow: Option<i32>) -> DailyRecord {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        DailyRecord::new(1, date, tmax, None, None, Some(1.0), snow)
    }

    fn sample() -> Vec<DailyRecord> {
        vec![
            day(1, 1, 2000, Some(-12.0), Some(5)),
            day(2, 1, 2000, Some(-1.0), None),
            day(3, 1, 2000, None, Some(15)),
            day(1, 7, 2000, Some(36.0), None),
            day(2, 7, 2000, Some(26.4), None),
            day(1, 12, 1999, Some(3.0), None),
        ]
    }

    #[test]
    fn test_groups_sorted_by_year_and_month() {
        let stats = MonthlyAggregator::new().aggregate(&sample());
        let keys: Vec<(i32, u32)> = stats.iter().map(|s| (s.year, s.month)).collect();
        assert_eq!(keys, vec![(1999, 12), (2000, 1), (2000, 7)]);
    }

    #[test]
    fn test_month_values() {
        let stats = MonthlyAggregator::new().aggregate(&sample());
        let january = &stats[1];

        assert_eq!(january.tmax_min, Some(-12.0));
        assert_eq!(january.tmax_max, Some(-1.0));
        assert_eq!(january.tmax_mean, Some(-6.5));
        assert_eq!(january.tmin_mean, None);
        assert_eq!(january.precip_count, 3);
        assert_eq!(january.precip_sum, 3.0);
        assert_eq!(january.snow_max, 15);
        assert_eq!(january.snow_count, 2);
        assert_eq!(january.snow_sum, 20);
        assert_eq!(january.tmax_days_below_0, 2);
        assert_eq!(january.tmax_days_below_minus_10, 1);

        let july = &stats[2];
        assert_eq!(july.snow_max, 0);
        assert_eq!(july.tmax_days_35, 1);
        assert_eq!(july.tmax_days_30, 1);
        assert_eq!(july.tmax_days_25, 2);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let aggregator = MonthlyAggregator::new();
        let records = sample();
        assert_eq!(aggregator.aggregate(&records), aggregator.aggregate(&records));
    }
}
