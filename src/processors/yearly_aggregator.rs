use crate::models::{MonthlyStat, YearlySummary};
use crate::utils::numeric::{max_present, mean_present, min_present, round_opt, round_to};
use std::collections::BTreeMap;

/// Re-aggregates monthly statistics into one [`YearlySummary`] per year.
pub struct YearlyAggregator;

impl YearlyAggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn aggregate(&self, monthly: &[MonthlyStat]) -> Vec<YearlySummary> {
        let mut years: BTreeMap<i32, Vec<&MonthlyStat>> = BTreeMap::new();
        for stat in monthly {
            years.entry(stat.year).or_default().push(stat);
        }

        years
            .into_iter()
            .map(|(year, months)| Self::year_summary(year, &months))
            .collect()
    }

    fn year_summary(year: i32, months: &[&MonthlyStat]) -> YearlySummary {
        let column = |get: fn(&MonthlyStat) -> Option<f64>| months.iter().map(move |m| get(m));
        let total = |get: fn(&MonthlyStat) -> u32| months.iter().map(|m| get(m)).sum::<u32>();

        YearlySummary {
            year,

            tmax_min: min_present(column(|m| m.tmax_min)),
            tmax_max: max_present(column(|m| m.tmax_max)),
            tmax_mean: round_opt(mean_present(column(|m| m.tmax_mean)), 1),
            tmin_min: min_present(column(|m| m.tmin_min)),
            tmin_max: max_present(column(|m| m.tmin_max)),
            tmin_mean: round_opt(mean_present(column(|m| m.tmin_mean)), 1),
            tavg_min: min_present(column(|m| m.tavg_min)),
            tavg_max: max_present(column(|m| m.tavg_max)),
            tavg_mean: round_opt(mean_present(column(|m| m.tavg_mean)), 1),

            tmax_days_35: total(|m| m.tmax_days_35),
            tmax_days_30: total(|m| m.tmax_days_30),
            tmax_days_25: total(|m| m.tmax_days_25),
            tmax_days_below_0: total(|m| m.tmax_days_below_0),
            tmax_days_below_minus_10: total(|m| m.tmax_days_below_minus_10),

            precip_total: round_to(months.iter().map(|m| m.precip_sum).sum(), 1),
            snow_days: total(|m| m.snow_count),
        }
    }
}

impl Default for YearlyAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyRecord;
    use crate::processors::MonthlyAggregator;
    use chrono::NaiveDate;

    fn day(d: u32, m: u32, y: i32, tmax: f64) -> DailyRecord {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        DailyRecord::new(1, date, Some(tmax), None, None, Some(2.5), None)
    }

    #[test]
    fn test_yearly_rollup() {
        let records = vec![
            day(1, 1, 2001, -3.0),
            day(2, 1, 2001, -1.0),
            day(1, 7, 2001, 31.0),
            day(1, 1, 2002, 4.0),
        ];
        let monthly = MonthlyAggregator::new().aggregate(&records);
        let yearly = YearlyAggregator::new().aggregate(&monthly);

        assert_eq!(yearly.len(), 2);
        let first = &yearly[0];
        assert_eq!(first.year, 2001);
        assert_eq!(first.tmax_min, Some(-3.0));
        assert_eq!(first.tmax_max, Some(31.0));
        // mean of the monthly means (-2.0 and 31.0)
        assert_eq!(first.tmax_mean, Some(14.5));
        assert_eq!(first.tmax_days_30, 1);
        assert_eq!(first.tmax_days_below_0, 2);
        assert_eq!(first.precip_total, 7.5);
        assert_eq!(first.tmin_mean, None);
    }
}
