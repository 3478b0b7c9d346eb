use crate::models::{DailyRecord, SeasonMode, SeasonPeriod, SeasonStat};
use crate::utils::constants::DEFAULT_SNOW_THRESHOLD;
use crate::utils::numeric::round_to;
use crate::utils::runs::{first_and_last, longest_run};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, info};

type SnowSeries = Vec<(NaiveDate, Option<i32>)>;

/// Partitions one station's daily records into seasons and computes the
/// snow-cover statistics of each.
pub struct SeasonalAnalyzer {
    mode: SeasonMode,
    threshold: i32,
}

impl SeasonalAnalyzer {
    pub fn new(mode: SeasonMode) -> Self {
        Self {
            mode,
            threshold: DEFAULT_SNOW_THRESHOLD,
        }
    }

    /// Minimum depth (cm) for a day to count as having snow cover.
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Season statistics in ascending period order.
    ///
    /// The earliest season is left out when the data starts after its first
    /// day.
    pub fn analyze(&self, records: &[DailyRecord]) -> Vec<SeasonStat> {
        let mut seasons = self.partition(records);

        let dataset_start = records.iter().map(|r| r.date).min();
        let earliest = seasons.keys().next().copied();
        if let (Some(start), Some(earliest)) = (dataset_start, earliest) {
            if self.mode.first_day(earliest).is_some_and(|first| start > first) {
                debug!("Skipping incomplete season {} (data starts {})", earliest, start);
                seasons.remove(&earliest);
            }
        }

        let stats: Vec<SeasonStat> = seasons
            .into_iter()
            .map(|(period, series)| self.season_stat(period, &series))
            .collect();

        info!("Computed {} {} season(s)", stats.len(), self.mode);
        stats
    }

    fn partition(&self, records: &[DailyRecord]) -> BTreeMap<SeasonPeriod, SnowSeries> {
        let mut seasons: BTreeMap<SeasonPeriod, SnowSeries> = BTreeMap::new();
        for record in records {
            if let Some(period) = self.mode.period_for(record.date) {
                seasons
                    .entry(period)
                    .or_default()
                    .push((record.date, record.snow_depth));
            }
        }
        seasons
    }

    fn season_stat(&self, period: SeasonPeriod, series: &[(NaiveDate, Option<i32>)]) -> SeasonStat {
        let snow_days = series.iter().filter(|(_, depth)| depth.is_some()).count() as u32;
        let max_depth = series.iter().filter_map(|(_, depth)| *depth).max().unwrap_or(0);
        let run = longest_run(series, self.threshold);
        let bounds = first_and_last(series, self.threshold);

        let total_days = bounds.map(|(first, last)| (last - first).num_days() + 1);
        let percent = |count: u32| {
            total_days.map(|total| round_to(100.0 * f64::from(count) / total as f64, 2))
        };

        SeasonStat {
            period,
            snow_days,
            max_depth,
            longest_run: run,
            first_day: bounds.map(|(first, _)| first),
            last_day: bounds.map(|(_, last)| last),
            total_days,
            ratio_days: percent(snow_days),
            ratio_longest_run: percent(run.length),
        }
    }
}
