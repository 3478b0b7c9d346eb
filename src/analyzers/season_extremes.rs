use crate::analyzers::historical_extremes::highest_snow_depth;
use crate::models::{
    DailyRecord, ExtremeEntry, ExtremeValue, Occurrence, SeasonPeriod, SeasonStat,
    SnowExtremeKind, SnowExtremes,
};
use crate::utils::dates::SeasonDay;
use chrono::NaiveDate;
use std::cmp::Ordering;
use tracing::debug;

/// Superlatives across the seasons of a [`SeasonStat`] table.
///
/// Ties go to the earliest season. Averages of counts are truncated and
/// carry no occurrence. First and last snow days are only ranked across
/// seasons that span New Year; calendar-year seasons leave those entries
/// absent.
pub struct SnowExtremesAnalyzer;

impl SnowExtremesAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// `records` is the daily data the seasons were built from; the absolute
    /// highest depth is taken from it with its date.
    pub fn analyze(&self, seasons: &[SeasonStat], records: &[DailyRecord]) -> SnowExtremes {
        let mut extremes = SnowExtremes::new();
        if seasons.is_empty() {
            return extremes;
        }

        let mut ordered: Vec<&SeasonStat> = seasons.iter().collect();
        ordered.sort_by_key(|s| s.period);

        use SnowExtremeKind::*;

        let winters: Vec<&SeasonStat> = ordered
            .iter()
            .copied()
            .filter(|s| s.period.crosses_new_year())
            .collect();
        if winters.len() < ordered.len() {
            debug!(
                "{} season(s) do not span New Year; first and last snow days not ranked",
                ordered.len() - winters.len()
            );
        }

        let first_days = |s: &SeasonStat| s.first_day;
        let last_days = |s: &SeasonStat| s.last_day;
        extremes.set(LatestFirstSnow, day_extreme(&winters, first_days, Ordering::Greater));
        extremes.set(AverageFirstSnow, day_average(&winters, first_days));
        extremes.set(EarliestFirstSnow, day_extreme(&winters, first_days, Ordering::Less));
        extremes.set(LatestLastSnow, day_extreme(&winters, last_days, Ordering::Greater));
        extremes.set(AverageLastSnow, day_average(&winters, last_days));
        extremes.set(EarliestLastSnow, day_extreme(&winters, last_days, Ordering::Less));

        let run_lengths = |s: &SeasonStat| i64::from(s.longest_run.length);
        extremes.set(LongestRun, count_extreme(&ordered, run_lengths, Ordering::Greater));
        extremes.set(AverageLongestRun, count_average(&ordered, run_lengths));
        extremes.set(ShortestRun, count_extreme(&ordered, run_lengths, Ordering::Less));

        let day_counts = |s: &SeasonStat| i64::from(s.snow_days);
        extremes.set(MostSnowDays, count_extreme(&ordered, day_counts, Ordering::Greater));
        extremes.set(AverageSnowDays, count_average(&ordered, day_counts));
        extremes.set(FewestSnowDays, count_extreme(&ordered, day_counts, Ordering::Less));

        let max_depths = |s: &SeasonStat| i64::from(s.max_depth);
        extremes.set(
            HighestDepth,
            highest_snow_depth(records).unwrap_or_default(),
        );
        extremes.set(AverageMaxDepth, count_average(&ordered, max_depths));
        extremes.set(LowestMaxDepth, count_extreme(&ordered, max_depths, Ordering::Less));

        extremes
    }
}

impl Default for SnowExtremesAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// First season whose value beats every earlier one in the `wanted`
/// direction.
fn first_best<T, F>(seasons: &[&SeasonStat], get: F, wanted: Ordering) -> Option<(T, SeasonPeriod)>
where
    T: Ord + Copy,
    F: Fn(&SeasonStat) -> Option<T>,
{
    let mut best: Option<(T, SeasonPeriod)> = None;
    for season in seasons {
        let Some(value) = get(*season) else {
            continue;
        };
        if best.map_or(true, |(current, _)| value.cmp(&current) == wanted) {
            best = Some((value, season.period));
        }
    }
    best
}

fn day_extreme<F>(seasons: &[&SeasonStat], get: F, wanted: Ordering) -> ExtremeEntry
where
    F: Fn(&SeasonStat) -> Option<NaiveDate>,
{
    first_best(seasons, |s| get(s).map(SeasonDay::from_date), wanted)
        .map(|(day, period)| {
            ExtremeEntry::new(ExtremeValue::Day(day), Some(Occurrence::Season(period)))
        })
        .unwrap_or_default()
}

fn day_average<F>(seasons: &[&SeasonStat], get: F) -> ExtremeEntry
where
    F: Fn(&SeasonStat) -> Option<NaiveDate>,
{
    let days = seasons
        .iter()
        .filter_map(|s| get(*s))
        .map(SeasonDay::from_date);

    SeasonDay::average(days)
        .map(|day| ExtremeEntry::new(ExtremeValue::Day(day), None))
        .unwrap_or_default()
}

fn count_extreme<F>(seasons: &[&SeasonStat], get: F, wanted: Ordering) -> ExtremeEntry
where
    F: Fn(&SeasonStat) -> i64,
{
    first_best(seasons, |s| Some(get(s)), wanted)
        .map(|(value, period)| {
            ExtremeEntry::new(ExtremeValue::Integer(value), Some(Occurrence::Season(period)))
        })
        .unwrap_or_default()
}

fn count_average<F>(seasons: &[&SeasonStat], get: F) -> ExtremeEntry
where
    F: Fn(&SeasonStat) -> i64,
{
    if seasons.is_empty() {
        return ExtremeEntry::empty();
    }
    let total: i64 = seasons.iter().map(|s| get(*s)).sum();
    let mean = total as f64 / seasons.len() as f64;
    ExtremeEntry::new(ExtremeValue::Integer(mean.trunc() as i64), None)
}
