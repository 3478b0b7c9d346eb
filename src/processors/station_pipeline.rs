use crate::analyzers::{
    FrequencyBuilder, HistoricalExtremesFinder, SeasonalAnalyzer, SnowExtremesAnalyzer,
};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::models::{Catalog, DailyRecord, MonthlyAttribute, StationReport};
use crate::processors::{compare_months, station_records, MonthlyAggregator, YearlyAggregator};
use tracing::info;

/// Runs every aggregation for one station of a normalized dataset.
pub struct StationPipeline {
    config: AnalysisConfig,
}

impl StationPipeline {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// `records` is the whole normalized dataset. Historical extremes and the
    /// absolute highest snow depth are taken over all of it, everything else
    /// over `station_id` only.
    ///
    /// Fails with `EmptySeries` when a daily column has no values anywhere in
    /// the dataset.
    pub fn run(&self, records: &[DailyRecord], station_id: u32) -> Result<StationReport> {
        let station = station_records(records, station_id)?;

        let monthly = MonthlyAggregator::new().aggregate(&station);
        let yearly = YearlyAggregator::new().aggregate(&monthly);

        let historical = HistoricalExtremesFinder::new().find(records)?;

        let seasons = SeasonalAnalyzer::new(self.config.season_mode)
            .with_threshold(self.config.snow_threshold)
            .analyze(&station);
        let snow_extremes = SnowExtremesAnalyzer::new().analyze(&seasons, records);

        let catalog = Catalog::new(self.config.language);
        let frequency = FrequencyBuilder::new(&catalog, self.config.selector);

        let report = StationReport {
            station_id,
            season_mode: self.config.season_mode,
            snow_threshold: self.config.snow_threshold,
            snow_day_frequency: frequency.snow_days(&monthly),
            depth_frequency: frequency.max_depths(&monthly),
            snow_max_by_month: compare_months(&monthly, MonthlyAttribute::SnowMax),
            snow_days_by_month: compare_months(&monthly, MonthlyAttribute::SnowCount),
            monthly,
            yearly,
            historical,
            seasons,
            snow_extremes,
        };

        info!("{}", report.summary());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;
    use crate::models::{ExtremeValue, Occurrence, SeasonMode, SnowExtremeKind};
    use chrono::{Duration, NaiveDate};

    fn winter(station_id: u32) -> Vec<DailyRecord> {
        let start = NaiveDate::from_ymd_opt(2000, 10, 1).unwrap();
        (0..243)
            .map(|i| {
                let date = start + Duration::days(i);
                let snow = (60..90).contains(&i).then_some(10 + i as i32 - 60);
                DailyRecord::new(station_id, date, Some(2.0), Some(-4.0), Some(-1.0), Some(0.5), snow)
            })
            .collect()
    }

    #[test]
    fn test_full_station_report() {
        let mut records = winter(1);
        records.extend(winter(2));

        let pipeline = StationPipeline::new(AnalysisConfig::default());
        let report = pipeline.run(&records, 1).unwrap();

        assert_eq!(report.season_mode, SeasonMode::ExtendedWinter);
        assert_eq!(report.monthly.len(), 8);
        assert_eq!(report.yearly.len(), 2);
        assert_eq!(report.seasons.len(), 1);
        assert_eq!(report.seasons[0].snow_days, 30);
        assert_eq!(report.seasons[0].longest_run.length, 30);
        assert_eq!(report.seasons[0].max_depth, 39);
        assert_eq!(report.historical.snow_depth.value, Some(ExtremeValue::Integer(39)));

        let highest = report.snow_extremes.get(SnowExtremeKind::HighestDepth).unwrap();
        assert_eq!(highest.occurrence.map(|o| o.to_string()), Some("29.12.2000".to_string()));
    }

    #[test]
    fn test_unknown_station() {
        let pipeline = StationPipeline::new(AnalysisConfig::default());
        assert!(matches!(
            pipeline.run(&winter(1), 5),
            Err(ProcessingError::NoDataForStation { station_id: 5 })
        ));
    }

    #[test]
    fn test_highest_depth_spans_every_station() {
        let mut records = winter(1);
        let deeper: Vec<DailyRecord> = winter(2)
            .into_iter()
            .map(|mut r| {
                r.snow_depth = r.snow_depth.map(|d| d + 50);
                r
            })
            .collect();
        records.extend(deeper);

        let report = StationPipeline::new(AnalysisConfig::default())
            .run(&records, 1)
            .unwrap();

        let highest = report.snow_extremes.get(SnowExtremeKind::HighestDepth).unwrap();
        let expected_date = NaiveDate::from_ymd_opt(2000, 12, 29).unwrap();
        assert_eq!(highest.value, Some(ExtremeValue::Integer(89)));
        assert_eq!(highest.occurrence, Some(Occurrence::Date(expected_date)));
        assert_eq!(report.historical.snow_depth, *highest);
        assert_eq!(report.seasons[0].max_depth, 39);
    }

    #[test]
    fn test_empty_column_fails_the_report() {
        let records: Vec<DailyRecord> = winter(1)
            .into_iter()
            .map(|mut r| {
                r.precipitation = None;
                r
            })
            .collect();

        let result = StationPipeline::new(AnalysisConfig::default()).run(&records, 1);
        assert!(matches!(result, Err(ProcessingError::EmptySeries(column)) if column == "R"));
    }
}
