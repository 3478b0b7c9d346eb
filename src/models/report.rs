use serde::{Deserialize, Serialize};

use crate::models::{
    FrequencyTable, HistoricalExtremes, MonthComparison, MonthlyStat, SeasonMode, SeasonStat,
    SnowExtremes, YearlySummary,
};

/// Everything computed for one station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationReport {
    pub station_id: u32,
    pub season_mode: SeasonMode,
    pub snow_threshold: i32,

    pub monthly: Vec<MonthlyStat>,
    pub yearly: Vec<YearlySummary>,
    /// Taken over every station of the loaded dataset
    pub historical: HistoricalExtremes,

    pub seasons: Vec<SeasonStat>,
    pub snow_extremes: SnowExtremes,
    pub snow_day_frequency: FrequencyTable,
    pub depth_frequency: FrequencyTable,
    pub snow_max_by_month: Vec<MonthComparison>,
    pub snow_days_by_month: Vec<MonthComparison>,
}

impl StationReport {
    pub fn summary(&self) -> String {
        let years = match (self.yearly.first(), self.yearly.last()) {
            (Some(first), Some(last)) => format!("{}-{}", first.year, last.year),
            _ => "-".to_string(),
        };
        format!(
            "Station {}: {} months, years {}, {} {} season(s)",
            self.station_id,
            self.monthly.len(),
            years,
            self.seasons.len(),
            self.season_mode
        )
    }
}
