pub mod frequency;
pub mod historical_extremes;
pub mod season_extremes;
pub mod seasonal_analyzer;

pub use frequency::FrequencyBuilder;
pub use historical_extremes::{highest_snow_depth, HistoricalExtremesFinder};
pub use season_extremes::SnowExtremesAnalyzer;
pub use seasonal_analyzer::SeasonalAnalyzer;
