use crate::error::Result;
use crate::models::{Language, SeasonMode, SeasonSelector};
use crate::utils::constants::{DEFAULT_SNOW_THRESHOLD, ENV_PREFIX};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Settings shared by the report commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum depth (cm) for a day to count as having snow cover
    pub snow_threshold: i32,
    pub season_mode: SeasonMode,
    pub selector: SeasonSelector,
    pub language: Language,
    /// Station used when none is given on the command line
    pub station_id: Option<u32>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            snow_threshold: DEFAULT_SNOW_THRESHOLD,
            season_mode: SeasonMode::ExtendedWinter,
            selector: SeasonSelector::WholeYear,
            language: Language::English,
            station_id: None,
        }
    }
}

impl AnalysisConfig {
    /// Built-in defaults, then the optional TOML file, then `SNOWSTATS_*`
    /// environment variables.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("snow_threshold", i64::from(defaults.snow_threshold))?
            .set_default("season_mode", "extended-winter")?
            .set_default("selector", "whole-year")?
            .set_default("language", "english")?;

        if let Some(path) = config_file {
            debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn with_snow_threshold(mut self, threshold: i32) -> Self {
        self.snow_threshold = threshold;
        self
    }

    pub fn with_season_mode(mut self, mode: SeasonMode) -> Self {
        self.season_mode = mode;
        self
    }

    pub fn with_selector(mut self, selector: SeasonSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_file_layer_overrides_defaults() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "snow_threshold = 5").unwrap();
        writeln!(file, "season_mode = \"winter\"").unwrap();
        writeln!(file, "station_id = 11816").unwrap();

        let config = AnalysisConfig::load_layered(Some(file.path())).unwrap();
        assert_eq!(config.snow_threshold, 5);
        assert_eq!(config.season_mode, SeasonMode::Winter);
        assert_eq!(config.selector, SeasonSelector::WholeYear);
        assert_eq!(config.station_id, Some(11816));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = AnalysisConfig::load_layered(Some(Path::new("/nonexistent/snowstats.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_overrides() {
        let config = AnalysisConfig::default()
            .with_snow_threshold(3)
            .with_selector(SeasonSelector::ColdHalf)
            .with_language(Language::Slovak);
        assert_eq!(config.snow_threshold, 3);
        assert_eq!(config.selector, SeasonSelector::ColdHalf);
        assert_eq!(config.language, Language::Slovak);
    }
}
