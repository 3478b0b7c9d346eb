use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::extremes::SnowExtremeKind;
use crate::models::frequency::SeasonSelector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Slovak,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "sk" | "slovak" => Ok(Language::Slovak),
            other => Err(format!("unsupported language '{}'", other)),
        }
    }
}

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTHS_SK: [&str; 12] = [
    "Január", "Február", "Marec", "Apríl", "Máj", "Jún", "Júl", "August", "September", "Október",
    "November", "December",
];

/// Display names for months, season selectors and snow extremes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    language: Language,
    months: [&'static str; 12],
}

impl Catalog {
    pub fn new(language: Language) -> Self {
        let months = match language {
            Language::English => MONTHS_EN,
            Language::Slovak => MONTHS_SK,
        };
        Self { language, months }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Name of month 1..=12; `"?"` for anything else.
    pub fn month_name(&self, month: u32) -> &'static str {
        month
            .checked_sub(1)
            .and_then(|i| self.months.get(i as usize))
            .copied()
            .unwrap_or("?")
    }

    /// Months of a selector in column order.
    pub fn selector_months(&self, selector: SeasonSelector) -> &'static [u32] {
        match selector {
            SeasonSelector::WholeYear => &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
            SeasonSelector::Spring => &[3, 4, 5],
            SeasonSelector::Summer => &[6, 7, 8],
            SeasonSelector::Autumn => &[9, 10, 11],
            SeasonSelector::Winter => &[12, 1, 2],
            SeasonSelector::ColdHalf => &[10, 11, 12, 1, 2, 3],
            SeasonSelector::WarmHalf => &[4, 5, 6, 7, 8, 9],
            SeasonSelector::ExtendedWinter => &[10, 11, 12, 1, 2, 3, 4, 5],
            SeasonSelector::ExtendedSummer => &[4, 5, 6, 7, 8, 9, 10, 11],
        }
    }

    pub fn selector_name(&self, selector: SeasonSelector) -> &'static str {
        match (self.language, selector) {
            (Language::English, SeasonSelector::WholeYear) => "Whole year",
            (Language::English, SeasonSelector::Spring) => "Spring",
            (Language::English, SeasonSelector::Summer) => "Summer",
            (Language::English, SeasonSelector::Autumn) => "Autumn",
            (Language::English, SeasonSelector::Winter) => "Winter",
            (Language::English, SeasonSelector::ColdHalf) => "Cold half-year",
            (Language::English, SeasonSelector::WarmHalf) => "Warm half-year",
            (Language::English, SeasonSelector::ExtendedWinter) => "Winter period",
            (Language::English, SeasonSelector::ExtendedSummer) => "Summer period",
            (Language::Slovak, SeasonSelector::WholeYear) => "Celý rok",
            (Language::Slovak, SeasonSelector::Spring) => "Jar",
            (Language::Slovak, SeasonSelector::Summer) => "Leto",
            (Language::Slovak, SeasonSelector::Autumn) => "Jeseň",
            (Language::Slovak, SeasonSelector::Winter) => "Zima",
            (Language::Slovak, SeasonSelector::ColdHalf) => "Chladný polrok",
            (Language::Slovak, SeasonSelector::WarmHalf) => "Teplý polrok",
            (Language::Slovak, SeasonSelector::ExtendedWinter) => "Zimné obdobie",
            (Language::Slovak, SeasonSelector::ExtendedSummer) => "Letné obdobie",
        }
    }

    pub fn extreme_name(&self, kind: SnowExtremeKind) -> &'static str {
        use SnowExtremeKind::*;
        match self.language {
            Language::English => match kind {
                LatestFirstSnow => "Latest first day with snow cover",
                AverageFirstSnow => "Average first day with snow cover",
                EarliestFirstSnow => "Earliest first day with snow cover",
                LatestLastSnow => "Latest last day with snow cover",
                AverageLastSnow => "Average last day with snow cover",
                EarliestLastSnow => "Earliest last day with snow cover",
                LongestRun => "Longest snow cover run",
                AverageLongestRun => "Average longest snow cover run",
                ShortestRun => "Shortest longest snow cover run",
                MostSnowDays => "Most days with snow cover",
                AverageSnowDays => "Average days with snow cover",
                FewestSnowDays => "Fewest days with snow cover",
                HighestDepth => "Highest snow depth",
                AverageMaxDepth => "Average maximum snow depth",
                LowestMaxDepth => "Lowest maximum snow depth",
            },
            Language::Slovak => match kind {
                LatestFirstSnow => "Najneskorší výskyt prvej SSP",
                AverageFirstSnow => "Priemerný dátum výskytu prvej SSP",
                EarliestFirstSnow => "Najskorší výskyt prvej SSP",
                LatestLastSnow => "Najneskorší výskyt poslednej SSP",
                AverageLastSnow => "Priemerný dátum výskytu poslednej SSP",
                EarliestLastSnow => "Najskorší výskyt poslednej SSP",
                LongestRun => "Najdlhšia séria so SSP",
                AverageLongestRun => "Priemer najdlhších sérií so SSP",
                ShortestRun => "Najkratšia séria so SSP",
                MostSnowDays => "Najvyšší počet dní so SSP",
                AverageSnowDays => "Priemerný počet dní so SSP",
                FewestSnowDays => "Najmenší počet dní so SSP",
                HighestDepth => "Absolútne najvyššia snehová pokrývka",
                AverageMaxDepth => "Priemer maximálnych snehových pokrývok",
                LowestMaxDepth => "Najnižšia maximálna snehová pokrývka",
            },
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        let catalog = Catalog::new(Language::Slovak);
        assert_eq!(catalog.month_name(1), "Január");
        assert_eq!(catalog.month_name(12), "December");
        assert_eq!(catalog.month_name(0), "?");
        assert_eq!(catalog.month_name(13), "?");
        assert_eq!(Catalog::default().month_name(7), "July");
    }

    #[test]
    fn test_selector_months() {
        let catalog = Catalog::default();
        assert_eq!(catalog.selector_months(SeasonSelector::Winter), &[12, 1, 2]);
        assert_eq!(catalog.selector_months(SeasonSelector::ExtendedWinter).len(), 8);
        for selector in SeasonSelector::ALL {
            let months = catalog.selector_months(selector);
            assert!(months.iter().all(|m| (1..=12).contains(m)));
        }
    }

    #[test]
    fn test_every_extreme_has_a_name() {
        for language in [Language::English, Language::Slovak] {
            let catalog = Catalog::new(language);
            for kind in SnowExtremeKind::ALL {
                assert!(!catalog.extreme_name(kind).is_empty());
            }
        }
    }
}
