use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subsets of the year a frequency table can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeasonSelector {
    WholeYear,
    Spring,
    Summer,
    Autumn,
    Winter,
    /// October to March
    ColdHalf,
    /// April to September
    WarmHalf,
    /// October to May
    ExtendedWinter,
    /// April to November
    ExtendedSummer,
}

impl SeasonSelector {
    pub const ALL: [SeasonSelector; 9] = [
        SeasonSelector::WholeYear,
        SeasonSelector::Spring,
        SeasonSelector::Summer,
        SeasonSelector::Autumn,
        SeasonSelector::Winter,
        SeasonSelector::ColdHalf,
        SeasonSelector::WarmHalf,
        SeasonSelector::ExtendedWinter,
        SeasonSelector::ExtendedSummer,
    ];

    fn key(&self) -> &'static str {
        match self {
            SeasonSelector::WholeYear => "whole-year",
            SeasonSelector::Spring => "spring",
            SeasonSelector::Summer => "summer",
            SeasonSelector::Autumn => "autumn",
            SeasonSelector::Winter => "winter",
            SeasonSelector::ColdHalf => "cold-half",
            SeasonSelector::WarmHalf => "warm-half",
            SeasonSelector::ExtendedWinter => "extended-winter",
            SeasonSelector::ExtendedSummer => "extended-summer",
        }
    }
}

impl FromStr for SeasonSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|selector| selector.key() == wanted)
            .ok_or_else(|| format!("unknown season selector '{}'", s))
    }
}

impl fmt::Display for SeasonSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Inclusive value range; `upper: None` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub lower: i64,
    pub upper: Option<i64>,
}

impl Band {
    pub fn contains(&self, value: i64) -> bool {
        value >= self.lower && self.upper.map_or(true, |upper| value <= upper)
    }

    pub fn from_bounds(bounds: &[(i64, Option<i64>)]) -> Vec<Band> {
        bounds
            .iter()
            .map(|&(lower, upper)| Band { lower, upper })
            .collect()
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper {
            Some(upper) if upper == self.lower => write!(f, "{}", upper),
            Some(upper) => write!(f, "{}-{}", self.lower, upper),
            None => write!(f, "{}+", self.lower),
        }
    }
}

/// Counts of monthly rows per band (rows) and month (columns).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    pub selector: SeasonSelector,
    pub bands: Vec<Band>,
    pub months: Vec<u32>,
    /// `counts[band][month_index]`
    pub counts: Vec<Vec<u32>>,
}

impl FrequencyTable {
    /// All-zero table over `months`, in column order.
    pub fn empty(selector: SeasonSelector, months: Vec<u32>, bands: Vec<Band>) -> Self {
        let counts = vec![vec![0; months.len()]; bands.len()];
        Self {
            selector,
            bands,
            months,
            counts,
        }
    }

    pub fn count(&self, band: usize, month: u32) -> Option<u32> {
        let column = self.months.iter().position(|m| *m == month)?;
        self.counts.get(band).map(|row| row[column])
    }

    /// Sum over all bands for one month.
    pub fn month_total(&self, month: u32) -> u32 {
        match self.months.iter().position(|m| *m == month) {
            Some(column) => self.counts.iter().map(|row| row[column]).sum(),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::DAY_COUNT_BANDS;

    #[test]
    fn test_band_labels() {
        let bands = Band::from_bounds(&DAY_COUNT_BANDS);
        let labels: Vec<String> = bands.iter().map(|b| b.to_string()).collect();
        assert_eq!(labels, vec!["0", "1-5", "6-13", "14-21", "22-27", "28+"]);
    }

    #[test]
    fn test_bands_partition_values() {
        let bands = Band::from_bounds(&DAY_COUNT_BANDS);
        for value in 0..=31 {
            assert_eq!(bands.iter().filter(|b| b.contains(value)).count(), 1);
        }
    }

    #[test]
    fn test_selector_parse() {
        assert_eq!("cold-half".parse::<SeasonSelector>(), Ok(SeasonSelector::ColdHalf));
        assert!("monsoon".parse::<SeasonSelector>().is_err());
    }
}
