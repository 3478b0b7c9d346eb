use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::season::SeasonPeriod;
use crate::utils::dates::{format_date, SeasonDay};

/// The value half of an [`ExtremeEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtremeValue {
    Integer(i64),
    Decimal(f64),
    Day(SeasonDay),
}

impl fmt::Display for ExtremeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtremeValue::Integer(v) => write!(f, "{}", v),
            ExtremeValue::Decimal(v) => write!(f, "{:.1}", v),
            ExtremeValue::Day(d) => write!(f, "{}", d),
        }
    }
}

/// Where an extreme happened: a literal date or a whole season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occurrence {
    Date(NaiveDate),
    Season(SeasonPeriod),
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occurrence::Date(d) => write!(f, "{}", format_date(*d)),
            Occurrence::Season(p) => write!(f, "{}", p),
        }
    }
}

/// An extreme value with its occurrence; both absent for an empty series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtremeEntry {
    pub value: Option<ExtremeValue>,
    pub occurrence: Option<Occurrence>,
}

impl ExtremeEntry {
    pub fn new(value: ExtremeValue, occurrence: Option<Occurrence>) -> Self {
        Self {
            value: Some(value),
            occurrence,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

/// Whole-history extremes of one station's daily data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalExtremes {
    pub temp_max: ExtremeEntry,
    pub temp_min: ExtremeEntry,
    pub precipitation: ExtremeEntry,
    pub snow_depth: ExtremeEntry,
}

/// Names of the cross-season snow extremes, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnowExtremeKind {
    LatestFirstSnow,
    AverageFirstSnow,
    EarliestFirstSnow,
    LatestLastSnow,
    AverageLastSnow,
    EarliestLastSnow,
    LongestRun,
    AverageLongestRun,
    ShortestRun,
    MostSnowDays,
    AverageSnowDays,
    FewestSnowDays,
    HighestDepth,
    AverageMaxDepth,
    LowestMaxDepth,
}

impl SnowExtremeKind {
    pub const ALL: [SnowExtremeKind; 15] = [
        SnowExtremeKind::LatestFirstSnow,
        SnowExtremeKind::AverageFirstSnow,
        SnowExtremeKind::EarliestFirstSnow,
        SnowExtremeKind::LatestLastSnow,
        SnowExtremeKind::AverageLastSnow,
        SnowExtremeKind::EarliestLastSnow,
        SnowExtremeKind::LongestRun,
        SnowExtremeKind::AverageLongestRun,
        SnowExtremeKind::ShortestRun,
        SnowExtremeKind::MostSnowDays,
        SnowExtremeKind::AverageSnowDays,
        SnowExtremeKind::FewestSnowDays,
        SnowExtremeKind::HighestDepth,
        SnowExtremeKind::AverageMaxDepth,
        SnowExtremeKind::LowestMaxDepth,
    ];
}

/// The fifteen cross-season extremes keyed by kind, in report order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnowExtremes {
    entries: Vec<(SnowExtremeKind, ExtremeEntry)>,
}

impl SnowExtremes {
    pub fn new() -> Self {
        Self {
            entries: SnowExtremeKind::ALL
                .iter()
                .map(|kind| (*kind, ExtremeEntry::empty()))
                .collect(),
        }
    }

    pub fn set(&mut self, kind: SnowExtremeKind, entry: ExtremeEntry) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == kind) {
            slot.1 = entry;
        }
    }

    pub fn get(&self, kind: SnowExtremeKind) -> Option<&ExtremeEntry> {
        self.entries.iter().find(|(k, _)| *k == kind).map(|(_, e)| e)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(SnowExtremeKind, ExtremeEntry)> {
        self.entries.iter()
    }

    /// True when no season contributed any value.
    pub fn all_absent(&self) -> bool {
        self.entries.iter().all(|(_, e)| e.is_empty())
    }
}

impl Default for SnowExtremes {
    fn default() -> Self {
        Self::new()
    }
}
