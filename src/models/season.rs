use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::runs::Run;

/// How records are partitioned into seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeasonMode {
    /// December to February ("Zima")
    Winter,
    /// October to May ("Zimné obdobie")
    ExtendedWinter,
    /// January to December, labelled by the year alone
    CalendarYear,
}

impl SeasonMode {
    pub fn months(&self) -> &'static [u32] {
        match self {
            SeasonMode::Winter => &[12, 1, 2],
            SeasonMode::ExtendedWinter => &[10, 11, 12, 1, 2, 3, 4, 5],
            SeasonMode::CalendarYear => &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
        }
    }

    fn first_month(&self) -> u32 {
        self.months()[0]
    }

    /// Season the date belongs to, `None` outside the mode's months.
    pub fn period_for(&self, date: NaiveDate) -> Option<SeasonPeriod> {
        let month = date.month();
        if !self.months().contains(&month) {
            return None;
        }

        let year = date.year();
        Some(match self {
            SeasonMode::CalendarYear => SeasonPeriod::Year(year),
            _ if month >= self.first_month() => SeasonPeriod::Winter(year),
            _ => SeasonPeriod::Winter(year - 1),
        })
    }

    /// First calendar day covered by `period` under this mode.
    pub fn first_day(&self, period: SeasonPeriod) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(period.start_year(), self.first_month(), 1)
    }
}

impl FromStr for SeasonMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "winter" | "zima" => Ok(SeasonMode::Winter),
            "extended" | "extended-winter" | "zimne-obdobie" => Ok(SeasonMode::ExtendedWinter),
            "year" | "calendar-year" => Ok(SeasonMode::CalendarYear),
            other => Err(format!(
                "unknown season mode '{}', expected winter, extended or year",
                other
            )),
        }
    }
}

impl fmt::Display for SeasonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonMode::Winter => write!(f, "winter"),
            SeasonMode::ExtendedWinter => write!(f, "extended"),
            SeasonMode::CalendarYear => write!(f, "year"),
        }
    }
}

/// A season key: a single year (`"1987"`) or a winter crossing New Year
/// (`"1987/1988"`, keyed by its first year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SeasonPeriod {
    Year(i32),
    Winter(i32),
}

impl SeasonPeriod {
    pub fn start_year(&self) -> i32 {
        match self {
            SeasonPeriod::Year(y) | SeasonPeriod::Winter(y) => *y,
        }
    }

    /// Whether the period spans New Year, so that its days follow the
    /// October-to-May season order.
    pub fn crosses_new_year(&self) -> bool {
        matches!(self, SeasonPeriod::Winter(_))
    }
}

impl fmt::Display for SeasonPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonPeriod::Year(y) => write!(f, "{}", y),
            SeasonPeriod::Winter(y) => write!(f, "{}/{}", y, y + 1),
        }
    }
}

impl FromStr for SeasonPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("invalid season label '{}'", s);
        match s.split_once('/') {
            Some((first, second)) => {
                let first: i32 = first.trim().parse().map_err(|_| invalid())?;
                let second: i32 = second.trim().parse().map_err(|_| invalid())?;
                if second != first + 1 {
                    return Err(invalid());
                }
                Ok(SeasonPeriod::Winter(first))
            }
            None => s.trim().parse().map(SeasonPeriod::Year).map_err(|_| invalid()),
        }
    }
}

impl TryFrom<String> for SeasonPeriod {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeasonPeriod> for String {
    fn from(period: SeasonPeriod) -> Self {
        period.to_string()
    }
}

/// Snow statistics for one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonStat {
    pub period: SeasonPeriod,
    /// Days with a snow-depth measurement
    pub snow_days: u32,
    /// cm, 0 when no snow was recorded
    pub max_depth: i32,
    pub longest_run: Run,
    pub first_day: Option<NaiveDate>,
    pub last_day: Option<NaiveDate>,
    /// Days from the first to the last qualifying day, inclusive
    pub total_days: Option<i64>,
    /// Percent of `total_days` with snow
    pub ratio_days: Option<f64>,
    /// Percent of `total_days` covered by the longest run
    pub ratio_longest_run: Option<f64>,
}
