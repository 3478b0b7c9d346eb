//! Calendar helpers shared by the aggregators.
//!
//! Winter statistics compare dates that straddle New Year ("15 November" is
//! earlier in the winter than "3 February"). [`SeasonDay`] maps a calendar
//! date onto an ordinal counted from a fixed 1 October epoch, giving a total
//! order and an arithmetic mean that ignore the actual year.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ProcessingError, Result};
use crate::utils::constants::DATE_FORMAT;

/// Months of the notional winter in order, with their lengths. February
/// always has 29 days so that leap days map onto a valid ordinal.
const SEASON_MONTHS: [(u32, u16); 8] = [
    (10, 31),
    (11, 30),
    (12, 31),
    (1, 31),
    (2, 29),
    (3, 31),
    (4, 30),
    (5, 31),
];

/// Parse a `dd.mm.yyyy` date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| ProcessingError::InvalidDate(text.to_string()))
}

/// Render a date as `dd.mm.yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Day of the notional winter: 1 October is 1, 1 January is 93 and
/// 31 May is 244. June to September map to [`SeasonDay::SENTINEL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeasonDay(u16);

impl SeasonDay {
    /// Sorts before every in-season day.
    pub const SENTINEL: SeasonDay = SeasonDay(0);

    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_day_month(date.day(), date.month()).unwrap_or(Self::SENTINEL)
    }

    pub fn from_day_month(day: u32, month: u32) -> Option<Self> {
        let mut offset: u16 = 0;
        for (m, len) in SEASON_MONTHS {
            if m == month {
                let day = u16::try_from(day).ok()?;
                return (1..=len).contains(&day).then_some(SeasonDay(offset + day));
            }
            offset += len;
        }
        None
    }

    pub fn ordinal(&self) -> u16 {
        self.0
    }

    pub fn is_sentinel(&self) -> bool {
        self.0 == 0
    }

    /// Calendar (day, month) of this ordinal, `None` for the sentinel.
    pub fn day_month(&self) -> Option<(u32, u32)> {
        let mut remaining = self.0;
        if remaining == 0 {
            return None;
        }
        for (month, len) in SEASON_MONTHS {
            if remaining <= len {
                return Some((u32::from(remaining), month));
            }
            remaining -= len;
        }
        None
    }

    /// Mean of the in-season days, rounded down. Sentinels are skipped.
    pub fn average<I>(days: I) -> Option<SeasonDay>
    where
        I: IntoIterator<Item = SeasonDay>,
    {
        let (sum, count) = days
            .into_iter()
            .filter(|d| !d.is_sentinel())
            .fold((0u64, 0u64), |(sum, count), d| {
                (sum + u64::from(d.0), count + 1)
            });

        if count == 0 {
            return None;
        }
        u16::try_from(sum / count).ok().map(SeasonDay)
    }
}

impl From<NaiveDate> for SeasonDay {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl FromStr for SeasonDay {
    type Err = String;

    /// Parses the `dd.mm.` form produced by `Display`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "-" {
            return Ok(Self::SENTINEL);
        }
        let mut parts = trimmed.trim_end_matches('.').split('.');
        let day = parts.next().and_then(|d| d.parse().ok());
        let month = parts.next().and_then(|m| m.parse().ok());
        match (day, month, parts.next()) {
            (Some(day), Some(month), None) => Self::from_day_month(day, month)
                .ok_or_else(|| format!("'{}' is not a day of the winter season", s)),
            _ => Err(format!("invalid day '{}', expected dd.mm.", s)),
        }
    }
}

impl TryFrom<String> for SeasonDay {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeasonDay> for String {
    fn from(day: SeasonDay) -> Self {
        day.to_string()
    }
}

impl fmt::Display for SeasonDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.day_month() {
            Some((day, month)) => write!(f, "{:02}.{:02}.", day, month),
            None => write!(f, "-"),
        }
    }
}
