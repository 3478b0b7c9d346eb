//! Threshold helpers usable for any attribute and condition.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Longest run of qualifying days, with its first and last date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Run {
    pub length: u32,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl Run {
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Find the longest run of consecutive entries whose value is at least
/// `threshold`. Entries are sorted by date first; a missing value never
/// qualifies. When several runs share the maximum length the earliest wins.
pub fn longest_run<T>(series: &[(NaiveDate, Option<T>)], threshold: T) -> Run
where
    T: PartialOrd + Copy,
{
    let mut sorted: Vec<&(NaiveDate, Option<T>)> = series.iter().collect();
    sorted.sort_by_key(|(date, _)| *date);

    let mut best = Run::default();
    let mut current = Run::default();

    for (date, value) in sorted {
        let qualifies = value.is_some_and(|v| v >= threshold);
        if qualifies {
            if current.length == 0 {
                current.start = Some(*date);
            }
            current.length += 1;
            current.end = Some(*date);

            if current.length > best.length {
                best = current;
            }
        } else {
            current = Run::default();
        }
    }

    best
}

/// First and last date whose value is at least `threshold`.
pub fn first_and_last<T>(
    series: &[(NaiveDate, Option<T>)],
    threshold: T,
) -> Option<(NaiveDate, NaiveDate)>
where
    T: PartialOrd + Copy,
{
    series
        .iter()
        .filter(|(_, value)| value.is_some_and(|v| v >= threshold))
        .fold(None, |acc, (date, _)| match acc {
            None => Some((*date, *date)),
            Some((first, last)) => Some((first.min(*date), last.max(*date))),
        })
}
