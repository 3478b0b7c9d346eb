//! Typed column schema for the tables handed to the presentation layer.
//!
//! Every column carries a [`ColumnKind`] so that sorting and formatting
//! dispatch on the declared type instead of on column positions.

use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::models::catalog::Catalog;
use crate::models::monthly::{MonthComparison, MonthlyStat};
use crate::models::season::SeasonStat;
use crate::models::yearly::YearlySummary;
use crate::utils::dates::{format_date, SeasonDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numeric,
    /// Calendar date, sorted chronologically
    Date,
    /// Date sorted by its day within the winter season
    SeasonDay,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(name: &str, kind: ColumnKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Empty,
    Integer(i64),
    Decimal(f64),
    Date(NaiveDate),
    Day(SeasonDay),
    Text(String),
}

impl Cell {
    fn numeric(&self) -> Option<f64> {
        match self {
            Cell::Integer(v) => Some(*v as f64),
            Cell::Decimal(v) => Some(*v),
            Cell::Day(d) => Some(f64::from(d.ordinal())),
            _ => None,
        }
    }

    fn season_day(&self) -> Option<SeasonDay> {
        match self {
            Cell::Date(d) => Some(SeasonDay::from_date(*d)),
            Cell::Day(d) => Some(*d),
            _ => None,
        }
    }

    /// Compare two cells of a column of `kind`. Empty cells sort last.
    pub fn compare(&self, other: &Cell, kind: ColumnKind) -> Ordering {
        match (self, other) {
            (Cell::Empty, Cell::Empty) => return Ordering::Equal,
            (Cell::Empty, _) => return Ordering::Greater,
            (_, Cell::Empty) => return Ordering::Less,
            _ => {}
        }

        match kind {
            ColumnKind::Numeric => match (self.numeric(), other.numeric()) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                _ => self.to_string().cmp(&other.to_string()),
            },
            ColumnKind::Date => match (self, other) {
                (Cell::Date(a), Cell::Date(b)) => a.cmp(b),
                _ => self.to_string().cmp(&other.to_string()),
            },
            ColumnKind::SeasonDay => match (self.season_day(), other.season_day()) {
                (Some(a), Some(b)) => a.cmp(&b),
                _ => self.to_string().cmp(&other.to_string()),
            },
            ColumnKind::Text => self.to_string().cmp(&other.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "-"),
            Cell::Integer(v) => write!(f, "{}", v),
            Cell::Decimal(v) => write!(f, "{}", v),
            Cell::Date(d) => write!(f, "{}", format_date(*d)),
            Cell::Day(d) => write!(f, "{}", d),
            Cell::Text(t) => write!(f, "{}", t),
        }
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Cell::Empty, Cell::Decimal)
    }
}

impl From<Option<NaiveDate>> for Cell {
    fn from(value: Option<NaiveDate>) -> Self {
        value.map_or(Cell::Empty, Cell::Date)
    }
}

impl From<Option<i64>> for Cell {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Cell::Empty, Cell::Integer)
    }
}

/// Rows that can be laid out as a typed table.
pub trait Tabular {
    fn columns() -> Vec<Column>;
    fn cells(&self, catalog: &Catalog) -> Vec<Cell>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub title: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(title: &str, columns: Vec<Column>) -> Self {
        Self {
            title: title.to_string(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn from_rows<T: Tabular>(title: &str, rows: &[T], catalog: &Catalog) -> Self {
        Self {
            title: title.to_string(),
            columns: T::columns(),
            rows: rows.iter().map(|row| row.cells(catalog)).collect(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Stable sort on one column using its declared kind. Empty cells stay
    /// last in either direction.
    pub fn sort_by_column(&mut self, index: usize, ascending: bool) {
        let Some(kind) = self.columns.get(index).map(|c| c.kind) else {
            return;
        };

        self.rows.sort_by(|a, b| {
            let (Some(l), Some(r)) = (a.get(index), b.get(index)) else {
                return Ordering::Equal;
            };
            let has_empty = matches!(l, Cell::Empty) || matches!(r, Cell::Empty);
            if ascending || has_empty {
                l.compare(r, kind)
            } else {
                r.compare(l, kind)
            }
        });
    }
}

fn temperature_columns(prefix: &str) -> Vec<Column> {
    ["min", "max", "mean"]
        .iter()
        .map(|stat| Column::new(&format!("{}_{}", prefix, stat), ColumnKind::Numeric))
        .collect()
}

impl Tabular for MonthlyStat {
    fn columns() -> Vec<Column> {
        let mut columns = vec![
            Column::new("Year", ColumnKind::Numeric),
            Column::new("Month", ColumnKind::Numeric),
        ];
        columns.extend(temperature_columns("Tmax"));
        columns.extend(temperature_columns("Tmin"));
        columns.extend(temperature_columns("Tavg"));
        for name in [
            "R_max", "R_count", "R_sum", "CSP_max", "CSP_count", "CSP_sum", "Tmax_35", "Tmax_30",
            "Tmax_25", "Tmax_below_0", "Tmax_below_-10",
        ] {
            columns.push(Column::new(name, ColumnKind::Numeric));
        }
        columns
    }

    fn cells(&self, _catalog: &Catalog) -> Vec<Cell> {
        vec![
            Cell::Integer(i64::from(self.year)),
            Cell::Integer(i64::from(self.month)),
            self.tmax_min.into(),
            self.tmax_max.into(),
            self.tmax_mean.into(),
            self.tmin_min.into(),
            self.tmin_max.into(),
            self.tmin_mean.into(),
            self.tavg_min.into(),
            self.tavg_max.into(),
            self.tavg_mean.into(),
            self.precip_max.into(),
            Cell::Integer(i64::from(self.precip_count)),
            Cell::Decimal(self.precip_sum),
            Cell::Integer(i64::from(self.snow_max)),
            Cell::Integer(i64::from(self.snow_count)),
            Cell::Integer(self.snow_sum),
            Cell::Integer(i64::from(self.tmax_days_35)),
            Cell::Integer(i64::from(self.tmax_days_30)),
            Cell::Integer(i64::from(self.tmax_days_25)),
            Cell::Integer(i64::from(self.tmax_days_below_0)),
            Cell::Integer(i64::from(self.tmax_days_below_minus_10)),
        ]
    }
}

impl Tabular for YearlySummary {
    fn columns() -> Vec<Column> {
        let mut columns = vec![Column::new("Year", ColumnKind::Numeric)];
        columns.extend(temperature_columns("Tmax"));
        columns.extend(temperature_columns("Tmin"));
        columns.extend(temperature_columns("Tavg"));
        for name in [
            "Tmax_35",
            "Tmax_30",
            "Tmax_25",
            "Tmax_below_0",
            "Tmax_below_-10",
            "R_total",
            "CSP_days",
        ] {
            columns.push(Column::new(name, ColumnKind::Numeric));
        }
        columns
    }

    fn cells(&self, _catalog: &Catalog) -> Vec<Cell> {
        vec![
            Cell::Integer(i64::from(self.year)),
            self.tmax_min.into(),
            self.tmax_max.into(),
            self.tmax_mean.into(),
            self.tmin_min.into(),
            self.tmin_max.into(),
            self.tmin_mean.into(),
            self.tavg_min.into(),
            self.tavg_max.into(),
            self.tavg_mean.into(),
            Cell::Integer(i64::from(self.tmax_days_35)),
            Cell::Integer(i64::from(self.tmax_days_30)),
            Cell::Integer(i64::from(self.tmax_days_25)),
            Cell::Integer(i64::from(self.tmax_days_below_0)),
            Cell::Integer(i64::from(self.tmax_days_below_minus_10)),
            Cell::Decimal(self.precip_total),
            Cell::Integer(i64::from(self.snow_days)),
        ]
    }
}

impl Tabular for SeasonStat {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Season", ColumnKind::Text),
            Column::new("Snow days", ColumnKind::Numeric),
            Column::new("Max depth [cm]", ColumnKind::Numeric),
            Column::new("Longest run", ColumnKind::Numeric),
            Column::new("Run start", ColumnKind::SeasonDay),
            Column::new("Run end", ColumnKind::SeasonDay),
            Column::new("First day", ColumnKind::SeasonDay),
            Column::new("Last day", ColumnKind::SeasonDay),
            Column::new("Total days", ColumnKind::Numeric),
            Column::new("Snow days [%]", ColumnKind::Numeric),
            Column::new("Longest run [%]", ColumnKind::Numeric),
        ]
    }

    fn cells(&self, _catalog: &Catalog) -> Vec<Cell> {
        vec![
            Cell::Text(self.period.to_string()),
            Cell::Integer(i64::from(self.snow_days)),
            Cell::Integer(i64::from(self.max_depth)),
            Cell::Integer(i64::from(self.longest_run.length)),
            self.longest_run.start.into(),
            self.longest_run.end.into(),
            self.first_day.into(),
            self.last_day.into(),
            self.total_days.into(),
            self.ratio_days.into(),
            self.ratio_longest_run.into(),
        ]
    }
}

impl Tabular for MonthComparison {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Month", ColumnKind::Text),
            Column::new("Minimum", ColumnKind::Numeric),
            Column::new("Year of minimum", ColumnKind::Numeric),
            Column::new("Average", ColumnKind::Numeric),
            Column::new("Maximum", ColumnKind::Numeric),
            Column::new("Year of maximum", ColumnKind::Numeric),
        ]
    }

    fn cells(&self, catalog: &Catalog) -> Vec<Cell> {
        vec![
            Cell::Text(catalog.month_name(self.month).to_string()),
            Cell::Integer(self.minimum),
            Cell::Integer(i64::from(self.year_of_minimum)),
            Cell::Integer(self.average),
            Cell::Integer(self.maximum),
            Cell::Integer(i64::from(self.year_of_maximum)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_season_day_column_sorts_circularly() {
        let mut table = Table::new("first days", vec![Column::new("First", ColumnKind::SeasonDay)]);
        table.push_row(vec![Cell::Date(date(3, 2, 1971))]);
        table.push_row(vec![Cell::Empty]);
        table.push_row(vec![Cell::Date(date(15, 11, 1999))]);
        table.push_row(vec![Cell::Date(date(20, 12, 1960))]);

        table.sort_by_column(0, true);
        let rendered: Vec<String> = table.rows.iter().map(|r| r[0].to_string()).collect();
        assert_eq!(rendered, vec!["15.11.1999", "20.12.1960", "03.02.1971", "-"]);
    }

    #[test]
    fn test_date_column_sorts_chronologically() {
        let mut table = Table::new("dates", vec![Column::new("Date", ColumnKind::Date)]);
        table.push_row(vec![Cell::Date(date(3, 2, 1971))]);
        table.push_row(vec![Cell::Date(date(15, 11, 1960))]);

        table.push_row(vec![Cell::Empty]);

        table.sort_by_column(0, false);
        assert_eq!(table.rows[0][0], Cell::Date(date(3, 2, 1971)));
        assert_eq!(table.rows[2][0], Cell::Empty);
    }

    #[test]
    fn test_numeric_column_mixes_integers_and_decimals() {
        let mut table = Table::new("n", vec![Column::new("v", ColumnKind::Numeric)]);
        table.push_row(vec![Cell::Decimal(10.5)]);
        table.push_row(vec![Cell::Integer(9)]);
        table.push_row(vec![Cell::Integer(11)]);

        table.sort_by_column(0, true);
        let rendered: Vec<String> = table.rows.iter().map(|r| r[0].to_string()).collect();
        assert_eq!(rendered, vec!["9", "10.5", "11"]);
    }

    #[test]
    fn test_schema_matches_cells() {
        let catalog = Catalog::default();
        let comparison = MonthComparison {
            month: 1,
            minimum: 1,
            year_of_minimum: 1990,
            average: 5,
            maximum: 12,
            year_of_maximum: 2006,
        };
        assert_eq!(MonthComparison::columns().len(), comparison.cells(&catalog).len());
        assert_eq!(comparison.cells(&catalog)[0], Cell::Text("January".to_string()));
    }
}
