use crate::error::{ProcessingError, Result};
use crate::models::{
    Catalog, Cell, Column, ColumnKind, ExtremeEntry, ExtremeValue, FrequencyTable, StationReport,
    Table,
};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(ProcessingError::InvalidFormat(format!(
                "Unsupported report format: {}",
                other
            ))),
        }
    }
}

/// Renders a [`StationReport`] as aligned text tables or JSON.
pub struct ReportWriter {
    catalog: Catalog,
    format: ReportFormat,
}

impl ReportWriter {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            format: ReportFormat::Text,
        }
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn write_to_file(&self, report: &StationReport, path: &Path) -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write(report, &mut out)?;
        out.flush()?;
        Ok(())
    }

    pub fn write<W: Write>(&self, report: &StationReport, out: &mut W) -> Result<()> {
        match self.format {
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, report)?;
                writeln!(out)?;
            }
            ReportFormat::Text => {
                out.write_all(self.render_text(report).as_bytes())?;
            }
        }
        Ok(())
    }

    pub fn render_text(&self, report: &StationReport) -> String {
        let mut text = format!("{}\n\n", report.summary());
        for table in self.tables(report) {
            text.push_str(&render_table(&table));
            text.push('\n');
        }
        text
    }

    /// All report sections as typed tables, in display order.
    pub fn tables(&self, report: &StationReport) -> Vec<Table> {
        let mut tables = vec![
            Table::from_rows("Monthly statistics", &report.monthly, &self.catalog),
            Table::from_rows("Yearly summary", &report.yearly, &self.catalog),
        ];

        let historical = &report.historical;
        let mut table = Table::new(
            "Historical extremes",
            vec![
                Column::new("Attribute", ColumnKind::Text),
                Column::new("Value", ColumnKind::Numeric),
                Column::new("Date", ColumnKind::Date),
            ],
        );
        for (name, entry) in [
            ("Highest Tmax", &historical.temp_max),
            ("Lowest Tmin", &historical.temp_min),
            ("Highest precipitation", &historical.precipitation),
            ("Highest snow depth", &historical.snow_depth),
        ] {
            table.push_row(vec![
                Cell::Text(name.to_string()),
                value_cell(entry),
                occurrence_cell(entry),
            ]);
        }
        tables.push(table);

        tables.push(Table::from_rows(
            &format!("Snow seasons ({})", report.season_mode),
            &report.seasons,
            &self.catalog,
        ));

        let mut extremes = Table::new(
            "Snow extremes",
            vec![
                Column::new("Extreme", ColumnKind::Text),
                Column::new("Value", ColumnKind::Text),
                Column::new("Season", ColumnKind::Text),
            ],
        );
        for (kind, entry) in report.snow_extremes.iter() {
            extremes.push_row(vec![
                Cell::Text(self.catalog.extreme_name(*kind).to_string()),
                value_cell(entry),
                occurrence_cell(entry),
            ]);
        }
        tables.push(extremes);

        tables.push(self.frequency_table("Months by snow days", &report.snow_day_frequency));
        tables.push(self.frequency_table("Months by maximum snow depth", &report.depth_frequency));
        tables.push(Table::from_rows(
            "Maximum snow depth by month",
            &report.snow_max_by_month,
            &self.catalog,
        ));
        tables.push(Table::from_rows(
            "Snow days by month",
            &report.snow_days_by_month,
            &self.catalog,
        ));

        tables
    }

    fn frequency_table(&self, title: &str, frequency: &FrequencyTable) -> Table {
        let mut columns = vec![Column::new("Band", ColumnKind::Text)];
        columns.extend(
            frequency
                .months
                .iter()
                .map(|m| Column::new(self.catalog.month_name(*m), ColumnKind::Numeric)),
        );

        let title = format!("{} - {}", title, self.catalog.selector_name(frequency.selector));
        let mut table = Table::new(&title, columns);
        for (band, counts) in frequency.bands.iter().zip(&frequency.counts) {
            let mut row = vec![Cell::Text(band.to_string())];
            row.extend(counts.iter().map(|c| Cell::Integer(i64::from(*c))));
            table.push_row(row);
        }
        table
    }
}

fn value_cell(entry: &ExtremeEntry) -> Cell {
    match entry.value {
        Some(ExtremeValue::Integer(v)) => Cell::Integer(v),
        Some(ExtremeValue::Decimal(v)) => Cell::Decimal(v),
        Some(ExtremeValue::Day(d)) => Cell::Day(d),
        None => Cell::Empty,
    }
}

fn occurrence_cell(entry: &ExtremeEntry) -> Cell {
    entry
        .occurrence
        .map_or(Cell::Empty, |o| Cell::Text(o.to_string()))
}

/// Render a table with a title line and columns padded to their widest cell.
pub fn render_table(table: &Table) -> String {
    let rendered: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.name.chars().count()).collect();
    for row in &rendered {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let pad = |text: &str, width: usize, kind: ColumnKind| {
        let fill = " ".repeat(width.saturating_sub(text.chars().count()));
        match kind {
            ColumnKind::Numeric => format!("{}{}", fill, text),
            _ => format!("{}{}", text, fill),
        }
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", table.title);

    let header: Vec<String> = table
        .columns
        .iter()
        .zip(&widths)
        .map(|(c, w)| pad(&c.name, *w, ColumnKind::Text))
        .collect();
    let _ = writeln!(out, "{}", header.join("  ").trim_end());

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("  "));

    for row in &rendered {
        let line: Vec<String> = row
            .iter()
            .zip(table.columns.iter().zip(&widths))
            .map(|(cell, (column, width))| pad(cell, *width, column.kind))
            .collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
    }

    out
}
