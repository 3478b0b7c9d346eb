use crate::error::{ProcessingError, Result};
use crate::models::RawObservation;
use crate::utils::constants::{
    COL_DATE, COL_PRECIPITATION, COL_SNOW, COL_STATION, COL_TAVG, COL_TMAX, COL_TMIN,
    SNOW_SENTINELS,
};
use csv::{ReaderBuilder, StringRecord, Trim};
use encoding_rs::{UTF_8, WINDOWS_1250};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Column positions resolved from the header row.
struct ColumnIndex {
    station: usize,
    date: usize,
    temp_max: Option<usize>,
    temp_min: Option<usize>,
    temp_avg: Option<usize>,
    precipitation: Option<usize>,
    snow: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                ProcessingError::InvalidFormat(format!("Missing required column '{}'", name))
            })
        };

        let index = Self {
            station: require(COL_STATION)?,
            date: require(COL_DATE)?,
            temp_max: find(COL_TMAX),
            temp_min: find(COL_TMIN),
            temp_avg: find(COL_TAVG),
            precipitation: find(COL_PRECIPITATION),
            snow: find(COL_SNOW),
        };

        for (name, column) in [
            (COL_TMAX, index.temp_max),
            (COL_TMIN, index.temp_min),
            (COL_TAVG, index.temp_avg),
            (COL_PRECIPITATION, index.precipitation),
            (COL_SNOW, index.snow),
        ] {
            if column.is_none() {
                debug!("Column '{}' not present, treating as missing", name);
            }
        }

        Ok(index)
    }
}

/// Reads tab-separated daily observation files.
pub struct ObservationReader {
    delimiter: u8,
}

impl ObservationReader {
    pub fn new() -> Self {
        Self { delimiter: b'\t' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read every row of the file at `path`.
    pub fn read_file(&self, path: &Path) -> Result<Vec<RawObservation>> {
        let bytes = fs::read(path)?;
        let text = decode(&bytes);
        let rows = self.read_str(&text)?;
        info!("Read {} rows from {}", rows.len(), path.display());
        Ok(rows)
    }

    /// Parse already decoded file content.
    pub fn read_str(&self, text: &str) -> Result<Vec<RawObservation>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let columns = ColumnIndex::from_headers(reader.headers()?)?;
        let mut rows = Vec::new();

        for result in reader.records() {
            let record = result?;
            if record.iter().all(|field| field.is_empty()) {
                continue;
            }
            let line = record.position().map_or(0, |p| p.line());
            rows.push(parse_row(&record, &columns, line)?);
        }

        Ok(rows)
    }
}

impl Default for ObservationReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode as UTF-8, falling back to Windows-1250 for legacy exports.
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        return text;
    }

    let (text, _, had_errors) = WINDOWS_1250.decode(bytes);
    if had_errors {
        warn!("Input is neither valid UTF-8 nor Windows-1250; some characters were replaced");
    } else {
        debug!("Decoded input as Windows-1250");
    }
    text
}

fn parse_row(record: &StringRecord, columns: &ColumnIndex, line: u64) -> Result<RawObservation> {
    let field = |index: Option<usize>| index.and_then(|i| record.get(i)).unwrap_or("");

    let station_text = field(Some(columns.station));
    let station_id = station_text.parse::<u32>().map_err(|_| {
        ProcessingError::InvalidFormat(format!(
            "Line {}: invalid station id '{}'",
            line, station_text
        ))
    })?;

    let number = |name: &str, index: Option<usize>| parse_decimal(field(index), name, line);

    let snow_depth = number(COL_SNOW, columns.snow)?.filter(|depth| !SNOW_SENTINELS.contains(depth));

    Ok(RawObservation {
        station_id,
        date: field(Some(columns.date)).to_string(),
        temp_max: number(COL_TMAX, columns.temp_max)?,
        temp_min: number(COL_TMIN, columns.temp_min)?,
        temp_avg: number(COL_TAVG, columns.temp_avg)?,
        precipitation: number(COL_PRECIPITATION, columns.precipitation)?,
        snow_depth,
    })
}

/// Parse a number written with a decimal comma or point; empty is missing.
fn parse_decimal(text: &str, column: &str, line: u64) -> Result<Option<f64>> {
    if text.is_empty() {
        return Ok(None);
    }

    let normalized = text.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(ProcessingError::InvalidFormat(format!(
            "Line {}: invalid {} value '{}'",
            line, column, text
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "IND\tDatum\tTmax\tTmin\tTavg\tR\tCSP\n\
        11816\t10.07.2015\t38,2\t21,0\t29,4\t0,0\t\n\
        11816\t05.01.2016\t-2,5\t-9,1\t-5,0\t1,2\t995\n\
        11816\t06.01.2016\t-3.5\t-10.1\t-6.0\t\t12\n\
        11816\t07.01.2016\t-3,5\t-10,1\t-6,0\t\t0\n";

    #[test]
    fn test_reads_decimal_comma_and_sentinels() {
        let rows = ObservationReader::new().read_str(SAMPLE).unwrap();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].temp_max, Some(38.2));
        assert_eq!(rows[0].date, "10.07.2015");
        assert_eq!(rows[0].snow_depth, None);
        assert_eq!(rows[1].snow_depth, None);
        assert_eq!(rows[2].temp_min, Some(-10.1));
        assert_eq!(rows[2].precipitation, None);
        assert_eq!(rows[2].snow_depth, Some(12.0));
        assert_eq!(rows[3].snow_depth, None);
    }

    #[test]
    fn test_malformed_number_names_line() {
        let text = "IND\tDatum\tTmax\n1\t01.01.2000\tabc\n";
        let err = ObservationReader::new().read_str(text).unwrap_err();
        match err {
            ProcessingError::InvalidFormat(message) => {
                assert!(message.contains("Line 2"), "{}", message);
                assert!(message.contains("Tmax"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_missing_required_column() {
        let text = "Datum\tTmax\n01.01.2000\t1,0\n";
        assert!(matches!(
            ObservationReader::new().read_str(text),
            Err(ProcessingError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_custom_delimiter() {
        let text = "IND;Datum;CSP\n11816;24.12.2010;31\n";
        let rows = ObservationReader::with_delimiter(b';').read_str(text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].station_id, 11816);
        assert_eq!(rows[0].snow_depth, Some(31.0));
        assert_eq!(rows[0].temp_max, None);
    }

    #[test]
    fn test_windows_1250_fallback() {
        // "Žilina" with Ž encoded as 0x8E
        let bytes = b"\x8Eilina";
        assert_eq!(decode(bytes), "Žilina");
        assert_eq!(decode("Žilina".as_bytes()), "Žilina");
    }
}
