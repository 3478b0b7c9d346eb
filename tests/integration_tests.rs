use chrono::NaiveDate;
use clap::Parser;
use pretty_assertions::assert_eq;
use station_climate_stats::cli::{run, Cli};
use station_climate_stats::models::{Catalog, DailyRecord, ExtremeValue, Occurrence, SnowExtremeKind};
use station_climate_stats::processors::{ParallelValidator, RecordNormalizer, StationPipeline};
use station_climate_stats::readers::ObservationReader;
use station_climate_stats::writers::{ReportFormat, ReportWriter};
use station_climate_stats::{AnalysisConfig, ProcessingError};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const STATION: u32 = 11816;

const OBSERVATIONS: &str = "\
IND\tDatum\tTmax\tTmin\tTavg\tR\tCSP
11816\t01.10.2014\t12,5\t3,1\t7,8\t0,0\t995
11816\t15.12.2014\t-2,0\t-8,4\t-5,1\t2,3\t12
11816\t16.12.2014\t-3,1\t-9,0\t-6,0\t0,0\t15
11816\t17.12.2014\t1,0\t-4,2\t-1,5\t0,0\t995
11816\t10.07.2015\t38,2\t21,0\t29,5\t0,0\t
22222\t10.07.2015\t30,0\t18,5\t24,0\t11,4\t
22222\t11.07.2015\t29,4\t17,0\t23,1\t0,0\t
";

fn observation_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(OBSERVATIONS.as_bytes())
        .expect("Failed to write observations");
    file
}

fn load_records(file: &NamedTempFile) -> Vec<DailyRecord> {
    let rows = ObservationReader::new().read_file(file.path()).unwrap();
    let (records, report) = RecordNormalizer::new().normalize(&rows).unwrap();
    assert_eq!(report.total_rows, 7);
    assert_eq!(report.invalid_dates, 0);
    records
}

fn date(d: u32, m: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_station_report_from_file() {
    let file = observation_file();
    let records = load_records(&file);

    let report = StationPipeline::new(AnalysisConfig::default())
        .run(&records, STATION)
        .unwrap();

    let months: Vec<(i32, u32)> = report.monthly.iter().map(|m| (m.year, m.month)).collect();
    assert_eq!(months, vec![(2014, 10), (2014, 12), (2015, 7)]);

    let december = &report.monthly[1];
    assert_eq!(december.tmax_max, Some(1.0));
    assert_eq!(december.tmin_min, Some(-9.0));
    assert_eq!(december.snow_max, 15);
    assert_eq!(december.snow_count, 2);
    assert_eq!(december.snow_sum, 27);
    assert_eq!(december.tmax_days_below_0, 2);

    let years: Vec<i32> = report.yearly.iter().map(|y| y.year).collect();
    assert_eq!(years, vec![2014, 2015]);

    let historical = &report.historical;
    assert_eq!(historical.temp_max.value, Some(ExtremeValue::Decimal(38.2)));
    assert_eq!(
        historical.temp_max.occurrence,
        Some(Occurrence::Date(date(10, 7, 2015)))
    );
    assert_eq!(historical.temp_max.occurrence.unwrap().to_string(), "10.07.2015");

    assert_eq!(report.seasons.len(), 1);
    let season = &report.seasons[0];
    assert_eq!(season.period.to_string(), "2014/2015");
    assert_eq!(season.snow_days, 2);
    assert_eq!(season.max_depth, 15);
    assert_eq!(season.longest_run.length, 2);
    assert_eq!(season.first_day, Some(date(15, 12, 2014)));
    assert_eq!(season.last_day, Some(date(16, 12, 2014)));
    assert_eq!(season.total_days, Some(2));
    assert_eq!(season.ratio_days, Some(100.0));

    let highest = report
        .snow_extremes
        .get(SnowExtremeKind::HighestDepth)
        .expect("highest depth entry");
    assert_eq!(highest.value, Some(ExtremeValue::Integer(15)));
    assert_eq!(
        highest.occurrence,
        Some(Occurrence::Date(date(16, 12, 2014)))
    );
}

#[test]
fn test_unknown_station_is_reported() {
    let file = observation_file();
    let records = load_records(&file);

    let result = StationPipeline::new(AnalysisConfig::default()).run(&records, 99);
    assert!(matches!(
        result,
        Err(ProcessingError::NoDataForStation { station_id: 99 })
    ));
}

#[test]
fn test_text_and_json_reports() {
    let file = observation_file();
    let records = load_records(&file);
    let report = StationPipeline::new(AnalysisConfig::default())
        .run(&records, STATION)
        .unwrap();

    let text = ReportWriter::new(Catalog::default()).render_text(&report);
    assert!(text.contains("Historical extremes"));
    assert!(text.contains("38.2"));
    assert!(text.contains("10.07.2015"));
    assert!(text.contains("2014/2015"));
    assert!(text.contains("December"));

    let mut out = Vec::new();
    ReportWriter::new(Catalog::default())
        .with_format(ReportFormat::Json)
        .write(&report, &mut out)
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["station_id"], STATION);
    assert_eq!(json["historical"]["temp_max"]["value"], 38.2);
    assert_eq!(json["monthly"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_every_station_is_validated() {
    let file = observation_file();
    let records = load_records(&file);

    let coverage = ParallelValidator::new(2).validate(&records, None).unwrap();
    let summary: Vec<(u32, usize, usize)> = coverage
        .iter()
        .map(|c| (c.station_id, c.days, c.months))
        .collect();
    assert_eq!(summary, vec![(11816, 5, 3), (22222, 2, 1)]);

    assert_eq!(coverage[0].first_date, date(1, 10, 2014));
    assert_eq!(coverage[0].last_date, date(10, 7, 2015));
    assert_eq!(coverage[0].snow_days, 2);
}

#[test]
fn test_report_command_writes_json_file() {
    let file = observation_file();
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("reports").join("11816.json");

    let cli = Cli::try_parse_from([
        "snowstats",
        "report",
        "--input",
        file.path().to_str().unwrap(),
        "--station",
        "11816",
        "--mode",
        "winter",
        "--format",
        "json",
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap();
    run(cli).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["season_mode"], "winter");
    assert_eq!(json["seasons"][0]["period"], "2014/2015");
}

#[test]
fn test_report_command_needs_a_station() {
    let file = observation_file();
    let cli = Cli::try_parse_from([
        "snowstats",
        "report",
        "--input",
        file.path().to_str().unwrap(),
    ])
    .unwrap();

    assert!(matches!(run(cli), Err(ProcessingError::InvalidFormat(_))));
}

#[test]
fn test_report_command_with_custom_delimiter() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(OBSERVATIONS.replace('\t', ";").as_bytes())
        .expect("Failed to write observations");
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("11816.json");

    let cli = Cli::try_parse_from([
        "snowstats",
        "report",
        "--input",
        file.path().to_str().unwrap(),
        "--station",
        "11816",
        "--format",
        "json",
        "--output",
        output.to_str().unwrap(),
        "--delimiter",
        ";",
    ])
    .unwrap();
    run(cli).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["historical"]["temp_max"]["value"], 38.2);
}

#[test]
fn test_non_ascii_delimiter_is_rejected() {
    let file = observation_file();
    let cli = Cli::try_parse_from([
        "snowstats",
        "validate",
        "--input",
        file.path().to_str().unwrap(),
        "--delimiter",
        "§",
    ])
    .unwrap();

    assert!(matches!(run(cli), Err(ProcessingError::InvalidFormat(_))));
}
