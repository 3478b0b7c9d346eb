use crate::cli::args::{Cli, Commands};
use crate::config::AnalysisConfig;
use crate::error::{ProcessingError, Result};
use crate::models::{Catalog, Language, SeasonMode, SeasonSelector};
use crate::processors::{ParallelValidator, RecordNormalizer, StationPipeline};
use crate::readers::ObservationReader;
use crate::utils::progress::ProgressReporter;
use crate::writers::{ReportFormat, ReportWriter};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub fn run(cli: Cli) -> Result<()> {
    setup_logging(cli.verbose);
    let reader = observation_reader(cli.delimiter)?;

    match cli.command {
        Commands::Report {
            input,
            station,
            mode,
            threshold,
            selector,
            language,
            format,
            output,
            config,
        } => {
            let overrides = ReportOverrides {
                station,
                mode,
                threshold,
                selector,
                language,
            };
            let config = load_configuration(config.as_deref(), &overrides)?;
            let station_id = overrides.station.or(config.station_id).ok_or_else(|| {
                ProcessingError::InvalidFormat(
                    "No station given; use --station or set station_id in the configuration"
                        .to_string(),
                )
            })?;
            let format: ReportFormat = format.parse()?;

            run_report(&reader, &input, station_id, config, format, output)
        }

        Commands::Validate { input, max_workers } => run_validate(&reader, &input, max_workers),
    }
}

/// Command-line values that take precedence over the configuration.
struct ReportOverrides {
    station: Option<u32>,
    mode: Option<String>,
    threshold: Option<i32>,
    selector: Option<String>,
    language: Option<String>,
}

fn observation_reader(delimiter: char) -> Result<ObservationReader> {
    let byte = u8::try_from(delimiter).ok().filter(u8::is_ascii).ok_or_else(|| {
        ProcessingError::InvalidFormat(format!(
            "Delimiter must be a single ASCII character, got '{}'",
            delimiter
        ))
    })?;
    Ok(ObservationReader::with_delimiter(byte))
}

fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("station_climate_stats={}", log_level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

fn load_configuration(config_file: Option<&Path>, overrides: &ReportOverrides) -> Result<AnalysisConfig> {
    if let Some(path) = config_file {
        info!("Using config file: {}", path.display());
    }
    let mut config = AnalysisConfig::load_layered(config_file)?;

    if let Some(mode) = &overrides.mode {
        config = config.with_season_mode(parse_option::<SeasonMode>(mode)?);
    }
    if let Some(threshold) = overrides.threshold {
        config = config.with_snow_threshold(threshold);
    }
    if let Some(selector) = &overrides.selector {
        config = config.with_selector(parse_option::<SeasonSelector>(selector)?);
    }
    if let Some(language) = &overrides.language {
        config = config.with_language(parse_option::<Language>(language)?);
    }

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

fn parse_option<T>(value: &str) -> Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    value.parse().map_err(ProcessingError::InvalidFormat)
}

fn run_report(
    reader: &ObservationReader,
    input: &Path,
    station_id: u32,
    config: AnalysisConfig,
    format: ReportFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    info!("Reading observations from {}", input.display());
    let rows = reader.read_file(input)?;
    let (records, _) = RecordNormalizer::new().normalize(&rows)?;

    let writer = ReportWriter::new(Catalog::new(config.language)).with_format(format);
    let report = StationPipeline::new(config).run(&records, station_id)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            writer.write_to_file(&report, &path)?;
            info!("Report written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writer.write(&report, &mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}

fn run_validate(reader: &ObservationReader, input: &Path, max_workers: usize) -> Result<()> {
    info!("Validating {} with {} workers", input.display(), max_workers);

    let rows = reader.read_file(input)?;
    let (records, normalization) = RecordNormalizer::new().normalize(&rows)?;

    let progress = ProgressReporter::new(
        normalization.station_rows.len() as u64,
        "Aggregating stations...",
        false,
    );
    let coverage = ParallelValidator::new(max_workers).validate(&records, Some(&progress))?;

    println!("\n{}", normalization.summary());
    for station in &coverage {
        println!("{}", station.summary());
    }

    if coverage.is_empty() {
        println!("No station data found");
    } else {
        println!("Validation complete - {} station(s) aggregated", coverage.len());
    }
    Ok(())
}
