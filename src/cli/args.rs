use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snowstats")]
#[command(about = "Temperature, precipitation and snow-cover statistics for weather stations")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        default_value_t = '\t',
        hide_default_value = true,
        help = "Field delimiter of the observation file [default: tab]"
    )]
    pub delimiter: char,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the full statistics report for one station
    Report {
        #[arg(short, long, help = "Tab-separated observation file")]
        input: PathBuf,

        #[arg(short, long, help = "Station id [default: from configuration]")]
        station: Option<u32>,

        #[arg(
            short,
            long,
            help = "Season partitioning: winter, extended or year [default: extended]"
        )]
        mode: Option<String>,

        #[arg(short, long, help = "Minimum snow depth in cm [default: 1]")]
        threshold: Option<i32>,

        #[arg(long, help = "Months of the frequency tables, e.g. whole-year, winter, cold-half")]
        selector: Option<String>,

        #[arg(long, help = "Label language: en or sk")]
        language: Option<String>,

        #[arg(short, long, default_value = "text", help = "Output format: text or json")]
        format: String,

        #[arg(short, long, help = "Write the report to a file instead of stdout")]
        output: Option<PathBuf>,

        #[arg(short, long, help = "TOML configuration file")]
        config: Option<PathBuf>,
    },

    /// Aggregate every station in a file and report coverage
    Validate {
        #[arg(short, long, help = "Tab-separated observation file")]
        input: PathBuf,

        #[arg(long, default_value_t = num_cpus::get())]
        max_workers: usize,
    },
}
