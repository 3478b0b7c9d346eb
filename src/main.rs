use clap::Parser;
use station_climate_stats::cli::{run, Cli};
use station_climate_stats::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
