use crate::{commands::Commands, error::CliError};
use clap::Parser;
use runtime::executor::{self, RunOptions, SourceKind};
use std::path::PathBuf;
use tracing::{Level, info};

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "northwind-sales",
    version = "0.1.0",
    about = "Northwind sales ETL pipeline"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            source,
            input,
            output_dir,
            limit,
        } => {
            let options = RunOptions {
                source: parse_source(&source)?,
                input: PathBuf::from(input),
                output_dir: PathBuf::from(output_dir),
                limit,
            };
            info!("Starting pipeline run from {}", options.input.display());
            let stats = executor::run(&options)?;
            output::print_run_stats(&stats);
        }
        Commands::Quality {
            source,
            input,
            output,
            limit,
        } => {
            let options = RunOptions {
                source: parse_source(&source)?,
                input: PathBuf::from(input),
                output_dir: PathBuf::new(),
                limit,
            };
            let report = executor::quality(&options)?;
            match output {
                Some(path) => output::write_report(&report, &path)?,
                None => output::print_report(&report)?,
            }
        }
        Commands::Schema => {
            let schema = model::schema::sales_input();
            output::print_report(&schema)?;
        }
    }

    Ok(())
}

fn parse_source(raw: &str) -> Result<SourceKind, CliError> {
    match raw.to_lowercase().as_str() {
        "sqlite" => Ok(SourceKind::Sqlite),
        "csv" => Ok(SourceKind::Csv),
        other => Err(CliError::InvalidSourceKind(other.to_string())),
    }
}
