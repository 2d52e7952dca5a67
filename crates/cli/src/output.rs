use crate::error::CliError;
use runtime::executor::RunStats;
use serde::Serialize;

pub fn print_run_stats(stats: &RunStats) {
    println!("Pipeline completed");
    println!("-----------------------------");
    println!("{:<16} {}", "Rows read", stats.rows_read);
    println!("{:<16} {}", "Rows retained", stats.rows_retained);
    println!("{:<16} {}", "Rows dropped", stats.rows_dropped);
    println!("{:<16} {:.2}s", "Elapsed", stats.elapsed_ms as f64 / 1000.0);
    println!("{:<16} {}", "Output", stats.output_dir.display());
}

pub fn write_report<T: Serialize>(report: &T, path: &str) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn print_report<T: Serialize>(report: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
