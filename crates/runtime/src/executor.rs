use crate::{error::PipelineError, summary};
use connectors::{
    file::{
        csv::{sink, source::CsvDataSource},
        json,
    },
    sqlite::source::SqliteDataSource,
};
use model::records::batch::RecordBatch;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};
use tracing::info;
use transform::{
    pipeline::{self, TransformOutput},
    report::QualityReport,
};

/// Which extractor feeds the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Sqlite,
    Csv,
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub source: SourceKind,
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Process only the first N extracted rows (quick-test mode).
    pub limit: Option<usize>,
}

/// Row counts and timing for one completed run.
#[derive(Debug, Clone)]
pub struct RunStats {
    pub rows_read: u64,
    pub rows_retained: u64,
    pub rows_dropped: u64,
    pub elapsed_ms: u128,
    pub output_dir: PathBuf,
}

/// Runs the full pipeline: extract, transform, load. Stages execute
/// strictly in sequence and a failure in any of them leaves the output
/// directory without new artifacts.
pub fn run(options: &RunOptions) -> Result<RunStats, PipelineError> {
    let started = Instant::now();

    info!("Extracting sales data from {}", options.input.display());
    let batch = extract(options)?;

    info!("Transforming {} rows", batch.len());
    let output = pipeline::run(&batch)?;

    info!("Loading output to {}", options.output_dir.display());
    load(&output, &options.output_dir)?;

    Ok(RunStats {
        rows_read: output.report.rows_read,
        rows_retained: output.report.rows_retained,
        rows_dropped: output.report.dropped_total(),
        elapsed_ms: started.elapsed().as_millis(),
        output_dir: options.output_dir.clone(),
    })
}

/// Extract and transform only; nothing is written.
pub fn quality(options: &RunOptions) -> Result<QualityReport, PipelineError> {
    let batch = extract(options)?;
    let output = pipeline::run(&batch)?;
    Ok(output.report)
}

fn extract(options: &RunOptions) -> Result<RecordBatch, PipelineError> {
    match options.source {
        SourceKind::Sqlite => {
            Ok(SqliteDataSource::open(&options.input)?.extract_sales(options.limit)?)
        }
        SourceKind::Csv => Ok(CsvDataSource::new(&options.input)?.read(options.limit)?),
    }
}

/// Writes everything into a staging directory first and renames the files
/// into place only once all of them are complete, so a failed load leaves
/// no partial artifacts behind.
fn load(output: &TransformOutput, output_dir: &Path) -> Result<(), PipelineError> {
    fs::create_dir_all(output_dir)?;
    let staging = output_dir.join(".staging");
    if staging.exists() {
        fs::remove_dir_all(&staging)?;
    }
    fs::create_dir_all(&staging)?;

    sink::write_enriched(staging.join("sales_enriched.csv"), &output.rows)?;
    json::write_json(staging.join("quality_report.json"), &output.report)?;

    for table in [
        summary::revenue_by_month(&output.rows),
        summary::revenue_by_category(&output.rows),
        summary::delivery_performance(&output.rows),
    ] {
        sink::write_table(
            staging.join(format!("{}.csv", table.name)),
            &table.columns,
            &table.rows,
        )?;
    }

    for entry in fs::read_dir(&staging)? {
        let entry = entry?;
        fs::rename(entry.path(), output_dir.join(entry.file_name()))?;
    }
    fs::remove_dir_all(&staging)?;
    Ok(())
}
