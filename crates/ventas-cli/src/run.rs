//! Batch cleaning run: load, transform, persist, report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info};

use ventas_ingest::{read_csv, write_csv};
use ventas_transform::{BatchOptions, StepOutcome, run_batch_pipeline};

/// Paths and column selection for one batch run.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub filter_column: String,
    pub key_column: String,
    pub upper_column: String,
}

/// Outcome of a completed batch run.
#[derive(Debug)]
pub struct CleanReport {
    pub input_rows: usize,
    pub output_rows: usize,
    pub steps: Vec<StepOutcome>,
    pub output: PathBuf,
}

/// Run the batch pipeline end to end.
///
/// A missing input file is logged and then propagated to the caller: the
/// batch context surfaces load failures instead of swallowing them, unlike
/// the event handler.
pub fn run_clean(options: &CleanOptions) -> Result<CleanReport> {
    let df = match read_csv(&options.input) {
        Ok(df) => df,
        Err(failure) => {
            error!(
                input = %options.input.display(),
                error = %failure,
                "failed to load input"
            );
            return Err(failure).with_context(|| format!("load {}", options.input.display()));
        }
    };
    let input_rows = df.height();

    let batch = BatchOptions {
        filter_column: options.filter_column.clone(),
        key_column: options.key_column.clone(),
        upper_column: options.upper_column.clone(),
    };
    let mut run = run_batch_pipeline(df, &batch)?;
    let output_rows = run.data.height();

    write_csv(&mut run.data, &options.output)
        .with_context(|| format!("write {}", options.output.display()))?;
    info!(
        input = %options.input.display(),
        output = %options.output.display(),
        input_rows,
        output_rows,
        "clean complete"
    );

    Ok(CleanReport {
        input_rows,
        output_rows,
        steps: run.steps,
        output: options.output.clone(),
    })
}
