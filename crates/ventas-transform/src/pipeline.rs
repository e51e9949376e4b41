//! Fixed-order orchestration of the cleaning transforms.
//!
//! Two variants exist: the event variant run for every upload trigger and
//! the batch variant run by the CLI. The batch-only steps are guarded: a
//! missing column skips the step with a notice instead of failing the run,
//! because those downstream columns are optional in source exports.

use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use ventas_model::Result;

use crate::transforms::{
    dedupe_by_key, drop_incomplete_rows, filter_positive, normalize_column_names,
    normalize_to_percentage, uppercase_text,
};

/// Outcome of one orchestrated step.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// Step name as reported in logs and summaries.
    pub name: &'static str,
    /// Row count after the step ran (or was skipped).
    pub rows: usize,
    /// True when a guarded step found its column absent and did nothing.
    pub skipped: bool,
}

/// A transformed frame together with its per-step report.
#[derive(Debug)]
pub struct PipelineRun {
    pub data: DataFrame,
    pub steps: Vec<StepOutcome>,
}

/// Column selection for the batch pipeline.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Column required to hold positive values; also the normalization target.
    pub filter_column: String,
    /// Dedupe key column; skipped when absent.
    pub key_column: String,
    /// Text column to uppercase; skipped when absent.
    pub upper_column: String,
}

/// Run the event-trigger pipeline: name normalization, incomplete-row
/// removal, and the positive-value filter on `filter_column`.
///
/// The filter column is required; its absence fails the run.
pub fn run_event_pipeline(df: DataFrame, filter_column: &str) -> Result<PipelineRun> {
    let span = info_span!("event_pipeline", filter_column = %filter_column);
    let _guard = span.enter();
    let start = Instant::now();
    let input_rows = df.height();

    let mut steps = Vec::new();
    let df = apply(df, &mut steps, "normalize_column_names", normalize_column_names)?;
    let df = apply(df, &mut steps, "drop_incomplete_rows", drop_incomplete_rows)?;
    let df = apply(df, &mut steps, "filter_positive", |frame| {
        filter_positive(frame, filter_column)
    })?;

    info!(
        input_rows,
        output_rows = df.height(),
        duration_ms = start.elapsed().as_millis(),
        "event pipeline complete"
    );
    Ok(PipelineRun { data: df, steps })
}

/// Run the batch pipeline: the event steps plus dedupe, 0-100 normalization,
/// and text uppercasing, each guarded on its column being present after the
/// earlier steps.
pub fn run_batch_pipeline(df: DataFrame, options: &BatchOptions) -> Result<PipelineRun> {
    let span = info_span!("batch_pipeline", filter_column = %options.filter_column);
    let _guard = span.enter();
    let start = Instant::now();
    let input_rows = df.height();

    let mut steps = Vec::new();
    let df = apply(df, &mut steps, "normalize_column_names", normalize_column_names)?;
    let df = apply(df, &mut steps, "drop_incomplete_rows", drop_incomplete_rows)?;
    let df = apply(df, &mut steps, "filter_positive", |frame| {
        filter_positive(frame, &options.filter_column)
    })?;
    let df = apply_guarded(df, &mut steps, "dedupe_by_key", &options.key_column, |frame| {
        dedupe_by_key(frame, &options.key_column)
    })?;
    let df = apply_guarded(
        df,
        &mut steps,
        "normalize_to_percentage",
        &options.filter_column,
        |frame| normalize_to_percentage(frame, &options.filter_column),
    )?;
    let df = apply_guarded(df, &mut steps, "uppercase_text", &options.upper_column, |frame| {
        uppercase_text(frame, &options.upper_column)
    })?;

    info!(
        input_rows,
        output_rows = df.height(),
        duration_ms = start.elapsed().as_millis(),
        "batch pipeline complete"
    );
    Ok(PipelineRun { data: df, steps })
}

fn apply(
    df: DataFrame,
    steps: &mut Vec<StepOutcome>,
    name: &'static str,
    transform: impl FnOnce(DataFrame) -> Result<DataFrame>,
) -> Result<DataFrame> {
    let start = Instant::now();
    let df = transform(df)?;
    debug!(
        step = name,
        rows = df.height(),
        duration_ms = start.elapsed().as_millis(),
        "step complete"
    );
    steps.push(StepOutcome {
        name,
        rows: df.height(),
        skipped: false,
    });
    Ok(df)
}

fn apply_guarded(
    df: DataFrame,
    steps: &mut Vec<StepOutcome>,
    name: &'static str,
    column: &str,
    transform: impl FnOnce(DataFrame) -> Result<DataFrame>,
) -> Result<DataFrame> {
    if !has_column(&df, column) {
        debug!(step = name, column = %column, "column absent, step skipped");
        steps.push(StepOutcome {
            name,
            rows: df.height(),
            skipped: true,
        });
        return Ok(df);
    }
    apply(df, steps, name, transform)
}

fn has_column(df: &DataFrame, column: &str) -> bool {
    df.get_column_names().iter().any(|name| name.as_str() == column)
}
