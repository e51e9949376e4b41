//! Cleaning transforms for tabular sales data.
//!
//! This crate provides the transform library and its orchestration:
//!
//! - **transforms**: stateless column-level operations over a DataFrame
//! - **pipeline**: the fixed-order event and batch pipeline variants
//! - **data_utils**: DataFrame value extraction helpers

pub mod data_utils;
pub mod pipeline;
pub mod transforms;

pub use pipeline::{
    BatchOptions, PipelineRun, StepOutcome, run_batch_pipeline, run_event_pipeline,
};
pub use transforms::{
    dedupe_by_key, drop_incomplete_rows, filter_positive, normalize_column_names,
    normalize_to_percentage, uppercase_text,
};
