//! Failure taxonomy for the cleaning pipeline.
//!
//! Transforms and the key mapper fail fast through these variants; the event
//! handler is the single place where they are converted into an external
//! response instead of propagating further.

use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input location does not exist.
    #[error("source not found: {0}")]
    SourceNotFound(String),

    /// A transform required a column that is not present in the table.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// A column held values of the wrong type for the requested transform.
    #[error("column '{column}' is not {expected}")]
    MalformedValue {
        column: String,
        expected: &'static str,
    },

    /// A numeric column whose minimum equals its maximum cannot be scaled.
    #[error("column '{0}' has no value range to scale (min == max)")]
    DegenerateRange(String),

    /// Two column names became identical after normalization.
    #[error("column name '{0}' collides after normalization")]
    NameCollision(String),

    /// The destination object could not be written.
    #[error("failed to write {location}: {reason}")]
    DestinationWriteFailure { location: String, reason: String },

    /// The trigger payload was missing required fields.
    #[error("malformed trigger event: {0}")]
    InvalidEvent(String),

    #[error(transparent)]
    Frame(#[from] PolarsError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
