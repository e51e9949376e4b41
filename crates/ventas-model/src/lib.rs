//! Shared types for the ventas cleaning pipeline.
//!
//! - **error**: the pipeline failure taxonomy
//! - **location**: addresses of objects in an external storage namespace

pub mod error;
pub mod location;

pub use error::{PipelineError, Result};
pub use location::ObjectLocation;
