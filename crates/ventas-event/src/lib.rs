//! Event-driven entry point: one upload notification, one cleaned object.
//!
//! - **payload**: the upload trigger payload model and key decoding
//! - **handler**: the error-tolerant handler wrapping the event pipeline

pub mod handler;
pub mod payload;

pub use handler::{DEFAULT_FILTER_COLUMN, EventHandler, HandlerResponse};
pub use payload::{UploadEvent, decode_key};
