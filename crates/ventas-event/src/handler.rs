//! Error-tolerant handler for upload events.
//!
//! The handler is the single recovery boundary of the pipeline: every
//! failure inside one invocation is logged and converted into a structured
//! failure response; none escapes to the trigger mechanism. There are no
//! retries and no partial-result persistence on failure; redelivering the
//! trigger reprocesses the file and overwrites the destination.

use tracing::{error, info, info_span};

use ventas_ingest::{read_csv_bytes, write_csv_bytes};
use ventas_model::{ObjectLocation, Result};
use ventas_store::{ObjectStore, OutputTarget, derive_output_key};
use ventas_transform::run_event_pipeline;

use crate::payload::UploadEvent;

/// Content type attached to every processed object.
const OUTPUT_CONTENT_TYPE: &str = "text/csv";

/// Column the event pipeline requires to be positive after cleaning.
pub const DEFAULT_FILTER_COLUMN: &str = "precio_unitario";

/// Structured outcome returned to the trigger mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: u16,
    pub body: String,
}

/// Processes one uploaded table per invocation.
///
/// All collaborators are injected at construction; the handler holds no
/// process-global state, so invocations are independent.
pub struct EventHandler<S> {
    store: S,
    target: OutputTarget,
    filter_column: String,
}

impl<S: ObjectStore> EventHandler<S> {
    pub fn new(store: S, target: OutputTarget) -> Self {
        Self {
            store,
            target,
            filter_column: DEFAULT_FILTER_COLUMN.to_string(),
        }
    }

    /// Override the required filter column.
    #[must_use]
    pub fn with_filter_column(mut self, column: impl Into<String>) -> Self {
        self.filter_column = column.into();
        self
    }

    /// Handle one upload event: Received, Processed, Reported.
    ///
    /// Always returns a response; failures become a 500 with the error text.
    pub fn handle(&self, event: &UploadEvent) -> HandlerResponse {
        match self.process(event) {
            Ok(destination) => {
                info!(destination = %destination, "pipeline complete");
                HandlerResponse {
                    status: 200,
                    body: format!("OK -> {destination}"),
                }
            }
            Err(failure) => {
                error!(error = %failure, "pipeline failed");
                HandlerResponse {
                    status: 500,
                    body: format!("Error: {failure}"),
                }
            }
        }
    }

    fn process(&self, event: &UploadEvent) -> Result<ObjectLocation> {
        let source = event.source_location()?;
        let span = info_span!("handle_upload", source = %source);
        let _guard = span.enter();

        let bytes = self.store.get(&source.bucket, &source.key)?;
        let df = read_csv_bytes(&bytes)?;
        info!(source = %source, rows = df.height(), "table loaded");

        let mut run = run_event_pipeline(df, &self.filter_column)?;

        let output_key = derive_output_key(&source.key, &self.target.prefix);
        let destination = ObjectLocation::new(self.target.bucket.clone(), output_key);
        let output = write_csv_bytes(&mut run.data)?;
        self.store
            .put(&destination.bucket, &destination.key, &output, OUTPUT_CONTENT_TYPE)?;
        info!(destination = %destination, rows = run.data.height(), "table persisted");
        Ok(destination)
    }
}
