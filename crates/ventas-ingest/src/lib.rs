//! CSV load and persist primitives for the ventas pipeline.
//!
//! Tables are read and written whole; there is no streaming path. Both a
//! filesystem surface (batch CLI) and a byte-buffer surface (event handler,
//! which moves CSV payloads through the object store) are provided.

pub mod csv;

pub use csv::{read_csv, read_csv_bytes, write_csv, write_csv_bytes};
