//! Object storage boundary for the ventas pipeline.
//!
//! - **keys**: input-to-output key remapping
//! - **config**: output target (bucket + prefix) from the environment
//! - **store**: the `ObjectStore` interface with in-memory and filesystem
//!   implementations

pub mod config;
pub mod keys;
pub mod store;

pub use config::OutputTarget;
pub use keys::derive_output_key;
pub use store::{FsStore, MemoryStore, ObjectStore};
