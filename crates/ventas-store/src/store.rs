//! Object store interface and local implementations.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::debug;

use ventas_model::{ObjectLocation, PipelineError, Result};

/// Synchronous object storage boundary.
///
/// `get` fails with [`PipelineError::SourceNotFound`] for absent keys;
/// `put` overwrites unconditionally. Both are complete-or-fail calls with no
/// partial reads or writes.
pub trait ObjectStore {
    fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;
    fn put(&self, bucket: &str, key: &str, bytes: &[u8], content_type: &str) -> Result<()>;
}

impl<S: ObjectStore + ?Sized> ObjectStore for &S {
    fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        (**self).get(bucket, key)
    }

    fn put(&self, bucket: &str, key: &str, bytes: &[u8], content_type: &str) -> Result<()> {
        (**self).put(bucket, key, bytes, content_type)
    }
}

/// In-memory store for tests and single-process runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<BTreeMap<(String, String), Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.lock().map(|objects| objects.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ObjectStore for MemoryStore {
    fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let objects = self
            .objects
            .lock()
            .map_err(|_| PipelineError::Io(io::Error::other("store lock poisoned")))?;
        objects
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| {
                PipelineError::SourceNotFound(ObjectLocation::new(bucket, key).to_string())
            })
    }

    fn put(&self, bucket: &str, key: &str, bytes: &[u8], content_type: &str) -> Result<()> {
        let mut objects = self
            .objects
            .lock()
            .map_err(|_| PipelineError::Io(io::Error::other("store lock poisoned")))?;
        objects.insert((bucket.to_string(), key.to_string()), bytes.to_vec());
        debug!(
            location = %ObjectLocation::new(bucket, key),
            content_type,
            size = bytes.len(),
            "object stored"
        );
        Ok(())
    }
}

/// Filesystem-backed store: one directory per bucket under a root.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn object_path(&self, bucket: &str, key: &str) -> PathBuf {
        self.root.join(bucket).join(key)
    }
}

impl ObjectStore for FsStore {
    fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let path = self.object_path(bucket, key);
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Err(
                PipelineError::SourceNotFound(ObjectLocation::new(bucket, key).to_string()),
            ),
            Err(error) => Err(PipelineError::Io(error)),
        }
    }

    fn put(&self, bucket: &str, key: &str, bytes: &[u8], _content_type: &str) -> Result<()> {
        let path = self.object_path(bucket, key);
        let write = || -> io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, bytes)
        };
        write().map_err(|error| PipelineError::DestinationWriteFailure {
            location: ObjectLocation::new(bucket, key).to_string(),
            reason: error.to_string(),
        })?;
        debug!(path = %path.display(), size = bytes.len(), "object stored");
        Ok(())
    }
}
