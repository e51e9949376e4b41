//! Output-target configuration.

use tracing::warn;

/// Default bucket for processed objects.
const DEFAULT_OUTPUT_BUCKET: &str = "ventas-pipeline-output";
/// Default key prefix for processed objects.
const DEFAULT_OUTPUT_PREFIX: &str = "processed/";

/// Where processed tables are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub bucket: String,
    pub prefix: String,
}

impl OutputTarget {
    /// Create a target, normalizing the prefix to end with a separator.
    ///
    /// A prefix without a trailing `/` would splice into the first path
    /// segment of every derived key, so it is repaired here once rather than
    /// re-checked on every mapping.
    pub fn new(bucket: impl Into<String>, prefix: impl Into<String>) -> Self {
        let bucket = bucket.into();
        let mut prefix = prefix.into();
        if !prefix.ends_with('/') {
            warn!(prefix = %prefix, "output prefix missing trailing separator, appending one");
            prefix.push('/');
        }
        Self { bucket, prefix }
    }

    /// Read the target from `OUTPUT_BUCKET` / `OUTPUT_PREFIX`, falling back
    /// to the defaults when unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`OutputTarget::from_env`], with the variable lookup injected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bucket = lookup("OUTPUT_BUCKET").unwrap_or_else(|| DEFAULT_OUTPUT_BUCKET.to_string());
        let prefix = lookup("OUTPUT_PREFIX").unwrap_or_else(|| DEFAULT_OUTPUT_PREFIX.to_string());
        Self::new(bucket, prefix)
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_BUCKET, DEFAULT_OUTPUT_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_trailing_separator_is_repaired() {
        let target = OutputTarget::new("bucket", "out");
        assert_eq!(target.prefix, "out/");

        let target = OutputTarget::new("bucket", "out/");
        assert_eq!(target.prefix, "out/");
    }

    #[test]
    fn lookup_misses_fall_back_to_defaults() {
        let target = OutputTarget::from_lookup(|_| None);
        assert_eq!(target.bucket, "ventas-pipeline-output");
        assert_eq!(target.prefix, "processed/");
    }

    #[test]
    fn lookup_hits_override_defaults() {
        let target = OutputTarget::from_lookup(|name| match name {
            "OUTPUT_BUCKET" => Some("clean".to_string()),
            "OUTPUT_PREFIX" => Some("done".to_string()),
            _ => None,
        });
        assert_eq!(target.bucket, "clean");
        assert_eq!(target.prefix, "done/");
    }
}
