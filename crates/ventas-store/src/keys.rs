//! Input-to-output key remapping.

/// Key segment that marks freshly uploaded objects.
const RAW_PREFIX: &str = "raw/";

/// Derive the destination key for a processed object.
///
/// Leading path separators are stripped from the input key. A key under
/// `raw/` has that first segment replaced with `output_prefix`; any other
/// key keeps its full path under `output_prefix`. The prefix is expected to
/// end with `/` — [`crate::OutputTarget`] normalizes that at configuration
/// time, so it is not re-checked here.
pub fn derive_output_key(input_key: &str, output_prefix: &str) -> String {
    let key = input_key.trim_start_matches('/');
    match key.strip_prefix(RAW_PREFIX) {
        Some(rest) => format!("{output_prefix}{rest}"),
        None => format!("{output_prefix}{key}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_prefix_is_replaced() {
        assert_eq!(
            derive_output_key("raw/2024/sales.csv", "processed/"),
            "processed/2024/sales.csv"
        );
    }

    #[test]
    fn other_keys_are_nested_under_the_prefix() {
        assert_eq!(
            derive_output_key("sales.csv", "processed/"),
            "processed/sales.csv"
        );
        assert_eq!(
            derive_output_key("exports/sales.csv", "processed/"),
            "processed/exports/sales.csv"
        );
    }

    #[test]
    fn leading_separators_are_stripped() {
        assert_eq!(
            derive_output_key("/raw/a.csv", "processed/"),
            "processed/a.csv"
        );
    }

    #[test]
    fn only_the_first_raw_segment_is_replaced() {
        assert_eq!(
            derive_output_key("raw/raw/a.csv", "processed/"),
            "processed/raw/a.csv"
        );
    }
}
