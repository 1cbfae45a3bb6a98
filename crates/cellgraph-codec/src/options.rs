//! Per-operation options consulted during decode.

use std::collections::HashMap;

/// Option key: when set to `"true"` (case-insensitive), an edge decoded from
/// a reversed directed row keeps the stored endpoint order instead of being
/// swapped back to canonical source/destination order. This lets callers of
/// a seed-as-destination index lookup see which endpoint matched their seed.
pub const RETURN_MATCHED_SEEDS_AS_EDGE_SOURCE: &str =
    "operation.return_matched_seeds_as_edge_source";

/// A string-keyed bag of per-operation options.
///
/// # Example
///
/// ```
/// use cellgraph_codec::options::{OperationOptions, RETURN_MATCHED_SEEDS_AS_EDGE_SOURCE};
///
/// let options = OperationOptions::new().with(RETURN_MATCHED_SEEDS_AS_EDGE_SOURCE, "TRUE");
/// assert!(options.matched_seeds_as_edge_source());
/// assert!(!OperationOptions::new().matched_seeds_as_edge_source());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OperationOptions {
    options: HashMap<String, String>,
}

impl OperationOptions {
    /// Create an empty option bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, consuming and returning the bag.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set an option.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.options.insert(key.into(), value.into());
    }

    /// Get an option value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Whether [`RETURN_MATCHED_SEEDS_AS_EDGE_SOURCE`] is set to `"true"`,
    /// compared ASCII case-insensitively.
    #[must_use]
    pub fn matched_seeds_as_edge_source(&self) -> bool {
        self.get(RETURN_MATCHED_SEEDS_AS_EDGE_SOURCE)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_option_is_false() {
        assert!(!OperationOptions::new().matched_seeds_as_edge_source());
    }

    #[test]
    fn option_is_case_insensitive() {
        for value in ["true", "TRUE", "True"] {
            let options = OperationOptions::new().with(RETURN_MATCHED_SEEDS_AS_EDGE_SOURCE, value);
            assert!(options.matched_seeds_as_edge_source(), "value {value:?}");
        }
    }

    #[test]
    fn other_values_are_false() {
        for value in ["false", "1", "yes", ""] {
            let options = OperationOptions::new().with(RETURN_MATCHED_SEEDS_AS_EDGE_SOURCE, value);
            assert!(!options.matched_seeds_as_edge_source(), "value {value:?}");
        }
    }

    #[test]
    fn get_and_set() {
        let mut options = OperationOptions::new();
        options.set("k", "v");
        assert_eq!(options.get("k"), Some("v"));
        assert_eq!(options.get("missing"), None);
    }
}
