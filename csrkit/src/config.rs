//! Builder configuration
//!
//! Capacity hints for the growable buffers behind a builder. Hints only
//! affect allocation; they never bound what a builder accepts.

use csrkit_core::format::constants::DEFAULT_INITIAL_CAPACITY;

/// Configuration for a compressed-row builder
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuilderConfig {
    /// Expected number of stored entries
    pub initial_capacity: usize,
    /// Expected number of rows, if known separately from the entry count
    pub expected_rows: Option<usize>,
}

impl BuilderConfig {
    /// Create config with an entry capacity hint
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            expected_rows: None,
        }
    }

    /// Set the entry capacity hint
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the expected row count
    pub fn with_expected_rows(mut self, expected_rows: usize) -> Self {
        self.expected_rows = Some(expected_rows);
        self
    }

    /// Capacity for the column index and value buffers
    pub fn entry_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Capacity for the row offset buffer
    ///
    /// Without an explicit row count the entry hint is used, which is an
    /// upper bound when every row holds at least one entry.
    pub fn offset_capacity(&self) -> usize {
        self.expected_rows
            .unwrap_or(self.initial_capacity)
            .saturating_add(1)
    }

    /// Parse a configuration from JSON
    ///
    /// Missing fields fall back to their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize this configuration as JSON
    #[cfg(feature = "serde")]
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            expected_rows: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuilderConfig::default();
        assert_eq!(config.entry_capacity(), DEFAULT_INITIAL_CAPACITY);
        assert_eq!(config.offset_capacity(), DEFAULT_INITIAL_CAPACITY + 1);
    }

    #[test]
    fn test_chained_setters() {
        let config = BuilderConfig::with_capacity(16).with_expected_rows(4);
        assert_eq!(config.entry_capacity(), 16);
        assert_eq!(config.offset_capacity(), 5);

        let config = config.with_initial_capacity(32);
        assert_eq!(config.entry_capacity(), 32);
        assert_eq!(config.expected_rows, Some(4));
    }

    #[test]
    fn test_offset_capacity_saturates() {
        let config = BuilderConfig::with_capacity(usize::MAX);
        assert_eq!(config.offset_capacity(), usize::MAX);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let config = BuilderConfig::from_json_str(r#"{"initial_capacity": 10}"#).unwrap();
        assert_eq!(config, BuilderConfig::with_capacity(10));

        let config = BuilderConfig::from_json_str(r#"{"expected_rows": 3}"#).unwrap();
        assert_eq!(config.entry_capacity(), DEFAULT_INITIAL_CAPACITY);
        assert_eq!(config.expected_rows, Some(3));

        let json = config.to_json_string().unwrap();
        assert_eq!(BuilderConfig::from_json_str(&json).unwrap(), config);

        assert!(BuilderConfig::from_json_str(r#""oops""#).is_err());
        assert!(BuilderConfig::from_json_str(r#"{"initial_capacity": -1}"#).is_err());
    }
}
