//! Plugin settings and their persisted form.

use serde::{Deserialize, Serialize};

/// User-facing configuration.
///
/// Persisted with camelCase keys so the stored blob stays compatible with
/// data written by host-side settings UIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Whether derived display names keep the file name's extension.
    pub include_file_extension: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            include_file_extension: false,
        }
    }
}

impl Settings {
    /// Merge a partial persisted blob over the defaults.
    ///
    /// Missing keys fall back to their default values; an unreadable blob is
    /// discarded entirely (with a diagnostic) rather than aborting startup.
    pub fn from_partial(data: Option<serde_json::Value>) -> Self {
        match data {
            None => Self::default(),
            Some(value) => serde_json::from_value(value).unwrap_or_else(|err| {
                tracing::debug!(error = %err, "stored settings unreadable, using defaults");
                Self::default()
            }),
        }
    }

    /// Serialized form handed to the host's settings persistence.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.include_file_extension);
    }

    #[test]
    fn test_from_partial_merges_over_defaults() {
        let settings = Settings::from_partial(Some(json!({ "includeFileExtension": true })));
        assert!(settings.include_file_extension);

        // Empty object keeps defaults
        let settings = Settings::from_partial(Some(json!({})));
        assert!(!settings.include_file_extension);

        // No stored data at all
        let settings = Settings::from_partial(None);
        assert!(!settings.include_file_extension);
    }

    #[test]
    fn test_from_partial_malformed_falls_back() {
        let settings = Settings::from_partial(Some(json!("not an object")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            include_file_extension: true,
        };
        let value = settings.to_value();
        assert_eq!(value, json!({ "includeFileExtension": true }));
        assert_eq!(Settings::from_partial(Some(value)), settings);
    }
}
