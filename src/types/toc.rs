//! Table-of-contents model types.

use serde::{Deserialize, Serialize};

/// One entry of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocItem {
    /// Anchor id, unique only as far as the source document makes it so.
    pub id: String,
    /// Rendered heading text, verbatim.
    pub text: String,
    /// Heading level, 1 through 6.
    pub level: u8,
}

/// Widget options, deserialized from the JS options object.
///
/// Field names follow the JS side (`maxLevel`, `showNumbers`, ...); every
/// field is optional there and defaults here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TocConfig {
    /// Deepest heading level included in the outline.
    pub max_level: u8,
    /// Render flat sequential numbering ("1.", "2.", ...).
    pub show_numbers: bool,
    /// Render the collapse toggle in the header.
    pub collapsible: bool,
    /// Header title.
    pub title: String,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            max_level: 3,
            show_numbers: true,
            collapsible: true,
            title: "Table of Contents".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_from_empty_object() {
        let config: TocConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TocConfig::default());
        assert_eq!(config.max_level, 3);
        assert!(config.show_numbers);
        assert!(config.collapsible);
        assert_eq!(config.title, "Table of Contents");
    }

    #[test]
    fn test_config_camel_case_overrides() {
        let config: TocConfig =
            serde_json::from_str(r#"{"maxLevel": 2, "showNumbers": false, "title": "On this page"}"#)
                .unwrap();
        assert_eq!(config.max_level, 2);
        assert!(!config.show_numbers);
        assert!(config.collapsible);
        assert_eq!(config.title, "On this page");
    }
}
