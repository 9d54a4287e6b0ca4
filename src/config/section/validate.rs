//! `[validate]` section configuration.
//!
//! Settings for the `docsite validate` command, which checks the navigation
//! topology against the markdown sources on disk.
//!
//! # Example
//!
//! ```toml
//! [validate.links]
//! enable = true    # Check internal links resolve to a markdown page
//! level = "error"  # Failure level: error | warn
//!
//! [validate.prefixes]
//! enable = true    # Check sidebar prefixes match content directories
//! level = "error"  # Failure level: error | warn
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Main ValidateConfig
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// Internal link target validation.
    pub links: LinksValidateConfig,

    /// Sidebar prefix directory validation.
    pub prefixes: PrefixesValidateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksValidateConfig {
    /// Enable link target validation.
    pub enable: bool,

    /// How to treat validation failures: "error" or "warn".
    pub level: ValidateLevel,
}

impl Default for LinksValidateConfig {
    fn default() -> Self {
        Self {
            enable: true,
            level: ValidateLevel::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixesValidateConfig {
    /// Enable sidebar prefix validation.
    pub enable: bool,

    /// How to treat validation failures: "error" or "warn".
    pub level: ValidateLevel,
}

impl Default for PrefixesValidateConfig {
    fn default() -> Self {
        Self {
            enable: true,
            level: ValidateLevel::default(),
        }
    }
}

/// Validation error level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidateLevel {
    /// Treat validation failures as errors (command fails).
    #[default]
    Error,
    /// Treat validation failures as warnings (command succeeds).
    Warn,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, test_parse_config};

    #[test]
    fn test_validate_config_defaults() {
        let config = test_parse_config("");
        assert!(config.validate.links.enable);
        assert!(config.validate.prefixes.enable);
        assert_eq!(config.validate.links.level, ValidateLevel::Error);
    }

    #[test]
    fn test_validate_config_custom() {
        let config = test_parse_config(
            r#"[validate.links]
enable = true
level = "warn"

[validate.prefixes]
enable = false"#,
        );
        assert!(config.validate.links.enable);
        assert_eq!(config.validate.links.level, ValidateLevel::Warn);
        assert!(!config.validate.prefixes.enable);
    }

    #[test]
    fn test_validate_unknown_field_detected() {
        let content =
            "[site]\ntitle = \"Test\"\ndescription = \"Test\"\n[validate]\nunknown = \"field\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.iter().any(|f| f.contains("unknown")));
    }
}
