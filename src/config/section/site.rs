//! `[site]` configuration.
//!
//! Basic site metadata. `title` and `description` land at the top level of
//! the exported generator document; `extra` fields are passed through
//! untouched.

use crate::config::types::FieldPath;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Field paths for diagnostics.
pub struct SiteFields {
    pub title: FieldPath,
    pub description: FieldPath,
    pub language: FieldPath,
}

/// Site metadata exported to the generator document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title shown in the browser tab.
    pub title: String,

    /// Site description (meta description).
    pub description: String,

    /// Language code (e.g., "en", "zh-Hans").
    pub language: String,

    /// Custom fields passed through to the generator document unchanged.
    #[serde(skip_serializing_if = "FxHashMap::is_empty")]
    pub extra: FxHashMap<String, toml::Value>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            language: "en".into(),
            extra: FxHashMap::default(),
        }
    }
}

impl SiteSectionConfig {
    pub const FIELDS: SiteFields = SiteFields {
        title: FieldPath::new("site.title"),
        description: FieldPath::new("site.description"),
        language: FieldPath::new("site.language"),
    };

    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` must not be empty
    /// - `description` must not be empty
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "must not be empty",
                "set a site title, e.g.: \"Vue 3 + TypeScript Guide\"",
            );
        }
        if self.description.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.description,
                "must not be empty",
                "set a one-line site description",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigDiagnostics;

    #[test]
    fn test_default_language() {
        let site = SiteSectionConfig::default();
        assert_eq!(site.language, "en");
    }

    #[test]
    fn test_empty_title_and_description_rejected() {
        let site = SiteSectionConfig::default();
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_whitespace_title_rejected() {
        let site = SiteSectionConfig {
            title: "   ".into(),
            description: "A guide".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_extra_fields_parse() {
        let config = crate::config::test_parse_config("[site.extra]\nrepo = \"vue3-ts-docs\"");
        assert_eq!(
            config.site.extra.get("repo").and_then(|v| v.as_str()),
            Some("vue3-ts-docs")
        );
    }
}
