//! `[build]` configuration.
//!
//! Directory layout consumed by the validate and init commands. The actual
//! page rendering belongs to the external generator; this tool only needs to
//! know where the markdown sources live.

use crate::config::types::FieldPath;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Field paths for diagnostics.
pub struct BuildFields {
    pub content: FieldPath,
    pub output: FieldPath,
}

/// Build directory settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Markdown content directory (relative to project root).
    pub content: PathBuf,

    /// Generator output directory (relative to project root, ignored files only).
    pub output: PathBuf,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: PathBuf::from("docs"),
            output: PathBuf::from("dist"),
        }
    }
}

impl BuildSectionConfig {
    pub const FIELDS: BuildFields = BuildFields {
        content: FieldPath::new("build.content"),
        output: FieldPath::new("build.output"),
    };

    /// Validate directory settings.
    ///
    /// Both paths must stay relative so the project remains relocatable.
    /// Called before path normalization turns them absolute.
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.content.is_absolute() {
            diag.error_with_hint(
                Self::FIELDS.content,
                format!("'{}' must be relative to the project root", self.content.display()),
                "use a path like \"docs\"",
            );
        }
        if self.output.is_absolute() {
            diag.error_with_hint(
                Self::FIELDS.output,
                format!("'{}' must be relative to the project root", self.output.display()),
                "use a path like \"dist\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigDiagnostics;

    #[test]
    fn test_build_defaults() {
        let build = BuildSectionConfig::default();
        assert_eq!(build.content, PathBuf::from("docs"));
        assert_eq!(build.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_absolute_content_rejected() {
        let build = BuildSectionConfig {
            content: PathBuf::from("/etc/docs"),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_custom_dirs_parse() {
        let config = crate::config::test_parse_config("[build]\ncontent = \"pages\"\noutput = \"public\"");
        assert_eq!(config.build.content, PathBuf::from("pages"));
        assert_eq!(config.build.output, PathBuf::from("public"));
    }
}
