//! Sidebar groups.

use super::NavItem;
use crate::config::types::FieldPath;
use serde::{Deserialize, Serialize};

/// A titled group of sidebar entries under one URL prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub text: String,

    /// Whether the group can be collapsed. Omitted means the generator's
    /// default (always expanded).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<bool>,

    /// Entries in display order. Must not be empty.
    pub items: Vec<NavItem>,
}

impl SidebarGroup {
    /// Validate the group under its sidebar prefix.
    ///
    /// # Checks
    /// - group text must not be empty
    /// - `items` must not be empty
    /// - every item is a well-formed nav entry
    pub fn validate(
        &self,
        field: FieldPath,
        prefix: &str,
        diag: &mut crate::config::ConfigDiagnostics,
    ) {
        if self.text.trim().is_empty() {
            diag.error(field, format!("group under '{prefix}' has empty text"));
        }

        if self.items.is_empty() {
            diag.error_with_hint(
                field,
                format!("group '{}' under '{prefix}' has no items", self.text),
                "every sidebar group needs at least one entry",
            );
        }

        for (i, item) in self.items.iter().enumerate() {
            item.validate(field, &format!("'{prefix}' group item[{i}]"), diag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigDiagnostics;

    fn check(group: SidebarGroup) -> usize {
        let mut diag = ConfigDiagnostics::new();
        group.validate(FieldPath::new("theme.sidebar"), "/guide/", &mut diag);
        diag.len()
    }

    #[test]
    fn test_group_accepted() {
        let errors = check(SidebarGroup {
            text: "Getting Started".into(),
            collapsible: Some(true),
            items: vec![NavItem {
                text: "Introduction".into(),
                link: "/guide/".into(),
            }],
        });
        assert_eq!(errors, 0);
    }

    #[test]
    fn test_empty_items_rejected() {
        let errors = check(SidebarGroup {
            text: "Getting Started".into(),
            collapsible: None,
            items: Vec::new(),
        });
        assert_eq!(errors, 1);
    }

    #[test]
    fn test_item_errors_bubble_up() {
        let errors = check(SidebarGroup {
            text: "Notes".into(),
            collapsible: None,
            items: vec![NavItem {
                text: "Broken".into(),
                link: "relative/link".into(),
            }],
        });
        assert_eq!(errors, 1);
    }

    #[test]
    fn test_collapsible_optional_in_toml() {
        let group: SidebarGroup = toml::from_str(
            "text = \"Notes\"\nitems = [{ text = \"Overview\", link = \"/components/overview\" }]",
        )
        .unwrap();
        assert!(group.collapsible.is_none());
        // Omitted collapsible stays omitted when re-serialized
        let out = toml::to_string(&group).unwrap();
        assert!(!out.contains("collapsible"));
    }
}
