//! Navigation entries.

use crate::config::types::FieldPath;
use crate::utils::route::is_external_link;
use serde::{Deserialize, Serialize};

/// A single navigation entry: display text plus a link target.
///
/// The link is either a site-rooted route ("/guide/"), an in-page anchor
/// ("#install"), or an external URL ("https://…").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

impl NavItem {
    /// Whether the link points at a page of this site.
    #[inline]
    pub fn is_internal(&self) -> bool {
        self.link.starts_with('/')
    }

    /// Validate text and link form.
    ///
    /// `context` labels the entry in messages (e.g. "nav[2]") since a
    /// `FieldPath` is always a static section path.
    pub fn validate(
        &self,
        field: FieldPath,
        context: &str,
        diag: &mut crate::config::ConfigDiagnostics,
    ) {
        if self.text.trim().is_empty() {
            diag.error(field, format!("{context} has empty text"));
        }

        if self.link.is_empty() {
            diag.error(field, format!("{context} has an empty link"));
            return;
        }

        let well_formed =
            self.is_internal() || self.link.starts_with('#') || is_external_link(&self.link);
        if !well_formed {
            diag.error_with_hint(
                field,
                format!("{context} link '{}' is not a route, anchor, or URL", self.link),
                "internal routes start with '/', anchors with '#'",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigDiagnostics;

    fn check(item: NavItem) -> usize {
        let mut diag = ConfigDiagnostics::new();
        item.validate(FieldPath::new("theme.nav"), "nav[0]", &mut diag);
        diag.len()
    }

    #[test]
    fn test_route_anchor_and_url_accepted() {
        for link in ["/", "/guide/installation", "#setup", "https://example.com"] {
            let errors = check(NavItem {
                text: "Entry".into(),
                link: link.into(),
            });
            assert_eq!(errors, 0, "link '{link}' should be accepted");
        }
    }

    #[test]
    fn test_relative_link_rejected() {
        let errors = check(NavItem {
            text: "Entry".into(),
            link: "guide/installation".into(),
        });
        assert_eq!(errors, 1);
    }

    #[test]
    fn test_empty_link_rejected() {
        let errors = check(NavItem {
            text: "Entry".into(),
            link: String::new(),
        });
        assert_eq!(errors, 1);
    }

    #[test]
    fn test_empty_text_rejected() {
        let errors = check(NavItem {
            text: " ".into(),
            link: "/guide/".into(),
        });
        assert_eq!(errors, 1);
    }
}
