//! `[theme]` section configuration.
//!
//! The navigation topology of the site: top nav, sidebar groups keyed by
//! URL prefix, social links, and footer text.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! site_title = "Frontend Guide"
//! logo = "/assets/logo.png"
//!
//! [[theme.nav]]
//! text = "Guide"
//! link = "/guide/"
//!
//! [[theme.social]]
//! icon = "github"
//! link = "https://github.com/user/repo"
//!
//! [[theme.sidebar."/guide/"]]
//! text = "Getting Started"
//! collapsible = true
//! items = [{ text = "Introduction", link = "/guide/" }]
//!
//! [theme.footer]
//! message = "Built with care"
//! copyright = "Copyright 2024"
//! ```

mod nav;
mod sidebar;
mod social;

pub use nav::NavItem;
pub use sidebar::SidebarGroup;
pub use social::{SocialIcon, SocialLink};

use crate::config::types::FieldPath;
use crate::utils::route::normalize_route;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field paths for diagnostics.
pub struct ThemeFields {
    pub site_title: FieldPath,
    pub logo: FieldPath,
    pub nav: FieldPath,
    pub social: FieldPath,
    pub sidebar: FieldPath,
}

/// Theme section: everything the generator renders around the page content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// Title shown in the navbar (falls back to the site title when empty).
    pub site_title: String,

    /// Logo path (site-rooted, e.g. "/assets/logo.png").
    pub logo: String,

    /// Top navigation entries, in display order.
    pub nav: Vec<NavItem>,

    /// Social links shown in the navbar, in display order.
    pub social: Vec<SocialLink>,

    /// Sidebar groups keyed by URL path prefix. A page picks the groups
    /// under the longest prefix that matches its path.
    pub sidebar: BTreeMap<String, Vec<SidebarGroup>>,

    /// Footer text.
    pub footer: FooterConfig,
}

/// Footer message and copyright line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub message: String,
    pub copyright: String,
}

impl ThemeSectionConfig {
    pub const FIELDS: ThemeFields = ThemeFields {
        site_title: FieldPath::new("theme.site_title"),
        logo: FieldPath::new("theme.logo"),
        nav: FieldPath::new("theme.nav"),
        social: FieldPath::new("theme.social"),
        sidebar: FieldPath::new("theme.sidebar"),
    };

    /// Select the sidebar groups for a page path.
    ///
    /// Prefixes are compared trailing-slash-insensitively and the longest
    /// match wins, so `/guide/installation` picks `/guide/` over `/`.
    /// Returns `None` when no prefix matches.
    pub fn sidebar_for(&self, page_path: &str) -> Option<&[SidebarGroup]> {
        self.sidebar
            .iter()
            .filter(|(prefix, _)| {
                let prefix = prefix.trim_end_matches('/');
                page_path
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
            })
            .max_by_key(|(prefix, _)| prefix.trim_end_matches('/').len())
            .map(|(_, groups)| groups.as_slice())
    }

    /// All internal link targets declared in the theme (nav + sidebar items),
    /// paired with a human-readable source label. External links and bare
    /// anchors are excluded. Duplicates are preserved: the same page may be
    /// reachable from several entries.
    pub fn internal_links(&self) -> Vec<(String, &str)> {
        let mut links = Vec::new();
        for item in &self.nav {
            if item.is_internal() {
                links.push(("nav".to_string(), item.link.as_str()));
            }
        }
        for (prefix, groups) in &self.sidebar {
            for group in groups {
                for item in &group.items {
                    if item.is_internal() {
                        links.push((format!("sidebar{}", normalize_route(prefix)), item.link.as_str()));
                    }
                }
            }
        }
        links
    }

    /// Validate the navigation topology.
    ///
    /// # Checks
    /// - logo (when set) is a site-rooted path
    /// - every nav entry has text and a well-formed link
    /// - every social link is a valid http(s) URL
    /// - every sidebar prefix starts with "/" and its groups are well-formed
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if !self.logo.is_empty() && !self.logo.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.logo,
                format!("'{}' must be a site-rooted path", self.logo),
                "use a path like \"/assets/logo.png\"",
            );
        }

        for (i, item) in self.nav.iter().enumerate() {
            item.validate(Self::FIELDS.nav, &format!("nav[{i}]"), diag);
        }

        for (i, social) in self.social.iter().enumerate() {
            social.validate(Self::FIELDS.social, i, diag);
        }

        // Trailing-slash variants of the same prefix make the longest-prefix
        // match ambiguous
        let mut seen = FxHashSet::default();
        for prefix in self.sidebar.keys() {
            if !seen.insert(normalize_route(prefix)) {
                diag.warn(
                    Self::FIELDS.sidebar,
                    format!(
                        "prefix '{prefix}' duplicates another entry up to its trailing slash"
                    ),
                );
            }
        }

        for (prefix, groups) in &self.sidebar {
            if !prefix.starts_with('/') {
                diag.error_with_hint(
                    Self::FIELDS.sidebar,
                    format!("prefix '{prefix}' must start with '/'"),
                    "use a prefix like \"/guide/\"",
                );
            }
            if groups.is_empty() {
                diag.error(
                    Self::FIELDS.sidebar,
                    format!("prefix '{prefix}' has no groups"),
                );
            }
            for group in groups {
                group.validate(Self::FIELDS.sidebar, prefix, diag);
            }
        }
    }
}
