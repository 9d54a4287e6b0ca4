//! Site validation command.
//!
//! Checks the navigation topology against the markdown sources on disk:
//! every internal link must resolve to a page, and every sidebar prefix
//! must correspond to a content directory. Structural checks (link form,
//! empty groups, icon set) already ran at config load.

mod report;
mod targets;

use anyhow::{Result, bail};
use rustc_hash::FxHashSet;

use crate::config::{SiteConfig, ValidateLevel};
use crate::log;
use crate::utils::plural_count;
use crate::utils::route::{normalize_route, split_path_fragment};

use report::ValidationReport;
use targets::collect_routes;

/// Validate internal links and sidebar prefixes
pub fn validate_site(config: &SiteConfig) -> Result<()> {
    let check_links = config.validate.links.enable;
    let check_prefixes = config.validate.prefixes.enable;

    if !check_links && !check_prefixes {
        log!("validate"; "no checks enabled");
        return Ok(());
    }

    let content_dir = config.content_dir();
    if !content_dir.is_dir() {
        bail!(
            "content directory '{}' not found",
            config.root_relative(content_dir).display()
        );
    }

    let routes = collect_routes(content_dir)?;
    log!("validate"; "found {}", plural_count(routes.len(), "content page"));

    let mut report = ValidationReport::default();

    if check_links {
        check_link_targets(config, &routes, &mut report);
        let count = report.link_error_count();
        if count > 0 {
            log!("validate"; "found {}", plural_count(count, "broken link"));
        } else {
            log!("validate"; "all internal links valid");
        }
    }

    if check_prefixes {
        check_sidebar_prefixes(config, &mut report);
        let count = report.prefix_error_count();
        if count > 0 {
            log!("validate"; "found {}", plural_count(count, "unmatched sidebar prefix"));
        } else {
            log!("validate"; "all sidebar prefixes match content directories");
        }
    }

    // Print detailed report (links -> prefixes)
    report.print();

    finish(config, &report)
}

/// Check every internal nav/sidebar link against the scanned routes.
///
/// Duplicate links are checked (and reported) per occurrence: the same
/// page may legitimately be reachable from several entries.
fn check_link_targets(config: &SiteConfig, routes: &FxHashSet<String>, report: &mut ValidationReport) {
    let links = config.theme.internal_links();
    log!("validate"; "checking {}", plural_count(links.len(), "internal link"));

    for (source, link) in links {
        let (path, _fragment) = split_path_fragment(link);
        let route = normalize_route(path);
        if !routes.contains(route) {
            report.add_link(
                source,
                format!("`{link}`"),
                "no markdown source".to_string(),
            );
        }
    }
}

/// Check every sidebar prefix corresponds to a content directory.
fn check_sidebar_prefixes(config: &SiteConfig, report: &mut ValidationReport) {
    let content_dir = config.content_dir();

    for prefix in config.theme.sidebar.keys() {
        let rel = normalize_route(prefix).trim_start_matches('/');
        let dir = if rel.is_empty() {
            content_dir.to_path_buf()
        } else {
            content_dir.join(rel)
        };

        if !dir.is_dir() {
            report.add_prefix(
                prefix.clone(),
                format!("`{}`", config.root_relative(&dir).display()),
                "directory not found".to_string(),
            );
        }
    }
}

/// Apply per-area levels and produce the final result.
fn finish(config: &SiteConfig, report: &ValidationReport) -> Result<()> {
    log!("validate"; "{report}");

    if report.is_empty() {
        return Ok(());
    }

    let hard_links =
        report.link_error_count() > 0 && config.validate.links.level == ValidateLevel::Error;
    let hard_prefixes =
        report.prefix_error_count() > 0 && config.validate.prefixes.level == ValidateLevel::Error;

    if hard_links || hard_prefixes {
        bail!(
            "validation failed: {}, {}",
            plural_count(report.link_error_count(), "broken link"),
            plural_count(report.prefix_error_count(), "unmatched prefix")
        );
    }

    log!("warning"; "validation failures treated as warnings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Starter config rooted at a temp dir, with `docs/` as content dir.
    fn config_at(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::starter();
        config.set_root(root);
        config.build.content = root.join("docs");
        config
    }

    fn write(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# page\n").unwrap();
    }

    /// Write a markdown stub for every starter link target and prefix.
    fn scaffold_starter_content(root: &Path) {
        for rel in [
            "docs/index.md",
            "docs/guide/index.md",
            "docs/guide/installation.md",
            "docs/guide/concepts.md",
            "docs/guide/composables.md",
            "docs/components/index.md",
            "docs/components/overview.md",
            "docs/components/button.md",
            "docs/components/form.md",
            "docs/components/table.md",
            "docs/components/state-management.md",
            "docs/components/routing.md",
            "docs/components/network-requests.md",
            "docs/api/index.md",
            "docs/faq/index.md",
        ] {
            write(root, rel);
        }
    }

    #[test]
    fn test_complete_content_passes() {
        let temp = TempDir::new().unwrap();
        scaffold_starter_content(temp.path());
        let config = config_at(temp.path());
        assert!(validate_site(&config).is_ok());
    }

    #[test]
    fn test_missing_target_fails() {
        let temp = TempDir::new().unwrap();
        scaffold_starter_content(temp.path());
        fs::remove_file(temp.path().join("docs/guide/installation.md")).unwrap();

        let config = config_at(temp.path());
        assert!(validate_site(&config).is_err());
    }

    #[test]
    fn test_missing_prefix_dir_fails() {
        let temp = TempDir::new().unwrap();
        scaffold_starter_content(temp.path());
        let mut config = config_at(temp.path());
        config.theme.sidebar.insert("/changelog/".into(), {
            let groups = config.theme.sidebar["/guide/"].clone();
            groups
        });

        let result = validate_site(&config);
        assert!(result.is_err());
    }

    #[test]
    fn test_warn_level_downgrades_failures() {
        let temp = TempDir::new().unwrap();
        scaffold_starter_content(temp.path());
        fs::remove_file(temp.path().join("docs/guide/installation.md")).unwrap();

        let mut config = config_at(temp.path());
        config.validate.links.level = ValidateLevel::Warn;
        config.validate.prefixes.level = ValidateLevel::Warn;
        assert!(validate_site(&config).is_ok());
    }

    #[test]
    fn test_disabled_checks_skip_everything() {
        let temp = TempDir::new().unwrap();
        // No content at all, but nothing is checked
        let mut config = config_at(temp.path());
        config.validate.links.enable = false;
        config.validate.prefixes.enable = false;
        assert!(validate_site(&config).is_ok());
    }

    #[test]
    fn test_trailing_slash_link_resolves_to_index() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "docs/index.md");
        write(temp.path(), "docs/guide/index.md");

        let mut config = config_at(temp.path());
        config.theme.nav.clear();
        config.theme.sidebar.clear();
        config.theme.nav.push(crate::config::section::theme::NavItem {
            text: "Guide".into(),
            link: "/guide/".into(),
        });
        assert!(validate_site(&config).is_ok());
    }
}
