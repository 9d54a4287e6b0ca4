//! Site directory structure creation.
//!
//! Creates the standard docsite layout: one content subdirectory per
//! starter sidebar prefix and nav section, plus an assets directory.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Standard site directory structure.
const SITE_DIRS: &[&str] = &[
    "docs",
    "docs/assets",
    "docs/guide",
    "docs/components",
    "docs/api",
    "docs/faq",
];

/// Create site directory structure at the given root.
///
/// Creates all standard directories. The root directory
/// is created if it doesn't exist.
pub fn create_structure(root: &Path) -> Result<()> {
    // Ensure root exists
    if !root.exists() {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create root directory '{}'", root.display()))?;
    }

    // Create all subdirectories
    for dir in SITE_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }

    Ok(())
}
