//! Site initialization module.
//!
//! Creates a new documentation site seeded with the starter document.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Directory structure creation
//! - [`config`]: Configuration file and content stub generation

mod config;
mod structure;
mod validate;

use crate::{config::SiteConfig, log};
use anyhow::Result;

pub use validate::InitMode;

/// Create a new site with default structure
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory structure
/// 3. Write configuration file and ignore files
/// 4. Write a markdown stub for every starter link target
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let root = site_config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    if let Err(e) = validate::validate_target(root, mode) {
        log!("error"; "{}", e);
        std::process::exit(1);
    }

    structure::create_structure(root)?;

    config::write_config(root)?;
    let output_dir = site_config.root_relative(&site_config.build.output);
    config::write_ignore_files(root, &output_dir)?;

    // Stubs make a fresh site pass `docsite validate` out of the box
    let starter = SiteConfig::starter();
    config::write_content_stubs(root, &starter)?;

    log!("init"; "Site initialized successfully");
    Ok(())
}
