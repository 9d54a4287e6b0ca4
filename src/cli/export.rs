//! Export command implementation.
//!
//! Produces the configuration document the external site generator consumes:
//! a single JSON object with the generator's wire names (camelCase,
//! `themeConfig` nesting). The document is pure data - exporting twice
//! always yields the same bytes.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;

use anyhow::Result;
use rustc_hash::FxHashMap;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::args::ExportArgs;
use crate::config::SiteConfig;
use crate::config::section::theme::{FooterConfig, NavItem, SidebarGroup, SocialLink};
use crate::log;

/// The generator's entry-point document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeneratorDocument<'a> {
    title: &'a str,
    description: &'a str,
    lang: &'a str,
    #[serde(flatten)]
    extra: &'a FxHashMap<String, toml::Value>,
    theme_config: ThemeDocument<'a>,
}

/// The `themeConfig` object within the generator document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThemeDocument<'a> {
    site_title: &'a str,
    logo: &'a str,
    nav: &'a [NavItem],
    social_links: &'a [SocialLink],
    sidebar: &'a BTreeMap<String, Vec<SidebarGroup>>,
    footer: &'a FooterConfig,
}

/// Build the generator document as a JSON value.
///
/// Field order is stable (struct order plus preserve_order maps), so the
/// exported bytes are deterministic for a given config.
pub fn generator_document(config: &SiteConfig) -> Result<JsonValue> {
    let doc = GeneratorDocument {
        title: &config.site.title,
        description: &config.site.description,
        lang: &config.site.language,
        extra: &config.site.extra,
        theme_config: ThemeDocument {
            site_title: &config.theme.site_title,
            logo: &config.theme.logo,
            nav: &config.theme.nav,
            social_links: &config.theme.social,
            sidebar: &config.theme.sidebar,
            footer: &config.theme.footer,
        },
    };
    Ok(serde_json::to_value(doc)?)
}

/// Execute export command
pub fn run_export(args: &ExportArgs, config: &SiteConfig) -> Result<()> {
    let document = generator_document(config)?;
    write_json(&document, args.pretty, args.output.as_deref(), "export")
}

/// Serialize a JSON value and write it to a file or stdout.
///
/// Shared by the export and query commands.
pub fn write_json(
    value: &JsonValue,
    pretty: bool,
    output: Option<&std::path::Path>,
    module: &str,
) -> Result<()> {
    let formatted = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    if let Some(output_path) = output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!(module; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}
