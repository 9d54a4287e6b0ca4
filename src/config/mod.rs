//! Site configuration management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── site       # [site]
//! │   ├── theme/     # [theme] and navigation topology
//! │   └── validate   # [validate]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                        |
//! |--------------|------------------------------------------------|
//! | `[site]`     | Site metadata (title, description, language)   |
//! | `[theme]`    | Nav, sidebar, social links, footer             |
//! | `[build]`    | Content and output directories                 |
//! | `[validate]` | Link-target and prefix validation settings     |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    BuildSectionConfig, SiteSectionConfig, ThemeSectionConfig, ValidateConfig, ValidateLevel,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands, ValidateArgs},
    log,
};
use anyhow::{Result, bail};
use section::theme::{FooterConfig, NavItem, SidebarGroup, SocialIcon, SocialLink};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docsite.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Navigation topology and footer
    #[serde(default)]
    pub theme: ThemeSectionConfig,

    /// Content and output directories
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Validation settings
    #[serde(default)]
    pub validate: ValidateConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cli: None,
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteSectionConfig::default(),
            theme: ThemeSectionConfig::default(),
            build: BuildSectionConfig::default(),
            validate: ValidateConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The project root is determined by the config file's parent directory.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        // Validate config existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'docsite init' to create a new project.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        // Load or create default config
        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        // Validate raw paths before normalization
        if !cli.is_init() {
            config.validate_paths()?;
        }

        // Set paths and apply CLI options
        config.config_path = config_path;
        config.cli = Some(cli);
        config.finalize(cli);

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir()?;

        match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_config_file(&cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        // Resolve root path
        let root = match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                std::env::current_dir().unwrap_or_default().join(name)
            }
            Commands::Init { name: None, .. } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        self.set_root(&root);
        self.normalize_paths(&root, cli);
        self.apply_command_options(cli);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (docsite.toml) since it's always at site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Absolute content directory (markdown sources).
    pub fn content_dir(&self) -> &Path {
        &self.build.content
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Validate { args } => {
                self.apply_validate_args(args);
            }
            // Init scaffolds, Export and Query only read
            Commands::Init { .. } | Commands::Export { .. } | Commands::Query { .. } => {}
        }
    }

    /// Apply validate arguments from CLI.
    fn apply_validate_args(&mut self, args: &ValidateArgs) {
        // CLI flags override config enable settings
        Self::update_option(&mut self.validate.links.enable, args.links.as_ref());
        Self::update_option(&mut self.validate.prefixes.enable, args.prefixes.as_ref());

        // --warn-only sets all levels to Warn
        if args.warn_only {
            self.validate.links.level = ValidateLevel::Warn;
            self.validate.prefixes.level = ValidateLevel::Warn;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path, cli: &Cli) {
        // Apply CLI path override first
        Self::update_option(&mut self.build.content, cli.content.as_ref());

        // Normalize root to absolute path
        let root = crate::utils::path::normalize_path(root);
        self.set_root(&root);

        // Normalize config path (already resolved, just canonicalize)
        self.config_path = crate::utils::path::normalize_path(&self.config_path);

        // Normalize directories
        self.build.content = crate::utils::path::normalize_path(&root.join(&self.build.content));
        self.build.output = crate::utils::path::normalize_path(&root.join(&self.build.output));
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Pre-validate paths before normalization.
    ///
    /// This must be called before `finalize()` because path normalization
    /// converts relative paths to absolute paths, making it impossible to
    /// detect if the user specified an absolute path in the config.
    fn validate_paths(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.build.validate(&mut diag);
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Validate configuration structure.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if !self.config_path.exists() {
            bail!(ConfigError::Validation("config file not found".into()));
        }

        self.site.validate(&mut diag);
        self.theme.validate(&mut diag);

        // Print collected warnings (grouped display)
        diag.print_warnings();

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    // ========================================================================
    // starter document
    // ========================================================================

    /// The canonical starter document: a learning-guide site with five nav
    /// entries, sidebar groups under "/guide/" and "/components/", one
    /// social link, and footer text. Seeds `docsite init` and tests.
    pub fn starter() -> Self {
        let mut config = Self::default();

        config.site.title = "Vue 3 + TypeScript Learning Guide".into();
        config.site.description = "A structured guide to Vue 3 and TypeScript".into();

        let theme = &mut config.theme;
        theme.site_title = "Frontend Guide".into();
        theme.logo = "/assets/logo.png".into();

        theme.nav = vec![
            nav_item("Home", "/"),
            nav_item("Guide", "/guide/"),
            nav_item("Components", "/components/"),
            nav_item("API Reference", "/api/"),
            nav_item("FAQ", "/faq/"),
        ];

        theme.social = vec![SocialLink {
            icon: SocialIcon::Github,
            link: "https://github.com/user/frontend-guide".into(),
        }];

        theme.sidebar.insert(
            "/guide/".into(),
            vec![SidebarGroup {
                text: "Getting Started".into(),
                collapsible: Some(true),
                items: vec![
                    nav_item("Introduction", "/guide/"),
                    nav_item("Installation", "/guide/installation"),
                    nav_item("Core Concepts", "/guide/concepts"),
                    nav_item("Composition Utilities", "/guide/composables"),
                ],
            }],
        );

        theme.sidebar.insert(
            "/components/".into(),
            vec![SidebarGroup {
                text: "Study Notes".into(),
                collapsible: None,
                items: vec![
                    nav_item("Overview", "/components/overview"),
                    nav_item("Button", "/components/button"),
                    nav_item("Form", "/components/form"),
                    nav_item("Table", "/components/table"),
                    nav_item("State Management", "/components/state-management"),
                    nav_item("Routing", "/components/routing"),
                    nav_item("Network Requests", "/components/network-requests"),
                ],
            }],
        );

        theme.footer = FooterConfig {
            message: "Learning Vue 3 and TypeScript, one page at a time".into(),
            copyright: "Copyright © 2024-present".into(),
        };

        config
    }
}

fn nav_item(text: &str, link: &str) -> NavItem {
    NavItem {
        text: text.into(),
        link: link.into(),
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_parse_config`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[site\ntitle = \"My Docs\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        // Default root is empty PathBuf, set during config loading
        assert_eq!(config.get_root(), Path::new(""));
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert!(config.cli.is_none());
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.title, "");
        assert!(config.theme.nav.is_empty());
        assert!(config.validate.links.enable);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content =
            "[site]\ntitle = \"Test\"\ndescription = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\ndescription = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_starter_is_structurally_valid() {
        let config = SiteConfig::starter();
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        config.theme.validate(&mut diag);
        assert!(diag.is_empty(), "starter must pass validation: {:?}", diag.errors());
    }

    #[test]
    fn test_starter_toml_round_trip() {
        let starter = SiteConfig::starter();
        let serialized = toml::to_string(&starter).unwrap();
        let reparsed = SiteConfig::from_str(&serialized).unwrap();

        // Idempotent data: no derived or computed fields
        assert_eq!(reparsed.site, starter.site);
        assert_eq!(reparsed.theme, starter.theme);
        assert_eq!(reparsed.build, starter.build);
        assert_eq!(reparsed.validate, starter.validate);
    }

    #[test]
    fn test_starter_sidebar_scenario() {
        // A page under /guide/ sees the single declared group, in order
        let config = SiteConfig::starter();
        let groups = config.theme.sidebar_for("/guide/installation").unwrap();
        assert_eq!(groups.len(), 1);
        let items: Vec<_> = groups[0].items.iter().map(|i| i.link.as_str()).collect();
        assert_eq!(
            items,
            [
                "/guide/",
                "/guide/installation",
                "/guide/concepts",
                "/guide/composables"
            ]
        );
    }
}
