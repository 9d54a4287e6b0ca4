//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docsite.toml`:
//!
//! | Module     | TOML Section   | Purpose                                  |
//! |------------|----------------|------------------------------------------|
//! | `site`     | `[site]`       | Site metadata (title, description, lang) |
//! | `theme`    | `[theme]`      | Navigation, sidebar, social, footer      |
//! | `build`    | `[build]`      | Content and output directories           |
//! | `validate` | `[validate]`   | Link-target and prefix validation        |

mod build;
mod site;
pub mod theme;
mod validate;

// Re-export section configs
pub use build::BuildSectionConfig;
pub use site::SiteSectionConfig;
pub use theme::ThemeSectionConfig;
pub use validate::{ValidateConfig, ValidateLevel};
