//! Path, URL, and formatting utilities.

pub mod path;
pub mod plural;
pub mod route;

// Re-export commonly used helpers
pub use plural::{plural_count, plural_s};
