//! Validation report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural_s;

/// A single validation error
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The link/prefix that failed.
    pub target: String,
    /// Error reason/message.
    pub reason: String,
}

/// Unified validation report for all error types
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Broken internal links, grouped by source (nav, sidebar prefix).
    pub links: BTreeMap<String, Vec<ValidationError>>,
    /// Sidebar prefixes without a matching content directory.
    pub prefixes: BTreeMap<String, Vec<ValidationError>>,
}

impl ValidationReport {
    /// Add a broken link error.
    pub fn add_link(&mut self, source: String, link: String, reason: String) {
        self.links.entry(source).or_default().push(ValidationError {
            target: link,
            reason,
        });
    }

    /// Add a prefix error.
    pub fn add_prefix(&mut self, prefix: String, dir: String, reason: String) {
        self.prefixes
            .entry(prefix)
            .or_default()
            .push(ValidationError {
                target: dir,
                reason,
            });
    }

    /// Total broken link count.
    pub fn link_error_count(&self) -> usize {
        self.links.values().map(|v| v.len()).sum()
    }

    /// Total prefix error count.
    pub fn prefix_error_count(&self) -> usize {
        self.prefixes.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.prefixes.is_empty()
    }

    /// Print the full report to stderr (links -> prefixes).
    pub fn print(&self) {
        self.print_section("links", &self.links);
        self.print_section("prefixes", &self.prefixes);
    }

    /// Print section with format (target + reason for non-empty reason).
    fn print_section(&self, name: &str, errors: &BTreeMap<String, Vec<ValidationError>>) {
        if errors.is_empty() {
            return;
        }
        eprintln!();

        let group_count = errors.len();
        let error_count: usize = errors.values().map(|v| v.len()).sum();

        // Section header
        eprintln!(
            "{} {}",
            name.red().bold(),
            format!(
                "({group_count} source{}, {error_count} error{})",
                plural_s(group_count),
                plural_s(error_count)
            )
            .dimmed()
        );

        for (source, errs) in errors {
            // Source label
            eprintln!("{}{}{}", "[".dimmed(), source.cyan(), "]".dimmed());
            for e in errs {
                if e.reason.is_empty() {
                    eprintln!("{} {}", "→".red(), e.target);
                } else {
                    eprintln!("{} {} {}", "→".red(), e.target, e.reason);
                }
            }
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let links = self.link_error_count();
        let prefixes = self.prefix_error_count();
        let total = links + prefixes;

        if total == 0 {
            write!(f, "{}", "all checks passed".green())
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("error{}", plural_s(total)).dimmed()
            )
        }
    }
}
