//! Query command implementation.
//!
//! Prints selected top-level fields of the exported generator document,
//! for scripting against the configuration (`docsite query -f title,themeConfig`).

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use super::export::{generator_document, write_json};
use crate::cli::args::QueryArgs;
use crate::config::SiteConfig;
use crate::debug;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let document = generator_document(config)?;
    debug!("query"; "document has {} top-level fields", document.as_object().map_or(0, Map::len));

    let output = if let Some(ref fields) = args.fields {
        filter_fields(&document, fields, args.filter_empty)
    } else if args.filter_empty {
        filter_empty_fields(&document)
    } else {
        document
    };

    write_json(&output, args.pretty, args.output.as_deref(), "query")
}

/// Filter to specific fields, in requested order.
///
/// A requested field that doesn't exist becomes null, so scripts can tell
/// "missing" from "not requested" - unless --filter-empty drops it.
fn filter_fields(document: &JsonValue, fields: &[String], filter_empty: bool) -> JsonValue {
    let mut obj = Map::new();

    if let Some(doc_obj) = document.as_object() {
        for field in fields {
            if let Some(value) = doc_obj.get(field) {
                if !filter_empty || !is_empty_value(value) {
                    obj.insert(field.clone(), value.clone());
                }
            } else if !filter_empty {
                obj.insert(field.clone(), JsonValue::Null);
            }
        }
    }

    JsonValue::Object(obj)
}

/// Drop null/empty top-level fields.
fn filter_empty_fields(document: &JsonValue) -> JsonValue {
    let mut obj = Map::new();

    if let Some(doc_obj) = document.as_object() {
        for (key, value) in doc_obj {
            if !is_empty_value(value) {
                obj.insert(key.clone(), value.clone());
            }
        }
    }

    JsonValue::Object(obj)
}

/// Check if a JSON value is considered "empty" (null, "", [] or {})
fn is_empty_value(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(arr) => arr.is_empty(),
        JsonValue::Object(obj) => obj.is_empty(),
        _ => false,
    }
}
