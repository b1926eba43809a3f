//! Formatter implementations

pub mod bunyan;
pub mod json_advanced;
pub mod json_line;
pub mod json_simple;
pub mod text_compact;
pub mod text_simple;

pub use bunyan::BunyanFormatter;
pub use json_advanced::JsonAdvancedFormatter;
pub use json_line::JsonLineFormatter;
pub use json_simple::JsonSimpleFormatter;
pub use text_compact::TextCompactFormatter;
pub use text_simple::TextSimpleFormatter;

pub use crate::core::Formatter;

use crate::core::{LogRecord, Result};
use serde_json::{Map, Value};

/// Escape line breaks and tabs so a text line stays a single line
pub(crate) fn sanitize_line(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Extra fields as a JSON object, in insertion order
pub(crate) fn extras_object(record: &LogRecord) -> Result<Map<String, Value>> {
    let mut extras = Map::new();
    for (key, value) in record.extra_fields() {
        extras.insert(key.to_string(), value.to_json_value(key)?);
    }
    Ok(extras)
}

pub(crate) use json_line::to_json_line;

/// Schema version key; extras never replace it
pub(crate) const VERSION_KEY: &str = "v";

/// Merge extra fields into the top level of `object`
///
/// An extra named like a generated key replaces its value in place, except
/// for the `v` schema version.
pub(crate) fn flatten_extras(object: &mut Map<String, Value>, record: &LogRecord) -> Result<()> {
    for (key, value) in record.extra_fields() {
        if key == VERSION_KEY {
            continue;
        }
        object.insert(key.to_string(), value.to_json_value(key)?);
    }
    Ok(())
}
