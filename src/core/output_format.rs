//! Output format selection
//!
//! Names the five encodings so a host can pick one from configuration:
//! - JsonSimple: JSON with extras nested under `extra`
//! - JsonAdvanced: JSON with location, process start time and flattened extras
//! - Bunyan: Bunyan log record schema
//! - TextSimple: `[LEVEL] [date] message` (default)
//! - TextCompact: single-letter level, call site and `[key:value]` extras

use super::config::FormatterConfig;
use super::error::{FormatError, Result};
use super::formatter::Formatter;
use crate::formatters::{
    BunyanFormatter, JsonAdvancedFormatter, JsonSimpleFormatter, TextCompactFormatter,
    TextSimpleFormatter,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format for log records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Example: `{"logger": "root", "timestamp": "2025-01-08T10:30:45.123456", ..., "v": 1}`
    JsonSimple,

    /// Example: `{"logger": "root", ..., "location": {...}, ..., "v": 1, "user": "alice"}`
    JsonAdvanced,

    /// Example: `{"time": "2025-01-08T10:30:45.123Z", "name": "root", ..., "v": 0}`
    Bunyan,

    /// Example: `[INFO] [2025-01-08 10:30:45] Request processed`
    #[default]
    TextSimple,

    /// Example: `[I 2025-01-08 10:30:45 l:root f:main.rs ln:12] Request processed`
    TextCompact,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::JsonSimple,
        OutputFormat::JsonAdvanced,
        OutputFormat::Bunyan,
        OutputFormat::TextSimple,
        OutputFormat::TextCompact,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            OutputFormat::JsonSimple => "json-simple",
            OutputFormat::JsonAdvanced => "json-advanced",
            OutputFormat::Bunyan => "bunyan",
            OutputFormat::TextSimple => "text-simple",
            OutputFormat::TextCompact => "text-compact",
        }
    }

    /// Whether this format emits JSON
    pub fn is_json(&self) -> bool {
        matches!(
            self,
            OutputFormat::JsonSimple | OutputFormat::JsonAdvanced | OutputFormat::Bunyan
        )
    }

    /// Build the formatter for this format
    pub fn build(&self, config: &FormatterConfig) -> Result<Box<dyn Formatter>> {
        Ok(match self {
            OutputFormat::JsonSimple => Box::new(JsonSimpleFormatter::with_config(config)),
            OutputFormat::JsonAdvanced => Box::new(JsonAdvancedFormatter::with_config(config)),
            OutputFormat::Bunyan => Box::new(BunyanFormatter::with_config(config)?),
            OutputFormat::TextSimple => Box::new(TextSimpleFormatter::with_config(config)),
            OutputFormat::TextCompact => Box::new(TextCompactFormatter::with_config(config)),
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "json" | "json-simple" | "simple-json" => Ok(OutputFormat::JsonSimple),
            "json-advanced" | "advanced-json" | "advjson" => Ok(OutputFormat::JsonAdvanced),
            "bunyan" | "json-bunyan" => Ok(OutputFormat::Bunyan),
            "text" | "simple" | "text-simple" => Ok(OutputFormat::TextSimple),
            "compact" | "text-compact" => Ok(OutputFormat::TextCompact),
            _ => Err(FormatError::config(
                "OutputFormat",
                format!("unknown format '{}'", s),
            )),
        }
    }
}
