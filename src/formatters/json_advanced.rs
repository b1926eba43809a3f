//! Advanced JSON formatter
//!
//! Adds the process start time (`rtimestamp`) and the full call site
//! (`location`) to the simple format, and flattens extras into the top level.
//! A flattened extra replaces a generated value of the same name, except `v`.

use crate::core::timestamp::process_start;
use crate::core::{
    Formatter, FormatterConfig, LogRecord, Result, TimeZoneMode, TimestampFormat,
};
use serde_json::{json, Map, Value};

/// JSON object with location details and top-level extras
#[derive(Debug, Clone, Default)]
pub struct JsonAdvancedFormatter {
    timezone: TimeZoneMode,
}

impl JsonAdvancedFormatter {
    /// Formatter writing timestamps in local time
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from configuration; only the timezone applies
    pub fn with_config(config: &FormatterConfig) -> Self {
        Self {
            timezone: config.timezone,
        }
    }
}

impl Formatter for JsonAdvancedFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        let encoding = TimestampFormat::Iso8601Micros;
        let started = process_start(record.created, record.relative_created);
        let mut object = Map::new();

        object.insert("logger".to_string(), Value::from(record.logger_name.as_str()));
        object.insert(
            "timestamp".to_string(),
            Value::from(encoding.format_epoch(record.created, self.timezone)?),
        );
        object.insert(
            "rtimestamp".to_string(),
            Value::from(encoding.format_epoch(started, self.timezone)?),
        );
        object.insert("message".to_string(), Value::from(record.message()?));
        object.insert("level".to_string(), Value::from(record.level_name.as_str()));
        object.insert("levelno".to_string(), Value::from(record.level_number));
        object.insert(
            "location".to_string(),
            json!({
                "pathname": record.pathname,
                "module": record.module_name,
                "filename": record.filename,
                "function": record.function_name,
                "line": record.line_number,
            }),
        );
        object.insert(
            "process".to_string(),
            json!({
                "number": record.process_number(),
                "name": record.process_display_name(),
            }),
        );
        object.insert(
            "thread".to_string(),
            json!({
                "number": record.thread_number(),
                "name": record.thread_display_name(),
            }),
        );
        object.insert("v".to_string(), Value::from(1));

        super::flatten_extras(&mut object, record)?;

        super::to_json_line(&Value::Object(object))
    }

    fn name(&self) -> &str {
        "json-advanced"
    }
}
