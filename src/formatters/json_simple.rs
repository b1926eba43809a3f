//! Simple JSON formatter
//!
//! ```text
//! {"logger": "root", "timestamp": "2025-01-08T10:30:45.123456", "message": "Test Log",
//!  "level": "DEBUG", "levelno": 10, "function": "main", "process": {"number": 4242,
//!  "name": "app"}, "thread": {"number": 1, "name": "main"}, "v": 1, "extra": {"user": "alice"}}
//! ```

use crate::core::{
    Formatter, FormatterConfig, LogRecord, Result, TimeZoneMode, TimestampFormat,
};
use serde_json::{json, Map, Value};

/// JSON object with caller extras nested under `extra`
#[derive(Debug, Clone, Default)]
pub struct JsonSimpleFormatter {
    timezone: TimeZoneMode,
}

impl JsonSimpleFormatter {
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

impl Formatter for JsonSimpleFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        let mut object = Map::new();

        object.insert("logger".to_string(), Value::from(record.logger_name.as_str()));
        object.insert(
            "timestamp".to_string(),
            Value::from(
                TimestampFormat::Iso8601Micros.format_epoch(record.created, self.timezone)?,
            ),
        );
        object.insert("message".to_string(), Value::from(record.message()?));
        object.insert("level".to_string(), Value::from(record.level_name.as_str()));
        object.insert("levelno".to_string(), Value::from(record.level_number));
        object.insert(
            "function".to_string(),
            Value::from(record.function_name.as_str()),
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

        let extras = super::extras_object(record)?;
        if !extras.is_empty() {
            object.insert("extra".to_string(), Value::Object(extras));
        }

        super::to_json_line(&Value::Object(object))
    }

    fn name(&self) -> &str {
        "json-simple"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::test_support::*;

    fn formatter() -> JsonSimpleFormatter {
        JsonSimpleFormatter::with_config(&FormatterConfig::new().with_timezone(TimeZoneMode::Utc))
    }

    fn parse(line: &str) -> Value {
        serde_json::from_str(line).expect("valid JSON")
    }

    #[test]
    fn test_json_simple_fields() {
        let parsed = parse(&formatter().format(&log_record()).unwrap());

        assert_eq!(parsed["logger"], "root");
        assert_eq!(parsed["timestamp"], "2025-01-08T10:30:45.123456");
        assert_eq!(parsed["message"], "A demo log message");
        assert_eq!(parsed["level"], "DEBUG");
        assert_eq!(parsed["levelno"], 10);
        assert_eq!(parsed["function"], "test_json");
        assert_eq!(parsed["process"]["number"], 4242);
        assert_eq!(parsed["process"]["name"], "MainProcess");
        assert_eq!(parsed["thread"]["number"], 7);
        assert_eq!(parsed["thread"]["name"], "MainThread");
        assert_eq!(parsed["v"], 1);
    }

    #[test]
    fn test_json_simple_key_order() {
        let line = formatter().format(&extra_log_record()).unwrap();
        let parsed = parse(&line);
        let keys: Vec<&String> = parsed.as_object().unwrap().keys().collect();

        assert_eq!(
            keys,
            [
                "logger", "timestamp", "message", "level", "levelno", "function", "process",
                "thread", "v", "extra"
            ]
        );
    }

    #[test]
    fn test_json_simple_golden_line() {
        let line = formatter().format(&extra_log_record()).unwrap();
        assert_eq!(
            line,
            r#"{"logger": "root", "timestamp": "2025-01-08T10:30:45.123456", "message": "A extra log message", "level": "DEBUG", "levelno": 10, "function": "test_json", "process": {"number": 4242, "name": "MainProcess"}, "thread": {"number": 7, "name": "MainThread"}, "v": 1, "extra": {"str_extra": "Extra 1", "int_extra": 2, "float_extra": 1.5}}"#
        );
    }

    #[test]
    fn test_json_simple_escapes_non_ascii() {
        let line = formatter().format(&log_record().with_template("café")).unwrap();
        assert!(line.contains(r#""message": "caf\u00e9""#));
        assert_eq!(parse(&line)["message"], "café");
    }

    #[test]
    fn test_json_simple_without_extras_has_no_extra_key() {
        let parsed = parse(&formatter().format(&log_record()).unwrap());
        assert!(parsed.get("extra").is_none());
    }

    #[test]
    fn test_json_simple_nests_extras() {
        let parsed = parse(&formatter().format(&extra_log_record()).unwrap());

        assert_eq!(parsed["extra"]["str_extra"], "Extra 1");
        assert_eq!(parsed["extra"]["int_extra"], 2);
        assert_eq!(parsed["extra"]["float_extra"], 1.5);
        assert!(parsed.get("str_extra").is_none());
    }

    #[test]
    fn test_json_simple_with_args() {
        let parsed = parse(&formatter().format(&args_log_record()).unwrap());
        assert_eq!(parsed["message"], "A message with formatting");
    }

    #[test]
    fn test_json_simple_identity_fallbacks() {
        let record = log_record().with_process(None, None).with_thread(None, None);
        let parsed = parse(&formatter().format(&record).unwrap());

        assert_eq!(parsed["process"]["number"], 0);
        assert_eq!(parsed["process"]["name"], "unknown");
        assert_eq!(parsed["thread"]["number"], 0);
        assert_eq!(parsed["thread"]["name"], "unknown");
    }
}
