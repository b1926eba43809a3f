//! Simple text formatter
//!
//! `[DEBUG] [2025-01-08 10:30:45] Test Log`. Extras are never written.

use super::sanitize_line;
use crate::core::{
    Formatter, FormatterConfig, LogRecord, Result, TimeZoneMode, TimestampFormat,
};

#[derive(Debug, Clone, Default)]
pub struct TextSimpleFormatter {
    timezone: TimeZoneMode,
}

impl TextSimpleFormatter {
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

impl Formatter for TextSimpleFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        let timestamp = TimestampFormat::DateTime.format_epoch(record.created, self.timezone)?;
        Ok(format!(
            "[{}] [{}] {}",
            sanitize_line(&record.level_name.to_uppercase()),
            timestamp,
            sanitize_line(&record.message()?)
        ))
    }

    fn name(&self) -> &str {
        "text-simple"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::test_support::*;

    fn formatter() -> TextSimpleFormatter {
        TextSimpleFormatter::with_config(&FormatterConfig::new().with_timezone(TimeZoneMode::Utc))
    }

    #[test]
    fn test_text_simple_format() {
        let line = formatter().format(&log_record()).unwrap();
        assert_eq!(line, "[DEBUG] [2025-01-08 10:30:45] A demo log message");
    }

    #[test]
    fn test_text_simple_uppercases_level() {
        let record = log_record().with_level_name_and_number("notice", 25);
        let line = formatter().format(&record).unwrap();
        assert!(line.starts_with("[NOTICE] "));
    }

    #[test]
    fn test_text_simple_with_args() {
        let line = formatter().format(&args_log_record()).unwrap();
        assert!(line.ends_with("] A message with formatting"));
    }

    #[test]
    fn test_text_simple_drops_extras() {
        let line = formatter().format(&extra_log_record()).unwrap();

        assert_eq!(line, "[DEBUG] [2025-01-08 10:30:45] A extra log message");
        assert!(!line.contains("str_extra"));
        assert!(!line.contains("Extra 1"));
    }

    #[test]
    fn test_text_simple_single_line() {
        let record = log_record().with_template("first\nsecond");
        let line = formatter().format(&record).unwrap();
        assert_eq!(line.lines().count(), 1);
        assert!(line.ends_with("first\\nsecond"));
    }

    #[test]
    fn test_text_simple_escapes_level_name() {
        let record = log_record().with_level_name_and_number("info\nfake", 20);
        let line = formatter().format(&record).unwrap();
        assert_eq!(line.lines().count(), 1);
        assert!(line.starts_with("[INFO\\nFAKE] "));
    }
}
