//! Compact text formatter
//!
//! `[D 2025-01-08 10:30:45 l:root f:main.rs ln:12] Test Log [user:alice] [attempt:2]`
//!
//! The level is shortened to its first letter. Extras follow the message as
//! bracketed `key:value` pairs in insertion order; with no extras the line
//! ends right after the message.

use super::sanitize_line;
use crate::core::{
    Formatter, FormatterConfig, LogRecord, Result, TimeZoneMode, TimestampFormat,
};

#[derive(Debug, Clone, Default)]
pub struct TextCompactFormatter {
    timezone: TimeZoneMode,
}

impl TextCompactFormatter {
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

/// First letter of the uppercased level name, `?` for an empty name
fn level_initial(level_name: &str) -> char {
    level_name
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('?')
}

impl Formatter for TextCompactFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        let timestamp = TimestampFormat::DateTime.format_epoch(record.created, self.timezone)?;
        let filename = if record.filename.is_empty() {
            "unknown"
        } else {
            record.filename.as_str()
        };

        let mut line = format!(
            "[{} {} l:{} f:{} ln:{}] {}",
            sanitize_line(&level_initial(&record.level_name).to_string()),
            timestamp,
            sanitize_line(&record.logger_name),
            sanitize_line(filename),
            record.line_number,
            sanitize_line(&record.message()?)
        );

        for (key, value) in record.extra_fields() {
            line.push_str(&format!(
                " [{}:{}]",
                sanitize_line(key),
                sanitize_line(&value.to_string())
            ));
        }

        Ok(line)
    }

    fn name(&self) -> &str {
        "text-compact"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use crate::formatters::test_support::*;

    fn formatter() -> TextCompactFormatter {
        TextCompactFormatter::with_config(&FormatterConfig::new().with_timezone(TimeZoneMode::Utc))
    }

    #[test]
    fn test_text_compact_format() {
        let line = formatter().format(&log_record()).unwrap();
        assert_eq!(
            line,
            "[D 2025-01-08 10:30:45 l:root f:bunyan.rs ln:30] A demo log message"
        );
    }

    #[test]
    fn test_text_compact_level_initials() {
        for (level, initial) in [
            (LogLevel::Debug, 'D'),
            (LogLevel::Info, 'I'),
            (LogLevel::Warning, 'W'),
            (LogLevel::Error, 'E'),
            (LogLevel::Critical, 'C'),
        ] {
            let line = formatter().format(&log_record().with_level(level)).unwrap();
            assert_eq!(line.chars().nth(1), Some(initial));
        }

        let record = log_record().with_level_name_and_number("trace", 5);
        let line = formatter().format(&record).unwrap();
        assert!(line.starts_with("[T "));
    }

    #[test]
    fn test_text_compact_extras_in_insertion_order() {
        let line = formatter().format(&extra_log_record()).unwrap();
        assert_eq!(
            line,
            "[D 2025-01-08 10:30:45 l:root f:bunyan.rs ln:30] A extra log message \
             [str_extra:Extra 1] [int_extra:2] [float_extra:1.5]"
        );
    }

    #[test]
    fn test_text_compact_no_trailing_space() {
        let line = formatter().format(&log_record()).unwrap();
        assert!(!line.ends_with(' '));
    }

    #[test]
    fn test_text_compact_unknown_filename() {
        let mut record = log_record();
        record.filename.clear();
        let line = formatter().format(&record).unwrap();
        assert!(line.contains(" f:unknown "));
    }

    #[test]
    fn test_text_compact_with_args() {
        let line = formatter().format(&args_log_record()).unwrap();
        assert!(line.ends_with("] A message with formatting"));
    }

    #[test]
    fn test_text_compact_skips_baseline_keyed_extras() {
        let record = log_record().with_extra("levelname", "FAKE").with_extra("user", "alice");
        let line = formatter().format(&record).unwrap();

        assert!(line.ends_with("A demo log message [user:alice]"));
        assert!(!line.contains("FAKE"));
    }

    #[test]
    fn test_level_initial_of_empty_name() {
        assert_eq!(level_initial(""), '?');
        assert_eq!(level_initial("warning"), 'W');
    }

    #[test]
    fn test_text_compact_stays_on_one_line() {
        let mut record = log_record()
            .with_logger_name("app\nevil")
            .with_extra("a\nb", 1)
            .with_extra("note", "x\ry");
        record.filename = "odd\tname.rs".to_string();
        let line = formatter().format(&record).unwrap();

        assert_eq!(line.lines().count(), 1);
        assert!(line.contains(" l:app\\nevil f:odd\\tname.rs "));
        assert!(line.ends_with(" [a\\nb:1] [note:x\\ry]"));
    }
}
