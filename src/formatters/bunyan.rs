//! Bunyan JSON formatter
//!
//! Output follows the Bunyan log record schema so `bunyan` CLI tooling can
//! read it:
//!
//! ```text
//! {"time": "2025-01-08T10:30:45.123Z", "name": "root", "pid": 4242, "level": 10,
//!  "msg": "Test Log", "hostname": "web-1", "v": 0, "user": "alice"}
//! ```
//!
//! Extras are flattened after `v`. An extra named like a generated key
//! (`hostname`, `pid`, ...) replaces that value; `v` always stays `0`.

use crate::core::{
    Formatter, FormatterConfig, HostnameSource, LogRecord, Result, TimeZoneMode,
    TimestampFormat,
};
use serde_json::{Map, Value};

/// Bunyan record schema version; fixed by the format
pub const BUNYAN_VERSION: i64 = 0;

/// Bunyan-compatible JSON object with top-level extras
#[derive(Debug, Clone, Default)]
pub struct BunyanFormatter {
    hostname: HostnameSource,
}

impl BunyanFormatter {
    /// Formatter that resolves the hostname on every call
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter that always reports `hostname`
    pub fn with_hostname(hostname: impl Into<String>) -> Self {
        Self {
            hostname: HostnameSource::Fixed(hostname.into()),
        }
    }

    /// Build from configuration
    ///
    /// `HostnameSource::Cached` resolves the hostname here, so a lookup failure
    /// surfaces at construction instead of on each call.
    pub fn with_config(config: &FormatterConfig) -> Result<Self> {
        let hostname = match &config.hostname {
            HostnameSource::Cached => HostnameSource::Fixed(config.hostname.resolve()?),
            other => other.clone(),
        };
        Ok(Self { hostname })
    }
}

impl Formatter for BunyanFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        let mut object = Map::new();

        object.insert(
            "time".to_string(),
            Value::from(TimestampFormat::Bunyan.format_epoch(record.created, TimeZoneMode::Utc)?),
        );
        object.insert("name".to_string(), Value::from(record.logger_name.as_str()));
        object.insert("pid".to_string(), Value::from(record.process_number()));
        object.insert("level".to_string(), Value::from(record.level_number));
        object.insert("msg".to_string(), Value::from(record.message()?));
        object.insert("hostname".to_string(), Value::from(self.hostname.resolve()?));
        object.insert("v".to_string(), Value::from(BUNYAN_VERSION));

        super::flatten_extras(&mut object, record)?;

        super::to_json_line(&Value::Object(object))
    }

    fn name(&self) -> &str {
        "bunyan"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::system_hostname;
    use crate::formatters::test_support::*;

    fn formatter() -> BunyanFormatter {
        BunyanFormatter::with_hostname("SomePc")
    }

    fn parse(line: &str) -> Value {
        serde_json::from_str(line).expect("valid JSON")
    }

    fn is_bunyan_time(time: &str) -> bool {
        let bytes = time.as_bytes();
        bytes.len() == 24
            && time.ends_with('Z')
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                10 => *b == b'T',
                13 | 16 => *b == b':',
                19 => *b == b'.',
                23 => *b == b'Z',
                _ => b.is_ascii_digit(),
            })
    }

    #[test]
    fn test_bunyan_fields() {
        let parsed = parse(&formatter().format(&log_record()).unwrap());

        assert_eq!(parsed["time"], "2025-01-08T10:30:45.123Z");
        assert_eq!(parsed["name"], "root");
        assert_eq!(parsed["pid"], 4242);
        assert_eq!(parsed["level"], 10);
        assert_eq!(parsed["msg"], "A demo log message");
        assert_eq!(parsed["hostname"], "SomePc");
        assert_eq!(parsed["v"], 0);
    }

    #[test]
    fn test_bunyan_key_order() {
        let parsed = parse(&formatter().format(&log_record()).unwrap());
        let keys: Vec<&String> = parsed.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["time", "name", "pid", "level", "msg", "hostname", "v"]);
    }

    #[test]
    fn test_bunyan_time_truncates_to_millis() {
        let record = log_record().with_created(1_736_332_245.999_9);
        let parsed = parse(&formatter().format(&record).unwrap());

        let time = parsed["time"].as_str().unwrap();
        assert!(is_bunyan_time(time), "bad time: {}", time);
        assert_eq!(time, "2025-01-08T10:30:45.999Z");
    }

    #[test]
    fn test_bunyan_pid_defaults_to_zero() {
        let record = log_record().with_process(None, None);
        let parsed = parse(&formatter().format(&record).unwrap());
        assert_eq!(parsed["pid"], 0);
    }

    #[test]
    fn test_bunyan_flattens_extras() {
        let parsed = parse(&formatter().format(&extra_log_record()).unwrap());

        assert_eq!(parsed["str_extra"], "Extra 1");
        assert_eq!(parsed["int_extra"], 2);
        assert_eq!(parsed["float_extra"], 1.5);
    }

    #[test]
    fn test_bunyan_version_cannot_be_overridden() {
        let record = log_record().with_extra("v", 2).with_extra("hostname", "injected");
        let parsed = parse(&formatter().format(&record).unwrap());

        assert_eq!(parsed["v"], 0);
        assert_eq!(parsed["hostname"], "injected");
    }

    #[test]
    fn test_bunyan_golden_line() {
        let line = formatter().format(&extra_log_record()).unwrap();
        assert_eq!(
            line,
            r#"{"time": "2025-01-08T10:30:45.123Z", "name": "root", "pid": 4242, "level": 10, "msg": "A extra log message", "hostname": "SomePc", "v": 0, "str_extra": "Extra 1", "int_extra": 2, "float_extra": 1.5}"#
        );
    }

    #[test]
    fn test_bunyan_time_field_layout() {
        let line = formatter().format(&log_record()).unwrap();
        assert!(line.starts_with(r#"{"time": "2025-01-08T10:30:45.123Z", "name": "#));
    }

    #[test]
    fn test_bunyan_with_args() {
        let parsed = parse(&formatter().format(&args_log_record()).unwrap());
        assert_eq!(parsed["msg"], "A message with formatting");
    }

    #[test]
    fn test_bunyan_resolves_system_hostname() {
        let parsed = parse(&BunyanFormatter::new().format(&log_record()).unwrap());
        assert_eq!(parsed["hostname"], system_hostname().unwrap());
    }

    #[test]
    fn test_bunyan_cached_hostname() {
        let config = FormatterConfig::new().with_hostname(HostnameSource::Cached);
        let formatter = BunyanFormatter::with_config(&config).unwrap();
        let parsed = parse(&formatter.format(&log_record()).unwrap());
        assert_eq!(parsed["hostname"], system_hostname().unwrap());
    }
}
