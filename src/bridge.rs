//! Conversion from `log` facade records
//!
//! Lets a host built on the `log` crate hand its records to any formatter.
//! `format_args!` output is already rendered, so it becomes a template with no
//! args. Structured key/values become extras.

use crate::core::{Extras, FieldValue, FormatError, LogLevel, LogRecord, Result};
use log::kv::{self, VisitSource};

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warning,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug | log::Level::Trace => LogLevel::Debug,
        }
    }
}

struct ExtrasVisitor<'a> {
    extras: &'a mut Extras,
}

impl<'a, 'kvs> VisitSource<'kvs> for ExtrasVisitor<'a> {
    fn visit_pair(&mut self, key: kv::Key<'kvs>, value: kv::Value<'kvs>) -> std::result::Result<(), kv::Error> {
        self.extras
            .insert(key.as_str().to_string(), field_value_of(&value));
        Ok(())
    }
}

fn field_value_of(value: &kv::Value<'_>) -> FieldValue {
    if let Some(b) = value.to_bool() {
        FieldValue::Bool(b)
    } else if let Some(i) = value.to_i64() {
        FieldValue::Int(i)
    } else if let Some(f) = value.to_f64() {
        FieldValue::Float(f)
    } else if let Some(s) = value.to_borrowed_str() {
        FieldValue::String(s.to_string())
    } else {
        FieldValue::String(value.to_string())
    }
}

impl LogRecord {
    /// Build a record from a `log::Record`
    ///
    /// The target becomes the logger name and `Trace` folds into `DEBUG`.
    /// Time and execution identity are taken from the current thread.
    pub fn from_log_record(record: &log::Record<'_>) -> Result<Self> {
        let mut converted = LogRecord::new(
            record.target(),
            record.level().into(),
            record.args().to_string(),
        );
        if let Some(file) = record.file() {
            converted = converted.with_location(file, record.line().unwrap_or(0));
        }
        if let Some(module_path) = record.module_path() {
            converted = converted.with_module(module_path);
        }

        let mut visitor = ExtrasVisitor {
            extras: &mut converted.extras,
        };
        record
            .key_values()
            .visit(&mut visitor)
            .map_err(|err| FormatError::serialization("key_values", err.to_string()))?;

        Ok(converted)
    }
}
