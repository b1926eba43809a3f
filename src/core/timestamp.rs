//! Timestamp encodings used by the formatters
//!
//! Records carry their event time as fractional seconds since the epoch. This
//! module converts that value into the three encodings the output formats use:
//! - ISO 8601 with microseconds: `2025-01-08T10:30:45.123456`
//! - Bunyan time, always UTC, milliseconds truncated: `2025-01-08T10:30:45.123Z`
//! - Plain date and time for text lines: `2025-01-08 10:30:45`

use super::error::{FormatError, Result};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Wall clock used by the zone-less encodings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeZoneMode {
    /// The host's local time zone (default)
    #[default]
    Local,
    /// Coordinated Universal Time
    Utc,
}

/// Timestamp encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    /// ISO 8601 without offset, microsecond precision: `2025-01-08T10:30:45.123456`
    Iso8601Micros,

    /// Bunyan `time`: `2025-01-08T10:30:45.123Z`
    ///
    /// Always rendered in UTC regardless of the requested zone. Sub-millisecond
    /// digits are truncated, not rounded.
    Bunyan,

    /// Second precision for text lines: `2025-01-08 10:30:45`
    DateTime,
}

impl TimestampFormat {
    fn pattern(&self) -> &'static str {
        match self {
            TimestampFormat::Iso8601Micros => "%Y-%m-%dT%H:%M:%S%.6f",
            TimestampFormat::Bunyan => "%Y-%m-%dT%H:%M:%S%.3fZ",
            TimestampFormat::DateTime => "%Y-%m-%d %H:%M:%S",
        }
    }

    /// Format a `DateTime<Utc>` in the given zone
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>, zone: TimeZoneMode) -> String {
        match (self, zone) {
            (TimestampFormat::Bunyan, _) | (_, TimeZoneMode::Utc) => {
                datetime.format(self.pattern()).to_string()
            }
            (_, TimeZoneMode::Local) => datetime
                .with_timezone(&Local)
                .format(self.pattern())
                .to_string(),
        }
    }

    /// Format fractional epoch seconds in the given zone
    pub fn format_epoch(&self, seconds: f64, zone: TimeZoneMode) -> Result<String> {
        Ok(self.format(&epoch_to_datetime(seconds)?, zone))
    }
}

/// Convert fractional epoch seconds to a UTC datetime, rounded to the microsecond
pub fn epoch_to_datetime(seconds: f64) -> Result<DateTime<Utc>> {
    let micros = (seconds * 1_000_000.0).round();
    if !micros.is_finite() || micros < i64::MIN as f64 || micros > i64::MAX as f64 {
        return Err(FormatError::timestamp(seconds));
    }
    DateTime::from_timestamp_micros(micros as i64).ok_or_else(|| FormatError::timestamp(seconds))
}

/// Process start time: `created` minus `relative_created` milliseconds
#[must_use]
pub fn process_start(created: f64, relative_created_ms: f64) -> f64 {
    created - relative_created_ms / 1000.0
}
