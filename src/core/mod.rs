//! Core record model, message interpolation and shared formatter types

pub mod baseline;
pub mod config;
pub mod error;
pub mod field_value;
pub mod formatter;
pub mod interpolate;
pub mod log_level;
pub mod output_format;
pub mod record;
pub mod timestamp;

pub use baseline::{baseline, is_baseline, BaselineFields};
pub use config::{system_hostname, FormatterConfig, HostnameSource};
pub use error::{FormatError, Result};
pub use field_value::{Extras, FieldValue};
pub use formatter::Formatter;
pub use interpolate::interpolate;
pub use log_level::LogLevel;
pub use output_format::OutputFormat;
pub use record::LogRecord;
pub use timestamp::{TimeZoneMode, TimestampFormat};
