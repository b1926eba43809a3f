//! # Rust Log Formats
//!
//! Opinionated formatters that turn a structured log record into a single
//! line of output.
//!
//! ## Formats
//!
//! - **JSON-Simple**: logger, timestamp, level, process and thread identity;
//!   extras nested under `extra`
//! - **JSON-Advanced**: adds call-site location and process start time;
//!   extras flattened into the object
//! - **Bunyan**: the Bunyan log record schema (`v: 0`), readable by `bunyan` tooling
//! - **Text-Simple**: `[LEVEL] [date] message`
//! - **Text-Compact**: `[L date l:logger f:file ln:line] message [key:value]`
//!
//! Formatters are stateless and `Send + Sync`; one instance can serve every
//! thread.
//!
//! ```
//! use rust_log_formats::prelude::*;
//!
//! let record = LogRecord::new("app.http", LogLevel::Info, "GET %s -> %d")
//!     .with_arg("/health")
//!     .with_arg(200)
//!     .with_extra("latency_ms", 3);
//!
//! let line = BunyanFormatter::with_hostname("web-1").format(&record)?;
//! assert!(line.contains(r#""msg": "GET /health -> 200""#));
//! # Ok::<(), rust_log_formats::FormatError>(())
//! ```

#[cfg(feature = "log-bridge")]
pub mod bridge;
pub mod core;
pub mod formatters;

pub mod prelude {
    pub use crate::core::{
        FieldValue, FormatError, Formatter, FormatterConfig, HostnameSource, LogLevel, LogRecord,
        OutputFormat, Result, TimeZoneMode,
    };
    pub use crate::formatters::{
        BunyanFormatter, JsonAdvancedFormatter, JsonSimpleFormatter, TextCompactFormatter,
        TextSimpleFormatter,
    };
}

pub use crate::core::{
    baseline, interpolate, BaselineFields, Extras, FieldValue, FormatError, Formatter,
    FormatterConfig, HostnameSource, LogLevel, LogRecord, OutputFormat, Result, TimeZoneMode,
    TimestampFormat,
};
pub use formatters::{
    BunyanFormatter, JsonAdvancedFormatter, JsonSimpleFormatter, TextCompactFormatter,
    TextSimpleFormatter,
};
