//! Formatter trait for log output encodings

use super::{error::Result, record::LogRecord};

/// Renders one record into one line of output
///
/// Implementations hold no mutable state, so a single instance can be shared
/// across threads and formatting the same record twice yields the same string.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> Result<String>;
    fn name(&self) -> &str;
}
