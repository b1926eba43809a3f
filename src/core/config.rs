//! Formatter configuration
//!
//! Configuration never changes the shape of an output format. It only picks
//! the wall clock for zone-less timestamps and where the Bunyan `hostname`
//! comes from.

use super::error::{FormatError, Result};
use super::timestamp::TimeZoneMode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Where the Bunyan formatter takes its `hostname` from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostnameSource {
    /// Look the hostname up on every format call (default)
    #[default]
    Resolve,
    /// Look the hostname up once, when the formatter is built
    Cached,
    /// Use the given name
    Fixed(String),
}

impl HostnameSource {
    /// Resolve this source into a hostname
    pub fn resolve(&self) -> Result<String> {
        match self {
            HostnameSource::Fixed(name) => Ok(name.clone()),
            HostnameSource::Resolve | HostnameSource::Cached => system_hostname(),
        }
    }
}

/// The host name reported by the operating system
pub fn system_hostname() -> Result<String> {
    gethostname::gethostname()
        .into_string()
        .map_err(|raw| FormatError::hostname(format!("{:?} is not valid UTF-8", raw)))
}

/// Configuration shared by the formatters
///
/// # Examples
///
/// ```
/// use rust_log_formats::{FormatterConfig, HostnameSource, TimeZoneMode};
///
/// let config = FormatterConfig::new()
///     .with_timezone(TimeZoneMode::Utc)
///     .with_hostname(HostnameSource::Fixed("web-1".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Wall clock for local-time encodings; Bunyan is always UTC
    pub timezone: TimeZoneMode,
    /// Hostname source for the Bunyan formatter
    pub hostname: HostnameSource,
}

impl FormatterConfig {
    /// Create a new formatter configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wall clock used for local-time encodings
    #[must_use]
    pub fn with_timezone(mut self, timezone: TimeZoneMode) -> Self {
        self.timezone = timezone;
        self
    }

    /// Set the Bunyan hostname source
    #[must_use]
    pub fn with_hostname(mut self, hostname: HostnameSource) -> Self {
        self.hostname = hostname;
        self
    }

    /// Parse a configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|err| FormatError::config("FormatterConfig", err.to_string()))
    }

    /// Wrap this config in an Arc for sharing across formatters
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
