//! Error types for the formatters

pub type Result<T> = std::result::Result<T, FormatError>;

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Message args do not match the template placeholders
    #[error("Cannot interpolate message '{template}': {message}")]
    Interpolation { template: String, message: String },

    /// Record timestamp outside the representable date range
    #[error("Timestamp {seconds} is out of range")]
    Timestamp { seconds: f64 },

    /// Hostname lookup failure
    #[error("Hostname resolution failed: {message}")]
    Hostname { message: String },

    /// A value that the output encoding cannot represent
    #[error("Cannot serialize field '{key}': {message}")]
    Serialization { key: String, message: String },

    /// JSON encoder error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl FormatError {
    /// Create an interpolation error for a template
    pub fn interpolation(template: impl Into<String>, message: impl Into<String>) -> Self {
        FormatError::Interpolation {
            template: template.into(),
            message: message.into(),
        }
    }

    /// Create a timestamp range error
    pub fn timestamp(seconds: f64) -> Self {
        FormatError::Timestamp { seconds }
    }

    /// Create a hostname resolution error
    pub fn hostname(message: impl Into<String>) -> Self {
        FormatError::Hostname {
            message: message.into(),
        }
    }

    /// Create a serialization error for a field
    pub fn serialization(key: impl Into<String>, message: impl Into<String>) -> Self {
        FormatError::Serialization {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        FormatError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
