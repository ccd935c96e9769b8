//! Error types for token-auth
//!
//! Every fallible operation in the crate returns `Result<T, Error>`.
//! Credential errors carry the exact user-visible messages of the scheme;
//! the remaining variants belong to the config and CLI layers.

use thiserror::Error;

/// The main error type for token-auth
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Credential Errors
    // ============================================================================
    /// Required attribute absent from a parsed header
    #[error("{attribute} attribute is required")]
    MissingAttribute { attribute: String },

    /// Required field absent when building credentials
    #[error("\"{field}\" is missing")]
    MissingField { field: String },

    #[error("unsupported \"{value}\" coverage")]
    UnsupportedCoverage { value: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a missing header attribute error
    pub fn missing_attribute(attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            attribute: attribute.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an unsupported coverage error
    pub fn unsupported_coverage(value: impl Into<String>) -> Self {
        Self::UnsupportedCoverage {
            value: value.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True when a required credential field was absent, on either path
    pub fn is_missing_field(&self) -> bool {
        matches!(
            self,
            Error::MissingAttribute { .. } | Error::MissingField { .. }
        )
    }

    /// Name of the offending field, if the error concerns one
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::MissingAttribute { attribute } => Some(attribute),
            Error::MissingField { field } => Some(field),
            Error::UnsupportedCoverage { .. } => Some(crate::types::COVERAGE),
            _ => None,
        }
    }
}

/// Result type alias for token-auth
pub type Result<T> = std::result::Result<T, Error>;
