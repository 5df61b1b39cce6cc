//! Configuration error types

use thiserror::Error;

/// Errors raised while reading procedure parameters
///
/// Absence of an optional key is never an error. Presence with the wrong
/// runtime type, or a value outside a closed set of names, always is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A required key was not supplied (or was supplied empty)
    #[error("Missing required configuration value: {key}")]
    MissingValue { key: String },

    /// Key present but its value has the wrong runtime type
    #[error("The value of {key} must be of type {expected}, got {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Value of the right type but not a member of the accepted set
    #[error("{0}")]
    InvalidArgument(String),

    /// Raw input could not be read into a parameter map
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

impl ConfigError {
    /// Create a missing value error
    pub fn missing_value(key: impl Into<String>) -> Self {
        Self::MissingValue { key: key.into() }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(key: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected,
            found,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(format!("invalid JSON: {}", err))
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(format!("invalid YAML: {}", err))
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
