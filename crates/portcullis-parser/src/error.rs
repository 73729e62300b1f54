//! Parser error types

use thiserror::Error;

/// Parser error
#[derive(Error, Debug)]
pub enum ParseError {
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Missing required field
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Unknown field
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;

impl ParseError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ParseError::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}
