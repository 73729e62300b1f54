//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Parser error
    #[error("Parser error: {0}")]
    ParseError(#[from] portcullis_parser::ParseError),

    /// Compiler error
    #[error("Compiler error: {0}")]
    CompileError(#[from] portcullis_compiler::CompileError),

    /// Runtime error
    #[error("Runtime error: {0}")]
    RuntimeError(#[from] portcullis_runtime::RuntimeError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Engine configuration could not be deserialized
    #[error("Invalid engine configuration: {0}")]
    EngineConfigError(#[from] serde_yaml::Error),

    /// Trace serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Request names a scope the configuration does not define
    #[error("Unknown scope: {0}")]
    UnknownScope(String),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

impl SdkError {
    /// Status the caller should answer with when a check fails
    ///
    /// A condition that cannot be evaluated is an internal failure (500);
    /// it never becomes an allow or a deny. Load-time errors have no
    /// request to answer and return `None`.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            SdkError::RuntimeError(_) | SdkError::UnknownScope(_) => Some(500),
            _ => None,
        }
    }
}
