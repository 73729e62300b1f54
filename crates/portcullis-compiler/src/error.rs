//! Compiler error types

use portcullis_core::ConfigError;
use portcullis_parser::ParseError;
use thiserror::Error;

/// Compiler error
#[derive(Error, Debug)]
pub enum CompileError {
    /// A directive was rejected; carries where it was declared
    #[error("in scope '{scope}', directive #{line}: {source}")]
    Directive {
        scope: String,
        line: usize,
        #[source]
        source: ConfigError,
    },

    /// Two scopes share an id
    #[error("Duplicate scope id: {0}")]
    DuplicateScope(String),

    /// Configuration document could not be parsed
    #[error("Parser error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;

impl CompileError {
    /// The underlying configuration error, if any
    pub fn config_error(&self) -> Option<&ConfigError> {
        match self {
            CompileError::Directive { source, .. } => Some(source),
            _ => None,
        }
    }
}
