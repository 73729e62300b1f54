//! Error types for Portcullis Core

use thiserror::Error;

/// Configuration-time error; fatal to configuration loading
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid number of arguments in \"{directive}\" directive: expected {expected}, found {found}")]
    InvalidArity {
        directive: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid action \"{0}\" in \"access\" directive")]
    UnknownAction(String),

    #[error("failed to compile condition \"{expression}\": {source}")]
    ConditionCompile {
        expression: String,
        #[source]
        source: ConditionError,
    },

    #[error("invalid status code \"{0}\"")]
    InvalidStatusCode(String),

    #[error("\"{0}\" directive is duplicate")]
    DuplicateDirective(String),

    #[error("unknown directive \"{0}\"")]
    UnknownDirective(String),
}

/// Failure reported by a condition compiler or evaluator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ConditionError {
    pub message: String,
}

impl ConditionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
