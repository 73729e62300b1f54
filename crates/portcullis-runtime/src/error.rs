//! Runtime error types

use portcullis_core::ConditionError;
use thiserror::Error;

/// Runtime error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// A rule's condition could not be evaluated; no decision was made
    #[error("Condition evaluation failed for rule #{rule_index}: {source}")]
    ConditionEvaluation {
        rule_index: usize,
        #[source]
        source: ConditionError,
    },
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
