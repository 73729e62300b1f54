//! Request/Response types for AccessControl

use crate::error::Result;
use portcullis_core::Decision;
use portcullis_runtime::{EvaluationTrace, RequestContext};
use serde::{Deserialize, Serialize};

/// Per-check options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckOptions {
    /// Record which rules were evaluated
    #[serde(default)]
    pub enable_trace: bool,
}

/// One request to gate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessRequest {
    /// Scope whose effective rules apply (e.g., a location)
    pub scope: String,

    /// Request variables available to conditions
    #[serde(default)]
    pub context: RequestContext,

    #[serde(default)]
    pub options: CheckOptions,
}

impl AccessRequest {
    /// Create a new access request
    pub fn new(scope: impl Into<String>, context: RequestContext) -> Self {
        Self {
            scope: scope.into(),
            context,
            options: CheckOptions::default(),
        }
    }

    /// Enable execution tracing
    pub fn with_trace(mut self) -> Self {
        self.options.enable_trace = true;
        self
    }
}

/// Outcome of one check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessResponse {
    pub decision: Decision,

    /// Scope the request was checked against
    pub scope: String,

    /// Version of the configuration snapshot that decided
    pub snapshot_version: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<EvaluationTrace>,
}

impl AccessResponse {
    /// Status to reject the request with; `None` means proceed
    pub fn reject_status(&self) -> Option<u16> {
        self.decision.status()
    }

    /// The trace as JSON, when one was recorded
    pub fn trace_json(&self) -> Result<Option<String>> {
        self.trace
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(Into::into)
    }
}
