//! Portcullis SDK
//!
//! High-level API for gating requests with access-control rules: load a
//! configuration, check requests against a scope, reload without
//! interrupting in-flight checks.

pub mod access_control;
pub mod builder;
pub mod config;
pub mod error;

// Re-export main types
pub use access_control::{
    AccessControl, AccessRequest, AccessResponse, CheckOptions, PolicySnapshot,
};
pub use builder::AccessControlBuilder;
pub use config::EngineConfig;
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use portcullis_core::{Action, Decision, DEFAULT_DENY_STATUS};
pub use portcullis_runtime::{EvaluationTrace, MatchOutcome, RequestContext};
