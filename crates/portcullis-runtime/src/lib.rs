//! Portcullis Runtime - request-time evaluation of access rules
//!
//! This crate provides the decision engine that walks a resolved rule set
//! for one request, plus the reference evaluator for template conditions.

pub mod context;
pub mod engine;
pub mod error;
pub mod template_evaluator;
pub mod trace;

// Re-export main types
pub use context::RequestContext;
pub use engine::DecisionEngine;
pub use error::{Result, RuntimeError};
pub use template_evaluator::TemplateEvaluator;
pub use trace::{EvaluationTrace, MatchOutcome, RuleTrace};
