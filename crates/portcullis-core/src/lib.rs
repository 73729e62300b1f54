//! Portcullis Core - Core types and definitions for the Portcullis access-control engine
//!
//! This crate provides the fundamental types shared by every other crate:
//! - AST definitions (rules, rule sets, scope declarations, directives)
//! - Condition capability interfaces and the truthiness convention
//! - IR for the reference condition templates
//! - Decisions
//! - Error types

pub mod ast;
pub mod condition;
pub mod decision;
pub mod error;
pub mod ir;

// Re-export commonly used types
pub use ast::{Action, Directive, Rule, RuleSet, ScopeNode, ScopeRules, DEFAULT_DENY_STATUS};
pub use condition::{is_truthy, ConditionCompiler, ConditionEvaluator};
pub use decision::Decision;
pub use error::{ConditionError, ConfigError};
