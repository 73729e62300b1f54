//! Abstract Syntax Tree (AST) definitions for Portcullis
//!
//! This module contains:
//! - Directives and scope nodes as read from configuration
//! - Rules and actions
//! - Per-scope rule declarations and resolved rule sets

pub mod directive;
pub mod rule;
pub mod ruleset;
pub mod scope;

pub use directive::{Directive, ScopeNode, ACCESS_DIRECTIVE, DENY_STATUS_DIRECTIVE};
pub use rule::{Action, Rule};
pub use ruleset::{RuleSet, DEFAULT_DENY_STATUS};
pub use scope::ScopeRules;
