//! Portcullis Parser - YAML to AST parser
//!
//! This crate turns access-control configuration documents into the
//! [`ScopeNode`](portcullis_core::ScopeNode) tree consumed by the compiler.

pub mod error;
pub mod scope_parser;
pub mod yaml_parser;

// Re-export main parser types
pub use error::{ParseError, Result};
pub use scope_parser::ScopeParser;
pub use yaml_parser::YamlParser;
