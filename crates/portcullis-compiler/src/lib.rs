//! Portcullis Compiler - configuration to resolved rule sets
//!
//! This crate compiles condition expressions into template IR and resolves
//! a configuration scope tree into one effective rule set per scope.

pub mod compiler;
pub mod error;
pub mod scope_compiler;
pub mod template_compiler;

// Re-export main types
pub use compiler::{Compiler, CompilerOptions};
pub use error::{CompileError, Result};
pub use scope_compiler::{CompiledScopes, ScopeCompiler};
pub use template_compiler::TemplateCompiler;
