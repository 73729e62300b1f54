//! Main compiler
//!
//! Provides a single entry point from configuration text to resolved scopes
//! using the template condition language.

use crate::error::Result;
use crate::scope_compiler::{CompiledScopes, ScopeCompiler};
use crate::template_compiler::TemplateCompiler;
use portcullis_core::ir::Template;
use portcullis_core::ScopeNode;
use portcullis_parser::ScopeParser;
use serde::{Deserialize, Serialize};

/// Compiler options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompilerOptions {
    /// Restrict conditions to these variables; `None` accepts any name
    #[serde(default)]
    pub known_variables: Option<Vec<String>>,
}

/// The main Portcullis compiler
pub struct Compiler {
    template_compiler: TemplateCompiler,
}

impl Compiler {
    /// Create a new compiler instance with default options
    pub fn new() -> Self {
        Self::with_options(CompilerOptions::default())
    }

    /// Create a new compiler instance with custom options
    pub fn with_options(options: CompilerOptions) -> Self {
        let template_compiler = match options.known_variables {
            Some(names) => TemplateCompiler::with_known_variables(names),
            None => TemplateCompiler::new(),
        };
        Self { template_compiler }
    }

    /// Parse and compile a YAML scope document
    pub fn compile_str(&self, yaml: &str) -> Result<CompiledScopes<Template>> {
        let root = ScopeParser::parse(yaml)?;
        self.compile_scopes(&root)
    }

    /// Compile an already parsed scope tree
    pub fn compile_scopes(&self, root: &ScopeNode) -> Result<CompiledScopes<Template>> {
        ScopeCompiler::compile(root, &self.template_compiler)
    }

    pub fn template_compiler(&self) -> &TemplateCompiler {
        &self.template_compiler
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
