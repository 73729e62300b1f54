//! Configuration types for AccessControl

use portcullis_compiler::CompilerOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;

/// Main engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Access-control scope document to load
    #[serde(default)]
    pub config_file: Option<PathBuf>,

    /// Scope document content - alternative to a file path
    #[serde(skip)]
    pub config_content: Option<String>,

    /// Fail evaluation when a condition references an unset variable
    #[serde(default)]
    pub strict_variables: bool,

    /// Variables conditions may reference; `None` accepts any
    #[serde(default)]
    pub known_variables: Option<Vec<String>>,

    /// Record an evaluation trace for every check
    #[serde(default)]
    pub enable_trace: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load engine configuration from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Set the scope document file
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Set the scope document content
    pub fn with_config_content(mut self, content: impl Into<String>) -> Self {
        self.config_content = Some(content.into());
        self
    }

    /// Enable strict variable lookup
    pub fn strict_variables(mut self, strict: bool) -> Self {
        self.strict_variables = strict;
        self
    }

    /// Enable tracing
    pub fn enable_trace(mut self, enable: bool) -> Self {
        self.enable_trace = enable;
        self
    }

    pub(crate) fn compiler_options(&self) -> CompilerOptions {
        CompilerOptions {
            known_variables: self.known_variables.clone(),
        }
    }
}
