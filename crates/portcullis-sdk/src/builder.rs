//! Builder pattern for AccessControl

use crate::access_control::AccessControl;
use crate::config::EngineConfig;
use crate::error::Result;
use std::path::PathBuf;

/// Builder for AccessControl
///
/// # Example
///
/// ```rust,ignore
/// use portcullis_sdk::AccessControlBuilder;
///
/// // From a scope document on disk
/// let access = AccessControlBuilder::new()
///     .with_config_file("/etc/portcullis/access.yaml")
///     .build()
///     .await?;
///
/// // Inline content (for testing)
/// let access = AccessControlBuilder::new()
///     .with_config_content(yaml_content)
///     .strict_variables(true)
///     .build()
///     .await?;
/// ```
pub struct AccessControlBuilder {
    config: EngineConfig,
}

impl AccessControlBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
        }
    }

    /// Start from an existing configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the scope document from a file
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.config_file = Some(path.into());
        self
    }

    /// Use scope document content directly (alternative to a file path)
    pub fn with_config_content(mut self, content: impl Into<String>) -> Self {
        self.config.config_content = Some(content.into());
        self
    }

    /// Restrict conditions to these variables
    pub fn with_known_variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.known_variables = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Fail evaluation on unset variables instead of treating them as empty
    pub fn strict_variables(mut self, strict: bool) -> Self {
        self.config.strict_variables = strict;
        self
    }

    /// Record an evaluation trace for every check
    pub fn enable_trace(mut self, enable: bool) -> Self {
        self.config.enable_trace = enable;
        self
    }

    /// Build the engine
    pub async fn build(self) -> Result<AccessControl> {
        AccessControl::new(self.config).await
    }
}

impl Default for AccessControlBuilder {
    fn default() -> Self {
        Self::new()
    }
}
