//! Core AccessControl implementation

use super::snapshot::{PolicySnapshot, PolicyStore};
use super::types::{AccessRequest, AccessResponse};
use crate::config::EngineConfig;
use crate::error::{Result, SdkError};
use portcullis_compiler::{CompileError, CompiledScopes, Compiler};
use portcullis_core::ir::Template;
use portcullis_core::Decision;
use portcullis_runtime::{DecisionEngine, TemplateEvaluator};
use std::path::Path;
use tokio::sync::watch;

pub struct AccessControl {
    /// Request-time evaluator
    engine: DecisionEngine<TemplateEvaluator>,

    /// Compiles configuration for the initial load and every reload
    compiler: Compiler,

    /// Configuration
    config: EngineConfig,

    /// Publishes new snapshots
    snapshot_tx: watch::Sender<PolicySnapshot>,

    /// Current snapshot
    store: PolicyStore,
}

impl AccessControl {
    /// Create a new access-control engine from configuration
    pub async fn new(config: EngineConfig) -> Result<Self> {
        let content = Self::load_content(&config).await?;
        let compiler = Compiler::with_options(config.compiler_options());
        let snapshot = PolicySnapshot::new(Self::compile(&compiler, &content)?, 1);

        tracing::info!(
            scopes = snapshot.scopes().len(),
            root = snapshot.scopes().root(),
            "access control configuration loaded"
        );

        let evaluator = if config.strict_variables {
            TemplateEvaluator::strict()
        } else {
            TemplateEvaluator::new()
        };

        let (snapshot_tx, snapshot_rx) = watch::channel(snapshot);

        Ok(Self {
            engine: DecisionEngine::new(evaluator),
            compiler,
            config,
            snapshot_tx,
            store: PolicyStore::new(snapshot_rx),
        })
    }

    /// Gate one request
    ///
    /// `Deny` must be answered with its status; `Decline` means access
    /// control has no objection. An error means no decision could be made.
    pub fn check(&self, request: &AccessRequest) -> Result<AccessResponse> {
        let snapshot = self.store.snapshot();
        let rule_set = snapshot
            .scopes()
            .get(&request.scope)
            .ok_or_else(|| SdkError::UnknownScope(request.scope.clone()))?;

        let enable_trace = self.config.enable_trace || request.options.enable_trace;
        let evaluation = if enable_trace {
            self.engine
                .evaluate_with_trace(rule_set, &request.context)
                .map(|(decision, trace)| (decision, Some(trace)))
        } else {
            self.engine
                .evaluate(rule_set, &request.context)
                .map(|decision| (decision, None))
        };

        let (decision, trace) = evaluation.map_err(|err| {
            tracing::error!(
                scope = %request.scope,
                error = %err,
                "access control evaluation failed"
            );
            SdkError::from(err)
        })?;

        if let Decision::Deny(status) = decision {
            tracing::error!(
                scope = %request.scope,
                status,
                "access denied by access_control rules"
            );
        }

        Ok(AccessResponse {
            decision,
            scope: request.scope.clone(),
            snapshot_version: snapshot.version(),
            trace,
        })
    }

    /// Replace the configuration with a newly compiled one
    ///
    /// On failure the current configuration stays in effect.
    pub fn reload_from_str(&self, content: &str) -> Result<u64> {
        let scopes = Self::compile(&self.compiler, content).map_err(|err| {
            tracing::error!(error = %err, "configuration reload failed");
            err
        })?;

        // versioned under the channel lock so concurrent reloads publish in order
        let scope_count = scopes.len();
        let mut version = 0;
        self.snapshot_tx.send_modify(|current| {
            version = current.version() + 1;
            *current = PolicySnapshot::new(scopes, version);
        });

        tracing::info!(scopes = scope_count, version, "configuration reloaded");
        Ok(version)
    }

    /// Reload from a scope document file
    pub async fn reload_from_file(&self, path: impl AsRef<Path>) -> Result<u64> {
        let content = tokio::fs::read_to_string(path.as_ref()).await?;
        self.reload_from_str(&content)
    }

    /// Reload from the configured file
    pub async fn reload(&self) -> Result<u64> {
        match &self.config.config_file {
            Some(path) => self.reload_from_file(path).await,
            None => Err(SdkError::ConfigError(
                "no configuration file to reload from".to_string(),
            )),
        }
    }

    /// Current configuration snapshot
    pub fn snapshot(&self) -> PolicySnapshot {
        self.store.snapshot()
    }

    /// Version of the current snapshot
    pub fn snapshot_version(&self) -> u64 {
        self.store.snapshot().version()
    }

    /// Receiver notified whenever a new snapshot is published
    pub fn subscribe(&self) -> watch::Receiver<PolicySnapshot> {
        self.store.subscribe()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    async fn load_content(config: &EngineConfig) -> Result<String> {
        match (&config.config_content, &config.config_file) {
            (Some(content), _) => Ok(content.clone()),
            (None, Some(path)) => {
                tracing::debug!("loading access control configuration from {:?}", path);
                Ok(tokio::fs::read_to_string(path).await?)
            }
            (None, None) => Err(SdkError::ConfigError(
                "no access control configuration provided".to_string(),
            )),
        }
    }

    fn compile(compiler: &Compiler, content: &str) -> Result<CompiledScopes<Template>> {
        compiler.compile_str(content).map_err(|err| match err {
            CompileError::Parse(parse) => SdkError::ParseError(parse),
            other => SdkError::CompileError(other),
        })
    }
}
