//! Compiled configuration snapshots
//!
//! A snapshot is never modified. A reload compiles a new snapshot and
//! publishes it through a watch channel; checks already running keep the
//! snapshot they cloned.

use portcullis_compiler::CompiledScopes;
use portcullis_core::ir::Template;
use std::sync::Arc;
use tokio::sync::watch;

/// Point-in-time view of the access-control configuration
#[derive(Debug, Clone)]
pub struct PolicySnapshot {
    scopes: Arc<CompiledScopes<Template>>,
    version: u64,
}

impl PolicySnapshot {
    pub(crate) fn new(scopes: CompiledScopes<Template>, version: u64) -> Self {
        Self {
            scopes: Arc::new(scopes),
            version,
        }
    }

    pub fn scopes(&self) -> &CompiledScopes<Template> {
        &self.scopes
    }

    /// Starts at 1 and increases with every successful reload
    pub fn version(&self) -> u64 {
        self.version
    }
}

/// Receiving side of the snapshot channel
#[derive(Debug, Clone)]
pub(crate) struct PolicyStore {
    rx: watch::Receiver<PolicySnapshot>,
}

impl PolicyStore {
    pub(crate) fn new(rx: watch::Receiver<PolicySnapshot>) -> Self {
        Self { rx }
    }

    pub(crate) fn snapshot(&self) -> PolicySnapshot {
        self.rx.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<PolicySnapshot> {
        self.rx.clone()
    }
}
