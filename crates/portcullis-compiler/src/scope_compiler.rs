//! Scope tree resolution
//!
//! Walks a [`ScopeNode`] tree parent-to-child, applies each scope's
//! directives and resolves its effective [`RuleSet`] against the parent's.
//! Every scope is resolved exactly once.

use crate::error::{CompileError, Result};
use portcullis_core::{ConditionCompiler, RuleSet, ScopeNode, ScopeRules};
use std::collections::HashMap;
use std::sync::Arc;

/// Effective rule sets for every scope of one configuration
#[derive(Debug)]
pub struct CompiledScopes<C> {
    root: String,
    order: Vec<String>,
    scopes: HashMap<String, Arc<RuleSet<C>>>,
    parents: HashMap<String, String>,
}

impl<C> CompiledScopes<C> {
    /// Id of the outermost scope
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Effective rule set of a scope
    pub fn get(&self, scope: &str) -> Option<&Arc<RuleSet<C>>> {
        self.scopes.get(scope)
    }

    /// Parent scope id; `None` for the root or an unknown scope
    pub fn parent_of(&self, scope: &str) -> Option<&str> {
        self.parents.get(scope).map(String::as_str)
    }

    /// Scope ids in resolution order (every parent before its children)
    pub fn scope_ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Scopes and their rule sets in resolution order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<RuleSet<C>>)> {
        self.order
            .iter()
            .filter_map(|id| self.scopes.get(id).map(|set| (id.as_str(), set)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Resolves scope trees into [`CompiledScopes`]
pub struct ScopeCompiler;

impl ScopeCompiler {
    pub fn compile<K>(root: &ScopeNode, compiler: &K) -> Result<CompiledScopes<K::Condition>>
    where
        K: ConditionCompiler + ?Sized,
    {
        let mut compiled = CompiledScopes {
            root: root.id.clone(),
            order: Vec::with_capacity(root.scope_count()),
            scopes: HashMap::with_capacity(root.scope_count()),
            parents: HashMap::new(),
        };

        Self::compile_node(root, None, compiler, &mut compiled)?;

        log::debug!(
            "resolved {} scopes under '{}'",
            compiled.len(),
            compiled.root
        );
        Ok(compiled)
    }

    fn compile_node<K>(
        node: &ScopeNode,
        parent: Option<(&str, &RuleSet<K::Condition>)>,
        compiler: &K,
        compiled: &mut CompiledScopes<K::Condition>,
    ) -> Result<()>
    where
        K: ConditionCompiler + ?Sized,
    {
        if compiled.scopes.contains_key(&node.id) {
            return Err(CompileError::DuplicateScope(node.id.clone()));
        }

        let mut own = ScopeRules::new();
        for directive in &node.directives {
            own.apply(directive, compiler)
                .map_err(|source| CompileError::Directive {
                    scope: node.id.clone(),
                    line: directive.line,
                    source,
                })?;
        }

        let declared_rules = own.has_rules();
        let resolved = Arc::new(RuleSet::resolve(own, parent.map(|(_, set)| set)));
        log::debug!(
            "scope '{}': {} rules ({}), deny status {}",
            node.id,
            resolved.len(),
            if declared_rules { "own" } else { "inherited" },
            resolved.deny_status()
        );

        if let Some((parent_id, _)) = parent {
            compiled
                .parents
                .insert(node.id.clone(), parent_id.to_string());
        }
        compiled.order.push(node.id.clone());
        compiled.scopes.insert(node.id.clone(), Arc::clone(&resolved));

        for child in &node.children {
            Self::compile_node(
                child,
                Some((node.id.as_str(), resolved.as_ref())),
                compiler,
                compiled,
            )?;
        }

        Ok(())
    }
}
