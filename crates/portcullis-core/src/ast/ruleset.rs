//! Effective rule sets and scope inheritance
//!
//! A scope's effective rule set is resolved once, against its parent's
//! already-resolved rule set:
//! - no rules declared: the parent's rule list is shared by reference
//! - any rule declared: only the scope's own rules apply
//!
//! The deny status resolves independently of the rules: own value, else the
//! parent's effective value, else [`DEFAULT_DENY_STATUS`].

use std::sync::Arc;

use super::rule::Rule;
use super::scope::ScopeRules;

/// Status reported by deny rules when no scope sets one ("403 Forbidden")
pub const DEFAULT_DENY_STATUS: u16 = 403;

/// Ordered rules plus the status to report when a deny rule matches
///
/// Read-only once resolved, so it can be shared across concurrent requests.
#[derive(Debug)]
pub struct RuleSet<C> {
    rules: Option<Arc<[Rule<C>]>>,
    deny_status: u16,
}

impl<C> RuleSet<C> {
    /// Rule set with no rules and the default deny status
    pub fn empty() -> Self {
        Self {
            rules: None,
            deny_status: DEFAULT_DENY_STATUS,
        }
    }

    /// Build a rule set directly from rules, in evaluation order
    pub fn from_rules(rules: Vec<Rule<C>>, deny_status: Option<u16>) -> Self {
        Self {
            rules: if rules.is_empty() {
                None
            } else {
                Some(Arc::from(rules))
            },
            deny_status: deny_status.unwrap_or(DEFAULT_DENY_STATUS),
        }
    }

    /// Resolve a scope's own declarations against its parent's rule set
    pub fn resolve(own: ScopeRules<C>, parent: Option<&RuleSet<C>>) -> Self {
        let (rules, deny_status) = own.into_parts();

        let rules = match rules {
            Some(rules) => Some(Arc::from(rules)),
            None => parent.and_then(|parent| parent.rules.clone()),
        };

        let deny_status = deny_status
            .or_else(|| parent.map(|parent| parent.deny_status))
            .unwrap_or(DEFAULT_DENY_STATUS);

        Self { rules, deny_status }
    }

    /// Rules in evaluation order; empty when none are configured
    pub fn rules(&self) -> &[Rule<C>] {
        self.rules.as_deref().unwrap_or(&[])
    }

    pub fn deny_status(&self) -> u16 {
        self.deny_status
    }

    pub fn is_empty(&self) -> bool {
        self.rules().is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules().len()
    }

    /// Whether both rule sets evaluate the very same rule list
    pub fn shares_rules_with(&self, other: &RuleSet<C>) -> bool {
        match (&self.rules, &other.rules) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<C> Clone for RuleSet<C> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            deny_status: self.deny_status,
        }
    }
}

impl<C> Default for RuleSet<C> {
    fn default() -> Self {
        Self::empty()
    }
}
