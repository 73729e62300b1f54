//! Configuration directives and the scope tree they live in

use serde::{Deserialize, Serialize};

/// Declares one access rule: `access <allow|deny> <condition>`
pub const ACCESS_DIRECTIVE: &str = "access";

/// Sets the status reported by deny rules: `access_deny_status <code>`
pub const DENY_STATUS_DIRECTIVE: &str = "access_deny_status";

/// A single directive occurrence with its raw arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    /// Directive name (e.g., "access")
    pub name: String,

    /// Arguments in declaration order, not including the name
    pub args: Vec<String>,

    /// Position of the directive within its scope, starting at 1
    #[serde(default)]
    pub line: usize,
}

impl Directive {
    /// Create a new directive
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
            line: 0,
        }
    }

    /// Set the position
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

/// A configuration scope (e.g., a server or a location) and its nested scopes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeNode {
    /// Unique scope identifier
    pub id: String,

    /// Directives declared directly in this scope, in order
    pub directives: Vec<Directive>,

    /// Nested scopes, in order
    pub children: Vec<ScopeNode>,
}

impl ScopeNode {
    /// Create a new, empty scope
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            directives: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a directive
    pub fn add_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    /// Add a nested scope
    pub fn add_child(mut self, child: ScopeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Number of scopes in this subtree, including this one
    pub fn scope_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ScopeNode::scope_count)
            .sum::<usize>()
    }
}
