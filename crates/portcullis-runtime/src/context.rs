//! Request context
//!
//! The request attributes a surrounding pipeline extracted for one request,
//! exposed to conditions as named string variables.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named request variables for one request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    variables: HashMap<String, String>,
}

impl RequestContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context from existing variables
    pub fn from_variables(variables: HashMap<String, String>) -> Self {
        Self { variables }
    }

    /// Add a variable
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RequestContext
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            variables: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let ctx = RequestContext::new()
            .with_variable("remote_addr", "10.0.0.1")
            .with_variable("uri", "/admin");

        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.get("remote_addr"), Some("10.0.0.1"));
        assert!(ctx.contains("uri"));
        assert_eq!(ctx.get("host"), None);
    }

    #[test]
    fn test_context_from_iter() {
        let ctx: RequestContext = [("a", "1"), ("b", "")].into_iter().collect();
        assert_eq!(ctx.get("b"), Some(""));
        assert!(!ctx.is_empty());
    }
}
