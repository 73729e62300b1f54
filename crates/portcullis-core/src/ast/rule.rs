//! Rule AST definitions

use crate::condition::ConditionCompiler;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::directive::ACCESS_DIRECTIVE;

/// What happens when a rule's condition is truthy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Stop checking and let the request proceed
    Allow,

    /// Stop checking and reject the request
    Deny,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Allow => "allow",
            Action::Deny => "deny",
        }
    }
}

impl FromStr for Action {
    type Err = ConfigError;

    /// Case-sensitive: only `allow` and `deny` are accepted
    fn from_str(token: &str) -> Result<Self> {
        match token {
            "allow" => Ok(Action::Allow),
            "deny" => Ok(Action::Deny),
            other => Err(ConfigError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One access rule: an action paired with a compiled condition
///
/// Fields are private; a rule cannot change once built.
#[derive(Debug, Clone)]
pub struct Rule<C> {
    action: Action,
    condition: C,
}

impl<C> Rule<C> {
    /// Create a new rule from an already compiled condition
    pub fn new(action: Action, condition: C) -> Self {
        Self { action, condition }
    }

    /// Build a rule from the arguments of an `access` directive
    ///
    /// Expects exactly `[action, condition]`. The condition is only compiled
    /// once the action token has been accepted.
    pub fn from_directive_args<K>(args: &[String], compiler: &K) -> Result<Self>
    where
        K: ConditionCompiler<Condition = C> + ?Sized,
    {
        let [action, expression] = args else {
            return Err(ConfigError::InvalidArity {
                directive: ACCESS_DIRECTIVE.to_string(),
                expected: 2,
                found: args.len(),
            });
        };

        let action: Action = action.parse()?;
        let condition =
            compiler
                .compile(expression)
                .map_err(|source| ConfigError::ConditionCompile {
                    expression: expression.clone(),
                    source,
                })?;

        Ok(Self::new(action, condition))
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn condition(&self) -> &C {
        &self.condition
    }
}
