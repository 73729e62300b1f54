//! Evaluation traces for auditing access decisions
//!
//! A trace keeps what the caller-visible [`Decision`](portcullis_core::Decision)
//! deliberately drops: whether a `Decline` came from an explicit allow rule
//! or from no rule matching at all.

use portcullis_core::Action;
use serde::{Deserialize, Serialize};

/// One evaluated rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTrace {
    /// Position in the rule set, starting at 0
    pub index: usize,

    pub action: Action,

    /// The condition's string result
    pub result: String,

    /// Whether the result was truthy
    pub matched: bool,
}

/// Why evaluation stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Every rule was falsy, or there were no rules
    NoMatch,

    /// An allow rule matched
    Allowed { rule_index: usize },

    /// A deny rule matched
    Denied { rule_index: usize, status: u16 },
}

impl MatchOutcome {
    /// Index of the rule that decided, if any
    pub fn rule_index(&self) -> Option<usize> {
        match self {
            MatchOutcome::NoMatch => None,
            MatchOutcome::Allowed { rule_index } | MatchOutcome::Denied { rule_index, .. } => {
                Some(*rule_index)
            }
        }
    }
}

/// Full record of one evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationTrace {
    /// Rules in the order they were evaluated; stops at the first match
    pub rules: Vec<RuleTrace>,

    pub outcome: MatchOutcome,

    /// Total rules configured for the scope
    pub rule_count: usize,
}

impl EvaluationTrace {
    /// Whether evaluation stopped before reaching the last rule
    pub fn short_circuited(&self) -> bool {
        self.rules.len() < self.rule_count
    }
}
