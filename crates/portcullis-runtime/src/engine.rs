//! Decision engine
//!
//! First-match-wins evaluation of a resolved rule set:
//! 1. rules are evaluated in declaration order
//! 2. the first truthy condition decides; later rules are never evaluated
//! 3. a deny rule yields `Deny(deny_status)`, an allow rule yields `Decline`
//! 4. no truthy rule yields `Decline`
//!
//! A failing condition aborts evaluation with an error; it never turns into
//! a decision.

use crate::error::{Result, RuntimeError};
use crate::trace::{EvaluationTrace, MatchOutcome, RuleTrace};
use portcullis_core::{is_truthy, Action, ConditionEvaluator, Decision, RuleSet};

/// Evaluates rule sets with a condition evaluator
///
/// Holds no per-request state; one engine may serve any number of
/// concurrent evaluations.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine<E> {
    evaluator: E,
}

impl<E: ConditionEvaluator> DecisionEngine<E> {
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Decide one request
    pub fn evaluate(
        &self,
        rule_set: &RuleSet<E::Condition>,
        context: &E::Context,
    ) -> Result<Decision> {
        let outcome = self.first_match(rule_set, context, None)?;
        Ok(Self::decision(outcome))
    }

    /// Decide one request and record every evaluated rule
    pub fn evaluate_with_trace(
        &self,
        rule_set: &RuleSet<E::Condition>,
        context: &E::Context,
    ) -> Result<(Decision, EvaluationTrace)> {
        let mut rules = Vec::new();
        let outcome = self.first_match(rule_set, context, Some(&mut rules))?;

        let trace = EvaluationTrace {
            rules,
            outcome,
            rule_count: rule_set.len(),
        };
        Ok((Self::decision(outcome), trace))
    }

    fn first_match(
        &self,
        rule_set: &RuleSet<E::Condition>,
        context: &E::Context,
        mut trace: Option<&mut Vec<RuleTrace>>,
    ) -> Result<MatchOutcome> {
        for (index, rule) in rule_set.rules().iter().enumerate() {
            let result = self
                .evaluator
                .evaluate(context, rule.condition())
                .map_err(|source| {
                    tracing::debug!(rule = index, error = %source, "access rule condition failed");
                    RuntimeError::ConditionEvaluation {
                        rule_index: index,
                        source,
                    }
                })?;

            let matched = is_truthy(&result);
            tracing::trace!(
                rule = index,
                action = %rule.action(),
                matched,
                "evaluated access rule"
            );

            if let Some(trace) = trace.as_deref_mut() {
                trace.push(RuleTrace {
                    index,
                    action: rule.action(),
                    result: result.into_owned(),
                    matched,
                });
            }

            if !matched {
                continue;
            }

            tracing::debug!(rule = index, action = %rule.action(), "access rule matched");
            return Ok(match rule.action() {
                Action::Deny => MatchOutcome::Denied {
                    rule_index: index,
                    status: rule_set.deny_status(),
                },
                Action::Allow => MatchOutcome::Allowed { rule_index: index },
            });
        }

        Ok(MatchOutcome::NoMatch)
    }

    fn decision(outcome: MatchOutcome) -> Decision {
        match outcome {
            MatchOutcome::Denied { status, .. } => Decision::Deny(status),
            MatchOutcome::Allowed { .. } | MatchOutcome::NoMatch => Decision::Decline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RequestContext;
    use crate::template_evaluator::TemplateEvaluator;
    use portcullis_compiler::TemplateCompiler;
    use portcullis_core::ir::Template;
    use portcullis_core::{ConditionCompiler, Rule};

    fn rule_set(rules: &[(Action, &str)], deny_status: Option<u16>) -> RuleSet<Template> {
        let compiler = TemplateCompiler::new();
        let rules = rules
            .iter()
            .map(|(action, source)| Rule::new(*action, compiler.compile(source).unwrap()))
            .collect();
        RuleSet::from_rules(rules, deny_status)
    }

    fn engine() -> DecisionEngine<TemplateEvaluator> {
        DecisionEngine::new(TemplateEvaluator::new())
    }

    #[test]
    fn test_empty_rule_set_declines() {
        let decision = engine()
            .evaluate(&RuleSet::empty(), &RequestContext::new())
            .unwrap();
        assert_eq!(decision, Decision::Decline);
    }

    #[test]
    fn test_deny_uses_rule_set_status() {
        let set = rule_set(&[(Action::Deny, "1")], Some(451));
        let decision = engine().evaluate(&set, &RequestContext::new()).unwrap();
        assert_eq!(decision, Decision::Deny(451));
    }

    #[test]
    fn test_allow_collapses_to_decline() {
        let set = rule_set(&[(Action::Allow, "1"), (Action::Deny, "1")], None);
        let (decision, trace) = engine()
            .evaluate_with_trace(&set, &RequestContext::new())
            .unwrap();

        assert_eq!(decision, Decision::Decline);
        assert_eq!(trace.outcome, MatchOutcome::Allowed { rule_index: 0 });
        assert_eq!(trace.rules.len(), 1);
        assert!(trace.short_circuited());
    }

    #[test]
    fn test_falsy_rules_are_skipped() {
        let set = rule_set(&[(Action::Deny, ""), (Action::Deny, "0"), (Action::Deny, "00")], None);
        let (decision, trace) = engine()
            .evaluate_with_trace(&set, &RequestContext::new())
            .unwrap();

        assert_eq!(decision, Decision::Deny(403));
        assert_eq!(trace.outcome.rule_index(), Some(2));
        assert_eq!(
            trace.rules.iter().map(|r| r.matched).collect::<Vec<_>>(),
            vec![false, false, true]
        );
    }

    #[test]
    fn test_no_match_trace() {
        let set = rule_set(&[(Action::Deny, "$flag")], None);
        let (decision, trace) = engine()
            .evaluate_with_trace(&set, &RequestContext::new())
            .unwrap();

        assert_eq!(decision, Decision::Decline);
        assert_eq!(trace.outcome, MatchOutcome::NoMatch);
        assert!(!trace.short_circuited());
        assert_eq!(trace.rules[0].result, "");
    }
}
