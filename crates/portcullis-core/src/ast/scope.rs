//! Per-scope declarations collected while configuration is loaded

use crate::condition::ConditionCompiler;
use crate::error::{ConfigError, Result};

use super::directive::{Directive, ACCESS_DIRECTIVE, DENY_STATUS_DIRECTIVE};
use super::rule::Rule;

/// What a single scope declared by itself, before inheritance is applied
///
/// `rules` stays `None` until the first `access` directive; an empty list
/// is never observable.
#[derive(Debug)]
pub struct ScopeRules<C> {
    rules: Option<Vec<Rule<C>>>,
    deny_status: Option<u16>,
}

impl<C> ScopeRules<C> {
    /// Create an empty declaration buffer
    pub fn new() -> Self {
        Self {
            rules: None,
            deny_status: None,
        }
    }

    /// Apply one directive to this scope
    pub fn apply<K>(&mut self, directive: &Directive, compiler: &K) -> Result<()>
    where
        K: ConditionCompiler<Condition = C> + ?Sized,
    {
        match directive.name.as_str() {
            ACCESS_DIRECTIVE => self.declare_rule(&directive.args, compiler),
            DENY_STATUS_DIRECTIVE => self.set_deny_status(&directive.args),
            other => Err(ConfigError::UnknownDirective(other.to_string())),
        }
    }

    /// Append a rule built from `access` arguments
    ///
    /// Nothing is appended when construction fails.
    pub fn declare_rule<K>(&mut self, args: &[String], compiler: &K) -> Result<()>
    where
        K: ConditionCompiler<Condition = C> + ?Sized,
    {
        let rule = Rule::from_directive_args(args, compiler)?;
        log::trace!("declared {} rule #{}", rule.action(), self.rule_count() + 1);
        self.rules.get_or_insert_with(Vec::new).push(rule);
        Ok(())
    }

    /// Set the deny status from `access_deny_status` arguments
    pub fn set_deny_status(&mut self, args: &[String]) -> Result<()> {
        let [value] = args else {
            return Err(ConfigError::InvalidArity {
                directive: DENY_STATUS_DIRECTIVE.to_string(),
                expected: 1,
                found: args.len(),
            });
        };

        if self.deny_status.is_some() {
            return Err(ConfigError::DuplicateDirective(
                DENY_STATUS_DIRECTIVE.to_string(),
            ));
        }

        let status = value
            .parse::<u16>()
            .ok()
            .filter(|status| *status > 0)
            .ok_or_else(|| ConfigError::InvalidStatusCode(value.clone()))?;

        self.deny_status = Some(status);
        Ok(())
    }

    /// Whether this scope declared any rule of its own
    pub fn has_rules(&self) -> bool {
        self.rules.is_some()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.as_ref().map_or(0, Vec::len)
    }

    pub fn deny_status(&self) -> Option<u16> {
        self.deny_status
    }

    #[cfg(test)]
    pub(crate) fn push_for_test(&mut self, rule: Rule<C>) {
        self.rules.get_or_insert_with(Vec::new).push(rule);
    }

    pub(crate) fn into_parts(self) -> (Option<Vec<Rule<C>>>, Option<u16>) {
        (self.rules, self.deny_status)
    }
}

impl<C> Default for ScopeRules<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Action;
    use crate::error::ConditionError;

    struct EchoCompiler;

    impl ConditionCompiler for EchoCompiler {
        type Condition = String;

        fn compile(&self, source: &str) -> std::result::Result<String, ConditionError> {
            if source.contains('{') {
                return Err(ConditionError::new("unexpected brace"));
            }
            Ok(source.to_string())
        }
    }

    fn access(action: &str, condition: &str) -> Directive {
        Directive::new(
            ACCESS_DIRECTIVE,
            vec![action.to_string(), condition.to_string()],
        )
    }

    fn deny_status(value: &str) -> Directive {
        Directive::new(DENY_STATUS_DIRECTIVE, vec![value.to_string()])
    }

    #[test]
    fn test_rules_created_lazily() {
        let mut scope = ScopeRules::<String>::new();
        assert!(!scope.has_rules());

        scope.apply(&access("allow", "1"), &EchoCompiler).unwrap();
        scope.apply(&access("deny", "$x"), &EchoCompiler).unwrap();

        assert!(scope.has_rules());
        assert_eq!(scope.rule_count(), 2);
        let (rules, _) = scope.into_parts();
        let rules = rules.unwrap();
        assert_eq!(rules[0].action(), Action::Allow);
        assert_eq!(rules[1].action(), Action::Deny);
    }

    #[test]
    fn test_failed_rule_is_not_appended() {
        let mut scope = ScopeRules::<String>::new();
        assert!(scope.apply(&access("deny", "{"), &EchoCompiler).is_err());
        assert!(!scope.has_rules());

        scope.apply(&access("deny", "1"), &EchoCompiler).unwrap();
        assert!(scope.apply(&access("drop", "1"), &EchoCompiler).is_err());
        assert_eq!(scope.rule_count(), 1);
    }

    #[test]
    fn test_deny_status() {
        let mut scope = ScopeRules::<String>::new();
        scope.apply(&deny_status("429"), &EchoCompiler).unwrap();
        assert_eq!(scope.deny_status(), Some(429));
        assert!(!scope.has_rules());
    }

    #[test]
    fn test_deny_status_rejects_invalid_values() {
        for value in ["0", "-1", "abc", "70000", ""] {
            let mut scope = ScopeRules::<String>::new();
            assert_eq!(
                scope.apply(&deny_status(value), &EchoCompiler).unwrap_err(),
                ConfigError::InvalidStatusCode(value.to_string())
            );
        }
    }

    #[test]
    fn test_deny_status_duplicate() {
        let mut scope = ScopeRules::<String>::new();
        scope.apply(&deny_status("403"), &EchoCompiler).unwrap();
        assert_eq!(
            scope.apply(&deny_status("404"), &EchoCompiler).unwrap_err(),
            ConfigError::DuplicateDirective("access_deny_status".to_string())
        );
        assert_eq!(scope.deny_status(), Some(403));
    }

    #[test]
    fn test_deny_status_arity() {
        let mut scope = ScopeRules::<String>::new();
        let directive = Directive::new(DENY_STATUS_DIRECTIVE, Vec::new());
        assert!(matches!(
            scope.apply(&directive, &EchoCompiler),
            Err(ConfigError::InvalidArity { expected: 1, found: 0, .. })
        ));
    }

    #[test]
    fn test_unknown_directive() {
        let mut scope = ScopeRules::<String>::new();
        let directive = Directive::new("access_log", vec!["off".to_string()]);
        assert_eq!(
            scope.apply(&directive, &EchoCompiler).unwrap_err(),
            ConfigError::UnknownDirective("access_log".to_string())
        );
    }
}
