//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use portcullis_sdk::{
    AccessControl, AccessControlBuilder, AccessRequest, AccessResponse, Decision, RequestContext,
};

/// Test helper to create an AccessControl from an inline scope document
pub struct TestAccess {
    builder: AccessControlBuilder,
}

impl TestAccess {
    pub fn new(config_yaml: &str) -> Self {
        Self {
            builder: AccessControlBuilder::new().with_config_content(config_yaml.trim()),
        }
    }

    pub fn strict(mut self) -> Self {
        self.builder = self.builder.strict_variables(true);
        self
    }

    pub async fn build(self) -> AccessControl {
        self.builder
            .build()
            .await
            .expect("Failed to build access control")
    }
}

/// Build a request context from name/value pairs
pub fn context(vars: &[(&str, &str)]) -> RequestContext {
    vars.iter().copied().collect()
}

/// Check a request and panic on engine errors
pub fn check(access: &AccessControl, scope: &str, vars: &[(&str, &str)]) -> AccessResponse {
    access
        .check(&AccessRequest::new(scope, context(vars)).with_trace())
        .expect("Check failed")
}

/// Assertion helpers for AccessResponse
pub trait ResponseAssertions {
    fn assert_decision(&self, expected: Decision);
    fn assert_denied_with(&self, status: u16);
    fn assert_proceeds(&self);
}

impl ResponseAssertions for AccessResponse {
    fn assert_decision(&self, expected: Decision) {
        assert_eq!(
            self.decision, expected,
            "Expected {:?} in scope '{}', got {:?} (trace: {:?})",
            expected, self.scope, self.decision, self.trace
        );
    }

    fn assert_denied_with(&self, status: u16) {
        self.assert_decision(Decision::Deny(status));
        assert_eq!(self.reject_status(), Some(status));
    }

    fn assert_proceeds(&self) {
        self.assert_decision(Decision::Decline);
        assert_eq!(self.reject_status(), None);
    }
}
