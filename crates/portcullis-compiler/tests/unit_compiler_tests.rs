//! Unit tests for compiling scope documents into resolved rule sets

use portcullis_compiler::*;
use portcullis_core::ir::Segment;
use portcullis_core::{Action, ConfigError};

const SITE_CONFIG: &str = r#"
version: "0.1"

scope:
  id: main
  access:
    - [deny, "$is_bot"]
    - [allow, "1"]
  scopes:
    - id: example.com
      access_deny_status: 429
      scopes:
        - id: example.com/admin
          access:
            - [deny, "$not_admin"]
    - id: static.example.com
      access:
        - [allow, "$cdn"]
"#;

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_compile_site_config() -> anyhow::Result<()> {
    let compiled = Compiler::new().compile_str(SITE_CONFIG)?;

    assert_eq!(compiled.root(), "main");
    assert_eq!(compiled.len(), 4);

    let main = compiled.get("main").unwrap();
    assert_eq!(main.len(), 2);
    assert_eq!(main.rules()[0].action(), Action::Deny);
    assert_eq!(
        main.rules()[0].condition().segments,
        vec![Segment::Variable("is_bot".to_string())]
    );
    assert_eq!(main.deny_status(), 403);
    Ok(())
}

#[test]
fn test_server_inherits_rules_with_own_status() -> anyhow::Result<()> {
    let compiled = Compiler::new().compile_str(SITE_CONFIG)?;
    let main = compiled.get("main").unwrap();
    let server = compiled.get("example.com").unwrap();

    assert!(server.shares_rules_with(main));
    assert_eq!(server.deny_status(), 429);
    Ok(())
}

#[test]
fn test_location_shadows_rules_but_inherits_status() -> anyhow::Result<()> {
    let compiled = Compiler::new().compile_str(SITE_CONFIG)?;
    let admin = compiled.get("example.com/admin").unwrap();

    assert_eq!(admin.len(), 1);
    assert_eq!(admin.rules()[0].action(), Action::Deny);
    assert_eq!(admin.deny_status(), 429);
    assert_eq!(compiled.parent_of("example.com/admin"), Some("example.com"));
    Ok(())
}

#[test]
fn test_sibling_scopes_are_independent() -> anyhow::Result<()> {
    let compiled = Compiler::new().compile_str(SITE_CONFIG)?;
    let static_site = compiled.get("static.example.com").unwrap();

    assert_eq!(static_site.len(), 1);
    assert_eq!(static_site.rules()[0].action(), Action::Allow);
    assert_eq!(static_site.deny_status(), 403);
    Ok(())
}

#[test]
fn test_iter_follows_resolution_order() -> anyhow::Result<()> {
    let compiled = Compiler::new().compile_str(SITE_CONFIG)?;
    let ids: Vec<&str> = compiled.iter().map(|(id, _)| id).collect();
    assert_eq!(
        ids,
        vec!["main", "example.com", "example.com/admin", "static.example.com"]
    );
    Ok(())
}

// =============================================================================
// Configuration errors
// =============================================================================

#[test]
fn test_invalid_arity_is_fatal() {
    let yaml = r#"
scope:
  id: main
  access:
    - [deny]
"#;
    let err = Compiler::new().compile_str(yaml).unwrap_err();
    assert!(matches!(
        err.config_error(),
        Some(ConfigError::InvalidArity { expected: 2, found: 1, .. })
    ));
}

#[test]
fn test_unknown_action_is_fatal() {
    let yaml = r#"
scope:
  id: main
  scopes:
    - id: api
      access:
        - [Allow, "1"]
"#;
    let err = Compiler::new().compile_str(yaml).unwrap_err();
    assert!(err.to_string().contains("in scope 'api'"));
    assert_eq!(
        err.config_error(),
        Some(&ConfigError::UnknownAction("Allow".to_string()))
    );
}

#[test]
fn test_condition_compile_error_is_fatal() {
    let yaml = r#"
scope:
  id: main
  access:
    - [deny, "${unterminated"]
"#;
    let err = Compiler::new().compile_str(yaml).unwrap_err();
    assert!(matches!(
        err.config_error(),
        Some(ConfigError::ConditionCompile { .. })
    ));
}

#[test]
fn test_unknown_variable_with_known_set() {
    let options = CompilerOptions {
        known_variables: Some(vec!["remote_addr".to_string()]),
    };
    let compiler = Compiler::with_options(options);

    assert!(compiler
        .compile_str("scope:\n  id: main\n  access:\n    - [deny, \"$remote_addr\"]\n")
        .is_ok());
    assert!(compiler
        .compile_str("scope:\n  id: main\n  access:\n    - [deny, \"$http_host\"]\n")
        .is_err());
}

#[test]
fn test_parse_errors_are_wrapped() {
    let err = Compiler::new().compile_str("scope:\n  access: []\n").unwrap_err();
    assert!(matches!(err, CompileError::Parse(_)));
}

#[test]
fn test_deny_status_takes_one_argument() {
    let yaml = r#"
scope:
  id: main
  access_deny_status: [403, 404]
"#;
    let err = Compiler::new().compile_str(yaml).unwrap_err();
    assert!(matches!(
        err.config_error(),
        Some(ConfigError::InvalidArity { expected: 1, found: 2, .. })
    ));
}
