//! Parser for access-control scope documents
//!
//! ```yaml
//! version: "0.1"
//! scope:
//!   id: main
//!   access_deny_status: 403
//!   access:
//!     - [deny, "$blocked"]
//!     - allow $trusted
//!   scopes:
//!     - id: api
//!       access_deny_status: 429
//! ```
//!
//! `access` entries are either an argument list or a single string that is
//! split on whitespace. Directives keep the order they appear in within
//! their scope.

use crate::error::{ParseError, Result};
use crate::yaml_parser::YamlParser;
use portcullis_core::ast::{ACCESS_DIRECTIVE, DENY_STATUS_DIRECTIVE};
use portcullis_core::{Directive, ScopeNode};
use serde_yaml::Value;

const DOCUMENT_FIELDS: &[&str] = &["version", "scope"];
const SCOPE_FIELDS: &[&str] = &[
    "id",
    "description",
    ACCESS_DIRECTIVE,
    DENY_STATUS_DIRECTIVE,
    "scopes",
];

pub struct ScopeParser;

impl ScopeParser {
    /// Parse a scope document from a YAML string
    pub fn parse(yaml_str: &str) -> Result<ScopeNode> {
        let doc = YamlParser::parse(yaml_str)?;
        Self::parse_document(&doc)
    }

    /// Parse a scope document from a YAML value
    pub fn parse_document(doc: &Value) -> Result<ScopeNode> {
        if !doc.is_mapping() {
            return Err(ParseError::invalid("document", "must be an object"));
        }
        Self::reject_unknown_fields(doc, DOCUMENT_FIELDS)?;

        let root = doc.get("scope").ok_or_else(|| ParseError::MissingField {
            field: "scope".to_string(),
        })?;

        let node = Self::parse_scope(root)?;
        log::debug!("parsed scope tree '{}' with {} scopes", node.id, node.scope_count());
        Ok(node)
    }

    /// Parse one scope and, recursively, its nested scopes
    pub fn parse_scope(value: &Value) -> Result<ScopeNode> {
        let mapping = value
            .as_mapping()
            .ok_or_else(|| ParseError::invalid("scope", "must be an object"))?;
        Self::reject_unknown_fields(value, SCOPE_FIELDS)?;

        let mut node = ScopeNode::new(YamlParser::get_string(value, "id")?);
        let mut line = 0;

        for (key, field_value) in mapping {
            match key.as_str() {
                Some(ACCESS_DIRECTIVE) => {
                    let entries = field_value.as_sequence().ok_or_else(|| {
                        ParseError::invalid(ACCESS_DIRECTIVE, "must be an array of rules")
                    })?;
                    for entry in entries {
                        line += 1;
                        let args = Self::parse_access_args(entry)?;
                        node.directives
                            .push(Directive::new(ACCESS_DIRECTIVE, args).with_line(line));
                    }
                }
                Some(DENY_STATUS_DIRECTIVE) => {
                    line += 1;
                    let args = Self::parse_args(field_value, DENY_STATUS_DIRECTIVE)?;
                    node.directives
                        .push(Directive::new(DENY_STATUS_DIRECTIVE, args).with_line(line));
                }
                _ => {}
            }
        }

        if let Some(children) = YamlParser::get_optional_sequence(value, "scopes")? {
            for child in children {
                node.children.push(Self::parse_scope(child)?);
            }
        }

        Ok(node)
    }

    fn parse_access_args(entry: &Value) -> Result<Vec<String>> {
        match entry {
            Value::String(line) => Ok(line.split_whitespace().map(str::to_string).collect()),
            other => Self::parse_args(other, ACCESS_DIRECTIVE),
        }
    }

    /// A scalar is one argument; an array is one argument per element
    fn parse_args(value: &Value, field: &str) -> Result<Vec<String>> {
        match value {
            Value::Sequence(items) => items
                .iter()
                .map(|item| YamlParser::scalar_to_string(item, field))
                .collect(),
            scalar => Ok(vec![YamlParser::scalar_to_string(scalar, field)?]),
        }
    }

    fn reject_unknown_fields(value: &Value, allowed: &[&str]) -> Result<()> {
        match YamlParser::get_keys(value)?
            .into_iter()
            .find(|key| !allowed.contains(&key.as_str()))
        {
            Some(unknown) => Err(ParseError::UnknownField(unknown)),
            None => Ok(()),
        }
    }
}
