//! YAML Parser
//!
//! Provides utilities for reading structured data out of YAML values.

use crate::error::{ParseError, Result};
use serde_yaml::Value as YamlValue;

/// YAML parser utilities
pub struct YamlParser;

impl YamlParser {
    /// Parse YAML string into a YAML value
    pub fn parse(yaml_str: &str) -> Result<YamlValue> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// Get a required string field from YAML object
    pub fn get_string(obj: &YamlValue, field: &str) -> Result<String> {
        obj.get(field)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| ParseError::MissingField {
                field: field.to_string(),
            })
    }

    /// Get an optional array field; present but not an array is an error
    pub fn get_optional_sequence<'a>(
        obj: &'a YamlValue,
        field: &str,
    ) -> Result<Option<&'a Vec<YamlValue>>> {
        match obj.get(field) {
            None | Some(YamlValue::Null) => Ok(None),
            Some(YamlValue::Sequence(seq)) => Ok(Some(seq)),
            Some(_) => Err(ParseError::invalid(field, "must be an array")),
        }
    }

    /// Render a scalar as a directive argument
    ///
    /// Strings are taken verbatim; numbers and booleans use their YAML text.
    pub fn scalar_to_string(value: &YamlValue, field: &str) -> Result<String> {
        match value {
            YamlValue::String(s) => Ok(s.clone()),
            YamlValue::Number(n) => Ok(n.to_string()),
            YamlValue::Bool(b) => Ok(b.to_string()),
            YamlValue::Tagged(tagged) => Self::scalar_to_string(&tagged.value, field),
            YamlValue::Null => Err(ParseError::invalid(field, "null is not a valid argument")),
            YamlValue::Sequence(_) | YamlValue::Mapping(_) => {
                Err(ParseError::invalid(field, "arguments must be scalars"))
            }
        }
    }

    /// Get all keys from a YAML mapping; every key must be a string
    pub fn get_keys(obj: &YamlValue) -> Result<Vec<String>> {
        let Some(mapping) = obj.as_mapping() else {
            return Ok(Vec::new());
        };

        mapping
            .keys()
            .map(|key| {
                key.as_str().map(str::to_string).ok_or_else(|| {
                    ParseError::invalid("key", format!("{:?} is not a string", key))
                })
            })
            .collect()
    }
}
