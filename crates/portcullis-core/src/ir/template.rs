//! Compiled condition templates

use serde::{Deserialize, Serialize};

/// One piece of a compiled template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Segment {
    /// Text copied verbatim
    Literal(String),

    /// Value of the named request variable
    Variable(String),
}

/// A compiled condition: segments rendered and concatenated in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Expression source as written in configuration
    pub source: String,

    /// Segments in render order; adjacent literals are already merged
    pub segments: Vec<Segment>,
}

impl Template {
    pub fn new(source: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            source: source.into(),
            segments,
        }
    }

    /// True when the template references no variables
    pub fn is_constant(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| matches!(segment, Segment::Literal(_)))
    }

    /// Names of referenced variables, in order of appearance
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Variable(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}
