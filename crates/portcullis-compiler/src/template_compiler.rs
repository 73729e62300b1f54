//! Compiler for condition templates
//!
//! A condition is literal text with `$name` or `${name}` variable
//! references; names are ASCII letters, digits and underscores. The braced
//! form lets a variable be followed directly by name characters, as in
//! `${scheme}s`.

use portcullis_core::ir::{Segment, Template};
use portcullis_core::{ConditionCompiler, ConditionError};
use std::collections::HashSet;

/// Compiles condition source into [`Template`]s
#[derive(Debug, Clone, Default)]
pub struct TemplateCompiler {
    known_variables: Option<HashSet<String>>,
}

impl TemplateCompiler {
    /// Compiler accepting any variable name
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiler rejecting variables outside `names`
    pub fn with_known_variables<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_variables: Some(names.into_iter().map(Into::into).collect()),
        }
    }

    fn check_known(&self, name: &str) -> Result<(), ConditionError> {
        match &self.known_variables {
            Some(known) if !known.contains(name) => Err(ConditionError::new(format!(
                "unknown \"{}\" variable",
                name
            ))),
            _ => Ok(()),
        }
    }

    fn push_literal(segments: &mut Vec<Segment>, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Literal(last)) = segments.last_mut() {
            last.push_str(text);
        } else {
            segments.push(Segment::Literal(text.to_string()));
        }
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

impl ConditionCompiler for TemplateCompiler {
    type Condition = Template;

    fn compile(&self, source: &str) -> Result<Template, ConditionError> {
        let bytes = source.as_bytes();
        let mut segments = Vec::new();
        let mut pos = 0;

        while pos < bytes.len() {
            if bytes[pos] != b'$' {
                let end = source[pos..]
                    .find('$')
                    .map_or(bytes.len(), |offset| pos + offset);
                Self::push_literal(&mut segments, &source[pos..end]);
                pos = end;
                continue;
            }

            pos += 1;
            let name = if bytes.get(pos) == Some(&b'{') {
                let start = pos + 1;
                let end = source[start..]
                    .find('}')
                    .map(|offset| start + offset)
                    .ok_or_else(|| {
                        ConditionError::new(format!(
                            "the closing bracket in \"{}\" is missing",
                            source
                        ))
                    })?;
                pos = end + 1;
                &source[start..end]
            } else {
                let start = pos;
                while pos < bytes.len() && is_name_byte(bytes[pos]) {
                    pos += 1;
                }
                &source[start..pos]
            };

            if name.is_empty() || !name.bytes().all(is_name_byte) {
                return Err(ConditionError::new(format!(
                    "invalid variable name in \"{}\"",
                    source
                )));
            }

            self.check_known(name)?;
            segments.push(Segment::Variable(name.to_string()));
        }

        log::trace!("compiled condition {:?} into {} segments", source, segments.len());
        Ok(Template::new(source, segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(source: &str) -> Result<Template, ConditionError> {
        TemplateCompiler::new().compile(source)
    }

    fn literal(text: &str) -> Segment {
        Segment::Literal(text.to_string())
    }

    fn variable(name: &str) -> Segment {
        Segment::Variable(name.to_string())
    }

    #[test]
    fn test_plain_literal() {
        let template = compile("1").unwrap();
        assert_eq!(template.segments, vec![literal("1")]);
        assert!(template.is_constant());
    }

    #[test]
    fn test_empty_source() {
        let template = compile("").unwrap();
        assert!(template.segments.is_empty());
        assert_eq!(template.source, "");
    }

    #[test]
    fn test_single_variable() {
        let template = compile("$remote_addr").unwrap();
        assert_eq!(template.segments, vec![variable("remote_addr")]);
    }

    #[test]
    fn test_mixed_segments() {
        let template = compile("ip=$remote_addr;${scheme}s").unwrap();
        assert_eq!(
            template.segments,
            vec![
                literal("ip="),
                variable("remote_addr"),
                literal(";"),
                variable("scheme"),
                literal("s"),
            ]
        );
    }

    #[test]
    fn test_adjacent_variables() {
        let template = compile("$a$b").unwrap();
        assert_eq!(template.segments, vec![variable("a"), variable("b")]);
    }

    #[test]
    fn test_non_ascii_literal() {
        let template = compile("é$x→").unwrap();
        assert_eq!(template.segments, vec![literal("é"), variable("x"), literal("→")]);
    }

    #[test]
    fn test_invalid_names() {
        for source in ["$", "a$", "$ x", "${}", "${a b}", "$-"] {
            assert!(compile(source).is_err(), "{:?} should not compile", source);
        }
    }

    #[test]
    fn test_unterminated_brace() {
        let err = compile("${remote_addr").unwrap_err();
        assert!(err.message.contains("closing bracket"));
    }

    #[test]
    fn test_known_variables() {
        let compiler = TemplateCompiler::with_known_variables(["remote_addr", "uri"]);
        assert!(compiler.compile("$remote_addr:$uri").is_ok());

        let err = compiler.compile("$cookie_session").unwrap_err();
        assert_eq!(err.message, "unknown \"cookie_session\" variable");
    }
}
