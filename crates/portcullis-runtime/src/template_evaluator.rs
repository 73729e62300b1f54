//! Evaluator for template conditions

use crate::context::RequestContext;
use portcullis_core::ir::{Segment, Template};
use portcullis_core::{ConditionError, ConditionEvaluator};
use std::borrow::Cow;

/// Renders [`Template`] conditions against a [`RequestContext`]
///
/// A variable missing from the context renders as an empty string, unless
/// the evaluator is strict, in which case evaluation fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateEvaluator {
    strict: bool,
}

impl TemplateEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    fn lookup<'a>(
        &self,
        context: &'a RequestContext,
        name: &str,
    ) -> Result<&'a str, ConditionError> {
        match context.get(name) {
            Some(value) => Ok(value),
            None if self.strict => Err(ConditionError::new(format!(
                "variable \"{}\" is not set",
                name
            ))),
            None => Ok(""),
        }
    }
}

impl ConditionEvaluator for TemplateEvaluator {
    type Condition = Template;
    type Context = RequestContext;

    fn evaluate<'a>(
        &'a self,
        context: &'a RequestContext,
        condition: &'a Template,
    ) -> Result<Cow<'a, str>, ConditionError> {
        match condition.segments.as_slice() {
            [] => Ok(Cow::Borrowed("")),
            [Segment::Literal(text)] => Ok(Cow::Borrowed(text.as_str())),
            [Segment::Variable(name)] => self.lookup(context, name).map(Cow::Borrowed),
            segments => {
                let mut rendered = String::new();
                for segment in segments {
                    match segment {
                        Segment::Literal(text) => rendered.push_str(text),
                        Segment::Variable(name) => rendered.push_str(self.lookup(context, name)?),
                    }
                }
                Ok(Cow::Owned(rendered))
            }
        }
    }
}
