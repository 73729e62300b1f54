//! Condition capability interfaces
//!
//! The engine never interprets conditions itself. A condition language is
//! plugged in through two capabilities:
//! - [`ConditionCompiler`] turns expression source into a compiled handle,
//!   once per rule while configuration is loaded
//! - [`ConditionEvaluator`] turns a compiled handle plus a request context
//!   into a string, once per rule per request
//!
//! The string result is then interpreted with [`is_truthy`].

use crate::error::ConditionError;
use std::borrow::Cow;

/// Compiles condition expression source into an opaque condition handle
pub trait ConditionCompiler {
    type Condition;

    fn compile(&self, source: &str) -> Result<Self::Condition, ConditionError>;
}

/// Evaluates a compiled condition against a request context
///
/// Implementations must be deterministic for a given context; the engine
/// never retries a failed evaluation.
pub trait ConditionEvaluator {
    type Condition;
    type Context: ?Sized;

    fn evaluate<'a>(
        &'a self,
        context: &'a Self::Context,
        condition: &'a Self::Condition,
    ) -> Result<Cow<'a, str>, ConditionError>;
}

impl<T: ConditionCompiler + ?Sized> ConditionCompiler for &T {
    type Condition = T::Condition;

    fn compile(&self, source: &str) -> Result<Self::Condition, ConditionError> {
        (**self).compile(source)
    }
}

/// Interpret a condition result as a boolean
///
/// A result is falsy iff it is empty or exactly `"0"`.
pub fn is_truthy(result: &str) -> bool {
    !(result.is_empty() || result == "0")
}
