//! Intermediate Representation (IR) for the reference condition language
//!
//! Conditions are templates: literal text interleaved with request
//! variables. The compiler produces a [`Template`]; the runtime renders it.

pub mod template;

pub use template::{Segment, Template};
