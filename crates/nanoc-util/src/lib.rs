//! nanoc-util — shared foundation types for the nanoc compiler.
//!
//! Every other crate in the workspace depends on this one. It carries
//! the two cross-cutting concerns every stage needs but none of them
//! owns: source positions ([`Span`]) and diagnostic reporting
//! ([`diagnostic`]).

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticHandler, Level};
pub use span::Span;
