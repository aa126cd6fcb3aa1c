//! Source position tracking.
//!
//! A [`Span`] is the (line, column) of the first character of a token or
//! AST node. The pipeline only ever needs a single point, not a byte
//! range, because every diagnostic nanoc emits ("Parse error at line L,
//! column C: ...") names a single location.

/// A 1-based source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// A placeholder span for synthesized nodes (e.g. constant-folded
    /// literals) that have no single source origin of their own.
    pub const DUMMY: Span = Span { line: 0, column: 0 };
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
