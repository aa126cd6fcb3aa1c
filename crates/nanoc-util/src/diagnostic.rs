//! Diagnostic reporting infrastructure.
//!
//! Instead of writing directly to `stderr` from deep inside the parser,
//! stages accumulate [`Diagnostic`] values into a [`DiagnosticHandler`]
//! they borrow. The driver decides when and how to print them. This
//! keeps the parser testable without capturing process stderr.

use crate::span::Span;
use std::fmt;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A single diagnostic message tied to a source location.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span,
        }
    }

    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            Level::Error => write!(
                f,
                "Parse error at line {}, column {}: {}",
                self.span.line, self.span.column, self.message
            ),
            Level::Warning => write!(
                f,
                "warning at line {}, column {}: {}",
                self.span.line, self.span.column, self.message
            ),
        }
    }
}

/// Accumulates diagnostics for one compilation.
#[derive(Debug, Default)]
pub struct DiagnosticHandler {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn error(&mut self, message: impl Into<String>, span: Span) {
        self.report(Diagnostic::error(message, span));
    }

    pub fn warning(&mut self, message: impl Into<String>, span: Span) {
        self.report(Diagnostic::warning(message, span));
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level == Level::Error)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Write every diagnostic to `sink`, one per line, in emission order.
    pub fn emit_to(&self, mut sink: impl std::io::Write) -> std::io::Result<()> {
        for diagnostic in &self.diagnostics {
            writeln!(sink, "{diagnostic}")?;
        }
        Ok(())
    }
}
