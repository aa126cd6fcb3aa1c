//! Error types for code generation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodeGenError {
    /// All scratch registers are in use. The original C generator has
    /// no equivalent check: `codegen_allocate_register` returns `-1`
    /// on exhaustion, and the caller indexes `registers[-1]` anyway.
    /// Nine scratch registers comfortably cover the two operands a
    /// binary operation ever needs live at once, so this should never
    /// actually trigger; it exists so exhaustion fails loudly instead
    /// of corrupting output.
    #[error("no free scratch register available")]
    RegisterExhausted,

    /// Defensive: the parser and optimizer never hand the generator a
    /// node shape it doesn't expect, but a panic deep in code emission
    /// is worse than a typed error bubbling up through the driver.
    #[error("unsupported node in code generation context: {0}")]
    UnsupportedNode(String),
}

pub type Result<T> = std::result::Result<T, CodeGenError>;
