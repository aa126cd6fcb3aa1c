//! A single declared variable and its associated bookkeeping.

/// The type tag a declared symbol carries. The source language has
/// exactly one scalar type, so this enum has exactly one variant —
/// kept as an enum rather than collapsed away so the shape matches
/// `original_source/include/symbol_table.h`'s `SymbolType` and leaves
/// room to grow if the language ever does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolType {
    Integer,
}

/// A declared variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub ty: SymbolType,
    pub scope_level: i32,
    pub initialized: bool,
    /// Stack-frame offset in bytes from `rbp`, assigned once by the
    /// code generator the first time it allocates storage for this
    /// symbol. `None` until then. Storing the offset on the symbol
    /// itself (rather than re-deriving it from a single running
    /// counter at every lookup) is the fix for the stale-offset bug in
    /// `codegen_get_variable_offset`, which always returned the
    /// generator's *current* counter instead of the value the symbol
    /// was allocated with.
    pub offset: Option<i64>,
}

impl Symbol {
    pub fn new(name: impl Into<String>, ty: SymbolType, scope_level: i32) -> Self {
        Self {
            name: name.into(),
            ty,
            scope_level,
            initialized: false,
            offset: None,
        }
    }
}
