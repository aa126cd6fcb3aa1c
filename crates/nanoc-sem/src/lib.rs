//! Scoped symbol table used by the code generator to track declared
//! variables and their stack offsets.

mod symbol;
mod table;

pub use symbol::{Symbol, SymbolType};
pub use table::SymbolTable;
