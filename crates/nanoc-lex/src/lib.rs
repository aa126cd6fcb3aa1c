//! nanoc-lex — the lexical analyzer.
//!
//! Transforms source text into a stream of [`Token`]s tagged with their
//! starting position. The lexer never fails: unrecognized input becomes
//! an [`Token::Error`] token rather than aborting, so later stages (and
//! the panic-mode parser recovery built on top of them) always have
//! something to consume.

pub mod cursor;
pub mod lexer;
pub mod token;

pub use cursor::Cursor;
pub use lexer::{Lexer, MAX_IDENTIFIER_LEN, MAX_INTEGER_LEN};
pub use token::{Token, TokenWithSpan};

#[cfg(test)]
mod edge_cases;
