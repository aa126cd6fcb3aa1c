//! Token kinds produced by the lexer.

use nanoc_util::Span;

/// A lexical unit. Identifiers and integer literals carry their raw
/// lexeme text; every other kind has a single fixed spelling, so no
/// lexeme is stored for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// End of input. Returned repeatedly once the source is exhausted.
    Eof,

    /// `[A-Za-z_][A-Za-z0-9_]*`, truncated to 255 characters.
    Identifier(String),

    /// `[0-9]+`, truncated to 32 digits.
    Integer(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    ShiftLeft,
    Less,
    Greater,
    EqualEqual,
    NotEqual,
    Assign,

    // Delimiters
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Keywords
    If,
    Else,
    While,

    /// An unrecognized or malformed character. The lexer always
    /// consumes at least one character before returning this, so
    /// lexing remains total (spec.md's lexer-totality invariant).
    Error,
}

impl Token {
    /// Classifies a maximal identifier run as a keyword or a plain
    /// identifier.
    pub fn keyword_or_identifier(lexeme: String) -> Token {
        match lexeme.as_str() {
            "if" => Token::If,
            "else" => Token::Else,
            "while" => Token::While,
            _ => Token::Identifier(lexeme),
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Eof => write!(f, "EOF"),
            Token::Identifier(name) => write!(f, "IDENTIFIER({name})"),
            Token::Integer(text) => write!(f, "INTEGER({text})"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::ShiftLeft => write!(f, "<<"),
            Token::Less => write!(f, "<"),
            Token::Greater => write!(f, ">"),
            Token::EqualEqual => write!(f, "=="),
            Token::NotEqual => write!(f, "!="),
            Token::Assign => write!(f, "="),
            Token::Semicolon => write!(f, ";"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::If => write!(f, "if"),
            Token::Else => write!(f, "else"),
            Token::While => write!(f, "while"),
            Token::Error => write!(f, "ERROR"),
        }
    }
}

/// A token tagged with the position of its first character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenWithSpan {
    pub token: Token,
    pub span: Span,
}

impl TokenWithSpan {
    pub fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }
}
