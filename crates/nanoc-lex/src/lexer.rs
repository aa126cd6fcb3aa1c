//! The lexer: character stream → token stream.
//!
//! `Lexer::next_token` is the sole primary operation (spec.md §4.1). It
//! is total: every call returns exactly one token, and once the source
//! is exhausted it returns `Eof` forever. No call panics on any input,
//! including invalid UTF-8-adjacent byte sequences, unterminated
//! constructs, or stray punctuation — anything unrecognized becomes an
//! `Error` token rather than a lexer failure.

use crate::cursor::Cursor;
use crate::token::{Token, TokenWithSpan};
use nanoc_util::Span;

/// Maximum identifier length; characters beyond this are still
/// consumed (so the lexer makes progress) but dropped from the lexeme.
pub const MAX_IDENTIFIER_LEN: usize = 255;

/// Maximum integer literal length, same truncation behavior.
pub const MAX_INTEGER_LEN: usize = 32;

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Produces the next token, skipping leading whitespace and line
    /// comments first.
    pub fn next_token(&mut self) -> TokenWithSpan {
        self.skip_trivia();

        let span = Span::new(self.cursor.line(), self.cursor.column());

        if self.cursor.is_at_end() {
            return TokenWithSpan::new(Token::Eof, span);
        }

        let ch = self.cursor.current();

        if is_identifier_start(ch) {
            return TokenWithSpan::new(self.read_identifier(), span);
        }

        if ch.is_ascii_digit() {
            return TokenWithSpan::new(self.read_integer(), span);
        }

        let token = self.read_operator_or_delimiter();
        TokenWithSpan::new(token, span)
    }

    /// Collects every token up to and including the first `Eof`.
    pub fn tokenize_all(&mut self) -> Vec<TokenWithSpan> {
        let mut tokens = Vec::new();
        loop {
            let next = self.next_token();
            let done = next.token.is_eof();
            tokens.push(next);
            if done {
                break;
            }
        }
        tokens
    }

    /// Skips whitespace runs and `//` line comments, in any interleaving.
    fn skip_trivia(&mut self) {
        loop {
            while is_ascii_whitespace(self.cursor.current()) {
                self.cursor.advance();
            }
            if self.cursor.current() == '/' && self.cursor.char_at(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                while self.cursor.current() != '\n' && !self.cursor.is_at_end() {
                    self.cursor.advance();
                }
                continue;
            }
            break;
        }
    }

    fn read_identifier(&mut self) -> Token {
        let mut lexeme = String::new();
        while is_identifier_continue(self.cursor.current()) {
            if lexeme.len() < MAX_IDENTIFIER_LEN {
                lexeme.push(self.cursor.current());
            }
            self.cursor.advance();
        }
        Token::keyword_or_identifier(lexeme)
    }

    fn read_integer(&mut self) -> Token {
        let mut lexeme = String::new();
        while self.cursor.current().is_ascii_digit() {
            if lexeme.len() < MAX_INTEGER_LEN {
                lexeme.push(self.cursor.current());
            }
            self.cursor.advance();
        }
        Token::Integer(lexeme)
    }

    fn read_operator_or_delimiter(&mut self) -> Token {
        let ch = self.cursor.current();
        self.cursor.advance();
        match ch {
            '<' => {
                if self.cursor.current() == '<' {
                    self.cursor.advance();
                    Token::ShiftLeft
                } else {
                    Token::Less
                }
            }
            '=' => {
                if self.cursor.current() == '=' {
                    self.cursor.advance();
                    Token::EqualEqual
                } else {
                    Token::Assign
                }
            }
            '!' => {
                if self.cursor.current() == '=' {
                    self.cursor.advance();
                    Token::NotEqual
                } else {
                    Token::Error
                }
            }
            '>' => Token::Greater,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '{' => Token::LBrace,
            '}' => Token::RBrace,
            ';' => Token::Semicolon,
            _ => Token::Error,
        }
    }
}

#[inline]
fn is_ascii_whitespace(ch: char) -> bool {
    ch == ' ' || ch == '\t' || ch == '\n' || ch == '\r' || ch == '\x0b' || ch == '\x0c'
}

#[inline]
fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

#[inline]
fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
