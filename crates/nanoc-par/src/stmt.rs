//! Statement parsing: dispatch on the leading token, then the four
//! statement shapes spec.md §4.2 defines (`if`, `while`, block,
//! assignment).

use crate::ast::Node;
use crate::Parser;
use nanoc_lex::Token;

impl<'a> Parser<'a> {
    /// Parses one statement, or reports a diagnostic and returns `None`
    /// if the current token starts nothing recognizable. The caller
    /// (program- and block-level loops) is responsible for skipping a
    /// token on `None` to make progress — `parse_statement` itself
    /// never advances past a token it can't use.
    pub(crate) fn parse_statement(&mut self) -> Option<Node> {
        match self.current.token {
            Token::If => self.parse_if_statement(),
            Token::While => self.parse_while_statement(),
            Token::LBrace => self.parse_block_statement(),
            Token::Identifier(_) => self.parse_assignment_statement(),
            _ => {
                self.error("Expected a statement");
                None
            }
        }
    }

    fn parse_if_statement(&mut self) -> Option<Node> {
        let span = self.current.span;
        self.advance(); // `if`
        self.expect(Token::LParen, "Expected '(' after 'if'")?;
        let condition = self.parse_expr()?;
        self.expect(Token::RParen, "Expected ')' after condition")?;
        let then_branch = self.parse_statement()?;
        let else_branch = if self.current.token == Token::Else {
            self.advance();
            Some(self.parse_statement()?)
        } else {
            None
        };
        Some(Node::if_stmt(condition, then_branch, else_branch, span))
    }

    fn parse_while_statement(&mut self) -> Option<Node> {
        let span = self.current.span;
        self.advance(); // `while`
        self.expect(Token::LParen, "Expected '(' after 'while'")?;
        let condition = self.parse_expr()?;
        self.expect(Token::RParen, "Expected ')' after condition")?;
        let body = self.parse_statement()?;
        Some(Node::while_stmt(condition, body, span))
    }

    /// Unlike the original C parser, a malformed statement inside a
    /// block does not hang the loop: a failed `parse_statement` still
    /// skips one token before retrying, the same recovery the program
    /// level already used. See SPEC_FULL.md §4.2.
    fn parse_block_statement(&mut self) -> Option<Node> {
        let span = self.current.span;
        self.advance(); // `{`
        let mut statements = Vec::new();
        while self.current.token != Token::RBrace && !self.at_eof() {
            match self.parse_statement() {
                Some(stmt) => statements.push(stmt),
                None => self.advance(),
            }
        }
        self.expect(Token::RBrace, "Expected '}'")?;
        Some(Node::block(statements, span))
    }

    fn parse_assignment_statement(&mut self) -> Option<Node> {
        let span = self.current.span;
        let name = match self.current.token.clone() {
            Token::Identifier(name) => name,
            _ => unreachable!("caller already matched Token::Identifier"),
        };
        self.advance();
        self.expect(Token::Assign, "Expected '=' after identifier")?;
        let value = self.parse_expr()?;
        self.expect(Token::Semicolon, "Expected ';' after assignment")?;
        Some(Node::assignment(name, value, span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanoc_util::DiagnosticHandler;

    fn parse(source: &str) -> (Node, bool) {
        let mut handler = DiagnosticHandler::new();
        let mut parser = Parser::new(source, &mut handler);
        let program = parser.parse_program();
        (program, handler.has_errors())
    }

    #[test]
    fn assignment_round_trips() {
        let (program, had_errors) = parse("x = 1 + 2;");
        assert!(!had_errors);
        match program {
            Node::Program { statements, .. } => {
                assert_eq!(statements.len(), 1);
                assert!(matches!(statements[0], Node::Assignment { .. }));
            }
            other => panic!("expected Program, got {other:?}"),
        }
    }

    #[test]
    fn if_else_nests_correctly() {
        let (program, had_errors) = parse("if (x < 1) { y = 1; } else { y = 2; }");
        assert!(!had_errors);
        let Node::Program { statements, .. } = program else {
            panic!("expected Program")
        };
        match &statements[0] {
            Node::If { then_branch, else_branch, .. } => {
                assert!(matches!(**then_branch, Node::Block { .. }));
                assert!(else_branch.is_some());
            }
            other => panic!("expected If, got {other:?}"),
        }
    }

    #[test]
    fn while_without_braces_takes_a_single_statement_body() {
        let (program, had_errors) = parse("while (x < 10) x = x + 1;");
        assert!(!had_errors);
        let Node::Program { statements, .. } = program else {
            panic!("expected Program")
        };
        match &statements[0] {
            Node::While { body, .. } => assert!(matches!(**body, Node::Assignment { .. })),
            other => panic!("expected While, got {other:?}"),
        }
    }

    #[test]
    fn malformed_statement_inside_a_block_does_not_hang_the_parser() {
        let (_, had_errors) = parse("{ x = ; y = 2; }");
        assert!(had_errors);
    }

    #[test]
    fn malformed_top_level_statement_is_skipped_and_parsing_continues() {
        let (program, had_errors) = parse(") x = 1;");
        assert!(had_errors);
        let Node::Program { statements, .. } = program else {
            panic!("expected Program")
        };
        assert_eq!(statements.len(), 1);
    }
}
