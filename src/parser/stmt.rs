//! Statement and block parsing.

use super::Parser;
use super::expr::Precedence;
use crate::ast::{Block, Identifier, Statement, StatementKind};
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Parses a single statement, dispatching on the current token.
    ///
    /// Returns `None` when the statement failed to parse; the error has
    /// already been recorded and the outer loop advances past the
    /// offending tokens.
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `variable IDENT = expr ;?`.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        if !self.expected_token(TokenKind::Ident) {
            return None;
        }

        let name = Identifier {
            token: self.current.clone(),
            value: self.current.literal.clone(),
        };

        if !self.expected_token(TokenKind::Assign) {
            return None;
        }

        self.advance_tokens();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.consume_optional_semicolon();

        Some(Statement::new(StatementKind::Let { name, value }, token))
    }

    /// Parses `regresa expr ;?`.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        self.advance_tokens();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.consume_optional_semicolon();

        Some(Statement::new(StatementKind::Return { value }, token))
    }

    /// Parses a bare expression as a statement.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.consume_optional_semicolon();

        Some(Statement::new(
            StatementKind::Expression { expression },
            token,
        ))
    }

    /// Parses a `{ ... }` block.
    ///
    /// The current token is the opening brace. On return the current
    /// token is the closing brace, or EOF for an unterminated block.
    pub(super) fn parse_block(&mut self) -> Block {
        let token = self.current.clone();
        let mut statements = Vec::new();

        self.advance_tokens();
        while self.current.kind != TokenKind::RightBrace && self.current.kind != TokenKind::Eof {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance_tokens();
        }

        Block { token, statements }
    }
}
