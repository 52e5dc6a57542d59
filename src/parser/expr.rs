//! Expression parsing using Pratt parsing (precedence climbing).
//!
//! This module implements expression parsing with proper operator
//! precedence. Each expression starts with a prefix parser chosen by
//! the current token kind; infix parsers then fold the left operand
//! into larger expressions while the upcoming operator binds tighter
//! than the surrounding context.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expression, ExpressionKind, Identifier};
use crate::token::TokenKind;

/// Operator precedence levels, loosest to tightest.
///
/// The derived ordering is what the Pratt loop compares:
/// `a + b / c` parses as `a + (b / c)` because `Product` is greater
/// than `Sum`. Binary operators are left-associative, which falls out
/// of the strict `<` comparison in [`Parser::parse_expression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Precedence {
    Lowest,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`, `<=`, `>=`
    LessGreater,
    /// `+`, binary `-`
    Sum,
    /// `*`, `/`
    Product,
    /// Unary `-`, `!`
    Prefix,
    /// `(` in call position
    Call,
}

/// Returns the infix precedence of a token kind.
///
/// Token kinds that are not infix operators sit at `Lowest`, which
/// ends the Pratt loop.
fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt | TokenKind::LtOrEq | TokenKind::GtOrEq => {
            Precedence::LessGreater
        }
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Multiplication | TokenKind::Division => Precedence::Product,
        TokenKind::LeftParen => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

impl<'a> Parser<'a> {
    /// Parses an expression at the given precedence floor.
    ///
    /// 1. Dispatch a prefix parser on the current token; without one,
    ///    record a `No se encontró ninguna función para parsear ...`
    ///    error and give up on the expression.
    /// 2. While the peek token is not a semicolon and binds tighter
    ///    than `precedence`, fold the expression into the matching
    ///    infix form.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = match self.current.kind {
            TokenKind::Ident => self.parse_identifier(),
            TokenKind::Int => self.parse_integer_literal()?,
            TokenKind::True | TokenKind::False => self.parse_boolean_literal(),
            TokenKind::Str => self.parse_string_literal(),
            TokenKind::Minus | TokenKind::Not => self.parse_prefix_expression()?,
            TokenKind::LeftParen => self.parse_grouped_expression()?,
            TokenKind::If => self.parse_if_expression()?,
            TokenKind::Function => self.parse_function_literal()?,
            _ => {
                self.errors.push(ParseError::no_prefix_parser(&self.current));
                return None;
            }
        };

        while self.peek.kind != TokenKind::Semicolon && precedence < self.peek_precedence() {
            left = match self.peek.kind {
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Multiplication
                | TokenKind::Division
                | TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::LtOrEq
                | TokenKind::GtOrEq => {
                    self.advance_tokens();
                    self.parse_infix_expression(left)?
                }
                TokenKind::LeftParen => {
                    self.advance_tokens();
                    self.parse_call_expression(left)?
                }
                _ => return Some(left),
            };
        }

        Some(left)
    }

    /// The precedence of the peek token.
    fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek.kind)
    }

    fn parse_identifier(&mut self) -> Expression {
        Expression::new(
            ExpressionKind::Identifier {
                value: self.current.literal.clone(),
            },
            self.current.clone(),
        )
    }

    /// Converts the current `INT` token's digits to an `i64`.
    ///
    /// The only way the conversion fails is a literal beyond the `i64`
    /// range; the lexer guarantees the text is all digits.
    fn parse_integer_literal(&mut self) -> Option<Expression> {
        match self.current.literal.parse::<i64>() {
            Ok(value) => Some(Expression::new(
                ExpressionKind::IntegerLiteral { value },
                self.current.clone(),
            )),
            Err(_) => {
                self.errors.push(ParseError::invalid_integer(&self.current));
                None
            }
        }
    }

    fn parse_boolean_literal(&mut self) -> Expression {
        Expression::new(
            ExpressionKind::BooleanLiteral {
                value: self.current.kind == TokenKind::True,
            },
            self.current.clone(),
        )
    }

    fn parse_string_literal(&mut self) -> Expression {
        Expression::new(
            ExpressionKind::StringLiteral {
                value: self.current.literal.clone(),
            },
            self.current.clone(),
        )
    }

    /// Parses `-expr` or `!expr` at prefix precedence.
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let operator = token.literal.clone();

        self.advance_tokens();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::new(
            ExpressionKind::Prefix {
                operator,
                right: Box::new(right),
            },
            token,
        ))
    }

    /// Parses the right operand of a binary operator.
    ///
    /// The current token is the operator; the right side is parsed at
    /// the operator's own precedence, so equal-precedence chains
    /// associate to the left.
    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let operator = token.literal.clone();
        let precedence = precedence_of(token.kind);

        self.advance_tokens();
        let right = self.parse_expression(precedence)?;

        Some(Expression::new(
            ExpressionKind::Infix {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            },
            token,
        ))
    }

    /// Parses `( expr )`, returning the inner expression.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.advance_tokens();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expected_token(TokenKind::RightParen) {
            return None;
        }

        Some(expression)
    }

    /// Parses `si ( cond ) { ... } [sino { ... }]`.
    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expected_token(TokenKind::LeftParen) {
            return None;
        }

        self.advance_tokens();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expected_token(TokenKind::RightParen) {
            return None;
        }
        if !self.expected_token(TokenKind::LeftBrace) {
            return None;
        }

        let consequence = self.parse_block();

        let alternative = if self.peek.kind == TokenKind::Else {
            self.advance_tokens();
            if !self.expected_token(TokenKind::LeftBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expression::new(
            ExpressionKind::If {
                condition: Box::new(condition),
                consequence,
                alternative,
            },
            token,
        ))
    }

    /// Parses `procedimiento ( params? ) { ... }`.
    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expected_token(TokenKind::LeftParen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expected_token(TokenKind::LeftBrace) {
            return None;
        }

        let body = self.parse_block();

        Some(Expression::new(
            ExpressionKind::FunctionLiteral { parameters, body },
            token,
        ))
    }

    /// Parses a possibly-empty comma-separated parameter list.
    ///
    /// The current token is the opening parenthesis. Duplicate names
    /// are not rejected here; the evaluator binds left to right.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek.kind == TokenKind::RightParen {
            self.advance_tokens();
            return Some(parameters);
        }

        if !self.expected_token(TokenKind::Ident) {
            return None;
        }
        parameters.push(Identifier {
            token: self.current.clone(),
            value: self.current.literal.clone(),
        });

        while self.peek.kind == TokenKind::Comma {
            self.advance_tokens();
            if !self.expected_token(TokenKind::Ident) {
                return None;
            }
            parameters.push(Identifier {
                token: self.current.clone(),
                value: self.current.literal.clone(),
            });
        }

        if !self.expected_token(TokenKind::RightParen) {
            return None;
        }

        Some(parameters)
    }

    /// Parses the argument list of a call; `left` is the callee.
    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let arguments = self.parse_call_arguments()?;

        Some(Expression::new(
            ExpressionKind::Call {
                function: Box::new(function),
                arguments,
            },
            token,
        ))
    }

    /// Parses a possibly-empty comma-separated argument list terminated
    /// by `)`. The current token is the opening parenthesis.
    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek.kind == TokenKind::RightParen {
            self.advance_tokens();
            return Some(arguments);
        }

        self.advance_tokens();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek.kind == TokenKind::Comma {
            self.advance_tokens();
            self.advance_tokens();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expected_token(TokenKind::RightParen) {
            return None;
        }

        Some(arguments)
    }
}
