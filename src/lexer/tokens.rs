//! Token reading and recognition for the lexer.
//!
//! This module provides methods for reading the individual token
//! classes: operators and punctuation, string literals, integer
//! literals, and identifiers/keywords.

use super::{Lexer, is_letter};
use crate::token::{Span, Token, TokenKind, lookup_keyword};

impl<'a> Lexer<'a> {
    /// Creates a single-character token and advances the lexer.
    fn single_char_token(
        &mut self,
        kind: TokenKind,
        c: char,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, c.to_string(), span)
    }

    /// Consumes two characters and emits a two-character operator token.
    fn two_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, &self.input[start_pos..self.pos], span)
    }

    /// Recognizes operators and punctuation at the current position.
    ///
    /// For `=`, `!`, `<`, and `>` the next character is peeked: a
    /// following `=` turns them into `==`, `!=`, `<=`, and `>=`.
    ///
    /// Returns `None` when the current character starts a literal,
    /// an identifier, or is not recognized at all.
    pub(super) fn next_operator_or_punctuation(
        &mut self,
        c: char,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Option<Token> {
        let token = match c {
            '=' => {
                if self.peek_char() == Some('=') {
                    self.two_char_token(TokenKind::Eq, start_pos, start_line, start_column)
                } else {
                    self.single_char_token(TokenKind::Assign, c, start_pos, start_line, start_column)
                }
            }
            '!' => {
                if self.peek_char() == Some('=') {
                    self.two_char_token(TokenKind::NotEq, start_pos, start_line, start_column)
                } else {
                    self.single_char_token(TokenKind::Not, c, start_pos, start_line, start_column)
                }
            }
            '<' => {
                if self.peek_char() == Some('=') {
                    self.two_char_token(TokenKind::LtOrEq, start_pos, start_line, start_column)
                } else {
                    self.single_char_token(TokenKind::Lt, c, start_pos, start_line, start_column)
                }
            }
            '>' => {
                if self.peek_char() == Some('=') {
                    self.two_char_token(TokenKind::GtOrEq, start_pos, start_line, start_column)
                } else {
                    self.single_char_token(TokenKind::Gt, c, start_pos, start_line, start_column)
                }
            }
            '+' => self.single_char_token(TokenKind::Plus, c, start_pos, start_line, start_column),
            '-' => self.single_char_token(TokenKind::Minus, c, start_pos, start_line, start_column),
            '*' => self.single_char_token(
                TokenKind::Multiplication,
                c,
                start_pos,
                start_line,
                start_column,
            ),
            '/' => {
                self.single_char_token(TokenKind::Division, c, start_pos, start_line, start_column)
            }
            ',' => self.single_char_token(TokenKind::Comma, c, start_pos, start_line, start_column),
            ';' => {
                self.single_char_token(TokenKind::Semicolon, c, start_pos, start_line, start_column)
            }
            '(' => {
                self.single_char_token(TokenKind::LeftParen, c, start_pos, start_line, start_column)
            }
            ')' => {
                self.single_char_token(TokenKind::RightParen, c, start_pos, start_line, start_column)
            }
            '{' => {
                self.single_char_token(TokenKind::LeftBrace, c, start_pos, start_line, start_column)
            }
            '}' => {
                self.single_char_token(TokenKind::RightBrace, c, start_pos, start_line, start_column)
            }
            _ => return None,
        };

        Some(token)
    }

    /// Reads a string literal from the input.
    ///
    /// The opening double quote is at the current position. The token's
    /// literal is the interior text, without the surrounding quotes and
    /// without any escape processing: `"\n"` in source stays a
    /// backslash followed by `n`.
    ///
    /// A string that is still open at end of input is closed there; the
    /// lexer has no error channel.
    pub(super) fn read_string(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance(); // skip opening "

        let content_start = self.pos;
        while self.current_char().is_some_and(|c| c != '"') {
            self.advance();
        }
        let content_end = self.pos;

        if self.current_char() == Some('"') {
            self.advance(); // skip closing "
        }

        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(
            TokenKind::Str,
            &self.input[content_start..content_end],
            span,
        )
    }

    /// Reads an identifier or keyword from the input.
    ///
    /// Identifiers start with an ASCII letter or underscore and continue
    /// with ASCII alphanumerics and underscores. The scanned text is
    /// looked up in the keyword table to decide the final kind.
    pub(super) fn read_identifier(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self
            .current_char()
            .is_some_and(|c| is_letter(c) || c.is_ascii_digit())
        {
            self.advance();
        }

        let literal = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(lookup_keyword(literal), literal, span)
    }

    /// Reads an integer literal from the input.
    ///
    /// The maximal run of ASCII digits becomes the token's literal text.
    /// Conversion to `i64` happens in the parser, which reports a parse
    /// error for out-of-range values.
    pub(super) fn read_number(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let literal = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::Int, literal, span)
    }
}
