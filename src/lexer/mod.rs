//! Lexical analyzer for LPP.
//!
//! This module provides the [`Lexer`] struct which converts source code
//! text into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer performs the following tasks:
//! - Scans the input character by character
//! - Recognizes literals, identifiers, keywords, punctuation, and
//!   multi-character operators (`==`, `!=`, `<=`, `>=`)
//! - Tracks source positions for error reporting
//! - Skips whitespace and `//` line comments
//!
//! # Supported Tokens
//!
//! - **Keywords**: `variable`, `procedimiento`, `regresa`, `si`, `sino`,
//!   `verdadero`, `falso`
//! - **Identifiers**: Start with an ASCII letter or underscore, continue
//!   with ASCII alphanumerics and underscores
//! - **Integer literals**: Sequences of ASCII digits. The digits are kept
//!   as literal text; numeric conversion happens in the parser
//! - **String literals**: Enclosed in double quotes, no escape sequences
//! - **Operators and punctuation**: `= + - * / ! == != < > <= >= , ; ( ) { }`
//!
//! The lexer itself never fails: a character it does not recognize is
//! emitted as an [`TokenKind::Illegal`] token, which the parser reports
//! when it reaches it.
//!
//! # Examples
//!
//! ```
//! use lpp::lexer::Lexer;
//! use lpp::token::TokenKind;
//!
//! let mut lexer = Lexer::new("variable x = 5;");
//! assert_eq!(lexer.next_token().kind, TokenKind::Let);
//! assert_eq!(lexer.next_token().literal, "x");
//! ```
//!
//! # Module Structure
//!
//! Cursor navigation and trivia skipping live in this file; the
//! per-token-class readers are in [`tokens`](self), and `tests` holds
//! the unit tests (test-only).
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod tokens;

#[cfg(test)]
mod tests;

use crate::token::{Span, Token, TokenKind};

/// A lexical analyzer that tokenizes LPP source code.
///
/// The `Lexer` maintains its position within the input and tracks
/// line/column numbers for error reporting. Once the input is exhausted
/// it keeps returning [`TokenKind::Eof`] tokens indefinitely.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    input: &'a str,
    /// Current byte position in the input.
    pos: usize,
    /// Current line number (1-indexed).
    line: usize,
    /// Current column number (1-indexed).
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` positioned before the first character of
    /// the given input.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Reads and returns the next token, advancing the lexer.
    ///
    /// Whitespace and comments before the token are skipped. At end of
    /// input this returns an [`TokenKind::Eof`] token, and keeps doing
    /// so on every subsequent call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.current_char() else {
            let span = Span::new(self.pos, self.pos, self.line, self.column);
            return Token::new(TokenKind::Eof, "", span);
        };

        if let Some(token) = self.next_operator_or_punctuation(c, start_pos, start_line, start_column)
        {
            return token;
        }

        if c == '"' {
            return self.read_string(start_pos, start_line, start_column);
        }

        if c.is_ascii_digit() {
            return self.read_number(start_pos, start_line, start_column);
        }

        if is_letter(c) {
            return self.read_identifier(start_pos, start_line, start_column);
        }

        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::Illegal, c.to_string(), span)
    }

    /// Tokenizes the remaining input, up to and including the first
    /// [`TokenKind::Eof`] token.
    ///
    /// Convenience for tests and tools that want the whole stream at
    /// once; the parser pulls tokens one at a time instead.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// The unscanned remainder of the input.
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// The character under the cursor, or `None` once the input is
    /// exhausted.
    pub(super) fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character one past the cursor. This is the lookahead that
    /// decides between the one- and two-character spellings of `=`,
    /// `!`, `<`, and `>`.
    pub(super) fn peek_char(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// Moves the cursor one character forward, keeping the line and
    /// column counters in step.
    ///
    /// The cursor itself counts bytes so that token text can be sliced
    /// straight out of the input; multi-byte characters therefore step
    /// the position by their UTF-8 width.
    pub(super) fn advance(&mut self) {
        let Some(c) = self.current_char() else {
            return;
        };
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Consumes everything that may separate two tokens: whitespace
    /// (spaces, tabs, newlines, carriage returns) and `//` line
    /// comments, in any order.
    fn skip_whitespace_and_comments(&mut self) {
        while let Some(c) = self.current_char() {
            if c.is_whitespace() {
                self.advance();
            } else if c == '/' && self.peek_char() == Some('/') {
                // Drop the comment text; the newline after it is
                // ordinary whitespace for the next round.
                while self.current_char().is_some_and(|c| c != '\n') {
                    self.advance();
                }
            } else {
                break;
            }
        }
    }
}

/// Returns `true` for characters that may start or continue an
/// identifier: ASCII letters and the underscore.
pub(super) fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}
