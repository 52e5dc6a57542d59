//! Parser helper methods for token navigation and expectation checks.

use super::Parser;
use super::error::ParseError;
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Advances the lookahead window by one token.
    pub(super) fn advance_tokens(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    /// Checks that the peek token has the expected kind.
    ///
    /// On success the parser advances so the expected token becomes
    /// current. On failure a `Se esperaba ...` error is recorded and
    /// the parser stays put; the caller abandons the current statement
    /// and the outer loop resynchronizes.
    pub(super) fn expected_token(&mut self, expected: TokenKind) -> bool {
        if self.peek.kind == expected {
            self.advance_tokens();
            true
        } else {
            self.errors
                .push(ParseError::expected_token(expected, &self.peek));
            false
        }
    }

    /// Consumes a trailing semicolon if one follows.
    ///
    /// Semicolons are optional after the last expression of a block and
    /// before EOF, so statements only take one opportunistically.
    pub(super) fn consume_optional_semicolon(&mut self) {
        if self.peek.kind == TokenKind::Semicolon {
            self.advance_tokens();
        }
    }
}
