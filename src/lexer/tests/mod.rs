//! Unit tests for the lexer module.

use super::*;
use crate::token::TokenKind;

/// Helper function to tokenize input and return only the kinds.
pub(super) fn tokenize_kinds(input: &str) -> Vec<TokenKind> {
    Lexer::new(input).tokenize().into_iter().map(|t| t.kind).collect()
}

/// Helper function to tokenize input and return `(kind, literal)` pairs.
pub(super) fn tokenize_pairs(input: &str) -> Vec<(TokenKind, String)> {
    Lexer::new(input)
        .tokenize()
        .into_iter()
        .map(|t| (t.kind, t.literal))
        .collect()
}

mod strings;
mod whitespace;
