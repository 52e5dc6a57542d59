//! Parse error type and named constructors.

use crate::token::{Span, Token, TokenKind};

/// An error that occurred during parsing.
///
/// `ParseError` pairs the human-readable Spanish message with the
/// source location of the offending token, enabling rich reporting with
/// [`ariadne`](https://docs.rs/ariadne) while the REPL prints the bare
/// message.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred.
    pub span: Span,
}

impl ParseError {
    /// The peek token did not have the expected kind.
    pub(super) fn expected_token(expected: TokenKind, got: &Token) -> Self {
        ParseError {
            message: format!("Se esperaba {expected}, pero se obtiene {}", got.kind),
            span: got.span,
        }
    }

    /// No prefix parser is registered for the current token kind.
    pub(super) fn no_prefix_parser(got: &Token) -> Self {
        ParseError {
            message: format!(
                "No se encontró ninguna función para parsear {}",
                got.kind
            ),
            span: got.span,
        }
    }

    /// An integer literal's digits do not fit in an `i64`.
    pub(super) fn invalid_integer(got: &Token) -> Self {
        ParseError {
            message: format!("No se ha podido parsear {} como entero", got.literal),
            span: got.span,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.span, self.message)
    }
}

impl std::error::Error for ParseError {}
