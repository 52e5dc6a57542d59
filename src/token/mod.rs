//! Token definitions for the LPP lexer.
//!
//! This module provides the fundamental token types used throughout the
//! interpreter. It defines [`Span`] for source location tracking,
//! [`TokenKind`] for token types, and [`Token`] for representing lexical
//! units together with their exact source text.
//!
//! # Overview
//!
//! The lexer produces a stream of [`Token`]s, each containing:
//! - A [`TokenKind`] describing what type of token it is
//! - The literal text the token was scanned from (or its canonical
//!   form, e.g. `"=="`)
//! - A [`Span`] indicating where in the source code it appears
//!
//! # Module Structure
//!
//! - [`span`] - Source location tracking ([`Span`] struct)
//! - [`kind`] - Token type definitions ([`TokenKind`] enum)
//!
//! # See Also
//!
//! * [`crate::lexer`] - The lexer that produces these tokens
//! * [`crate::parser`] - The parser that consumes these tokens

mod kind;
mod span;

pub use kind::{TokenKind, lookup_keyword};
pub use span::Span;

/// A token with its kind, literal text, and source location.
///
/// The literal is the exact source substring the token was scanned
/// from; AST nodes hold on to their originating token so that literal
/// text stays available for printing and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,
    /// The source text of this token. Empty for [`TokenKind::Eof`].
    pub literal: String,
    /// The source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new `Token` with the given kind, literal, and span.
    ///
    /// This is a simple constructor that performs no validation. The
    /// caller is responsible for ensuring the span corresponds to the
    /// token's position in the source.
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            literal: literal.into(),
            span,
        }
    }
}
