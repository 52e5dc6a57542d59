//! Token kinds for the LPP lexer.
//!
//! This module defines the [`TokenKind`] enum representing every token
//! type in the language, plus the keyword lookup used by the lexer.

use std::fmt;

/// The kind of token recognized by the lexer.
///
/// The set is closed: the lexer never produces anything outside of it.
/// Unknown characters become [`TokenKind::Illegal`] tokens rather than
/// lexer errors; the parser reports them when it fails to find a prefix
/// parser for them.
///
/// The literal text of a token lives on [`Token`](super::Token), not
/// here, so `TokenKind` stays `Copy` and cheap to compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// The assignment operator `=`.
    Assign,
    /// A comma `,`.
    Comma,
    /// The division operator `/`.
    Division,
    /// The `sino` keyword (else).
    Else,
    /// End of input. Emitted indefinitely once the source is exhausted.
    Eof,
    /// The equality operator `==`.
    Eq,
    /// The `falso` boolean literal.
    False,
    /// The `procedimiento` keyword (function literal).
    Function,
    /// The greater-than operator `>`.
    Gt,
    /// The greater-than-or-equal operator `>=`.
    GtOrEq,
    /// An identifier such as a variable or parameter name.
    Ident,
    /// The `si` keyword (if).
    If,
    /// A character the lexer does not recognize.
    Illegal,
    /// An integer literal. The digits are kept as literal text and
    /// converted to `i64` by the parser.
    Int,
    /// A left brace `{`.
    LeftBrace,
    /// A left parenthesis `(`.
    LeftParen,
    /// The `variable` keyword (let binding).
    Let,
    /// The less-than operator `<`.
    Lt,
    /// The less-than-or-equal operator `<=`.
    LtOrEq,
    /// The subtraction / negation operator `-`.
    Minus,
    /// The multiplication operator `*`.
    Multiplication,
    /// The logical negation operator `!`.
    Not,
    /// The inequality operator `!=`.
    NotEq,
    /// The addition operator `+`.
    Plus,
    /// A right brace `}`.
    RightBrace,
    /// A right parenthesis `)`.
    RightParen,
    /// The `regresa` keyword (return).
    Return,
    /// A semicolon `;`.
    Semicolon,
    /// A string literal. The literal text is the interior of the quotes.
    Str,
    /// The `verdadero` boolean literal.
    True,
}

impl fmt::Display for TokenKind {
    /// Formats the kind as the upper-case tag used in parser
    /// diagnostics, e.g. `Se esperaba IDENT, pero se obtiene INT`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            TokenKind::Assign => "ASSIGN",
            TokenKind::Comma => "COMMA",
            TokenKind::Division => "DIVISION",
            TokenKind::Else => "ELSE",
            TokenKind::Eof => "EOF",
            TokenKind::Eq => "EQ",
            TokenKind::False => "FALSE",
            TokenKind::Function => "FUNCTION",
            TokenKind::Gt => "GT",
            TokenKind::GtOrEq => "GT_OR_EQ",
            TokenKind::Ident => "IDENT",
            TokenKind::If => "IF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Int => "INT",
            TokenKind::LeftBrace => "LBRACE",
            TokenKind::LeftParen => "LPAREN",
            TokenKind::Let => "LET",
            TokenKind::Lt => "LT",
            TokenKind::LtOrEq => "LT_OR_EQ",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiplication => "MULTIPLICATION",
            TokenKind::Not => "NOT",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::Plus => "PLUS",
            TokenKind::RightBrace => "RBRACE",
            TokenKind::RightParen => "RPAREN",
            TokenKind::Return => "RETURN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Str => "STRING",
            TokenKind::True => "TRUE",
        };
        f.write_str(tag)
    }
}

/// Returns the token kind for an identifier literal.
///
/// Keywords (`variable`, `procedimiento`, `regresa`, `si`, `sino`,
/// `verdadero`, `falso`) map to their dedicated kinds; everything else
/// is [`TokenKind::Ident`].
pub fn lookup_keyword(literal: &str) -> TokenKind {
    match literal {
        "falso" => TokenKind::False,
        "procedimiento" => TokenKind::Function,
        "regresa" => TokenKind::Return,
        "si" => TokenKind::If,
        "sino" => TokenKind::Else,
        "variable" => TokenKind::Let,
        "verdadero" => TokenKind::True,
        _ => TokenKind::Ident,
    }
}
