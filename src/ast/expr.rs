//! Expression nodes for the LPP AST.

use std::fmt;

use crate::token::Token;

use super::stmt::Block;

/// An identifier with its originating token.
///
/// Kept as a standalone struct (rather than only an [`ExpressionKind`]
/// variant) because `variable` statements and function parameter lists
/// need identifiers as structured fields.
#[derive(Debug, Clone)]
pub struct Identifier {
    /// The `IDENT` token this identifier was parsed from.
    pub token: Token,
    /// The identifier's name.
    pub value: String,
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// The kind of an expression.
///
/// Operators are stored as their literal text (`"+"`, `"=="`, ...);
/// runtime diagnostics interpolate them directly into messages like
/// `Discrepancia de tipos: INTEGER + BOOLEAN`.
#[derive(Debug, Clone)]
pub enum ExpressionKind {
    /// A variable reference.
    Identifier { value: String },

    /// An integer literal, already converted from its digits.
    IntegerLiteral { value: i64 },

    /// A `verdadero` or `falso` literal.
    BooleanLiteral { value: bool },

    /// A string literal. The value is the interior text of the quotes.
    StringLiteral { value: String },

    /// A prefix operator application: `-x` or `!x`.
    Prefix {
        operator: String,
        right: Box<Expression>,
    },

    /// A binary operator application.
    Infix {
        left: Box<Expression>,
        operator: String,
        right: Box<Expression>,
    },

    /// A `si (condition) { ... } [sino { ... }]` expression.
    ///
    /// The alternative is absent when no `sino` branch follows.
    If {
        condition: Box<Expression>,
        consequence: Block,
        alternative: Option<Block>,
    },

    /// A `procedimiento(params) { body }` literal.
    ///
    /// Parameter names are not checked for duplicates; at call time the
    /// bindings are installed left to right, so the last one wins.
    FunctionLiteral {
        parameters: Vec<Identifier>,
        body: Block,
    },

    /// A call: any expression applied to an argument list.
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

/// An expression with its originating token.
#[derive(Debug, Clone)]
pub struct Expression {
    /// The kind of expression.
    pub kind: ExpressionKind,
    /// The token this expression starts at.
    pub token: Token,
}

impl Expression {
    /// Creates a new expression with the given kind and token.
    pub fn new(kind: ExpressionKind, token: Token) -> Self {
        Expression { kind, token }
    }

    /// The literal text of the originating token.
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExpressionKind::Identifier { value } => f.write_str(value),
            ExpressionKind::IntegerLiteral { .. }
            | ExpressionKind::BooleanLiteral { .. }
            | ExpressionKind::StringLiteral { .. } => f.write_str(&self.token.literal),
            ExpressionKind::Prefix { operator, right } => {
                write!(f, "({operator}{right})")
            }
            ExpressionKind::Infix {
                left,
                operator,
                right,
            } => write!(f, "({left} {operator} {right})"),
            ExpressionKind::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "si {condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " sino {alternative}")?;
                }
                Ok(())
            }
            ExpressionKind::FunctionLiteral { parameters, body } => {
                let parameters: Vec<String> =
                    parameters.iter().map(Identifier::to_string).collect();
                write!(f, "procedimiento({}) {body}", parameters.join(", "))
            }
            ExpressionKind::Call {
                function,
                arguments,
            } => {
                let arguments: Vec<String> =
                    arguments.iter().map(Expression::to_string).collect();
                write!(f, "{function}({})", arguments.join(", "))
            }
        }
    }
}
