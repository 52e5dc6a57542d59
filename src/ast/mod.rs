//! Abstract Syntax Tree definitions for LPP.
//!
//! This module defines the data structures that represent parsed LPP
//! programs. The AST is produced by the [`crate::parser`] and walked by
//! the [`crate::evaluator`].
//!
//! # Structure
//!
//! - [`Program`] - The root node containing a statement sequence
//! - [`Statement`] - `variable`, `regresa`, and expression statements
//! - [`Block`] - A brace-delimited statement sequence (if branches and
//!   function bodies)
//! - [`Expression`] - Literals, identifiers, operators, `si`
//!   expressions, function literals, and calls
//!
//! Every node keeps its originating [`Token`](crate::token::Token), so
//! the exact source literal stays available for printing and
//! diagnostics. The `Display` impls render the canonical text form of a
//! node; for operator expressions that form is fully parenthesized
//! (`-a * b` prints as `((-a) * b)`), which the parser tests lean on.
//!
//! # Module Structure
//!
//! - [`expr`] - Expression nodes and kinds
//! - [`stmt`] - Statement nodes, kinds, and blocks
//! - [`program`] - Top-level program structure
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::evaluator`] - Walks the AST against an environment

mod expr;
mod program;
mod stmt;

#[cfg(test)]
mod tests;

pub use expr::{Expression, ExpressionKind, Identifier};
pub use program::Program;
pub use stmt::{Block, Statement, StatementKind};
