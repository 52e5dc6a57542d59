//! Top-level program structure for the LPP AST.

use std::fmt;

use super::stmt::Statement;

/// The root node of a parsed program: a statement sequence.
///
/// Produced by [`Parser::parse_program`](crate::parser::Parser::parse_program),
/// which always returns a best-effort `Program` even in the presence of
/// parse errors; callers check the parser's error list before
/// evaluating.
#[derive(Debug, Clone)]
pub struct Program {
    /// The statements in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// The literal text of the first statement's token, or the empty
    /// string for an empty program.
    pub fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => "",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            statement.fmt(f)?;
        }
        Ok(())
    }
}
