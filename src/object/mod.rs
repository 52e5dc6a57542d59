//! Runtime values for the LPP evaluator.
//!
//! This module defines [`Object`], the closed set of values a program
//! can produce, together with [`ObjectType`] tags used in diagnostics
//! and the [`Environment`] name-binding chain.
//!
//! Two variants are control-flow signals rather than user-visible
//! values: [`Object::Return`] unwinds through nested blocks to the
//! enclosing call, and [`Object::Error`] aborts the remainder of the
//! current statement stream. The evaluator checks for both after every
//! recursive step.
//!
//! # See Also
//!
//! * [`crate::evaluator`] - Produces and consumes these values

mod environment;

pub use environment::Environment;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::ast::{Block, Identifier};

/// The canonical `verdadero` value.
///
/// Boolean and null results always come from the canonical constants,
/// so comparing against them is a valid fast path.
pub const TRUE: Object = Object::Boolean(true);
/// The canonical `falso` value.
pub const FALSE: Object = Object::Boolean(false);
/// The canonical `nulo` value.
pub const NULL: Object = Object::Null;

/// A runtime value.
#[derive(Debug, Clone)]
pub enum Object {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A boolean. Use [`TRUE`]/[`FALSE`] rather than constructing ad hoc.
    Boolean(bool),
    /// A UTF-8 string.
    Str(String),
    /// The null value. Only produced by `si` with a false condition and
    /// no `sino` branch; there is no `nulo` literal in the language.
    Null,
    /// Wraps the value of a `regresa` statement while it unwinds to the
    /// enclosing function call. Never observed by user code.
    Return(Box<Object>),
    /// A function literal closed over its defining environment.
    Function(Function),
    /// A built-in function provided by the interpreter.
    Builtin(Builtin),
    /// A runtime error. Propagates like [`Object::Return`] but is never
    /// unwrapped; it surfaces as the final result.
    Error(String),
}

impl Object {
    /// The type tag used in diagnostics.
    pub fn object_type(&self) -> ObjectType {
        match self {
            Object::Integer(_) => ObjectType::Integer,
            Object::Boolean(_) => ObjectType::Boolean,
            Object::Str(_) => ObjectType::Str,
            Object::Null => ObjectType::Null,
            Object::Return(_) => ObjectType::Return,
            Object::Function(_) => ObjectType::Function,
            Object::Builtin(_) => ObjectType::Builtin,
            Object::Error(_) => ObjectType::Error,
        }
    }

    /// Renders the value for display to the user.
    ///
    /// Strings render as their raw content, without quotes. `Return`
    /// delegates to the wrapped value; errors render with an `Error:`
    /// prefix.
    pub fn inspect(&self) -> String {
        match self {
            Object::Integer(value) => value.to_string(),
            Object::Boolean(true) => "verdadero".to_string(),
            Object::Boolean(false) => "falso".to_string(),
            Object::Str(value) => value.clone(),
            Object::Null => "nulo".to_string(),
            Object::Return(value) => value.inspect(),
            Object::Function(function) => function.to_string(),
            Object::Builtin(builtin) => format!("procedimiento interno {}", builtin.name),
            Object::Error(message) => format!("Error: {message}"),
        }
    }

    /// Returns `true` for [`Object::Error`] values.
    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// Everything is truthy except `falso` and `nulo`.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }
}

/// The type tag of an [`Object`], as interpolated into runtime error
/// messages (`Discrepancia de tipos: INTEGER + BOOLEAN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Integer,
    Boolean,
    Str,
    Null,
    Return,
    Function,
    Builtin,
    Error,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ObjectType::Integer => "INTEGER",
            ObjectType::Boolean => "BOOLEAN",
            ObjectType::Str => "STRING",
            ObjectType::Null => "NULL",
            ObjectType::Return => "RETURN",
            ObjectType::Function => "FUNCTION",
            ObjectType::Builtin => "BUILTIN",
            ObjectType::Error => "ERROR",
        };
        f.write_str(tag)
    }
}

/// A function value: parameters, body, and the environment captured at
/// the point of definition.
///
/// Calls extend the captured environment, not the caller's; that is the
/// lexical-scope rule. A function stored inside the environment it
/// captures forms an `Rc` cycle which leaks until process exit.
#[derive(Clone)]
pub struct Function {
    /// Parameter names in declaration order.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub body: Block,
    /// The environment the literal was evaluated in.
    pub env: Rc<RefCell<Environment>>,
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameters: Vec<String> = self.parameters.iter().map(Identifier::to_string).collect();
        write!(f, "procedimiento({}) {{\n{}\n}}", parameters.join(", "), self.body)
    }
}

impl fmt::Debug for Function {
    /// The captured environment is skipped: it can contain the function
    /// itself, and following the cycle would never terminate.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .field("body", &self.body.to_string())
            .finish_non_exhaustive()
    }
}

/// The signature shared by all built-in functions.
///
/// Builtins receive the evaluated arguments and return a value or an
/// [`Object::Error`] directly.
pub type BuiltinFunction = fn(Vec<Object>) -> Object;

/// A named built-in function.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name the builtin is reachable under.
    pub name: &'static str,
    /// The implementation.
    pub func: BuiltinFunction,
}
