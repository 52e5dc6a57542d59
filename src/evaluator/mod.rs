//! Tree-walking evaluator for LPP.
//!
//! This module walks the AST produced by the [`crate::parser`] against
//! an [`Environment`], producing an [`Object`].
//!
//! # Overview
//!
//! Evaluation is a recursive dispatch on node kind. Two variants act as
//! control-flow signals and are checked after every recursive call:
//!
//! - [`Object::Return`] wraps the value of a `regresa` statement and
//!   unwinds through nested blocks. [`evaluate`] unwraps it at the top
//!   level, so a top-level `regresa 10;` yields `10`, not a wrapper.
//! - [`Object::Error`] propagates the same way but is never unwrapped;
//!   once an error appears, no further statements or subexpressions of
//!   the current sequence are evaluated.
//!
//! Functions are closures: a `procedimiento` literal captures the
//! environment it was evaluated in, and a call extends that captured
//! environment rather than the caller's.
//!
//! # Examples
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use lpp::evaluator::evaluate;
//! use lpp::lexer::Lexer;
//! use lpp::object::Environment;
//! use lpp::parser::Parser;
//!
//! let mut parser = Parser::new(Lexer::new("variable x = 5; x * 2;"));
//! let program = parser.parse_program();
//! assert!(parser.errors().is_empty());
//!
//! let env = Rc::new(RefCell::new(Environment::new()));
//! assert_eq!(evaluate(&program, &env).inspect(), "10");
//! ```
//!
//! # Module Structure
//!
//! - [`builtins`](self) - The built-in function registry
//! - `tests` - Unit tests (test-only)

mod builtins;

#[cfg(test)]
mod tests;

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::{Block, Expression, ExpressionKind, Program, Statement, StatementKind};
use crate::object::{Environment, FALSE, Function, NULL, Object, TRUE};

/// Evaluates a program, returning its final value.
///
/// The result is the value of the last statement, the unwrapped value
/// of the first `regresa`, or the first error. An empty program
/// evaluates to `nulo`.
pub fn evaluate(program: &Program, env: &Rc<RefCell<Environment>>) -> Object {
    let mut result = NULL;

    for statement in &program.statements {
        result = evaluate_statement(statement, env);

        match result {
            Object::Return(value) => return *value,
            Object::Error(_) => return result,
            _ => {}
        }
    }

    result
}

fn evaluate_statement(statement: &Statement, env: &Rc<RefCell<Environment>>) -> Object {
    match &statement.kind {
        StatementKind::Let { name, value } => {
            let value = evaluate_expression(value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(name.value.clone(), value);
            NULL
        }
        StatementKind::Return { value } => {
            let value = evaluate_expression(value, env);
            if value.is_error() {
                return value;
            }
            Object::Return(Box::new(value))
        }
        StatementKind::Expression { expression } => evaluate_expression(expression, env),
    }
}

/// Evaluates a block, preserving `Return` wrappers so they keep
/// unwinding toward the enclosing call.
fn evaluate_block(block: &Block, env: &Rc<RefCell<Environment>>) -> Object {
    let mut result = NULL;

    for statement in &block.statements {
        result = evaluate_statement(statement, env);

        if matches!(result, Object::Return(_) | Object::Error(_)) {
            return result;
        }
    }

    result
}

fn evaluate_expression(expression: &Expression, env: &Rc<RefCell<Environment>>) -> Object {
    match &expression.kind {
        ExpressionKind::IntegerLiteral { value } => Object::Integer(*value),
        ExpressionKind::BooleanLiteral { value } => native_bool_to_object(*value),
        ExpressionKind::StringLiteral { value } => Object::Str(value.clone()),
        ExpressionKind::Identifier { value } => evaluate_identifier(value, env),
        ExpressionKind::Prefix { operator, right } => {
            let right = evaluate_expression(right, env);
            if right.is_error() {
                return right;
            }
            evaluate_prefix_expression(operator, right)
        }
        ExpressionKind::Infix {
            left,
            operator,
            right,
        } => {
            let left = evaluate_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = evaluate_expression(right, env);
            if right.is_error() {
                return right;
            }
            evaluate_infix_expression(operator, left, right)
        }
        ExpressionKind::If {
            condition,
            consequence,
            alternative,
        } => {
            let condition = evaluate_expression(condition, env);
            if condition.is_error() {
                return condition;
            }
            if condition.is_truthy() {
                evaluate_block(consequence, env)
            } else if let Some(alternative) = alternative {
                evaluate_block(alternative, env)
            } else {
                NULL
            }
        }
        ExpressionKind::FunctionLiteral { parameters, body } => Object::Function(Function {
            parameters: parameters.clone(),
            body: body.clone(),
            env: Rc::clone(env),
        }),
        ExpressionKind::Call {
            function,
            arguments,
        } => {
            let function = evaluate_expression(function, env);
            if function.is_error() {
                return function;
            }
            let arguments = match evaluate_expressions(arguments, env) {
                Ok(arguments) => arguments,
                Err(error) => return error,
            };
            apply_function(function, arguments)
        }
    }
}

/// Evaluates call arguments strictly left to right.
///
/// The first error abandons the remaining arguments and becomes the
/// call's result.
fn evaluate_expressions(
    expressions: &[Expression],
    env: &Rc<RefCell<Environment>>,
) -> Result<Vec<Object>, Object> {
    let mut results = Vec::with_capacity(expressions.len());

    for expression in expressions {
        let value = evaluate_expression(expression, env);
        if value.is_error() {
            return Err(value);
        }
        results.push(value);
    }

    Ok(results)
}

fn apply_function(function: Object, arguments: Vec<Object>) -> Object {
    match function {
        Object::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return Object::Error(format!(
                    "número incorrecto de argumentos: se recibieron {}, se requieren {}",
                    arguments.len(),
                    function.parameters.len()
                ));
            }

            // The call environment encloses the captured one, not the
            // caller's. Duplicate parameter names bind left to right.
            let mut call_env = Environment::enclosed(Rc::clone(&function.env));
            for (parameter, argument) in function.parameters.iter().zip(arguments) {
                call_env.set(parameter.value.clone(), argument);
            }
            let call_env = Rc::new(RefCell::new(call_env));

            match evaluate_block(&function.body, &call_env) {
                Object::Return(value) => *value,
                other => other,
            }
        }
        Object::Builtin(builtin) => (builtin.func)(arguments),
        other => Object::Error(format!("No es una función: {}", other.object_type())),
    }
}

fn evaluate_identifier(name: &str, env: &Rc<RefCell<Environment>>) -> Object {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(name) {
        return Object::Builtin(builtin);
    }
    Object::Error(format!("Identificador no encontrado: {name}"))
}

fn evaluate_prefix_expression(operator: &str, right: Object) -> Object {
    match operator {
        "!" => evaluate_not_expression(right),
        "-" => evaluate_minus_expression(right),
        _ => Object::Error(format!(
            "Operador desconocido: {operator}{}",
            right.object_type()
        )),
    }
}

/// Truthiness negation: `!verdadero` is `falso`, `!nulo` is
/// `verdadero`, and any other value negates to `falso`.
fn evaluate_not_expression(right: Object) -> Object {
    match right {
        Object::Boolean(value) => native_bool_to_object(!value),
        Object::Null => TRUE,
        _ => FALSE,
    }
}

fn evaluate_minus_expression(right: Object) -> Object {
    match right {
        Object::Integer(value) => Object::Integer(-value),
        other => Object::Error(format!("Operador desconocido: -{}", other.object_type())),
    }
}

fn evaluate_infix_expression(operator: &str, left: Object, right: Object) -> Object {
    match (left, right) {
        (Object::Integer(left), Object::Integer(right)) => {
            evaluate_integer_infix_expression(operator, left, right)
        }
        (Object::Str(left), Object::Str(right)) => {
            evaluate_string_infix_expression(operator, left, right)
        }
        (Object::Boolean(left), Object::Boolean(right)) => match operator {
            "==" => native_bool_to_object(left == right),
            "!=" => native_bool_to_object(left != right),
            _ => Object::Error(format!("Operador desconocido: BOOLEAN {operator} BOOLEAN")),
        },
        (left, right) if left.object_type() != right.object_type() => Object::Error(format!(
            "Discrepancia de tipos: {} {operator} {}",
            left.object_type(),
            right.object_type()
        )),
        (left, right) => Object::Error(format!(
            "Operador desconocido: {} {operator} {}",
            left.object_type(),
            right.object_type()
        )),
    }
}

fn evaluate_integer_infix_expression(operator: &str, left: i64, right: i64) -> Object {
    match operator {
        "+" => Object::Integer(left + right),
        "-" => Object::Integer(left - right),
        "*" => Object::Integer(left * right),
        "/" => {
            if right == 0 {
                Object::Error(format!("División entre cero: {left} / 0"))
            } else {
                Object::Integer(left / right)
            }
        }
        "<" => native_bool_to_object(left < right),
        ">" => native_bool_to_object(left > right),
        "<=" => native_bool_to_object(left <= right),
        ">=" => native_bool_to_object(left >= right),
        "==" => native_bool_to_object(left == right),
        "!=" => native_bool_to_object(left != right),
        _ => Object::Error(format!("Operador desconocido: INTEGER {operator} INTEGER")),
    }
}

/// String operators: `+` concatenates, the comparison family compares
/// lexicographically.
fn evaluate_string_infix_expression(operator: &str, left: String, right: String) -> Object {
    match operator {
        "+" => Object::Str(left + &right),
        "<" => native_bool_to_object(left < right),
        ">" => native_bool_to_object(left > right),
        "<=" => native_bool_to_object(left <= right),
        ">=" => native_bool_to_object(left >= right),
        "==" => native_bool_to_object(left == right),
        "!=" => native_bool_to_object(left != right),
        _ => Object::Error(format!("Operador desconocido: STRING {operator} STRING")),
    }
}

/// Lifts a host boolean to the canonical singleton.
fn native_bool_to_object(value: bool) -> Object {
    if value { TRUE } else { FALSE }
}
