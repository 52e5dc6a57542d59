//! Built-in functions provided by the interpreter.
//!
//! Builtins are consulted by identifier lookup after the environment
//! chain comes up empty, so a user binding named `longitud` shadows the
//! builtin. Each implementation validates its own arity and argument
//! types and returns an [`Object::Error`] with a builtin-specific
//! message when they do not hold.

use crate::object::{Builtin, Object};

/// The registered builtins, looked up linearly; the set is small enough
/// that a map would not pay for itself.
const BUILTINS: &[Builtin] = &[Builtin {
    name: "longitud",
    func: longitud,
}];

/// Returns the builtin registered under `name`, if any.
pub(super) fn lookup(name: &str) -> Option<Builtin> {
    BUILTINS.iter().find(|builtin| builtin.name == name).copied()
}

/// `longitud(cadena)` - the length of a string, in characters.
fn longitud(arguments: Vec<Object>) -> Object {
    if arguments.len() != 1 {
        return Object::Error(format!(
            "número incorrecto de argumentos para longitud, se recibieron {}, se requieren 1",
            arguments.len()
        ));
    }

    match &arguments[0] {
        Object::Str(value) => Object::Integer(value.chars().count() as i64),
        other => Object::Error(format!(
            "argumento para longitud sin soporte, se recibió {}",
            other.object_type()
        )),
    }
}
