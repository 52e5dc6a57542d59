//! The built-in function registry.

use super::*;

#[test]
fn test_longitud_of_strings() {
    let cases = [
        ("longitud(\"\")", 0),
        ("longitud(\"cuatro\")", 6),
        ("longitud(\"Hola mundo\")", 10),
    ];

    for (input, expected) in cases {
        assert_integer(&run(input), expected);
    }
}

#[test]
fn test_longitud_counts_characters_not_bytes() {
    assert_integer(&run("longitud(\"año\")"), 3);
}

#[test]
fn test_longitud_wrong_argument_type() {
    assert_error(
        &run("longitud(1)"),
        "argumento para longitud sin soporte, se recibió INTEGER",
    );
    assert_error(
        &run("longitud(verdadero)"),
        "argumento para longitud sin soporte, se recibió BOOLEAN",
    );
}

#[test]
fn test_longitud_wrong_arity() {
    assert_error(
        &run("longitud(\"uno\", \"dos\")"),
        "número incorrecto de argumentos para longitud, se recibieron 2, se requieren 1",
    );
    assert_error(
        &run("longitud()"),
        "número incorrecto de argumentos para longitud, se recibieron 0, se requieren 1",
    );
}

#[test]
fn test_longitud_composes() {
    assert_integer(&run("longitud(\"Hola \" + \"mundo\")"), 10);
    assert_boolean(&run("longitud(\"abc\") == 3"), true);
}

#[test]
fn test_builtin_is_shadowed_by_user_binding() {
    let input = "variable longitud = procedimiento(x) { 99; }; longitud(\"abc\");";
    assert_integer(&run(input), 99);
}

#[test]
fn test_builtin_errors_propagate_through_calls() {
    let input = "
        variable f = procedimiento(s) { regresa longitud(s); };
        f(5);";
    assert_error(
        &run(input),
        "argumento para longitud sin soporte, se recibió INTEGER",
    );
}
