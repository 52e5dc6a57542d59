//! Function literals, application, closures, and recursion.

use super::*;

#[test]
fn test_let_statements() {
    let cases = [
        ("variable a = 5; a;", 5),
        ("variable a = 5 * 5; a;", 25),
        ("variable a = 5; variable b = a; b;", 5),
        ("variable a = 5; variable b = a; variable c = a + b + 5; c;", 15),
    ];

    for (input, expected) in cases {
        assert_integer(&run(input), expected);
    }
}

#[test]
fn test_let_rebinding_shadows() {
    assert_integer(&run("variable a = 1; variable a = 2; a;"), 2);
}

#[test]
fn test_function_object() {
    let result = run("procedimiento(x) { x + 2; };");
    match result {
        Object::Function(function) => {
            assert_eq!(function.parameters.len(), 1);
            assert_eq!(function.parameters[0].value, "x");
            assert_eq!(function.body.to_string(), "(x + 2)");
        }
        other => panic!("Expected Function, got {:?}", other),
    }
}

#[test]
fn test_function_application() {
    let cases = [
        ("variable identidad = procedimiento(x) { x; }; identidad(5);", 5),
        (
            "variable identidad = procedimiento(x) { regresa x; }; identidad(5);",
            5,
        ),
        ("variable doble = procedimiento(x) { x * 2; }; doble(5);", 10),
        ("variable suma = procedimiento(x, y) { x + y; }; suma(5, 5);", 10),
        (
            "variable suma = procedimiento(x, y) { regresa x + y; }; suma(5, suma(2, 1));",
            8,
        ),
        ("procedimiento(x) { x; }(5)", 5),
    ];

    for (input, expected) in cases {
        assert_integer(&run(input), expected);
    }
}

#[test]
fn test_implicit_return_of_last_expression() {
    // Functions that never `regresa` yield their last expression.
    assert_integer(&run("procedimiento() { 1; 2; 3; }();"), 3);
}

#[test]
fn test_zero_argument_function() {
    assert_integer(&run("procedimiento() { 42; }();"), 42);
}

#[test]
fn test_empty_body_yields_null() {
    assert_null(&run("procedimiento() {}();"));
}

#[test]
fn test_closures_capture_their_definition_scope() {
    let input = "
        variable nuevo_sumador = procedimiento(x) {
            procedimiento(y) { x + y };
        };
        variable suma_dos = nuevo_sumador(2);
        suma_dos(2);";
    assert_integer(&run(input), 4);
}

#[test]
fn test_closure_reads_scope_after_the_call_returns() {
    let input = "
        variable contador = procedimiento(base) {
            procedimiento() { base * 10 };
        };
        variable lee = contador(7);
        lee();";
    assert_integer(&run(input), 70);
}

#[test]
fn test_call_environment_does_not_leak_to_caller() {
    let input = "
        variable f = procedimiento(x) { x; };
        f(5);
        x;";
    assert_error(&run(input), "Identificador no encontrado: x");
}

#[test]
fn test_parameters_shadow_outer_bindings() {
    let input = "
        variable x = 1;
        variable f = procedimiento(x) { x; };
        f(99);";
    assert_integer(&run(input), 99);
}

#[test]
fn test_outer_binding_unchanged_after_shadowing_call() {
    let input = "
        variable x = 1;
        variable f = procedimiento(x) { x; };
        f(99);
        x;";
    assert_integer(&run(input), 1);
}

#[test]
fn test_duplicate_parameters_last_binding_wins() {
    let input = "variable f = procedimiento(x, x) { x; }; f(1, 2);";
    assert_integer(&run(input), 2);
}

#[test]
fn test_recursion() {
    let input = "
        variable factorial = procedimiento(n) {
            si (n <= 1) { regresa 1; }
            regresa n * factorial(n - 1);
        };
        factorial(5);";
    assert_integer(&run(input), 120);
}

#[test]
fn test_functions_as_arguments() {
    let input = "
        variable aplica = procedimiento(f, x) { f(x); };
        aplica(procedimiento(n) { n + 1; }, 41);";
    assert_integer(&run(input), 42);
}

#[test]
fn test_deep_call_nesting() {
    let input = "
        variable decrementa = procedimiento(n) {
            si (n == 0) { regresa 0; }
            regresa decrementa(n - 1);
        };
        decrementa(500);";
    assert_integer(&run(input), 0);
}
