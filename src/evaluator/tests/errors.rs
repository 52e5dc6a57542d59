//! Runtime error production and short-circuit propagation.

use super::*;

#[test]
fn test_type_mismatch() {
    assert_error(&run("5 + verdadero;"), "Discrepancia de tipos: INTEGER + BOOLEAN");
    assert_error(
        &run("5 + verdadero; 5;"),
        "Discrepancia de tipos: INTEGER + BOOLEAN",
    );
    assert_error(&run("verdadero == 1"), "Discrepancia de tipos: BOOLEAN == INTEGER");
    assert_error(&run("\"a\" + 1"), "Discrepancia de tipos: STRING + INTEGER");
}

#[test]
fn test_unknown_prefix_operator() {
    assert_error(&run("-verdadero"), "Operador desconocido: -BOOLEAN");
    assert_error(&run("-\"hola\""), "Operador desconocido: -STRING");
}

#[test]
fn test_unknown_infix_operator_on_booleans() {
    assert_error(
        &run("verdadero + falso;"),
        "Operador desconocido: BOOLEAN + BOOLEAN",
    );
    assert_error(
        &run("verdadero - falso;"),
        "Operador desconocido: BOOLEAN - BOOLEAN",
    );
    assert_error(
        &run("verdadero < falso;"),
        "Operador desconocido: BOOLEAN < BOOLEAN",
    );
}

#[test]
fn test_unknown_operator_on_nulls() {
    // Same type but no operators defined for it.
    assert_error(
        &run("si (falso) {} == si (falso) {}"),
        "Operador desconocido: NULL == NULL",
    );
}

#[test]
fn test_unbound_identifier() {
    assert_error(&run("foobar"), "Identificador no encontrado: foobar");
    assert_error(&run("5; faltante + 1;"), "Identificador no encontrado: faltante");
}

#[test]
fn test_bare_assignment_evaluates_best_effort() {
    // `=` is not an operator, so the parser records an error for it,
    // but the best-effort program still starts with the bare `x`.
    // Evaluating that program fails on the unbound identifier first.
    let mut parser = Parser::new(Lexer::new("x = 4;"));
    let program = parser.parse_program();
    assert!(!parser.errors().is_empty());

    let env = Rc::new(RefCell::new(Environment::new()));
    assert_error(&evaluate(&program, &env), "Identificador no encontrado: x");
}

#[test]
fn test_calling_a_non_function() {
    assert_error(&run("5(1)"), "No es una función: INTEGER");
    assert_error(&run("verdadero()"), "No es una función: BOOLEAN");
}

#[test]
fn test_error_short_circuits_statement_stream() {
    // The trailing `2 + 2` must never evaluate.
    assert_error(
        &run("5; verdadero - falso; 2 + 2;"),
        "Operador desconocido: BOOLEAN - BOOLEAN",
    );
}

#[test]
fn test_error_short_circuits_inside_expressions() {
    assert_error(
        &run("5 + (verdadero - falso)"),
        "Operador desconocido: BOOLEAN - BOOLEAN",
    );
    assert_error(&run("!(5 + verdadero)"), "Discrepancia de tipos: INTEGER + BOOLEAN");
}

#[test]
fn test_error_in_arguments_abandons_call() {
    let input = "
        variable f = procedimiento(a, b) { regresa 1 / 0; };
        f(1 + verdadero, 1 / 0);";
    assert_error(&run(input), "Discrepancia de tipos: INTEGER + BOOLEAN");
}

#[test]
fn test_error_in_let_value_propagates() {
    assert_error(
        &run("variable x = 5 + verdadero; x;"),
        "Discrepancia de tipos: INTEGER + BOOLEAN",
    );
}

#[test]
fn test_error_inside_function_body_surfaces() {
    let input = "
        variable f = procedimiento() { verdadero + falso; };
        f();";
    assert_error(&run(input), "Operador desconocido: BOOLEAN + BOOLEAN");
}

#[test]
fn test_error_inspect_format() {
    assert_eq!(
        run("5 + verdadero;").inspect(),
        "Error: Discrepancia de tipos: INTEGER + BOOLEAN"
    );
}

#[test]
fn test_wrong_argument_count() {
    let input = "variable f = procedimiento(x, y) { x + y; }; f(1);";
    assert_error(
        &run(input),
        "número incorrecto de argumentos: se recibieron 1, se requieren 2",
    );
}
