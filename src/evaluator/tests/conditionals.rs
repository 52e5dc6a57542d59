//! `si` / `sino` evaluation and truthiness.

use super::*;

#[test]
fn test_if_with_truthy_conditions() {
    let cases = [
        ("si (verdadero) { 10 }", 10),
        ("si (1) { 10 }", 10),
        ("si (1 < 2) { 10 }", 10),
        ("si (1 < 2) { 10 } sino { 20 }", 10),
    ];

    for (input, expected) in cases {
        assert_integer(&run(input), expected);
    }
}

#[test]
fn test_if_with_false_conditions_takes_alternative() {
    let cases = [
        ("si (falso) { 10 } sino { 20 }", 20),
        ("si (1 > 2) { 10 } sino { 20 }", 20),
    ];

    for (input, expected) in cases {
        assert_integer(&run(input), expected);
    }
}

#[test]
fn test_if_without_alternative_yields_null() {
    assert_null(&run("si (falso) { 10 }"));
    assert_null(&run("si (1 > 2) { 10 }"));
}

#[test]
fn test_nested_if() {
    assert_integer(&run("si (falso) {10;} sino {si (verdadero) {1;}}"), 1);
}

#[test]
fn test_string_condition_is_truthy() {
    assert_integer(&run("si (\"\") { 1 } sino { 2 }"), 1);
    assert_integer(&run("si (\"hola\") { 1 } sino { 2 }"), 1);
}

#[test]
fn test_zero_is_truthy() {
    assert_integer(&run("si (0) { 1 } sino { 2 }"), 1);
}

#[test]
fn test_error_in_condition_propagates() {
    assert_error(
        &run("si (1 + verdadero) { 10 }"),
        "Discrepancia de tipos: INTEGER + BOOLEAN",
    );
}
