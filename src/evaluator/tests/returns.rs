//! `regresa` unwinding.

use super::*;

#[test]
fn test_return_statements() {
    let cases = [
        ("regresa 10;", 10),
        ("regresa 10; 9;", 10),
        ("regresa 2 * 5; 9;", 10),
        ("9; regresa 2 * 5; 9;", 10),
    ];

    for (input, expected) in cases {
        assert_integer(&run(input), expected);
    }
}

#[test]
fn test_return_is_unwrapped_at_top_level() {
    // The wrapper must not escape the program.
    let result = run("regresa 10;");
    assert!(matches!(result, Object::Integer(10)), "got {:?}", result);
}

#[test]
fn test_return_unwinds_nested_blocks() {
    let input = "
        si (10 > 1) {
            si (10 > 1) {
                regresa 10;
            }
            regresa 1;
        }";
    assert_integer(&run(input), 10);
}

#[test]
fn test_return_stops_at_first_nested_hit() {
    let input = "si (2 > 1) { si (5 > 3) { regresa 1; } regresa 2; }";
    assert_integer(&run(input), 1);
}

#[test]
fn test_statements_after_return_do_not_run() {
    // A later division by zero would be an error if evaluated.
    assert_integer(&run("regresa 7; 1 / 0;"), 7);
}
