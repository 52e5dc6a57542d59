//! Tests for whitespace and comment handling.

use super::*;

#[test]
fn test_whitespace_only() {
    let kinds = tokenize_kinds("  \t \n \r ");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_newlines_are_whitespace() {
    let kinds = tokenize_kinds("5\n+\n5");
    assert_eq!(
        kinds,
        vec![TokenKind::Int, TokenKind::Plus, TokenKind::Int, TokenKind::Eof]
    );
}

#[test]
fn test_carriage_returns() {
    let kinds = tokenize_kinds("verdadero\r\nfalso");
    assert_eq!(kinds, vec![TokenKind::True, TokenKind::False, TokenKind::Eof]);
}

#[test]
fn test_line_comment() {
    let kinds = tokenize_kinds("5 // un comentario\n10");
    assert_eq!(kinds, vec![TokenKind::Int, TokenKind::Int, TokenKind::Eof]);
}

#[test]
fn test_comment_at_end_of_input() {
    let kinds = tokenize_kinds("5 // sin salto final");
    assert_eq!(kinds, vec![TokenKind::Int, TokenKind::Eof]);
}

#[test]
fn test_consecutive_comments() {
    let kinds = tokenize_kinds("// uno\n// dos\nverdadero");
    assert_eq!(kinds, vec![TokenKind::True, TokenKind::Eof]);
}

#[test]
fn test_division_is_not_a_comment() {
    let kinds = tokenize_kinds("10 / 2");
    assert_eq!(
        kinds,
        vec![TokenKind::Int, TokenKind::Division, TokenKind::Int, TokenKind::Eof]
    );
}

#[test]
fn test_line_tracking_across_newlines() {
    let mut lexer = Lexer::new("a\nb");
    let a = lexer.next_token();
    let b = lexer.next_token();
    assert_eq!(a.span.line, 1);
    assert_eq!(b.span.line, 2);
    assert_eq!(b.span.column, 1);
}
