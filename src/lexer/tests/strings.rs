//! Tests for string literal scanning.

use super::*;

#[test]
fn test_simple_string() {
    let pairs = tokenize_pairs("\"hola\"");
    assert_eq!(
        pairs,
        vec![
            (TokenKind::Str, "hola".to_string()),
            (TokenKind::Eof, String::new())
        ]
    );
}

#[test]
fn test_empty_string() {
    let pairs = tokenize_pairs("\"\"");
    assert_eq!(
        pairs,
        vec![
            (TokenKind::Str, String::new()),
            (TokenKind::Eof, String::new())
        ]
    );
}

#[test]
fn test_string_with_spaces() {
    let pairs = tokenize_pairs("\"Hola mundo!\"");
    assert_eq!(
        pairs,
        vec![
            (TokenKind::Str, "Hola mundo!".to_string()),
            (TokenKind::Eof, String::new())
        ]
    );
}

#[test]
fn test_no_escape_processing() {
    // A backslash-n stays two characters; there are no escape rules.
    let pairs = tokenize_pairs(r#""\n""#);
    assert_eq!(
        pairs,
        vec![
            (TokenKind::Str, "\\n".to_string()),
            (TokenKind::Eof, String::new())
        ]
    );
}

#[test]
fn test_string_concatenation_tokens() {
    let kinds = tokenize_kinds("\"Hola \" + \"mundo\"");
    assert_eq!(
        kinds,
        vec![TokenKind::Str, TokenKind::Plus, TokenKind::Str, TokenKind::Eof]
    );
}

#[test]
fn test_unterminated_string_closes_at_eof() {
    let pairs = tokenize_pairs("\"sin cerrar");
    assert_eq!(
        pairs,
        vec![
            (TokenKind::Str, "sin cerrar".to_string()),
            (TokenKind::Eof, String::new())
        ]
    );
}

#[test]
fn test_string_may_contain_keywords() {
    let pairs = tokenize_pairs("\"variable si sino\"");
    assert_eq!(
        pairs,
        vec![
            (TokenKind::Str, "variable si sino".to_string()),
            (TokenKind::Eof, String::new())
        ]
    );
}
