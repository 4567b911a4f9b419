use super::*;

#[test]
fn span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
}

#[test]
fn zero_length_span_is_empty() {
    let span = Span::new(7, 7);
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
}

#[test]
fn display_and_debug_agree() {
    let span = Span::new(1, 4);
    assert_eq!(span.to_string(), "1..4");
    assert_eq!(format!("{span:?}"), "1..4");
}
