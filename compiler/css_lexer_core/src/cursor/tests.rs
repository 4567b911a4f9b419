use crate::SourceBuffer;

// === Basic Navigation ===

#[test]
fn current_returns_first_code_point() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.cursor().current(), 'a');
}

#[test]
fn advance_returns_consumed_code_point() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.advance(), 'a');
    assert_eq!(cursor.current(), 'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_moves_multiple() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert_eq!(cursor.current(), 'd');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn multibyte_code_points_take_one_position() {
    let buf = SourceBuffer::new("\u{1F600}é");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.advance(), '\u{1F600}');
    assert_eq!(cursor.advance(), 'é');
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 2);
}

#[test]
#[should_panic(expected = "advance past end of input")]
fn advance_at_eof_panics() {
    let buf = SourceBuffer::new("x");
    let mut cursor = buf.cursor();
    cursor.advance();
    cursor.advance();
}

// === Peek ===

#[test]
fn peek_and_peek2() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), 'b');
    assert_eq!(cursor.peek2(), 'c');
}

#[test]
fn lookahead_past_end_is_sentinel() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.advance(); // at 'b'
    assert_eq!(cursor.peek(), '\0');
    assert_eq!(cursor.peek2(), '\0');
    cursor.advance(); // at sentinel
    assert_eq!(cursor.current(), '\0');
    assert_eq!(cursor.peek(), '\0');
    assert_eq!(cursor.peek2(), '\0');
}

#[test]
fn lookahead_on_empty_source() {
    let buf = SourceBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), '\0');
    assert_eq!(cursor.peek2(), '\0');
}

#[test]
fn replaced_nul_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), '\u{FFFD}');
    assert!(!cursor.is_eof());
}

// === Line tracking ===

#[test]
fn line_increments_on_lf() {
    let buf = SourceBuffer::new("a\nb\r\nc\u{C}d");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.line(), 1);
    cursor.advance_n(2);
    assert_eq!(cursor.line(), 2);
    cursor.advance_n(2);
    assert_eq!(cursor.line(), 3);
    cursor.advance_n(2);
    assert_eq!(cursor.line(), 4);
    assert_eq!(cursor.current(), 'd');
}

#[test]
fn copies_track_lines_independently() {
    let buf = SourceBuffer::new("\n\n");
    let mut cursor = buf.cursor();
    let snapshot = cursor;
    cursor.advance_n(2);
    assert_eq!(cursor.line(), 3);
    assert_eq!(snapshot.line(), 1);
    assert_eq!(snapshot.pos(), 0);
}

// === eat_while ===

#[test]
fn eat_while_consumes_matching() {
    let buf = SourceBuffer::new("aaabbb");
    let mut cursor = buf.cursor();
    cursor.eat_while(|c| c == 'a');
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), 'b');
}

#[test]
fn eat_while_stops_at_eof() {
    let buf = SourceBuffer::new("aaa");
    let mut cursor = buf.cursor();
    cursor.eat_while(|_| true);
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
}

#[test]
fn eat_while_counts_lines() {
    let buf = SourceBuffer::new(" \n\t\n x");
    let mut cursor = buf.cursor();
    cursor.eat_while(crate::char_class::is_whitespace);
    assert_eq!(cursor.current(), 'x');
    assert_eq!(cursor.line(), 3);
}

#[test]
fn eat_while_no_match() {
    let buf = SourceBuffer::new("hello");
    let mut cursor = buf.cursor();
    cursor.eat_while(|c| c == 'z');
    assert_eq!(cursor.pos(), 0);
}

// === Slicing ===

#[test]
fn slice_extracts_code_points() {
    let buf = SourceBuffer::new("hello world");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 5), &['h', 'e', 'l', 'l', 'o']);
    assert!(cursor.slice(2, 2).is_empty());
}

#[test]
fn lexeme_from_collects_to_current() {
    let buf = SourceBuffer::new("a\r\nbc");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert_eq!(cursor.lexeme_from(0), "a\nb");
    assert_eq!(cursor.lexeme_from(1), "\nb");
    assert_eq!(cursor.source_len(), 4);
}

mod properties {
    use crate::SourceBuffer;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn walking_reproduces_content(source in "\\PC{0,64}") {
            let buf = SourceBuffer::new(&source);
            let mut cursor = buf.cursor();
            let mut walked = String::new();
            while !cursor.is_eof() {
                walked.push(cursor.advance());
            }
            prop_assert_eq!(walked, buf.text());
            prop_assert_eq!(cursor.pos(), buf.len());
        }

        #[test]
        fn line_counts_lfs(source in "[a\\n\\r]{0,64}") {
            let buf = SourceBuffer::new(&source);
            let mut cursor = buf.cursor();
            cursor.eat_while(|_| true);
            let lfs = buf.as_chars().iter().filter(|&&c| c == '\n').count();
            prop_assert_eq!(cursor.line() as usize, lfs + 1);
        }
    }
}
