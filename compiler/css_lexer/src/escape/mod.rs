//! Escape decoding shared by names, strings and URLs.
//!
//! An escape is `\` followed by either one to six hex digits (plus one
//! optional whitespace code point) or any single non-newline code point.
//! Decoding never fails: invalid targets become U+FFFD and push an error.

use css_lexer_core::char_class::{
    is_hex_digit, is_surrogate, is_whitespace, MAX_CODE_POINT, REPLACEMENT_CHARACTER,
};
use css_lexer_core::{Cursor, Span};

use crate::lex_error::{LexError, LexErrorContext};

/// Hex escapes stop after this many digits.
const MAX_HEX_DIGITS: u32 = 6;

/// Decode one escape. The backslash has already been consumed.
///
/// The caller guarantees a valid escape: the code point after the backslash
/// is not a newline.
pub(crate) fn consume_escaped(
    cursor: &mut Cursor<'_>,
    context: LexErrorContext,
    errors: &mut Vec<LexError>,
) -> char {
    let start = cursor.pos() - 1;
    let line = cursor.line();

    if cursor.is_eof() {
        let span = Span::new(start, cursor.pos());
        errors.push(LexError::escape_at_eof(span, line).in_context(context));
        return REPLACEMENT_CHARACTER;
    }

    let first = cursor.advance();
    if !is_hex_digit(first) {
        return first;
    }

    let mut value = hex_value(first);
    let mut digits = 1;
    while digits < MAX_HEX_DIGITS && is_hex_digit(cursor.current()) {
        value = value * 16 + hex_value(cursor.advance());
        digits += 1;
    }
    if is_whitespace(cursor.current()) {
        cursor.advance();
    }

    if value == 0 || is_surrogate(value) || value > MAX_CODE_POINT {
        errors.push(
            LexError::invalid_escape_code_point(Span::new(start, cursor.pos()), line, value)
                .in_context(context),
        );
        return REPLACEMENT_CHARACTER;
    }
    char::from_u32(value).unwrap_or(REPLACEMENT_CHARACTER)
}

/// Value of an ASCII hex digit; callers check `is_hex_digit` first.
#[inline]
fn hex_value(c: char) -> u32 {
    match c {
        '0'..='9' => c as u32 - '0' as u32,
        'a'..='f' => c as u32 - 'a' as u32 + 10,
        'A'..='F' => c as u32 - 'A' as u32 + 10,
        _ => 0,
    }
}
