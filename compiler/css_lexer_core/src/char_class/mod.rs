//! Code-point classification.
//!
//! Every predicate is total: it is defined for every Unicode scalar value,
//! including `'\0'`, which the [`Cursor`](crate::Cursor) reports once the
//! input is exhausted. None of the predicates accept `'\0'`, so a lookahead
//! window that runs past the end of the input never matches.
//!
//! Newline checks only recognize LF. Carriage returns and form feeds are
//! normalized to LF by [`SourceBuffer`](crate::SourceBuffer) before any
//! classification happens.

/// U+FFFD REPLACEMENT CHARACTER.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// The greatest code point Unicode defines.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// First code point that is not ASCII.
const FIRST_NON_ASCII: char = '\u{80}';

#[inline]
pub fn is_null(c: char) -> bool {
    c == '\0'
}

/// `0`–`9`.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// A digit, `A`–`F`, or `a`–`f`.
#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// `A`–`Z`.
#[inline]
pub fn is_uppercase_letter(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// `a`–`z`.
#[inline]
pub fn is_lowercase_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}

#[inline]
pub fn is_letter(c: char) -> bool {
    is_uppercase_letter(c) || is_lowercase_letter(c)
}

/// Any code point at or above U+0080.
#[inline]
pub fn is_non_ascii(c: char) -> bool {
    c >= FIRST_NON_ASCII
}

/// A letter, a non-ASCII code point, or `_`.
#[inline]
pub fn is_name_start(c: char) -> bool {
    is_letter(c) || is_non_ascii(c) || c == '_'
}

/// A name-start code point, a digit, or `-`.
#[inline]
pub fn is_name(c: char) -> bool {
    is_name_start(c) || is_digit(c) || c == '-'
}

/// U+0000–U+0008, U+000B, U+000E–U+001F, or U+007F.
///
/// These are rejected inside unquoted `url(...)` bodies.
#[inline]
pub fn is_non_printable(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{E}'..='\u{1F}' | '\u{7F}')
}

/// Line feed. The only newline left after preprocessing.
#[inline]
pub fn is_newline(c: char) -> bool {
    c == '\n'
}

/// Line feed, tab, or space.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    is_newline(c) || c == '\t' || c == ' '
}

/// U+D800–U+DFFF.
///
/// Takes a raw `u32` because surrogates are not valid `char`s. Only
/// reachable when a caller hands raw UTF-16 code units to
/// [`SourceBuffer::from_code_points`](crate::SourceBuffer::from_code_points);
/// the decoded buffer never contains them.
#[inline]
pub fn is_surrogate(value: u32) -> bool {
    (0xD800..=0xDFFF).contains(&value)
}

/// Two code points that start a valid escape: `\` not followed by a newline.
///
/// A backslash at the very end of the input counts as a valid escape (the
/// second code point is the `'\0'` sentinel); decoding then yields
/// [`REPLACEMENT_CHARACTER`].
#[inline]
pub fn is_valid_escape(first: char, second: char) -> bool {
    first == '\\' && !is_newline(second)
}

/// Three code points that start a number.
///
/// | first     | second | third | start? |
/// |-----------|--------|-------|--------|
/// | `+` / `-` | digit  | any   | yes    |
/// | `+` / `-` | `.`    | digit | yes    |
/// | `.`       | digit  | any   | yes    |
/// | digit     | any    | any   | yes    |
#[inline]
pub fn is_number_start(first: char, second: char, third: char) -> bool {
    match first {
        '+' | '-' => is_digit(second) || (second == '.' && is_digit(third)),
        '.' => is_digit(second),
        _ => is_digit(first),
    }
}

/// Three code points that start an identifier.
///
/// `-` followed by a name-start, another `-`, or a valid escape; a
/// name-start; or a valid escape.
#[inline]
pub fn is_identifier_start(first: char, second: char, third: char) -> bool {
    match first {
        '-' => is_name_start(second) || second == '-' || is_valid_escape(second, third),
        '\\' => is_valid_escape(first, second),
        _ => is_name_start(first),
    }
}
