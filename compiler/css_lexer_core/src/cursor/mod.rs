//! Forward-only cursor over a sentinel-terminated code-point buffer.
//!
//! The cursor reads preprocessed code points one at a time. Lookahead of up
//! to two code points past the current one never needs a bounds check: the
//! [`SourceBuffer`](crate::SourceBuffer) keeps three `'\0'` slots after the
//! content, and `'\0'` never occurs inside the content.
//!
//! # Line tracking
//!
//! The cursor counts LF code points as it consumes them, so `line()` is the
//! 1-based line of the *current* position. CR and FF were already folded
//! into LF during preprocessing.

use crate::char_class::{is_newline, is_null};

/// Cursor over preprocessed code points.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a copy serves as a snapshot for lookahead that
/// needs more than [`peek2`](Self::peek2).
///
/// # Invariant
///
/// `buf[source_len..]` holds at least three `'\0'` slots and
/// `buf[..source_len]` holds no `'\0'`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [char],
    pos: u32,
    source_len: u32,
    line: u32,
}

/// &[char] = 16 (fat pointer), plus three u32s => 28, padded to 32.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0, line 1.
    ///
    /// # Contract
    ///
    /// `buf` must be laid out by `SourceBuffer`: content followed by the
    /// sentinel padding.
    pub(crate) fn new(buf: &'a [char], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) + 2 < buf.len(),
            "sentinel padding must follow the content"
        );
        debug_assert!(is_null(buf[source_len as usize]), "sentinel must be '\\0'");
        Self {
            buf,
            pos: 0,
            source_len,
            line: 1,
        }
    }

    /// The code point at the current position, or `'\0'` at end of input.
    #[inline]
    pub fn current(&self) -> char {
        self.buf[self.pos as usize]
    }

    /// The code point one position ahead, or `'\0'` past the end.
    #[inline]
    pub fn peek(&self) -> char {
        self.buf[self.pos as usize + 1]
    }

    /// The code point two positions ahead, or `'\0'` past the end.
    #[inline]
    pub fn peek2(&self) -> char {
        self.buf[self.pos as usize + 2]
    }

    /// Consume the current code point and return it.
    ///
    /// # Panics
    ///
    /// Panics when called at end of input. Every caller checks
    /// [`is_eof`](Self::is_eof) (or matches a non-sentinel lookahead) first,
    /// so reaching the panic means the tokenizer itself is broken.
    #[inline]
    pub fn advance(&mut self) -> char {
        assert!(
            !self.is_eof(),
            "advance past end of input at position {}",
            self.pos
        );
        let c = self.current();
        self.pos += 1;
        if is_newline(c) {
            self.line += 1;
        }
        c
    }

    /// Consume `n` code points.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `n` code points remain.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        for _ in 0..n {
            self.advance();
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current code-point offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// 1-based line of the current position.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Number of content code points (excludes the sentinel padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Advance while `pred` holds for the current code point.
    ///
    /// Stops at end of input regardless of what `pred('\0')` returns.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Code points in `start..end`.
    ///
    /// # Contract
    ///
    /// `start <= end <= source_len`. Positions recorded by the tokenizer
    /// always satisfy this.
    pub fn slice(&self, start: u32, end: u32) -> &'a [char] {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Collect the code points from `start` to the current position.
    pub fn lexeme_from(&self, start: u32) -> String {
        self.slice(start, self.pos).iter().collect()
    }
}

#[cfg(test)]
mod tests;
