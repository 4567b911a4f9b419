//! Preprocessed, sentinel-terminated code-point buffer.
//!
//! Input preprocessing happens exactly once, while the buffer is built:
//!
//! - CR, CR LF and FF become a single LF;
//! - NUL becomes U+FFFD;
//! - surrogates and values above U+10FFFF (only reachable through
//!   [`SourceBuffer::from_code_points`]) become U+FFFD.
//!
//! Replacements are recorded as [`PreprocessIssue`] values. The tokenizer
//! layer (`css_lexer`) turns them into diagnostics.
//!
//! Because NUL never survives preprocessing, `'\0'` can only appear in the
//! sentinel region after the content. The [`Cursor`] relies on this to
//! report end of input without bounds checks on lookahead.

use crate::char_class::{is_surrogate, REPLACEMENT_CHARACTER};
use crate::Cursor;

/// Number of `'\0'` slots after the content: the sentinel itself plus room
/// for `peek()` and `peek2()` from the last position.
const SENTINEL_PADDING: usize = 3;

/// Preprocessed source code points.
///
/// # Layout
///
/// ```text
/// [code_points..., '\0', '\0', '\0']
///  ^               ^
///  0               source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<char>,
    /// Number of content code points (excludes the sentinel padding).
    source_len: u32,
    issues: Vec<PreprocessIssue>,
}

/// A replacement made while preprocessing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PreprocessIssue {
    pub kind: PreprocessIssueKind,
    /// Code-point position of the replacement character in the buffer.
    pub pos: u32,
    /// 1-based line of the replacement.
    pub line: u32,
}

/// What was replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PreprocessIssueKind {
    /// U+0000 in the input.
    NullReplaced,
    /// A lone UTF-16 surrogate code unit.
    SurrogateReplaced { value: u32 },
    /// A value above U+10FFFF.
    OutOfRange { value: u32 },
}

impl SourceBuffer {
    /// Preprocess `source` into a new buffer.
    pub fn new(source: &str) -> Self {
        Self::build(source.chars().map(u32::from), source.len())
    }

    /// Preprocess a sequence of raw code point values.
    ///
    /// Unlike [`new`](Self::new), the values are not guaranteed to be Unicode
    /// scalar values; surrogates and out-of-range values are replaced with
    /// U+FFFD and reported through [`issues`](Self::issues).
    pub fn from_code_points<I>(code_points: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let iter = code_points.into_iter();
        let hint = iter.size_hint().0;
        Self::build(iter, hint)
    }

    /// Append a LF unless the content is empty or already ends with one.
    ///
    /// The LF becomes part of the preprocessed input, so it shows up in the
    /// lexeme of the final whitespace token.
    #[must_use]
    pub fn with_trailing_newline(mut self) -> Self {
        let len = self.source_len as usize;
        if len > 0 && self.buf[len - 1] != '\n' && self.source_len < u32::MAX {
            self.buf.truncate(len);
            self.buf.push('\n');
            self.buf.extend(['\0'; SENTINEL_PADDING]);
            self.source_len += 1;
        }
        self
    }

    fn build(code_points: impl Iterator<Item = u32>, capacity: usize) -> Self {
        let mut buf = Vec::with_capacity(capacity + SENTINEL_PADDING);
        let mut issues = Vec::new();
        let mut line: u32 = 1;
        let mut code_points = code_points.peekable();

        while let Some(value) = code_points.next() {
            let pos = u32::try_from(buf.len()).unwrap_or(u32::MAX);
            let c = match value {
                // CR LF collapses to one LF.
                0x0D => {
                    code_points.next_if_eq(&0x0A);
                    '\n'
                }
                0x0C => '\n',
                0x00 => {
                    issues.push(PreprocessIssue {
                        kind: PreprocessIssueKind::NullReplaced,
                        pos,
                        line,
                    });
                    REPLACEMENT_CHARACTER
                }
                v if is_surrogate(v) => {
                    issues.push(PreprocessIssue {
                        kind: PreprocessIssueKind::SurrogateReplaced { value: v },
                        pos,
                        line,
                    });
                    REPLACEMENT_CHARACTER
                }
                v => char::from_u32(v).unwrap_or_else(|| {
                    issues.push(PreprocessIssue {
                        kind: PreprocessIssueKind::OutOfRange { value: v },
                        pos,
                        line,
                    });
                    REPLACEMENT_CHARACTER
                }),
            };
            if c == '\n' {
                line = line.saturating_add(1);
            }
            buf.push(c);
        }

        // Positions are u32; content past u32::MAX code points is dropped so
        // the sentinel still directly follows the content.
        let source_len = u32::try_from(buf.len()).unwrap_or_else(|_| {
            buf.truncate(u32::MAX as usize);
            u32::MAX
        });
        buf.extend(['\0'; SENTINEL_PADDING]);

        Self {
            buf,
            source_len,
            issues,
        }
    }

    /// Create a [`Cursor`] positioned at the first code point.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// The preprocessed content (without the sentinel padding).
    pub fn as_chars(&self) -> &[char] {
        &self.buf[..self.source_len as usize]
    }

    /// The preprocessed content as text.
    pub fn text(&self) -> String {
        self.as_chars().iter().collect()
    }

    /// Number of preprocessed code points.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Replacements made during preprocessing, in input order.
    pub fn issues(&self) -> &[PreprocessIssue] {
        &self.issues
    }
}

/// `SourceBuffer` should stay within one cache line on 64-bit platforms.
const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 64);
