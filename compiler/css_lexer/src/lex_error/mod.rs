//! Tokenizer diagnostics.
//!
//! No input makes the tokenizer fail. Malformed input still produces a token
//! stream (with `BadString` / `BadUrl` recovery tokens where the grammar
//! calls for them), and each irregularity is reported here so callers can
//! treat it as a warning or escalate it.
//!
//! Errors carry:
//! - `span` and `line` locating the irregularity;
//! - `kind` describing what went wrong;
//! - `context` recording what the tokenizer was doing at the time.

use css_lexer_core::{PreprocessIssue, PreprocessIssueKind, Span};

/// A diagnostic produced while preprocessing or tokenizing.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span} (line {line})")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LexError {
    pub span: Span,
    /// 1-based line of `span.start`.
    pub line: u32,
    pub kind: LexErrorKind,
    pub context: LexErrorContext,
}

/// What kind of irregularity was found.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexErrorKind {
    // === Strings ===
    /// Unescaped newline before the closing quote.
    #[error("unterminated string: newline before closing quote")]
    UnterminatedString,
    /// End of input before the closing quote.
    #[error("unterminated string at end of input")]
    UnterminatedStringAtEof,

    // === Comments ===
    #[error("unterminated comment")]
    UnterminatedComment,

    // === Escapes ===
    /// `\` as the last code point of the input.
    #[error("escape sequence at end of input")]
    EscapeAtEof,
    /// Hex escape for zero, a surrogate, or a value above U+10FFFF.
    #[error("escape `\\{value:x}` does not denote a valid code point")]
    InvalidEscapeCodePoint { value: u32 },
    /// `\` followed by a newline outside of a string.
    #[error("backslash does not start a valid escape")]
    StandaloneBackslash,

    // === URLs ===
    /// Quote, `(`, non-printable code point, or invalid escape in an
    /// unquoted URL, or anything but `)` after trailing whitespace.
    #[error("unexpected {found:?} in url")]
    UnexpectedCharInUrl { found: char },
    #[error("unterminated url")]
    UnterminatedUrl,

    // === Preprocessing ===
    #[error("NUL replaced with U+FFFD")]
    NullReplaced,
    #[error("surrogate 0x{value:X} replaced with U+FFFD")]
    SurrogateReplaced { value: u32 },
    #[error("value 0x{value:X} above U+10FFFF replaced with U+FFFD")]
    OutOfRangeReplaced { value: u32 },
}

/// What the tokenizer was doing when the error occurred.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexErrorContext {
    /// Building the source buffer, before scanning.
    Preprocessing,
    /// Choosing the next token.
    #[default]
    TopLevel,
    InsideString,
    InsideUrl,
    InsideComment,
    /// Reading a name: identifier, function, at-keyword, hash or unit.
    InsideName,
}

impl LexError {
    fn new(span: Span, line: u32, kind: LexErrorKind, context: LexErrorContext) -> Self {
        Self {
            span,
            line,
            kind,
            context,
        }
    }

    /// Replace the context, for errors raised by code shared between
    /// contexts.
    #[must_use]
    pub fn in_context(mut self, context: LexErrorContext) -> Self {
        self.context = context;
        self
    }

    /// Create an unterminated string error (newline before the quote).
    #[cold]
    pub fn unterminated_string(span: Span, line: u32) -> Self {
        Self::new(
            span,
            line,
            LexErrorKind::UnterminatedString,
            LexErrorContext::InsideString,
        )
    }

    /// Create an unterminated string error (end of input before the quote).
    #[cold]
    pub fn unterminated_string_at_eof(span: Span, line: u32) -> Self {
        Self::new(
            span,
            line,
            LexErrorKind::UnterminatedStringAtEof,
            LexErrorContext::InsideString,
        )
    }

    #[cold]
    pub fn unterminated_comment(span: Span, line: u32) -> Self {
        Self::new(
            span,
            line,
            LexErrorKind::UnterminatedComment,
            LexErrorContext::InsideComment,
        )
    }

    #[cold]
    pub fn escape_at_eof(span: Span, line: u32) -> Self {
        Self::new(
            span,
            line,
            LexErrorKind::EscapeAtEof,
            LexErrorContext::InsideName,
        )
    }

    #[cold]
    pub fn invalid_escape_code_point(span: Span, line: u32, value: u32) -> Self {
        Self::new(
            span,
            line,
            LexErrorKind::InvalidEscapeCodePoint { value },
            LexErrorContext::InsideName,
        )
    }

    #[cold]
    pub fn standalone_backslash(span: Span, line: u32) -> Self {
        Self::new(
            span,
            line,
            LexErrorKind::StandaloneBackslash,
            LexErrorContext::TopLevel,
        )
    }

    #[cold]
    pub fn unexpected_char_in_url(span: Span, line: u32, found: char) -> Self {
        Self::new(
            span,
            line,
            LexErrorKind::UnexpectedCharInUrl { found },
            LexErrorContext::InsideUrl,
        )
    }

    #[cold]
    pub fn unterminated_url(span: Span, line: u32) -> Self {
        Self::new(
            span,
            line,
            LexErrorKind::UnterminatedUrl,
            LexErrorContext::InsideUrl,
        )
    }

    /// Convert a replacement made while building the source buffer.
    #[cold]
    pub fn from_preprocess_issue(issue: &PreprocessIssue) -> Self {
        let kind = match issue.kind {
            PreprocessIssueKind::NullReplaced => LexErrorKind::NullReplaced,
            PreprocessIssueKind::SurrogateReplaced { value } => {
                LexErrorKind::SurrogateReplaced { value }
            }
            PreprocessIssueKind::OutOfRange { value } => LexErrorKind::OutOfRangeReplaced { value },
        };
        Self::new(
            Span::new(issue.pos, issue.pos + 1),
            issue.line,
            kind,
            LexErrorContext::Preprocessing,
        )
    }
}
