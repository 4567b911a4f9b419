//! Tokenizer configuration.

/// Options recognized by the tokenizer.
///
/// The default emits no comments and leaves the input as written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TokenizerOptions {
    /// Emit a `Comment` token per comment instead of discarding it.
    pub emit_comments: bool,
    /// Append a LF to non-empty input that does not already end in one.
    ///
    /// Only honored where the tokenizer builds the source buffer itself
    /// ([`tokenize_with`](crate::tokenize_with)); callers passing their own
    /// buffer apply [`SourceBuffer::with_trailing_newline`] instead.
    ///
    /// [`SourceBuffer::with_trailing_newline`]: css_lexer_core::SourceBuffer::with_trailing_newline
    pub trailing_newline: bool,
}

impl TokenizerOptions {
    #[must_use]
    pub fn emit_comments(mut self, emit: bool) -> Self {
        self.emit_comments = emit;
        self
    }

    #[must_use]
    pub fn trailing_newline(mut self, append: bool) -> Self {
        self.trailing_newline = append;
        self
    }
}
