//! Token types for the style-sheet tokenizer.

mod kind;
mod tag;

pub use kind::{HashType, Numeric, NumericType, TokenKind};
pub use tag::TokenTag;

use std::fmt;

use css_lexer_core::Span;

/// A token with its source text and location.
///
/// `lexeme` is the exact preprocessed text consumed; `span` covers the same
/// code points; `line` is the 1-based line of the first of them.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: String, span: Span, line: u32) -> Self {
        Token {
            kind,
            lexeme,
            span,
            line,
        }
    }

    #[inline]
    pub fn tag(&self) -> TokenTag {
        self.kind.tag()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} @ {} (line {})",
            self.kind, self.lexeme, self.span, self.line
        )
    }
}
