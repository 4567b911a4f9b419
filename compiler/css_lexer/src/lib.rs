//! Tokenizer for style sheets.
//!
//! Converts source text into an ordered sequence of typed [`Token`]s,
//! following the CSS Syntax tokenization algorithm: single pass, at most
//! three code points of lookahead, and recovery tokens (`BadString`,
//! `BadUrl`) instead of failures. Irregularities are reported as
//! [`LexError`] diagnostics alongside the tokens; tokenizing never fails.
//!
//! Code-point classification, input preprocessing and the cursor live in
//! [`css_lexer_core`].
//!
//! ```
//! use css_lexer::tokenize;
//!
//! let output = tokenize("a{width:10px}");
//! let tags: Vec<&str> = output.tokens.iter().map(|t| t.tag().name()).collect();
//! assert_eq!(
//!     tags,
//!     [
//!         "IDENT",
//!         "LEFT_CURLY_BRACKET",
//!         "IDENT",
//!         "COLON",
//!         "DIMENSION",
//!         "RIGHT_CURLY_BRACKET",
//!         "END_OF_INPUT",
//!     ]
//! );
//! assert_eq!(output.tokens[4].kind.text(), Some("px"));
//! assert!(!output.has_errors());
//! ```

mod escape;
mod lex_error;
mod options;
mod token;
mod tokenizer;

pub use css_lexer_core::{SourceBuffer, Span};
pub use lex_error::{LexError, LexErrorContext, LexErrorKind};
pub use options::TokenizerOptions;
pub use token::{HashType, Numeric, NumericType, Token, TokenKind, TokenTag};
pub use tokenizer::Tokenizer;

use tracing::debug;

/// Tokens and diagnostics for one input.
#[derive(Clone, Debug, PartialEq)]
pub struct LexOutput {
    /// Tokens in source order, ending with exactly one `EndOfInput`.
    pub tokens: Vec<Token>,
    /// Diagnostics in the order they were found; preprocessing issues first.
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Tokenize `source` with default options.
pub fn tokenize(source: &str) -> LexOutput {
    tokenize_with(source, &TokenizerOptions::default())
}

/// Tokenize `source`, preprocessing it according to `options`.
pub fn tokenize_with(source: &str, options: &TokenizerOptions) -> LexOutput {
    let mut buffer = SourceBuffer::new(source);
    if options.trailing_newline {
        buffer = buffer.with_trailing_newline();
    }
    tokenize_buffer(&buffer, options)
}

/// Tokenize an already preprocessed buffer.
///
/// `options.trailing_newline` is ignored here; the buffer is used as built.
#[tracing::instrument(level = "debug", skip_all, fields(len = buffer.len()))]
pub fn tokenize_buffer(buffer: &SourceBuffer, options: &TokenizerOptions) -> LexOutput {
    let mut tokenizer = Tokenizer::new(buffer, *options);
    let tokens: Vec<Token> = tokenizer.by_ref().collect();
    let errors = tokenizer.into_errors();
    debug!(tokens = tokens.len(), errors = errors.len(), "tokenized");
    LexOutput { tokens, errors }
}
