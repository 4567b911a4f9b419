//! Quoted strings.

use css_lexer_core::char_class::is_newline;

use super::Tokenizer;
use crate::escape::consume_escaped;
use crate::lex_error::{LexError, LexErrorContext};
use crate::token::TokenKind;

/// How a string body ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum StringEnd {
    /// Matching quote, consumed.
    Closed,
    /// End of input before the quote.
    Eof,
    /// Unescaped LF before the quote, left unconsumed.
    Newline,
}

impl Tokenizer<'_> {
    /// String token after the opening `quote` has been consumed.
    pub(super) fn string(&mut self, quote: char) -> TokenKind {
        let (value, end) = self.string_body(quote, LexErrorContext::InsideString);
        match end {
            StringEnd::Closed => TokenKind::String(value),
            StringEnd::Eof => {
                let err = LexError::unterminated_string_at_eof(self.token_span(), self.token_line);
                self.errors.push(err);
                TokenKind::String(value)
            }
            StringEnd::Newline => {
                let err = LexError::unterminated_string(self.token_span(), self.token_line);
                self.errors.push(err);
                TokenKind::BadString
            }
        }
    }

    /// Consume up to and including `quote`, decoding escapes.
    ///
    /// Shared by string tokens and quoted `url(...)` bodies; `context` tags
    /// escape diagnostics with the caller.
    pub(super) fn string_body(
        &mut self,
        quote: char,
        context: LexErrorContext,
    ) -> (String, StringEnd) {
        let mut value = String::new();
        loop {
            if self.cursor.is_eof() {
                return (value, StringEnd::Eof);
            }
            match self.cursor.current() {
                c if c == quote => {
                    self.cursor.advance();
                    return (value, StringEnd::Closed);
                }
                c if is_newline(c) => return (value, StringEnd::Newline),
                '\\' => {
                    self.cursor.advance();
                    match self.cursor.current() {
                        // A final backslash contributes nothing.
                        _ if self.cursor.is_eof() => {}
                        // Line continuation.
                        c if is_newline(c) => {
                            self.cursor.advance();
                        }
                        _ => {
                            let c = consume_escaped(&mut self.cursor, context, &mut self.errors);
                            value.push(c);
                        }
                    }
                }
                c => {
                    self.cursor.advance();
                    value.push(c);
                }
            }
        }
    }
}
