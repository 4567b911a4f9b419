//! Names and the tokens built from them: identifiers, functions, URLs,
//! at-keywords and hashes.

use css_lexer_core::char_class::{is_name, is_non_printable, is_valid_escape, is_whitespace};

use super::string::StringEnd;
use super::Tokenizer;
use crate::escape::consume_escaped;
use crate::lex_error::{LexError, LexErrorContext};
use crate::token::{HashType, TokenKind};

impl Tokenizer<'_> {
    /// Consume a name, decoding escapes.
    ///
    /// Stops at the first code point that is neither a name code point nor
    /// the start of a valid escape. May return an empty string; callers
    /// check a name start first when they need one.
    pub(super) fn name(&mut self) -> String {
        let mut name = String::new();
        loop {
            let c = self.cursor.current();
            if is_name(c) {
                self.cursor.advance();
                name.push(c);
            } else if is_valid_escape(c, self.cursor.peek()) {
                self.cursor.advance();
                let decoded = consume_escaped(
                    &mut self.cursor,
                    LexErrorContext::InsideName,
                    &mut self.errors,
                );
                name.push(decoded);
            } else {
                return name;
            }
        }
    }

    // ─── Identifiers & Functions ──────────────────────────────────────

    /// `Ident`, `Function`, `Url` or `BadUrl`; the cursor is at an
    /// identifier start.
    pub(super) fn ident_like(&mut self) -> TokenKind {
        let name = self.name();
        if self.cursor.current() != '(' {
            return TokenKind::Ident(name);
        }
        self.cursor.advance();
        if name.eq_ignore_ascii_case("url") {
            self.url()
        } else {
            TokenKind::Function(name)
        }
    }

    // ─── URLs ─────────────────────────────────────────────────────────

    /// URL body after `url(`.
    fn url(&mut self) -> TokenKind {
        self.cursor.eat_while(is_whitespace);
        match self.cursor.current() {
            q @ ('"' | '\'') => {
                self.cursor.advance();
                self.quoted_url(q)
            }
            _ => self.unquoted_url(),
        }
    }

    fn quoted_url(&mut self, quote: char) -> TokenKind {
        let (value, end) = self.string_body(quote, LexErrorContext::InsideUrl);
        match end {
            StringEnd::Newline => {
                let err = LexError::unterminated_string(self.token_span(), self.token_line)
                    .in_context(LexErrorContext::InsideUrl);
                self.errors.push(err);
                return self.bad_url_remnants();
            }
            StringEnd::Eof => {
                let err = LexError::unterminated_url(self.token_span(), self.token_line);
                self.errors.push(err);
                return TokenKind::Url(value);
            }
            StringEnd::Closed => {}
        }
        self.url_close(value)
    }

    fn unquoted_url(&mut self) -> TokenKind {
        let mut value = String::new();
        loop {
            if self.cursor.is_eof() {
                let err = LexError::unterminated_url(self.token_span(), self.token_line);
                self.errors.push(err);
                return TokenKind::Url(value);
            }
            match self.cursor.current() {
                ')' => {
                    self.cursor.advance();
                    return TokenKind::Url(value);
                }
                c if is_whitespace(c) => return self.url_close(value),
                '\\' if is_valid_escape('\\', self.cursor.peek()) => {
                    self.cursor.advance();
                    let decoded = consume_escaped(
                        &mut self.cursor,
                        LexErrorContext::InsideUrl,
                        &mut self.errors,
                    );
                    value.push(decoded);
                }
                c @ ('"' | '\'' | '(' | '\\') => return self.unexpected_in_url(c),
                c if is_non_printable(c) => return self.unexpected_in_url(c),
                c => {
                    self.cursor.advance();
                    value.push(c);
                }
            }
        }
    }

    /// After the URL body: optional whitespace, then `)` or end of input.
    fn url_close(&mut self, value: String) -> TokenKind {
        self.cursor.eat_while(is_whitespace);
        if self.cursor.is_eof() {
            let err = LexError::unterminated_url(self.token_span(), self.token_line);
            self.errors.push(err);
            TokenKind::Url(value)
        } else if self.cursor.current() == ')' {
            self.cursor.advance();
            TokenKind::Url(value)
        } else {
            let found = self.cursor.current();
            self.unexpected_in_url(found)
        }
    }

    fn unexpected_in_url(&mut self, found: char) -> TokenKind {
        let err = LexError::unexpected_char_in_url(self.current_span(), self.cursor.line(), found);
        self.errors.push(err);
        self.bad_url_remnants()
    }

    /// Consume up to and including the next `)` that is not escaped, or to
    /// end of input.
    fn bad_url_remnants(&mut self) -> TokenKind {
        while !self.cursor.is_eof() {
            let c = self.cursor.advance();
            if c == ')' {
                break;
            }
            // Skip the escaped code point so `\)` does not close the URL.
            // Hex digits and the optional whitespace after them never
            // contain `)`, so the rest of a hex escape needs no special
            // handling.
            if is_valid_escape(c, self.cursor.current()) && !self.cursor.is_eof() {
                self.cursor.advance();
            }
        }
        TokenKind::BadUrl
    }

    // ─── At-keywords & Hashes ─────────────────────────────────────────

    pub(super) fn at_keyword(&mut self) -> TokenKind {
        self.cursor.advance(); // '@'
        if self.starts_identifier() {
            TokenKind::AtKeyword(self.name())
        } else {
            TokenKind::Delim('@')
        }
    }

    pub(super) fn hash(&mut self) -> TokenKind {
        self.cursor.advance(); // '#'
        let c = self.cursor.current();
        if !is_name(c) && !is_valid_escape(c, self.cursor.peek()) {
            return TokenKind::Delim('#');
        }
        let type_flag = if self.starts_identifier() {
            HashType::Id
        } else {
            HashType::Unrestricted
        };
        TokenKind::Hash {
            value: self.name(),
            type_flag,
        }
    }
}
