//! Main dispatch of the style-sheet tokenizer.
//!
//! The tokenizer reads a preprocessed [`SourceBuffer`] through a [`Cursor`]
//! and produces one [`Token`] per call. Dispatch looks at the current code
//! point (plus at most three code points of lookahead) and hands off to one
//! focused method per token family:
//!
//! | module     | tokens |
//! |------------|--------|
//! | `string`   | `String`, `BadString` |
//! | `numeric`  | `Number`, `Percentage`, `Dimension` |
//! | `name`     | `Ident`, `Function`, `Url`, `BadUrl`, `AtKeyword`, `Hash` |
//! | `trivia`   | `Whitespace`, `Comment` |
//! | this file  | structural tokens, `Cdo`, `Cdc`, `Delim`, `EndOfInput` |
//!
//! Every branch consumes at least one code point, so scanning terminates and
//! the number of tokens is bounded by the input length plus one.

mod name;
mod numeric;
mod string;
mod trivia;

use std::iter::FusedIterator;

use css_lexer_core::char_class::{
    is_digit, is_identifier_start, is_name_start, is_number_start, is_valid_escape,
    is_whitespace,
};
use css_lexer_core::{Cursor, SourceBuffer, Span};
use tracing::{debug, trace};

use crate::lex_error::LexError;
use crate::options::TokenizerOptions;
use crate::token::{Token, TokenKind};

/// Tokenizer over one source buffer.
///
/// Produces tokens lazily through [`next_token`](Self::next_token) or the
/// [`Iterator`] impl; diagnostics accumulate in [`errors`](Self::errors).
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    options: TokenizerOptions,
    errors: Vec<LexError>,
    /// Start position of the token being scanned.
    token_start: u32,
    /// Line of `token_start`.
    token_line: u32,
    /// The iterator has yielded `EndOfInput`.
    done: bool,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer positioned at the start of `buffer`.
    ///
    /// Replacements made while building the buffer are reported first, as
    /// `Preprocessing` errors.
    pub fn new(buffer: &'a SourceBuffer, options: TokenizerOptions) -> Self {
        let errors = buffer
            .issues()
            .iter()
            .map(LexError::from_preprocess_issue)
            .collect();
        Self {
            cursor: buffer.cursor(),
            options,
            errors,
            token_start: 0,
            token_line: 1,
            done: false,
        }
    }

    /// Produce the next token.
    ///
    /// Comments are skipped unless `emit_comments` is set. Returns
    /// `EndOfInput` once the source is exhausted, and again on every later
    /// call.
    pub fn next_token(&mut self) -> Token {
        loop {
            let token = self.scan();
            if matches!(token.kind, TokenKind::Comment) && !self.options.emit_comments {
                continue;
            }
            return token;
        }
    }

    /// Diagnostics reported so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    fn scan(&mut self) -> Token {
        let errors_before = self.errors.len();
        self.token_start = self.cursor.pos();
        self.token_line = self.cursor.line();

        let kind = self.scan_kind();

        let token = Token::new(
            kind,
            self.cursor.lexeme_from(self.token_start),
            self.token_span(),
            self.token_line,
        );
        trace!(tag = %token.tag(), span = %token.span, line = token.line, "token");
        for err in &self.errors[errors_before..] {
            debug!(kind = %err.kind, span = %err.span, line = err.line, "lex error");
        }
        token
    }

    fn scan_kind(&mut self) -> TokenKind {
        if self.cursor.is_eof() {
            return TokenKind::EndOfInput;
        }
        match self.cursor.current() {
            c if is_whitespace(c) => self.whitespace(),
            q @ ('"' | '\'') => {
                self.cursor.advance();
                self.string(q)
            }
            '#' => self.hash(),
            '(' => self.single(TokenKind::LeftParenthesis),
            ')' => self.single(TokenKind::RightParenthesis),
            '[' => self.single(TokenKind::LeftSquareBracket),
            ']' => self.single(TokenKind::RightSquareBracket),
            '{' => self.single(TokenKind::LeftCurlyBracket),
            '}' => self.single(TokenKind::RightCurlyBracket),
            ':' => self.single(TokenKind::Colon),
            ';' => self.single(TokenKind::Semicolon),
            ',' => self.single(TokenKind::Comma),
            '/' if self.cursor.peek() == '*' => self.comment(),
            '+' | '.' => self.number_or_delim(),
            '-' => self.minus(),
            c if is_digit(c) => self.numeric(),
            '<' => self.less_than(),
            '@' => self.at_keyword(),
            '\\' => self.backslash(),
            c if is_name_start(c) => self.ident_like(),
            _ => self.delim(),
        }
    }

    // ─── Helpers ──────────────────────────────────────────────────────

    /// Span from the start of the current token to the cursor.
    #[inline]
    fn token_span(&self) -> Span {
        Span::new(self.token_start, self.cursor.pos())
    }

    /// Span of the single code point at the cursor.
    #[inline]
    fn current_span(&self) -> Span {
        let pos = self.cursor.pos();
        Span::new(pos, pos + 1)
    }

    #[inline]
    fn starts_identifier(&self) -> bool {
        is_identifier_start(self.cursor.current(), self.cursor.peek(), self.cursor.peek2())
    }

    #[inline]
    fn starts_number(&self) -> bool {
        is_number_start(self.cursor.current(), self.cursor.peek(), self.cursor.peek2())
    }

    // ─── Punctuation ──────────────────────────────────────────────────

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    fn delim(&mut self) -> TokenKind {
        TokenKind::Delim(self.cursor.advance())
    }

    fn number_or_delim(&mut self) -> TokenKind {
        if self.starts_number() {
            self.numeric()
        } else {
            self.delim()
        }
    }

    /// `-` starts a number, a CDC, an identifier, or nothing.
    ///
    /// CDC is tested before the identifier because `--` is itself an
    /// identifier start.
    fn minus(&mut self) -> TokenKind {
        if self.starts_number() {
            self.numeric()
        } else if self.cursor.peek() == '-' && self.cursor.peek2() == '>' {
            self.cursor.advance_n(3);
            TokenKind::Cdc
        } else if self.starts_identifier() {
            self.ident_like()
        } else {
            self.delim()
        }
    }

    fn less_than(&mut self) -> TokenKind {
        self.cursor.advance(); // '<'
        if self.cursor.current() == '!' && self.cursor.peek() == '-' && self.cursor.peek2() == '-'
        {
            self.cursor.advance_n(3);
            TokenKind::Cdo
        } else {
            TokenKind::Delim('<')
        }
    }

    fn backslash(&mut self) -> TokenKind {
        if is_valid_escape('\\', self.cursor.peek()) {
            self.ident_like()
        } else {
            let span = self.current_span();
            self.errors
                .push(LexError::standalone_backslash(span, self.cursor.line()));
            self.delim()
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    /// Yields every token up to and including `EndOfInput`, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.next_token();
        self.done = token.kind.is_end_of_input();
        Some(token)
    }
}

impl FusedIterator for Tokenizer<'_> {}
