//! Whitespace runs and comments.

use css_lexer_core::char_class::is_whitespace;

use super::Tokenizer;
use crate::lex_error::LexError;
use crate::token::TokenKind;

impl Tokenizer<'_> {
    /// One token for the whole run of LF, tab and space.
    #[inline]
    pub(super) fn whitespace(&mut self) -> TokenKind {
        self.cursor.eat_while(is_whitespace);
        TokenKind::Whitespace
    }

    /// `/* ... */`; the cursor is at the `/`.
    ///
    /// Comments do not nest. An unterminated comment runs to the end of the
    /// input and is still a comment.
    pub(super) fn comment(&mut self) -> TokenKind {
        self.cursor.advance_n(2); // '/*'
        loop {
            if self.cursor.is_eof() {
                let err = LexError::unterminated_comment(self.token_span(), self.token_line);
                self.errors.push(err);
                return TokenKind::Comment;
            }
            if self.cursor.current() == '*' && self.cursor.peek() == '/' {
                self.cursor.advance_n(2);
                return TokenKind::Comment;
            }
            self.cursor.advance();
        }
    }
}
