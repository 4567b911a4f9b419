//! Numbers, percentages and dimensions.

use css_lexer_core::char_class::is_digit;

use super::Tokenizer;
use crate::token::{Numeric, NumericType, TokenKind};

impl Tokenizer<'_> {
    /// Numeric token; the cursor is at a number start.
    pub(super) fn numeric(&mut self) -> TokenKind {
        let value = self.number();
        if self.starts_identifier() {
            let unit = self.name();
            TokenKind::Dimension { value, unit }
        } else if self.cursor.current() == '%' {
            self.cursor.advance();
            TokenKind::Percentage(value)
        } else {
            TokenKind::Number(value)
        }
    }

    /// Consume `[+-]? digits ('.' digits)? ([eE] [+-]? digits)?`.
    ///
    /// The fraction and exponent are only taken when digits follow, so
    /// `1.` and `1e` leave the `.` and `e` for the next token.
    fn number(&mut self) -> Numeric {
        let start = self.cursor.pos();
        let mut numeric_type = NumericType::Integer;

        if matches!(self.cursor.current(), '+' | '-') {
            self.cursor.advance();
        }
        self.cursor.eat_while(is_digit);

        if self.cursor.current() == '.' && is_digit(self.cursor.peek()) {
            self.cursor.advance_n(2);
            self.cursor.eat_while(is_digit);
            numeric_type = NumericType::Number;
        }

        if matches!(self.cursor.current(), 'e' | 'E') {
            let next = self.cursor.peek();
            let signed = matches!(next, '+' | '-') && is_digit(self.cursor.peek2());
            if is_digit(next) || signed {
                self.cursor.advance_n(if signed { 3 } else { 2 });
                self.cursor.eat_while(is_digit);
                numeric_type = NumericType::Number;
            }
        }

        // The consumed text is ASCII and matches the grammar accepted by
        // `f64::from_str`, which rounds correctly in a single step.
        let text = self.cursor.lexeme_from(start);
        let value = text
            .parse::<f64>()
            .unwrap_or_else(|err| unreachable!("numeric text {text:?} failed to parse: {err}"));

        Numeric::saturating(value, numeric_type)
    }
}
