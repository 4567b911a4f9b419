//! Compact discriminant tag for `TokenKind`.

use std::fmt;

/// Fieldless mirror of [`TokenKind`](super::TokenKind).
///
/// Useful where only the kind matters: parser lookahead tables, test
/// expectations, log output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenTag {
    AtKeyword = 0,
    BadUrl = 1,
    BadString = 2,
    Cdc = 3,
    Cdo = 4,
    Colon = 5,
    Comma = 6,
    Comment = 7,
    Delim = 8,
    Dimension = 9,
    EndOfInput = 10,
    Function = 11,
    Hash = 12,
    Ident = 13,
    LeftCurlyBracket = 14,
    LeftParenthesis = 15,
    LeftSquareBracket = 16,
    Number = 17,
    Percentage = 18,
    RightCurlyBracket = 19,
    RightParenthesis = 20,
    RightSquareBracket = 21,
    Semicolon = 22,
    String = 23,
    Url = 24,
    Whitespace = 25,
}

impl TokenTag {
    /// Every tag, in discriminant order.
    pub const ALL: [TokenTag; 26] = [
        Self::AtKeyword,
        Self::BadUrl,
        Self::BadString,
        Self::Cdc,
        Self::Cdo,
        Self::Colon,
        Self::Comma,
        Self::Comment,
        Self::Delim,
        Self::Dimension,
        Self::EndOfInput,
        Self::Function,
        Self::Hash,
        Self::Ident,
        Self::LeftCurlyBracket,
        Self::LeftParenthesis,
        Self::LeftSquareBracket,
        Self::Number,
        Self::Percentage,
        Self::RightCurlyBracket,
        Self::RightParenthesis,
        Self::RightSquareBracket,
        Self::Semicolon,
        Self::String,
        Self::Url,
        Self::Whitespace,
    ];

    /// Canonical upper-case kind name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AtKeyword => "AT_KEYWORD",
            Self::BadUrl => "BAD_URL",
            Self::BadString => "BAD_STRING",
            Self::Cdc => "CDC",
            Self::Cdo => "CDO",
            Self::Colon => "COLON",
            Self::Comma => "COMMA",
            Self::Comment => "COMMENT",
            Self::Delim => "DELIM",
            Self::Dimension => "DIMENSION",
            Self::EndOfInput => "END_OF_INPUT",
            Self::Function => "FUNCTION",
            Self::Hash => "HASH",
            Self::Ident => "IDENT",
            Self::LeftCurlyBracket => "LEFT_CURLY_BRACKET",
            Self::LeftParenthesis => "LEFT_PARENTHESIS",
            Self::LeftSquareBracket => "LEFT_SQUARE_BRACKET",
            Self::Number => "NUMBER",
            Self::Percentage => "PERCENTAGE",
            Self::RightCurlyBracket => "RIGHT_CURLY_BRACKET",
            Self::RightParenthesis => "RIGHT_PARENTHESIS",
            Self::RightSquareBracket => "RIGHT_SQUARE_BRACKET",
            Self::Semicolon => "SEMICOLON",
            Self::String => "STRING",
            Self::Url => "URL",
            Self::Whitespace => "WHITESPACE",
        }
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
