//! Token kinds and their payloads.

use std::fmt;

use super::tag::TokenTag;

/// Token kinds for style sheets.
///
/// Each variant carries exactly the payload its kind needs. Text payloads
/// are decoded: escape sequences are already resolved to the code point
/// they denote.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// `@media`: the name after `@`.
    AtKeyword(String),
    /// Unquoted `url(...)` body with disallowed content.
    BadUrl,
    /// String interrupted by an unescaped newline.
    BadString,
    /// `-->`
    Cdc,
    /// `<!--`
    Cdo,
    Colon,
    Comma,
    /// `/* ... */`, only produced when comments are emitted.
    Comment,
    /// Any code point that starts no other token.
    Delim(char),
    /// `10px`: number followed by a unit name.
    Dimension { value: Numeric, unit: String },
    EndOfInput,
    /// `rgb(`: name immediately followed by `(`.
    Function(String),
    /// `#fff`, `#main`.
    Hash { value: String, type_flag: HashType },
    Ident(String),
    LeftCurlyBracket,
    LeftParenthesis,
    LeftSquareBracket,
    Number(Numeric),
    /// `50%`
    Percentage(Numeric),
    RightCurlyBracket,
    RightParenthesis,
    RightSquareBracket,
    Semicolon,
    String(String),
    /// `url(...)`: the decoded URL body.
    Url(String),
    /// A maximal run of LF, tab and space.
    Whitespace,
}

impl TokenKind {
    /// Get the discriminant tag for this token kind.
    pub fn tag(&self) -> TokenTag {
        match self {
            Self::AtKeyword(_) => TokenTag::AtKeyword,
            Self::BadUrl => TokenTag::BadUrl,
            Self::BadString => TokenTag::BadString,
            Self::Cdc => TokenTag::Cdc,
            Self::Cdo => TokenTag::Cdo,
            Self::Colon => TokenTag::Colon,
            Self::Comma => TokenTag::Comma,
            Self::Comment => TokenTag::Comment,
            Self::Delim(_) => TokenTag::Delim,
            Self::Dimension { .. } => TokenTag::Dimension,
            Self::EndOfInput => TokenTag::EndOfInput,
            Self::Function(_) => TokenTag::Function,
            Self::Hash { .. } => TokenTag::Hash,
            Self::Ident(_) => TokenTag::Ident,
            Self::LeftCurlyBracket => TokenTag::LeftCurlyBracket,
            Self::LeftParenthesis => TokenTag::LeftParenthesis,
            Self::LeftSquareBracket => TokenTag::LeftSquareBracket,
            Self::Number(_) => TokenTag::Number,
            Self::Percentage(_) => TokenTag::Percentage,
            Self::RightCurlyBracket => TokenTag::RightCurlyBracket,
            Self::RightParenthesis => TokenTag::RightParenthesis,
            Self::RightSquareBracket => TokenTag::RightSquareBracket,
            Self::Semicolon => TokenTag::Semicolon,
            Self::String(_) => TokenTag::String,
            Self::Url(_) => TokenTag::Url,
            Self::Whitespace => TokenTag::Whitespace,
        }
    }

    /// The numeric payload of `Number`, `Percentage` and `Dimension`.
    pub fn numeric(&self) -> Option<Numeric> {
        match self {
            Self::Number(n) | Self::Percentage(n) | Self::Dimension { value: n, .. } => Some(*n),
            _ => None,
        }
    }

    /// The decoded text payload, if this kind carries one.
    ///
    /// For `Dimension` this is the unit; for `Hash` the name after `#`.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::AtKeyword(s)
            | Self::Function(s)
            | Self::Ident(s)
            | Self::String(s)
            | Self::Url(s)
            | Self::Hash { value: s, .. }
            | Self::Dimension { unit: s, .. } => Some(s),
            _ => None,
        }
    }

    /// `BadString` and `BadUrl`: recovery tokens for malformed input.
    pub fn is_bad(&self) -> bool {
        matches!(self, Self::BadString | Self::BadUrl)
    }

    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}

/// Whether a numeric token was written as an integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericType {
    /// No fractional part and no exponent: `12`, `-3`.
    Integer,
    /// Has a fractional part or an exponent: `1.5`, `2e3`.
    Number,
}

/// A parsed numeric value with its written form.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Numeric {
    pub value: f64,
    pub numeric_type: NumericType,
}

impl Numeric {
    pub const fn integer(value: f64) -> Self {
        Numeric {
            value,
            numeric_type: NumericType::Integer,
        }
    }

    pub const fn number(value: f64) -> Self {
        Numeric {
            value,
            numeric_type: NumericType::Number,
        }
    }

    /// Build from a parsed value, saturating infinities to `±f64::MAX`.
    ///
    /// Lexemes too large for `f64` parse to infinity; the saturated value
    /// still serializes as a numeric lexeme.
    pub(crate) fn saturating(value: f64, numeric_type: NumericType) -> Self {
        Numeric {
            value: saturate(value),
            numeric_type,
        }
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.numeric_type == NumericType::Integer
    }
}

fn saturate(value: f64) -> f64 {
    if value.is_infinite() {
        f64::MAX.copysign(value)
    } else {
        value
    }
}

/// Serializes so that tokenizing the output yields the same [`NumericType`].
///
/// Integers print without a fraction (`10`); numbers always keep a `.` or an
/// exponent (`150.0`, `1e-7`). Infinities print as `±f64::MAX`.
impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = saturate(self.value);
        if self.is_integer() {
            write!(f, "{value}")
        } else {
            write!(f, "{value:?}")
        }
    }
}

/// Type flag of a hash token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HashType {
    /// The name after `#` is a valid identifier: `#main`.
    Id,
    /// Any other name: `#123`, `#-1`.
    Unrestricted,
}
