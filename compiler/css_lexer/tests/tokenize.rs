//! End-to-end tokenization scenarios.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

mod common;

use common::{kinds, tokenize_all};
use css_lexer::{HashType, LexErrorKind, Numeric, NumericType, Span, TokenKind, TokenTag};
use pretty_assertions::assert_eq;

#[test]
fn plain_string_value_is_text_between_quotes() {
    let output = tokenize_all(r#""hello, world""#);
    assert_eq!(
        kinds(&output),
        vec![
            TokenKind::String("hello, world".into()),
            TokenKind::EndOfInput
        ]
    );
}

#[test]
fn integer_dimension() {
    let output = tokenize_all("10px");
    let TokenKind::Dimension { value, unit } = &output.tokens[0].kind else {
        panic!("expected a dimension, got {:?}", output.tokens[0]);
    };
    assert_eq!(value.value, 10.0);
    assert_eq!(value.numeric_type, NumericType::Integer);
    assert_eq!(unit, "px");
    assert_eq!(output.tokens.len(), 2);
}

#[test]
fn exponent_percentage() {
    let output = tokenize_all("1.5e2%");
    assert_eq!(
        kinds(&output),
        vec![
            TokenKind::Percentage(Numeric::number(150.0)),
            TokenKind::EndOfInput
        ]
    );
}

#[test]
fn newline_ends_string_as_bad_string() {
    let output = tokenize_all("\"unterminated\n");
    assert_eq!(
        kinds(&output),
        vec![
            TokenKind::BadString,
            TokenKind::Whitespace,
            TokenKind::EndOfInput
        ]
    );
    assert_eq!(output.tokens[1].lexeme, "\n");
    assert_eq!(output.tokens[1].line, 1);
}

#[test]
fn cdo_and_cdc() {
    let cdo = tokenize_all("<!--");
    assert_eq!(cdo.tokens[0].kind, TokenKind::Cdo);
    assert_eq!(cdo.tokens[0].span.len(), 4);

    let cdc = tokenize_all("-->");
    assert_eq!(cdc.tokens[0].kind, TokenKind::Cdc);
    assert_eq!(cdc.tokens[0].span.len(), 3);
}

#[test]
fn escaped_identifier() {
    let output = tokenize_all(r"\41 BC");
    assert_eq!(
        kinds(&output),
        vec![TokenKind::Ident("ABC".into()), TokenKind::EndOfInput]
    );
}

#[test]
fn url_and_bad_url() {
    let output = tokenize_all("url(http://x)");
    assert_eq!(output.tokens[0].kind, TokenKind::Url("http://x".into()));

    let output = tokenize_all(r#"url(bad"quote);a"#);
    assert_eq!(
        kinds(&output),
        vec![
            TokenKind::BadUrl,
            TokenKind::Semicolon,
            TokenKind::Ident("a".into()),
            TokenKind::EndOfInput
        ]
    );
}

#[test]
fn realistic_style_sheet() {
    let source = "@import url(\"base.css\");\n\
                  /* layout */\n\
                  #main > .card:hover {\n\
                  \tmargin: -0.5em auto 0 !important;\n\
                  \tbackground: url(img/a.png) no-repeat 50%;\n\
                  \tcolor: rgb(0, 128, 255);\n\
                  }\n";
    let output = tokenize_all(source);
    assert!(!output.has_errors(), "{:?}", output.errors);

    let joined: String = output.tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(joined, source);

    let interesting: Vec<TokenKind> = kinds(&output)
        .into_iter()
        .filter(|k| !matches!(k, TokenKind::Whitespace))
        .collect();
    assert_eq!(
        &interesting[..5],
        &[
            TokenKind::AtKeyword("import".into()),
            TokenKind::Url("base.css".into()),
            TokenKind::Semicolon,
            TokenKind::Comment,
            TokenKind::Hash {
                value: "main".into(),
                type_flag: HashType::Id,
            },
        ]
    );
    assert!(interesting.contains(&TokenKind::Dimension {
        value: Numeric::number(-0.5),
        unit: "em".into(),
    }));
    assert!(interesting.contains(&TokenKind::Url("img/a.png".into())));
    assert!(interesting.contains(&TokenKind::Percentage(Numeric::integer(50.0))));
    assert!(interesting.contains(&TokenKind::Function("rgb".into())));
    assert!(interesting.contains(&TokenKind::Delim('!')));

    let last_brace = output
        .tokens
        .iter()
        .rfind(|t| t.tag() == TokenTag::RightCurlyBracket)
        .unwrap();
    assert_eq!(last_brace.line, 7);
}

#[test]
fn diagnostics_do_not_stop_scanning() {
    let output = tokenize_all("a\0{/* open");
    assert_eq!(
        kinds(&output),
        vec![
            TokenKind::Ident("a\u{FFFD}".into()),
            TokenKind::LeftCurlyBracket,
            TokenKind::Comment,
            TokenKind::EndOfInput
        ]
    );
    let errors: Vec<LexErrorKind> = output.errors.iter().map(|e| e.kind).collect();
    assert_eq!(
        errors,
        vec![LexErrorKind::NullReplaced, LexErrorKind::UnterminatedComment]
    );
    assert_eq!(output.errors[1].span, Span::new(3, 10));
}
