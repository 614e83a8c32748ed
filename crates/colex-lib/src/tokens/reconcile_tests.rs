use rowan::TextRange;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser::lexer::{lex, split_channels};
use crate::tokens::{Token, TokenKind, mark_overlap, reconcile};

fn reconciled(input: &str) -> Vec<Token> {
    let channels = split_channels(&lex(input));
    reconcile(input, &channels.default, &channels.hidden, &channels.error)
}

fn dump(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| {
            let flag = if t.is_valid { "" } else { " invalid" };
            format!(
                "{} {:?} {}..{} {}:{}{}",
                t.kind, t.text, t.start, t.end, t.line, t.column, flag
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn channels_merge_in_source_order() {
    insta::assert_snapshot!(dump(&reconciled("SUM([price] * 2) > 1")), @r#"
    function "SUM" 0..3 1:0
    leftParen "(" 3..4 1:3
    columnReference "[price]" 4..11 1:4
    whitespace " " 11..12 1:11
    operator "*" 12..13 1:12
    whitespace " " 13..14 1:13
    integer "2" 14..15 1:14
    rightParen ")" 15..16 1:15
    whitespace " " 16..17 1:16
    operator ">" 17..18 1:17
    whitespace " " 18..19 1:18
    integer "1" 19..20 1:19
    "#);
}

#[test]
fn touching_error_tokens_coalesce() {
    insta::assert_snapshot!(dump(&reconciled("1 @#$ 2")), @r#"
    integer "1" 0..1 1:0
    whitespace " " 1..2 1:1
    error "@#$" 2..5 1:2 invalid
    whitespace " " 5..6 1:5
    integer "2" 6..7 1:6
    "#);
}

#[test]
fn separated_error_tokens_stay_apart() {
    let tokens = reconciled("@ #");
    let errors: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Error)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(errors, vec!["@", "#"]);
}

#[test]
fn lowercase_word_is_one_error_run() {
    insta::assert_snapshot!(dump(&reconciled("abc()")), @r#"
    error "abc" 0..3 1:0 invalid
    leftParen "(" 3..4 1:3
    rightParen ")" 4..5 1:4
    "#);
}

#[test]
fn spans_tile_the_source() {
    let input = "[a] + 'b' ## FUNC(1.5, true)\n&& [c]";
    let tokens = reconciled(input);
    let mut offset = 0;
    for token in &tokens {
        assert_eq!(token.start, offset);
        assert_eq!(&input[token.start..token.end], token.text);
        offset = token.end;
    }
    assert_eq!(offset, input.len());
}

#[test]
fn bracket_and_literal_kinds() {
    let kinds: Vec<_> = reconciled("[ ] 'x' 1 1.0 true")
        .into_iter()
        .filter(|t| t.kind != TokenKind::Whitespace)
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftBracket,
            TokenKind::RightBracket,
            TokenKind::String,
            TokenKind::Integer,
            TokenKind::Float,
            TokenKind::Boolean,
        ]
    );
}

#[test]
fn mark_overlap_keeps_kind() {
    let input = "1 + + 2";
    let tokens = reconciled(input);

    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::TrailingInput, TextRange::new(4.into(), 7.into()))
        .emit();
    let marked = mark_overlap(&tokens, &diagnostics.resolve(input));

    insta::assert_snapshot!(dump(&marked), @r#"
    integer "1" 0..1 1:0
    whitespace " " 1..2 1:1
    operator "+" 2..3 1:2
    whitespace " " 3..4 1:3
    operator "+" 4..5 1:4 invalid
    whitespace " " 5..6 1:5 invalid
    integer "2" 6..7 1:6 invalid
    "#);

    // The input list is left untouched.
    assert!(tokens.iter().all(|t| t.is_valid));
}

#[test]
fn eof_token_is_zero_width() {
    let eof = Token::eof("1 +\n 2");
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!((eof.start, eof.end), (6, 6));
    assert_eq!((eof.line, eof.column), (2, 2));
    assert!(eof.is_empty());
}

#[test]
fn serializes_camel_case() {
    let tokens = reconciled("[a]");
    let json = serde_json::to_string(&tokens).unwrap();
    insta::assert_snapshot!(json, @r#"[{"kind":"columnReference","text":"[a]","start":0,"end":3,"line":1,"column":0,"isValid":true}]"#);
}
