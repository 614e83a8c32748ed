use colex_lib::{DiagnosticKind, FormatOptions, NodeKind, TokenKind, format, lint, parse_tree, tokenize, validate};
use proptest::prelude::*;

const MAX_INPUT_BYTES: usize = 64;

const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "^", "==", "!=", "<", "<=", ">", ">=", "&&", "||",
];

fn leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..10_000).prop_map(|n| n.to_string()),
        (0u32..100, 0u32..100).prop_map(|(a, b)| format!("{a}.{b}")),
        "[a-z_][a-z0-9_]{0,6}".prop_map(|name| format!("[{name}]")),
        "'[a-z ]{0,5}'",
        "\"[a-z ]{0,5}\"",
        Just("true".to_string()),
        Just("false".to_string()),
    ]
}

/// Well-formed expressions with arbitrary (possibly missing) whitespace.
fn expression() -> impl Strategy<Value = String> {
    leaf().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            (
                inner.clone(),
                proptest::sample::select(OPERATORS),
                inner.clone(),
                " {0,2}",
            )
                .prop_map(|(lhs, op, rhs, pad)| format!("{lhs}{pad}{op}{pad}{rhs}")),
            inner.clone().prop_map(|e| format!("({e})")),
            inner.clone().prop_map(|e| format!("-{e}")),
            ("[A-Z]{1,5}", proptest::collection::vec(inner, 0..4))
                .prop_map(|(name, args)| format!("{name}({})", args.join(","))),
        ]
    })
}

/// Flat operator chains, long enough to run into the nesting limit.
fn chain() -> impl Strategy<Value = String> {
    (
        leaf(),
        proptest::collection::vec((proptest::sample::select(OPERATORS), leaf()), 1..2_000),
    )
        .prop_map(|(first, rest)| {
            rest.into_iter().fold(first, |mut acc, (op, operand)| {
                acc.push(' ');
                acc.push_str(op);
                acc.push(' ');
                acc.push_str(&operand);
                acc
            })
        })
}

fn options() -> impl Strategy<Value = FormatOptions> {
    (0usize..6, 1usize..60, any::<bool>(), any::<bool>()).prop_map(
        |(indent, width, spaces, breaks)| {
            FormatOptions::default()
                .with_indent_size(indent)
                .with_max_line_length(width)
                .with_space_around_operators(spaces)
                .with_break_long_expressions(breaks)
        },
    )
}

fn count_parens(text: &str) -> (usize, usize) {
    (text.matches('(').count(), text.matches(')').count())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, ..ProptestConfig::default() })]

    #[test]
    fn generated_expressions_are_valid(input in expression()) {
        prop_assert!(validate(&input), "{input:?}: {:?}", lint(&input));
    }

    #[test]
    fn formatting_is_idempotent(input in expression(), options in options()) {
        let once = format(&input, &options);
        let twice = format(&once, &options);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn formatting_preserves_parentheses(input in expression(), options in options()) {
        let formatted = format(&input, &options);
        prop_assert_eq!(count_parens(&formatted), count_parens(&input));

        let paren_nodes = |text: &str| {
            parse_tree(text)
                .root
                .map(|root| root.descendants().filter(|n| n.kind == NodeKind::ParenExpr).count())
        };
        prop_assert_eq!(paren_nodes(&formatted), paren_nodes(&input));
    }

    #[test]
    fn formatting_only_changes_whitespace(input in expression(), options in options()) {
        let formatted = format(&input, &options);
        let squash = |text: &str| text.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        prop_assert_eq!(squash(&formatted), squash(&input));
    }

    #[test]
    fn tokens_tile_the_source(input in "[ -~\t\n]{0,64}") {
        let result = tokenize(&input);
        let mut offset = 0;
        for token in &result.tokens {
            prop_assert_eq!(token.start, offset);
            prop_assert_eq!(&input[token.start..token.end], token.text.as_str());
            offset = token.end;
        }
        prop_assert_eq!(offset, input.len());
        if !input.is_empty() {
            prop_assert_eq!(result.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        }
    }

    #[test]
    fn validity_matches_lint(input in "[ -~\t\n]{0,64}") {
        prop_assert_eq!(validate(&input), lint(&input).is_empty());
    }

    #[test]
    fn invalid_input_is_never_reformatted(input in "[ -~\t\n]{0,64}") {
        if !validate(&input) {
            prop_assert_eq!(format(&input, &FormatOptions::default()), input);
        }
    }

    #[test]
    fn diagnostics_have_non_empty_spans(input in "[ -~\t\n]{0,64}") {
        for diagnostic in lint(&input) {
            prop_assert!(diagnostic.start < diagnostic.end, "{diagnostic}");
            prop_assert!(diagnostic.line >= 1);
        }
    }

    #[test]
    fn arbitrary_bytes_do_not_panic(
        bytes in proptest::collection::vec(any::<u8>(), 0..=MAX_INPUT_BYTES)
    ) {
        let input = String::from_utf8_lossy(&bytes).into_owned();
        let _ = tokenize(&input);
        let _ = parse_tree(&input);
        let _ = format(&input, &FormatOptions::default());
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 32, ..ProptestConfig::default() })]

    #[test]
    fn long_chains_only_fail_on_nesting(input in chain()) {
        let diagnostics = lint(&input);
        prop_assert_eq!(validate(&input), diagnostics.is_empty());
        prop_assert!(
            diagnostics.iter().all(|d| d.kind == DiagnosticKind::NestingTooDeep),
            "{:?}",
            diagnostics
        );

        let formatted = format(&input, &FormatOptions::default());
        if !diagnostics.is_empty() {
            prop_assert_eq!(formatted, input.clone());
        }
        prop_assert!(parse_tree(&input).root.is_some());
    }
}
