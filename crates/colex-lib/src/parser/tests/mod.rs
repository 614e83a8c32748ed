mod grammar_tests;

use crate::parser::{Parser, lexer::lex, parse};
use crate::tree::TreePrinter;

fn dump_cst(input: &str) -> String {
    TreePrinter::cst(parse(input).syntax()).dump()
}

fn dump_cst_with_trivia(input: &str) -> String {
    TreePrinter::cst(parse(input).syntax())
        .with_trivia(true)
        .dump()
}

fn dump_errors(input: &str) -> String {
    parse(input)
        .diagnostics()
        .resolve(input)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn dump_errors_with_limit(input: &str, limit: u32) -> String {
    Parser::new(input, lex(input))
        .with_recursion_limit(limit)
        .parse()
        .diagnostics()
        .resolve(input)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
