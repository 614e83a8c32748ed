//! Grammar productions.
//!
//! Binary operators are parsed by precedence climbing: the loop in
//! [`Parser::parse_binary`] keeps binding operators whose precedence is at
//! least the current minimum, wrapping the left operand retroactively via a
//! checkpoint. Every production returns `false` once something went wrong and
//! callers stop building on top of it; the partial node stays in the tree.

use rowan::TextRange;

use super::core::Parser;
use super::cst::SyntaxKind::{self, *};
use super::cst::token_sets::{COMPARISON_OPS, LITERALS};
use crate::diagnostics::DiagnosticKind;

/// Binding information for a binary operator token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BinaryOp {
    precedence: u8,
    node: SyntaxKind,
    right_assoc: bool,
}

impl BinaryOp {
    fn of(kind: SyntaxKind) -> Option<Self> {
        let (precedence, node) = match kind {
            OrOr => (1, OrExpr),
            AndAnd => (2, AndExpr),
            k if COMPARISON_OPS.contains(k) => (3, ComparisonExpr),
            Plus | Minus => (4, AddSubExpr),
            Star | Slash => (5, MulDivExpr),
            Caret => (6, PowerExpr),
            _ => return None,
        };
        Some(Self {
            precedence,
            node,
            right_assoc: kind == Caret,
        })
    }

    fn next_min(self) -> u8 {
        if self.right_assoc {
            self.precedence
        } else {
            self.precedence + 1
        }
    }
}

impl Parser<'_> {
    pub(super) fn parse_root(&mut self) {
        self.start_node(Root);

        if self.source.is_empty() {
            self.diagnostics
                .report(DiagnosticKind::EmptyExpression, TextRange::empty(0.into()))
                .emit();
        } else {
            self.parse_expr();
            self.parse_trailing();
        }

        self.skip_trivia_to_buffer();
        self.drain_trivia();
        self.finish_node();
    }

    /// Everything the expression did not consume becomes one `Error` node.
    fn parse_trailing(&mut self) {
        if self.currently_is(Eof) {
            return;
        }
        let range = TextRange::new(self.current_span().start(), self.eof_offset());
        self.diagnostics
            .report(DiagnosticKind::TrailingInput, range)
            .emit();
        self.bump_rest_as_error();
    }

    pub(super) fn parse_expr(&mut self) -> bool {
        self.parse_binary(0)
    }

    fn parse_binary(&mut self, min_precedence: u8) -> bool {
        let checkpoint = self.checkpoint();
        if !self.parse_unary() {
            return false;
        }

        // Every wrap nests the operand one level deeper, so each one counts
        // against the recursion limit until this chain is done.
        let mut wraps = 0;
        let ok = loop {
            let Some(op) = BinaryOp::of(self.current()) else {
                break true;
            };
            if op.precedence < min_precedence {
                break true;
            }
            if !self.enter_recursion() {
                self.bump_rest_as_error();
                break false;
            }
            wraps += 1;

            self.start_node_at(checkpoint, op.node);
            self.bump();
            let rhs_ok = self.parse_binary(op.next_min());
            self.finish_node();

            if !rhs_ok {
                break false;
            }
        };

        for _ in 0..wraps {
            self.exit_recursion();
        }
        ok
    }

    fn parse_unary(&mut self) -> bool {
        if !self.enter_recursion() {
            self.bump_rest_as_error();
            return false;
        }

        let ok = if self.currently_is(Minus) {
            self.start_node(UnaryMinusExpr);
            self.bump();
            let ok = self.parse_unary();
            self.finish_node();
            ok
        } else {
            self.parse_primary()
        };

        self.exit_recursion();
        ok
    }

    fn parse_primary(&mut self) -> bool {
        match self.current() {
            kind if LITERALS.contains(kind) => self.parse_literal(),
            ColumnRef => self.parse_column_ref(),
            FunctionName => self.parse_function_call(),
            ParenOpen => self.parse_paren(),
            BracketOpen => {
                self.error_and_bump_msg(
                    DiagnosticKind::InvalidColumnReference,
                    "expected `[name]` with a letter or `_` first",
                );
                false
            }
            _ => {
                self.error_found(DiagnosticKind::ExpectedExpression);
                self.missing_node();
                false
            }
        }
    }

    fn parse_literal(&mut self) -> bool {
        let kind = self.current();
        self.start_node(LiteralExpr);
        self.start_node(Literal);
        if kind == UnterminatedString {
            self.error(DiagnosticKind::UnterminatedString);
        }
        self.bump();
        self.finish_node();
        self.finish_node();
        true
    }

    fn parse_column_ref(&mut self) -> bool {
        self.assert_current(ColumnRef);
        self.start_node(ColumnRefExpr);
        self.start_node(ColumnReference);
        self.bump();
        self.finish_node();
        self.finish_node();
        true
    }

    /// `NAME '(' (expr (',' expr)*)? ')'`
    fn parse_function_call(&mut self) -> bool {
        self.assert_current(FunctionName);
        self.start_node(FunctionCallExpr);
        self.start_node(FunctionCall);
        self.bump();
        let ok = self.parse_call_arguments();
        self.finish_node();
        self.finish_node();
        ok
    }

    fn parse_call_arguments(&mut self) -> bool {
        if !self.currently_is(ParenOpen) {
            self.error_found(DiagnosticKind::ExpectedArgumentList);
            return false;
        }
        let open = self.current_span();
        self.bump();

        if self.eat_token(ParenClose) {
            return true;
        }

        self.start_node(ArgumentList);
        let mut ok = self.parse_expr();
        while ok && self.eat_token(Comma) {
            ok = self.parse_expr();
        }
        self.finish_node();

        ok && self.expect_paren_close(open)
    }

    fn parse_paren(&mut self) -> bool {
        self.start_node(ParenExpr);
        let open = self.current_span();
        self.bump();
        let ok = self.parse_expr() && self.expect_paren_close(open);
        self.finish_node();
        ok
    }

    fn expect_paren_close(&mut self, open: TextRange) -> bool {
        if self.eat_token(ParenClose) {
            return true;
        }
        self.error_unclosed_delimiter(DiagnosticKind::UnclosedParen, "opened here", open);
        false
    }
}
