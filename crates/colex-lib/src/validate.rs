//! Semantic validation over the uniform tree.
//!
//! Checks what the grammar accepts but the language does not: empty column
//! names, calls without a name, and operators missing an operand. Children are
//! checked before their parent, so the reported node is the innermost one
//! that fails.

use rowan::{TextRange, TextSize};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::tree::{NodeKind, SyntaxNode};

/// Why a node failed validation, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub start: usize,
    pub end: usize,
    pub reason: &'static str,
}

impl Violation {
    fn at(node: &SyntaxNode, reason: &'static str) -> Self {
        Self {
            start: node.start,
            end: node.end,
            reason,
        }
    }

    fn range(&self) -> TextRange {
        TextRange::new(
            TextSize::from(self.start as u32),
            TextSize::from(self.end as u32),
        )
    }
}

/// Validates `tree`, reporting at most one diagnostic.
pub fn validate(tree: &SyntaxNode, diagnostics: &mut Diagnostics) -> bool {
    let Err(violation) = check(tree) else {
        return true;
    };
    log::debug!(
        "semantic check failed at {}..{}: {}",
        violation.start,
        violation.end,
        violation.reason
    );
    diagnostics
        .report(DiagnosticKind::SemanticValidation, violation.range())
        .message(violation.reason)
        .emit();
    false
}

pub fn check(node: &SyntaxNode) -> Result<(), Violation> {
    match node.kind {
        NodeKind::Expression => {
            let [expr] = node.children.as_slice() else {
                return Err(Violation::at(node, "expected exactly one expression"));
            };
            check(expr)
        }
        NodeKind::PowerExpr
        | NodeKind::MulDivExpr
        | NodeKind::AddSubExpr
        | NodeKind::ComparisonExpr
        | NodeKind::AndExpr
        | NodeKind::OrExpr => {
            let [lhs, op, rhs] = node.children.as_slice() else {
                return Err(Violation::at(node, "operator is missing an operand"));
            };
            if op.kind != NodeKind::Terminal {
                return Err(Violation::at(node, "operator is missing an operand"));
            }
            check(lhs)?;
            check(rhs)
        }
        NodeKind::ParenExpr => match node.children.as_slice() {
            [inner] => check(inner),
            _ => Err(Violation::at(node, "parentheses must contain one expression")),
        },
        NodeKind::UnaryMinusExpr => match node.children.as_slice() {
            [operand] => check(operand),
            _ => Err(Violation::at(node, "`-` is missing its operand")),
        },
        NodeKind::LiteralExpr => match node.children.as_slice() {
            [literal] if matches!(literal.kind, NodeKind::Literal(_)) => Ok(()),
            _ => Err(Violation::at(node, "missing literal")),
        },
        NodeKind::Literal(_) => Ok(()),
        NodeKind::ColumnRefExpr => match node.children.as_slice() {
            [reference] => check(reference),
            _ => Err(Violation::at(node, "missing column reference")),
        },
        NodeKind::ColumnReference => match node.column_name() {
            Some(name) if !name.is_empty() => Ok(()),
            _ => Err(Violation::at(node, "column reference has an empty name")),
        },
        NodeKind::FunctionCallExpr => match node.children.as_slice() {
            [call] => check(call),
            _ => Err(Violation::at(node, "missing function call")),
        },
        NodeKind::FunctionCall => check_call(node),
        NodeKind::FunctionName => {
            if node.text.is_empty() {
                return Err(Violation::at(node, "function call has no name"));
            }
            Ok(())
        }
        NodeKind::ArgumentList => node.children.iter().try_for_each(check),
        NodeKind::Terminal => Ok(()),
        NodeKind::ErrorNode => Err(Violation::at(node, "unparsed input")),
    }
}

fn check_call(node: &SyntaxNode) -> Result<(), Violation> {
    let mut children = node.children.iter();
    let Some(name) = children.next().filter(|n| n.kind == NodeKind::FunctionName) else {
        return Err(Violation::at(node, "function call has no name"));
    };
    check(name)?;

    match (children.next(), children.next()) {
        (None, _) => Ok(()),
        (Some(args), None) if args.kind == NodeKind::ArgumentList => check(args),
        _ => Err(Violation::at(node, "malformed argument list")),
    }
}
