//! CST → uniform tree conversion.

use crate::parser::SyntaxKind;
use crate::parser::ast::{self, Expr, significant_range};
use crate::parser::cst::{SyntaxNode as CstNode, SyntaxToken};

use super::{LiteralKind, NodeKind, SyntaxNode};

pub struct TreeBuilder<'s> {
    source: &'s str,
}

impl<'s> TreeBuilder<'s> {
    pub fn new(source: &'s str) -> Self {
        Self { source }
    }

    /// Builds the `Expression` root. `None` for empty input.
    pub fn build(&self, root: &ast::Root) -> Option<SyntaxNode> {
        if self.source.is_empty() {
            return None;
        }

        let mut children = Vec::with_capacity(2);
        if let Some(expr) = root.expr() {
            children.push(self.expr(&expr));
        }
        if let Some(trailing) = root.trailing() {
            children.push(self.node(NodeKind::ErrorNode, trailing.as_cst(), Vec::new()));
        }

        Some(SyntaxNode {
            kind: NodeKind::Expression,
            text: self.source.to_string(),
            start: 0,
            end: self.source.len(),
            children,
        })
    }

    fn expr(&self, expr: &Expr) -> SyntaxNode {
        match expr {
            Expr::Literal(e) => {
                let literal = e.literal().and_then(|l| self.literal(&l));
                self.node(NodeKind::LiteralExpr, e.as_cst(), literal.into_iter().collect())
            }
            Expr::ColumnRef(e) => {
                let reference = e.reference().map(|r| {
                    self.node(NodeKind::ColumnReference, r.as_cst(), Vec::new())
                });
                self.node(NodeKind::ColumnRefExpr, e.as_cst(), reference.into_iter().collect())
            }
            Expr::FunctionCall(e) => {
                let call = e.call().map(|c| self.function_call(&c));
                self.node(NodeKind::FunctionCallExpr, e.as_cst(), call.into_iter().collect())
            }
            Expr::Paren(e) => {
                let inner = e.inner().map(|i| self.expr(&i));
                self.node(NodeKind::ParenExpr, e.as_cst(), inner.into_iter().collect())
            }
            Expr::UnaryMinus(e) => {
                let operand = e.operand().map(|o| self.expr(&o));
                self.node(NodeKind::UnaryMinusExpr, e.as_cst(), operand.into_iter().collect())
            }
            Expr::Binary(e) => {
                let children = [
                    e.lhs().map(|l| self.expr(&l)),
                    e.operator().map(|op| self.token(NodeKind::Terminal, &op)),
                    e.rhs().map(|r| self.expr(&r)),
                ];
                self.node(
                    binary_kind(e.kind()),
                    e.as_cst(),
                    children.into_iter().flatten().collect(),
                )
            }
            Expr::Error(e) => self.node(NodeKind::ErrorNode, e.as_cst(), Vec::new()),
        }
    }

    fn literal(&self, literal: &ast::Literal) -> Option<SyntaxNode> {
        let token = literal.token()?;
        let kind = match token.kind() {
            SyntaxKind::StringLiteral | SyntaxKind::UnterminatedString => LiteralKind::String,
            SyntaxKind::IntegerLiteral => LiteralKind::Integer,
            SyntaxKind::FloatLiteral => LiteralKind::Float,
            SyntaxKind::BooleanLiteral => LiteralKind::Boolean,
            _ => return None,
        };
        Some(self.token(NodeKind::Literal(kind), &token))
    }

    fn function_call(&self, call: &ast::FunctionCall) -> SyntaxNode {
        let mut children = Vec::with_capacity(2);
        if let Some(name) = call.name() {
            children.push(self.token(NodeKind::FunctionName, &name));
        }
        if let Some(args) = call.arguments() {
            let arguments = args.args().map(|a| self.expr(&a)).collect();
            children.push(self.node(NodeKind::ArgumentList, args.as_cst(), arguments));
        }
        self.node(NodeKind::FunctionCall, call.as_cst(), children)
    }

    fn node(&self, kind: NodeKind, cst: &CstNode, children: Vec<SyntaxNode>) -> SyntaxNode {
        let range = significant_range(cst);
        let (start, end) = (usize::from(range.start()), usize::from(range.end()));
        SyntaxNode {
            kind,
            text: self.source[start..end].to_string(),
            start,
            end,
            children,
        }
    }

    fn token(&self, kind: NodeKind, token: &SyntaxToken) -> SyntaxNode {
        let range = token.text_range();
        SyntaxNode {
            kind,
            text: token.text().to_string(),
            start: range.start().into(),
            end: range.end().into(),
            children: Vec::new(),
        }
    }
}

fn binary_kind(kind: SyntaxKind) -> NodeKind {
    match kind {
        SyntaxKind::PowerExpr => NodeKind::PowerExpr,
        SyntaxKind::MulDivExpr => NodeKind::MulDivExpr,
        SyntaxKind::AddSubExpr => NodeKind::AddSubExpr,
        SyntaxKind::ComparisonExpr => NodeKind::ComparisonExpr,
        SyntaxKind::AndExpr => NodeKind::AndExpr,
        SyntaxKind::OrExpr => NodeKind::OrExpr,
        other => unreachable!("BinaryExpr::cast admitted {other:?}"),
    }
}
