//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Accessors return `None` where error recovery left a hole.

use rowan::TextRange;

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Root, Root);
ast_node!(LiteralExpr, LiteralExpr);
ast_node!(ColumnRefExpr, ColumnRefExpr);
ast_node!(FunctionCallExpr, FunctionCallExpr);
ast_node!(ParenExpr, ParenExpr);
ast_node!(UnaryMinusExpr, UnaryMinusExpr);
ast_node!(Literal, Literal);
ast_node!(ColumnReference, ColumnReference);
ast_node!(FunctionCall, FunctionCall);
ast_node!(ArgumentList, ArgumentList);
ast_node!(ErrorNode, Error);

/// Any of the six binary operator nodes. They share one shape: `lhs op rhs`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryExpr(SyntaxNode);

impl BinaryExpr {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        use SyntaxKind::*;
        matches!(
            node.kind(),
            OrExpr | AndExpr | ComparisonExpr | AddSubExpr | MulDivExpr | PowerExpr
        )
        .then(|| Self(node))
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        &self.0
    }

    pub fn kind(&self) -> SyntaxKind {
        self.0.kind()
    }

    pub fn lhs(&self) -> Option<Expr> {
        self.0.children().next().and_then(Expr::cast)
    }

    pub fn rhs(&self) -> Option<Expr> {
        self.0.children().nth(1).and_then(Expr::cast)
    }

    pub fn operator(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| !t.kind().is_skipped())
    }
}

/// Expression: any node that can stand as an operand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Literal(LiteralExpr),
    ColumnRef(ColumnRefExpr),
    FunctionCall(FunctionCallExpr),
    Paren(ParenExpr),
    UnaryMinus(UnaryMinusExpr),
    Binary(BinaryExpr),
    Error(ErrorNode),
}

impl Expr {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::LiteralExpr => LiteralExpr::cast(node).map(Expr::Literal),
            SyntaxKind::ColumnRefExpr => ColumnRefExpr::cast(node).map(Expr::ColumnRef),
            SyntaxKind::FunctionCallExpr => FunctionCallExpr::cast(node).map(Expr::FunctionCall),
            SyntaxKind::ParenExpr => ParenExpr::cast(node).map(Expr::Paren),
            SyntaxKind::UnaryMinusExpr => UnaryMinusExpr::cast(node).map(Expr::UnaryMinus),
            SyntaxKind::Error => ErrorNode::cast(node).map(Expr::Error),
            _ => BinaryExpr::cast(node).map(Expr::Binary),
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Expr::Literal(n) => n.as_cst(),
            Expr::ColumnRef(n) => n.as_cst(),
            Expr::FunctionCall(n) => n.as_cst(),
            Expr::Paren(n) => n.as_cst(),
            Expr::UnaryMinus(n) => n.as_cst(),
            Expr::Binary(n) => n.as_cst(),
            Expr::Error(n) => n.as_cst(),
        }
    }
}

impl Root {
    /// The top-level expression. `None` only for empty input.
    pub fn expr(&self) -> Option<Expr> {
        self.0.children().next().and_then(Expr::cast)
    }

    /// The `Error` node holding input left over after the expression.
    pub fn trailing(&self) -> Option<ErrorNode> {
        self.0.children().nth(1).and_then(ErrorNode::cast)
    }
}

impl LiteralExpr {
    pub fn literal(&self) -> Option<Literal> {
        self.0.children().find_map(Literal::cast)
    }
}

impl Literal {
    pub fn token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind().is_literal())
    }
}

impl ColumnRefExpr {
    pub fn reference(&self) -> Option<ColumnReference> {
        self.0.children().find_map(ColumnReference::cast)
    }
}

impl ColumnReference {
    pub fn token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind() == SyntaxKind::ColumnRef)
    }

    /// Referenced name without the brackets. Empty for `[]`.
    pub fn name(&self) -> Option<String> {
        let token = self.token()?;
        let text = token.text();
        Some(text[1..text.len() - 1].to_string())
    }
}

impl FunctionCallExpr {
    pub fn call(&self) -> Option<FunctionCall> {
        self.0.children().find_map(FunctionCall::cast)
    }
}

impl FunctionCall {
    pub fn name(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind() == SyntaxKind::FunctionName)
    }

    pub fn arguments(&self) -> Option<ArgumentList> {
        self.0.children().find_map(ArgumentList::cast)
    }
}

impl ArgumentList {
    pub fn args(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

impl ParenExpr {
    pub fn inner(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl UnaryMinusExpr {
    pub fn operand(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

/// Range from the first to the last significant token under `node`.
///
/// Leading and trailing whitespace or garbage never widens a node's span.
/// Nodes without significant tokens collapse to an empty range at their start.
/// Only the edges are scanned, so the cost does not grow with the subtree.
pub fn significant_range(node: &SyntaxNode) -> TextRange {
    let range = node.text_range();
    let inside = |t: &SyntaxToken| range.contains_range(t.text_range());

    let first = std::iter::successors(node.first_token(), |t| t.next_token())
        .take_while(inside)
        .find(|t| !t.kind().is_skipped());
    let Some(first) = first else {
        return TextRange::empty(range.start());
    };
    let last = std::iter::successors(node.last_token(), |t| t.prev_token())
        .take_while(inside)
        .find(|t| !t.kind().is_skipped())
        .unwrap_or_else(|| first.clone());
    TextRange::new(first.text_range().start(), last.text_range().end())
}
