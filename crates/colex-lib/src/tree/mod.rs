//! Uniform, owned syntax tree handed to callers and consumed by the formatter.
//!
//! Unlike the lossless CST in [`crate::parser`], nodes here carry only
//! significant structure: `(kind, text, start, end, children)`. Spans never
//! include surrounding whitespace, and `text == source[start..end]` always
//! holds.

mod builder;
mod printer;

#[cfg(test)]
mod builder_tests;

use serde::{Serialize, Serializer};

pub use builder::TreeBuilder;
pub use printer::TreePrinter;

/// Which literal alternative matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    String,
    Integer,
    Float,
    Boolean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Root wrapper spanning the whole input.
    Expression,
    LiteralExpr,
    ColumnRefExpr,
    FunctionCallExpr,
    ParenExpr,
    UnaryMinusExpr,
    PowerExpr,
    MulDivExpr,
    AddSubExpr,
    ComparisonExpr,
    AndExpr,
    OrExpr,
    Literal(LiteralKind),
    ColumnReference,
    FunctionCall,
    FunctionName,
    ArgumentList,
    /// Operator token between the operands of a binary node.
    Terminal,
    ErrorNode,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Expression => "Expression",
            Self::LiteralExpr => "LiteralExpr",
            Self::ColumnRefExpr => "ColumnRefExpr",
            Self::FunctionCallExpr => "FunctionCallExpr",
            Self::ParenExpr => "ParenExpr",
            Self::UnaryMinusExpr => "UnaryMinusExpr",
            Self::PowerExpr => "PowerExpr",
            Self::MulDivExpr => "MulDivExpr",
            Self::AddSubExpr => "AddSubExpr",
            Self::ComparisonExpr => "ComparisonExpr",
            Self::AndExpr => "AndExpr",
            Self::OrExpr => "OrExpr",
            Self::Literal(LiteralKind::String) => "StringLiteral",
            Self::Literal(LiteralKind::Integer) => "IntegerLiteral",
            Self::Literal(LiteralKind::Float) => "FloatLiteral",
            Self::Literal(LiteralKind::Boolean) => "BooleanLiteral",
            Self::ColumnReference => "ColumnReference",
            Self::FunctionCall => "FunctionCall",
            Self::FunctionName => "FunctionName",
            Self::ArgumentList => "ArgumentList",
            Self::Terminal => "Terminal",
            Self::ErrorNode => "Error",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Name inside the brackets of a `ColumnReference`. `None` for other kinds.
    pub fn column_name(&self) -> Option<&str> {
        if self.kind != NodeKind::ColumnReference {
            return None;
        }
        self.text
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
    }

    /// Pre-order traversal including `self`.
    pub fn descendants(&self) -> impl Iterator<Item = &SyntaxNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    pub fn dump(&self) -> String {
        TreePrinter::new(self).dump()
    }
}
