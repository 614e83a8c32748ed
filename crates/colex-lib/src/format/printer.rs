//! Tree walk that re-emits an expression in canonical layout.

use crate::tree::{NodeKind, SyntaxNode};

use super::FormatOptions;
use super::writer::Writer;

/// Added to binary-operator estimates to leave room for the surrounding spaces
/// and whatever follows the right operand.
const BINARY_PADDING: usize = 4;

/// Pretty printer over a syntactically and semantically valid tree.
///
/// Line breaks are decided locally from the current column and the compact
/// width of what comes next. Nothing already written is ever re-flowed.
pub struct Formatter<'o> {
    options: &'o FormatOptions,
    out: Writer,
}

impl<'o> Formatter<'o> {
    pub fn new(options: &'o FormatOptions) -> Self {
        Self {
            options,
            out: Writer::new(options.indent_size),
        }
    }

    pub fn format(mut self, tree: &SyntaxNode) -> String {
        self.node(tree);
        self.out.finish()
    }

    fn node(&mut self, node: &SyntaxNode) {
        match node.kind {
            NodeKind::Expression
            | NodeKind::LiteralExpr
            | NodeKind::ColumnRefExpr
            | NodeKind::FunctionCallExpr => {
                for child in &node.children {
                    self.node(child);
                }
            }
            NodeKind::PowerExpr => self.power(node),
            NodeKind::MulDivExpr
            | NodeKind::AddSubExpr
            | NodeKind::ComparisonExpr
            | NodeKind::AndExpr
            | NodeKind::OrExpr => self.binary(node),
            NodeKind::ParenExpr => {
                self.out.write("(");
                for child in &node.children {
                    self.node(child);
                }
                self.out.write(")");
            }
            NodeKind::UnaryMinusExpr => {
                self.out.write("-");
                for child in &node.children {
                    self.node(child);
                }
            }
            NodeKind::FunctionCall => self.call(node),
            NodeKind::ArgumentList => self.inline_args(&node.children),
            NodeKind::Literal(_)
            | NodeKind::ColumnReference
            | NodeKind::FunctionName
            | NodeKind::Terminal
            | NodeKind::ErrorNode => self.out.write(&node.text),
        }
    }

    fn binary(&mut self, node: &SyntaxNode) {
        let [lhs, op, rhs] = node.children.as_slice() else {
            self.out.write(&node.text);
            return;
        };

        self.node(lhs);

        let estimate = op.text.len() + compact_width(rhs) + BINARY_PADDING;
        if self.options.break_long_expressions
            && self.out.column() + estimate > self.options.max_line_length
        {
            self.out.indent();
            self.out.newline();
            self.out.write(&op.text);
            if self.options.space_around_operators {
                self.out.write(" ");
            }
            self.out.dedent();
        } else {
            self.operator_inline(&op.text);
        }

        self.node(rhs);
    }

    fn power(&mut self, node: &SyntaxNode) {
        let [lhs, op, rhs] = node.children.as_slice() else {
            self.out.write(&node.text);
            return;
        };
        self.node(lhs);
        self.operator_inline(&op.text);
        self.node(rhs);
    }

    fn operator_inline(&mut self, op: &str) {
        if self.options.space_around_operators {
            self.out.write(" ");
            self.out.write(op);
            self.out.write(" ");
        } else {
            self.out.write(op);
        }
    }

    fn call(&mut self, node: &SyntaxNode) {
        let mut args: &[SyntaxNode] = &[];
        for child in &node.children {
            match child.kind {
                NodeKind::FunctionName => self.out.write(&child.text),
                NodeKind::ArgumentList => args = &child.children,
                _ => {}
            }
        }

        self.out.write("(");
        if !args.is_empty() {
            let total: usize =
                args.iter().map(compact_width).sum::<usize>() + 2 * (args.len() - 1);
            let too_long = self.out.column() + 1 + total > self.options.max_line_length;
            if self.options.break_long_expressions && too_long && args.len() > 1 {
                self.multiline_args(args);
            } else {
                self.inline_args(args);
            }
        }
        self.out.write(")");
    }

    fn inline_args(&mut self, args: &[SyntaxNode]) {
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.out.write(", ");
            }
            self.node(arg);
        }
    }

    fn multiline_args(&mut self, args: &[SyntaxNode]) {
        self.out.indent();
        self.out.newline();
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.out.write(",");
                self.out.newline();
            }
            self.node(arg);
        }
        self.out.dedent();
        self.out.newline();
    }
}

/// Width of `node` rendered on one line without optional whitespace.
pub fn compact_width(node: &SyntaxNode) -> usize {
    match node.kind {
        NodeKind::ParenExpr => 2 + children_width(node),
        NodeKind::UnaryMinusExpr => 1 + children_width(node),
        NodeKind::FunctionCall => {
            let mut width = 2;
            for child in &node.children {
                width += compact_width(child);
            }
            width
        }
        NodeKind::ArgumentList => {
            children_width(node) + node.children.len().saturating_sub(1)
        }
        NodeKind::Literal(_)
        | NodeKind::ColumnReference
        | NodeKind::FunctionName
        | NodeKind::Terminal
        | NodeKind::ErrorNode => node.text.len(),
        NodeKind::Expression
        | NodeKind::LiteralExpr
        | NodeKind::ColumnRefExpr
        | NodeKind::FunctionCallExpr
        | NodeKind::PowerExpr
        | NodeKind::MulDivExpr
        | NodeKind::AddSubExpr
        | NodeKind::ComparisonExpr
        | NodeKind::AndExpr
        | NodeKind::OrExpr => children_width(node),
    }
}

fn children_width(node: &SyntaxNode) -> usize {
    node.children.iter().map(compact_width).sum()
}
