use std::fmt::Write;

use rowan::NodeOrToken;

use crate::parser::cst::SyntaxNode as CstNode;

use super::SyntaxNode;

enum Target<'t> {
    Tree(&'t SyntaxNode),
    Cst(CstNode),
}

/// Indented text dump of either the uniform tree or the raw CST.
pub struct TreePrinter<'t> {
    target: Target<'t>,
    spans: bool,
    trivia: bool,
}

impl<'t> TreePrinter<'t> {
    pub fn new(tree: &'t SyntaxNode) -> Self {
        Self {
            target: Target::Tree(tree),
            spans: false,
            trivia: false,
        }
    }

    pub fn cst(node: CstNode) -> Self {
        Self {
            target: Target::Cst(node),
            spans: false,
            trivia: false,
        }
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    /// Include whitespace and garbage tokens. CST only.
    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        match &self.target {
            Target::Tree(node) => self.format_tree(node, 0, w),
            Target::Cst(node) => self.format_cst(node, 0, w),
        }
    }

    fn format_tree(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        write!(w, "{}{}", prefix, node.kind)?;
        if self.spans {
            write!(w, " [{}..{}]", node.start, node.end)?;
        }
        if node.is_leaf() {
            write!(w, " {:?}", node.text)?;
        }
        writeln!(w)?;

        for child in &node.children {
            self.format_tree(child, indent + 1, w)?;
        }
        Ok(())
    }

    fn format_cst(&self, node: &CstNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        write!(w, "{}{:?}", prefix, node.kind())?;
        if self.spans {
            let range = node.text_range();
            write!(w, " [{}..{}]", u32::from(range.start()), u32::from(range.end()))?;
        }
        writeln!(w)?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_cst(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if !self.trivia && t.kind().is_skipped() {
                        continue;
                    }
                    let child_prefix = "  ".repeat(indent + 1);
                    write!(w, "{}{:?}", child_prefix, t.kind())?;
                    if self.spans {
                        let range = t.text_range();
                        write!(w, " [{}..{}]", u32::from(range.start()), u32::from(range.end()))?;
                    }
                    writeln!(w, " {:?}", t.text())?;
                }
            }
        }
        Ok(())
    }
}
