//! Parser infrastructure for the expression language.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//!
//! - Zero-copy lexing: tokens carry spans, text sliced only when building tree nodes
//! - Channel-aware: the grammar sees only default-channel tokens; whitespace and
//!   unrecognized characters are buffered and attached to the tree in source order
//! - Checkpoint-based wrapping: binary operator nodes wrap their left operand retroactively
//!
//! # Recovery Strategy
//!
//! The parser always produces a tree. Recovery follows these rules:
//!
//! 1. A token that cannot start an operand gets one diagnostic and an empty `Error`
//!    placeholder; the token itself is not consumed
//! 2. A failed production makes every enclosing production stop where it is
//! 3. Whatever is left after the top-level expression is reported once and wrapped
//!    in a single `Error` node
//! 4. On recursion limit, remaining input goes into single Error node

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;

#[cfg(test)]
mod tests;

pub use cst::{Channel, SyntaxKind, SyntaxNode, SyntaxToken};

pub use core::{DEFAULT_RECURSION_LIMIT, Parser};

use crate::diagnostics::Diagnostics;
use lexer::lex;

/// Parse result containing the green tree.
///
/// The tree is always complete; diagnostics are returned separately.
/// Error nodes in the tree represent recovery points.
#[derive(Debug, Clone)]
pub struct Parse {
    cst: rowan::GreenNode,
    diagnostics: Diagnostics,
}

impl Parse {
    /// Creates a typed view over the immutable green tree.
    /// SyntaxNode is a thin wrapper with parent pointers.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.cst.clone())
    }

    pub fn root(&self) -> ast::Root {
        ast::Root::cast(self.syntax()).expect("parser always produces Root")
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

/// Main entry point.
pub fn parse(source: &str) -> Parse {
    Parser::new(source, lex(source)).parse()
}
