//! Public token stream for syntax highlighting.
//!
//! The lexer's channel-tagged tokens are reconciled into one list ordered by
//! position whose spans tile the source. Tokens touched by a diagnostic keep
//! their kind and are flagged with `is_valid = false`.

mod reconcile;

#[cfg(test)]
mod reconcile_tests;

use serde::Serialize;

use crate::line_index::LineIndex;
use crate::parser::SyntaxKind;
use crate::parser::cst::token_sets::OPERATORS;

pub use reconcile::{mark_overlap, reconcile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    String,
    Integer,
    Float,
    Boolean,
    ColumnReference,
    Function,
    Operator,
    Comma,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Whitespace,
    Error,
    Eof,
}

impl TokenKind {
    pub fn of(kind: SyntaxKind) -> Self {
        use SyntaxKind::*;
        match kind {
            StringLiteral | UnterminatedString => Self::String,
            IntegerLiteral => Self::Integer,
            FloatLiteral => Self::Float,
            BooleanLiteral => Self::Boolean,
            ColumnRef => Self::ColumnReference,
            FunctionName => Self::Function,
            k if OPERATORS.contains(k) => Self::Operator,
            Comma => Self::Comma,
            ParenOpen => Self::LeftParen,
            ParenClose => Self::RightParen,
            BracketOpen => Self::LeftBracket,
            BracketClose => Self::RightBracket,
            Whitespace => Self::Whitespace,
            Eof => Self::Eof,
            // Node kinds never come out of the lexer.
            _ => Self::Error,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::ColumnReference => "columnReference",
            Self::Function => "function",
            Self::Operator => "operator",
            Self::Comma => "comma",
            Self::LeftParen => "leftParen",
            Self::RightParen => "rightParen",
            Self::LeftBracket => "leftBracket",
            Self::RightBracket => "rightBracket",
            Self::Whitespace => "whitespace",
            Self::Error => "error",
            Self::Eof => "eof",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub column: u32,
    pub is_valid: bool,
}

impl Token {
    /// Zero-width end-of-input marker.
    pub fn eof(source: &str) -> Self {
        let (line, column) = LineIndex::new(source).position(source.len());
        Self {
            kind: TokenKind::Eof,
            text: String::new(),
            start: source.len(),
            end: source.len(),
            line,
            column,
            is_valid: true,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
