//! Colex: front end for a small spreadsheet-style column expression language.
//!
//! Expressions combine literals, `[column]` references, upper-case function
//! calls and the usual arithmetic, comparison and logical operators.
//!
//! # Example
//!
//! ```
//! use colex_lib::FormatOptions;
//!
//! assert!(colex_lib::validate("SUM([price] * [quantity]) > 1000"));
//! assert!(!colex_lib::validate("1 +"));
//!
//! let pretty = colex_lib::format("1+2*3", &FormatOptions::default());
//! assert_eq!(pretty, "1 + 2 * 3");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod diagnostics;
pub mod format;
pub mod line_index;
pub mod parser;
pub mod tokens;
pub mod tree;
pub mod validate;

#[cfg(test)]
mod line_index_tests;

pub use analyze::{ParseTreeResult, TokenizeResult, format, lint, parse_tree, tokenize, validate};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticsPrinter, RelatedInfo};
pub use format::FormatOptions;
pub use tokens::{Token, TokenKind};
pub use tree::{LiteralKind, NodeKind, SyntaxNode};

/// Errors from the fallible configuration APIs.
///
/// Problems with expression text are never errors; they are reported as
/// [`Diagnostic`] values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid format options: {0}")]
    InvalidOptions(String),

    #[error("failed to parse format options: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
