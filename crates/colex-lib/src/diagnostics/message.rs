use rowan::TextRange;
use serde::Serialize;

use crate::line_index::LineIndex;

/// Diagnostic kinds, grouped by the stage that reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    // Input-level
    EmptyExpression,

    // Unclosed delimiters
    UnclosedParen,

    // User omitted something required
    ExpectedExpression,
    ExpectedArgumentList,

    // User wrote something that doesn't belong
    UnterminatedString,
    InvalidColumnReference,
    TrailingInput,
    NestingTooDeep,

    // Lexical anomalies surfaced by lint
    InvalidCharacter,

    // Valid syntax, invalid semantics
    SemanticValidation,
}

impl DiagnosticKind {
    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::EmptyExpression => "empty expression",
            Self::UnclosedParen => "missing closing `)`",
            Self::ExpectedExpression => "expected an expression",
            Self::ExpectedArgumentList => "expected `(` after function name",
            Self::UnterminatedString => "unterminated string literal",
            Self::InvalidColumnReference => "invalid column reference",
            Self::TrailingInput => "unexpected tokens at end of expression",
            Self::NestingTooDeep => "expression nested too deeply",
            Self::InvalidCharacter => "invalid character",
            Self::SemanticValidation => "semantic validation failed",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::InvalidCharacter => "invalid character `{}`".to_string(),
            Self::UnclosedParen => format!("{}; {{}}", self.fallback_message()),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RelatedMessage {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

/// Unresolved diagnostic as recorded by the pipeline stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user. May be empty at end of input.
    pub(crate) range: TextRange,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedMessage>,
}

impl DiagnosticMessage {
    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            message: kind.fallback_message().to_string(),
            related: Vec::new(),
        }
    }

    pub(crate) fn resolve(&self, index: &LineIndex<'_>) -> Diagnostic {
        let (start, end) = widen(self.range);
        let (line, column) = index.position(start);
        Diagnostic {
            kind: self.kind,
            message: self.message.clone(),
            line,
            column,
            start,
            end,
            related: self
                .related
                .iter()
                .map(|r| {
                    let (start, end) = widen(r.range);
                    RelatedInfo {
                        message: r.message.clone(),
                        start,
                        end,
                    }
                })
                .collect(),
        }
    }
}

/// Empty ranges become a single character at the same position.
fn widen(range: TextRange) -> (usize, usize) {
    let start: usize = range.start().into();
    let end: usize = range.end().into();
    if start == end {
        (start, start + 1)
    } else {
        (start, end)
    }
}

/// Secondary location attached to a diagnostic, e.g. where a paren was opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedInfo {
    pub message: String,
    pub start: usize,
    pub end: usize,
}

/// A positioned, non-empty diagnostic.
///
/// `start..end` is a half-open byte range into the source and is never empty.
/// `line` is 1-based, `column` is a 0-based character column of `start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub line: u32,
    pub column: u32,
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<RelatedInfo>,
}

impl Diagnostic {
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        start < self.end && end > self.start
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error at {}:{} ({}..{}): {}",
            self.line, self.column, self.start, self.end, self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message, related.start, related.end
            )?;
        }
        Ok(())
    }
}
