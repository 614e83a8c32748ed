//! The public operations over expression text.
//!
//! Each call lexes and parses from scratch; nothing is cached between calls.

use serde::Serialize;

use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::format::{FormatOptions, Formatter};
use crate::parser::lexer::{self, Token as RawToken};
use crate::parser::{Parse, Parser};
use crate::tokens::{self, Token, TokenKind};
use crate::tree::{SyntaxNode, TreeBuilder};
use crate::validate::validate as check_semantics;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenizeResult {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseTreeResult {
    /// `None` only for empty input.
    pub root: Option<SyntaxNode>,
    pub diagnostics: Vec<Diagnostic>,
}

/// One pass of the pipeline over a source string.
struct Analysis<'s> {
    source: &'s str,
    raw: Vec<RawToken>,
    tree: Option<SyntaxNode>,
    syntax: Diagnostics,
    semantic: Diagnostics,
}

impl<'s> Analysis<'s> {
    fn run(source: &'s str) -> Self {
        let raw = lexer::lex(source);
        let parse: Parse = Parser::new(source, raw.clone()).parse();
        let tree = TreeBuilder::new(source).build(&parse.root());
        let syntax = parse.into_diagnostics();

        let mut semantic = Diagnostics::new();
        if syntax.is_empty()
            && let Some(tree) = &tree
        {
            check_semantics(tree, &mut semantic);
        }

        log::debug!(
            "analyzed {} bytes: {} tokens, {} syntax and {} semantic diagnostics",
            source.len(),
            raw.len(),
            syntax.len(),
            semantic.len()
        );

        Self {
            source,
            raw,
            tree,
            syntax,
            semantic,
        }
    }

    fn reconciled(&self) -> Vec<Token> {
        let channels = lexer::split_channels(&self.raw);
        tokens::reconcile(
            self.source,
            &channels.default,
            &channels.hidden,
            &channels.error,
        )
    }

    /// Syntax diagnostics followed by the semantic one, if any.
    fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut all = self.syntax.clone();
        all.extend(self.semantic.clone());
        all.resolve(self.source)
    }

    fn lint(&self) -> Vec<Diagnostic> {
        let mut all = self.syntax.clone();
        for token in self.reconciled() {
            if token.kind != TokenKind::Error {
                continue;
            }
            let range = rowan::TextRange::new(
                (token.start as u32).into(),
                (token.end as u32).into(),
            );
            all.report(DiagnosticKind::InvalidCharacter, range)
                .message(token.text)
                .emit();
        }
        all.extend(self.semantic.clone());
        all.resolve(self.source)
    }
}

/// `true` iff [`lint`] reports nothing. Empty input is never valid.
pub fn validate(source: &str) -> bool {
    lint(source).is_empty()
}

/// Reconciled tokens from every channel, plus syntax and semantic diagnostics.
///
/// Tokens overlapping a diagnostic keep their kind but have `is_valid` cleared.
/// Non-empty input ends with a zero-width `eof` token.
pub fn tokenize(source: &str) -> TokenizeResult {
    let analysis = Analysis::run(source);
    let diagnostics = analysis.diagnostics();
    let mut tokens = tokens::mark_overlap(&analysis.reconciled(), &diagnostics);
    if !source.is_empty() {
        tokens.push(Token::eof(source));
    }
    TokenizeResult {
        tokens,
        diagnostics,
    }
}

/// Syntax diagnostics, then one per run of invalid characters, then the
/// semantic diagnostic.
pub fn lint(source: &str) -> Vec<Diagnostic> {
    Analysis::run(source).lint()
}

pub fn parse_tree(source: &str) -> ParseTreeResult {
    let analysis = Analysis::run(source);
    let diagnostics = analysis.diagnostics();
    ParseTreeResult {
        root: analysis.tree,
        diagnostics,
    }
}

/// Pretty-prints `source`. Input that does not lint clean comes back unchanged.
pub fn format(source: &str, options: &FormatOptions) -> String {
    let analysis = Analysis::run(source);
    if !analysis.lint().is_empty() {
        log::debug!("not formatting invalid input");
        return source.to_string();
    }
    match &analysis.tree {
        Some(tree) => Formatter::new(options).format(tree),
        None => source.to_string(),
    }
}
