//! Parser state machine and low-level operations.

use rowan::{Checkpoint, GreenNodeBuilder, TextRange, TextSize};

use super::Parse;
use super::cst::SyntaxKind;
use super::lexer::{Token, token_text};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Default bound on expression nesting (parens, unary minus, call arguments).
pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

/// Skipped tokens (whitespace, garbage) are buffered and flushed when starting a new node.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    pub(super) last_diagnostic_pos: Option<TextSize>,
    pub(super) debug_fuel: std::cell::Cell<u32>,
    recursion_limit: u32,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_diagnostic_pos: None,
            debug_fuel: std::cell::Cell::new(256),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn parse(mut self) -> Parse {
        self.parse_root();
        self.drain_trivia();
        log::trace!(
            "parsed {} tokens with {} diagnostics",
            self.tokens.len(),
            self.diagnostics.len()
        );
        Parse {
            cst: self.builder.finish(),
            diagnostics: self.diagnostics,
        }
    }

    /// Current significant token. Whitespace and garbage are moved to the trivia buffer.
    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.nth_raw(0)
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    pub(super) fn nth_raw(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Eof, |t| t.kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia_to_buffer();
        let source = self.source;
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(source, t))
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_skipped() {
            self.trivia_buffer.push(self.tokens[self.pos]);
            self.pos += 1;
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            let text = token_text(self.source, &token);
            self.builder.token(token.kind.into(), text);
        }
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    /// Buffered trivia is not flushed here, so a node wrapped at this checkpoint
    /// may start with whitespace. Consumers trim with `ast::significant_range`.
    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.builder.checkpoint()
    }

    pub(super) fn bump(&mut self) {
        assert!(!self.eof(), "bump called at EOF");
        self.reset_debug_fuel();

        self.drain_trivia();

        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(token.kind.into(), text);
        self.pos += 1;
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Placeholder for an operand that could not be parsed. Consumes nothing.
    ///
    /// Buffered trivia stays buffered so the empty node sits right after the
    /// last consumed token, inside its parent's span.
    pub(super) fn missing_node(&mut self) {
        self.builder.start_node(SyntaxKind::Error.into());
        self.builder.finish_node();
    }

    fn bump_as_error(&mut self) {
        if self.currently_is(SyntaxKind::Eof) {
            return;
        }
        self.start_node(SyntaxKind::Error);
        self.bump();
        self.finish_node();
    }

    /// Wraps every remaining significant token into a single `Error` node.
    pub(super) fn bump_rest_as_error(&mut self) {
        if self.currently_is(SyntaxKind::Eof) {
            return;
        }
        self.start_node(SyntaxKind::Error);
        while !self.currently_is(SyntaxKind::Eof) {
            self.bump();
        }
        self.finish_node();
    }

    fn should_report(&mut self, pos: TextSize) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        let range = self.current_span();
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).emit();
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let range = self.current_span();
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).message(message).emit();
    }

    /// Reports at the current token, naming it in the message when there is one.
    pub(super) fn error_found(&mut self, kind: DiagnosticKind) {
        if self.currently_is(SyntaxKind::Eof) {
            self.error_msg(kind, "found end of input");
        } else {
            let found = format!("found `{}`", self.current_text());
            self.error_msg(kind, found);
        }
    }

    pub(super) fn error_and_bump_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.error_msg(kind, message);
        self.bump_as_error();
    }

    pub(super) fn error_unclosed_delimiter(
        &mut self,
        kind: DiagnosticKind,
        related_msg: impl Into<String>,
        open_range: TextRange,
    ) {
        let current = self.current_span();
        if !self.should_report(current.start()) {
            return;
        }
        let found = (!self.eof()).then(|| format!("found `{}`", self.current_text()));
        let builder = self.diagnostics.report(kind, current);
        let builder = match found {
            Some(found) => builder.message(found),
            None => builder,
        };
        builder.related_to(related_msg, open_range).emit();
    }

    /// Returns `false` once the nesting limit is hit. The caller must bail out.
    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.depth >= self.recursion_limit {
            self.error(DiagnosticKind::NestingTooDeep);
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }
}

impl Parser<'_> {
    /// Guards against grammar loops that peek without ever consuming.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        let fuel = self.debug_fuel.get();
        assert!(fuel != 0, "parser made no progress after {} lookaheads", 256);
        self.debug_fuel.set(fuel - 1);
    }

    /// Callers dispatch on `current()` before entering a rule; this re-checks it.
    #[inline]
    pub(super) fn assert_current(&mut self, expected: SyntaxKind) {
        let found = self.current();
        assert_eq!(found, expected, "rule entered on the wrong token");
    }
}
