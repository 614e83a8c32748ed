use crate::diagnostics::Diagnostic;
use crate::parser::lexer::{Token as RawToken, token_text};

use super::{Token, TokenKind};

/// Merges the three lexer channels into one list ordered by `start`.
///
/// Touching error tokens (`prev.end == next.start`) are coalesced into one
/// token covering the whole run. Error tokens start out invalid.
pub fn reconcile(
    source: &str,
    default: &[RawToken],
    hidden: &[RawToken],
    error: &[RawToken],
) -> Vec<Token> {
    let mut all: Vec<&RawToken> = default.iter().chain(hidden).chain(error).collect();
    all.sort_by_key(|t| t.span.start());

    let mut tokens: Vec<Token> = Vec::with_capacity(all.len());
    for raw in all {
        let kind = TokenKind::of(raw.kind);
        let text = token_text(source, raw);

        if kind == TokenKind::Error
            && let Some(prev) = tokens.last_mut()
            && prev.kind == TokenKind::Error
            && prev.end == raw.start()
        {
            prev.text.push_str(text);
            prev.end = raw.end();
            continue;
        }

        tokens.push(Token {
            kind,
            text: text.to_string(),
            start: raw.start(),
            end: raw.end(),
            line: raw.line,
            column: raw.column,
            is_valid: kind != TokenKind::Error,
        });
    }

    log::trace!("reconciled {} tokens", tokens.len());
    tokens
}

/// Returns a copy of `tokens` where every token intersecting a diagnostic
/// span is flagged invalid. Kinds are left untouched.
pub fn mark_overlap(tokens: &[Token], diagnostics: &[Diagnostic]) -> Vec<Token> {
    tokens
        .iter()
        .map(|token| {
            let mut token = token.clone();
            if diagnostics.iter().any(|d| d.overlaps(token.start, token.end)) {
                token.is_valid = false;
            }
            token
        })
        .collect()
}
