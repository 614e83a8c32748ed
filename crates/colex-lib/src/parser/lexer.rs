//! Lexer for the expression language.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! ## Error handling
//!
//! The lexer never fails. Every character that matches no rule becomes its own
//! one-character `Garbage` token on the error channel. Coalescing runs of them
//! is left to the token reconciler.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use super::cst::{Channel, SyntaxKind};

/// Zero-copy token: kind + span + position, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
    pub channel: Channel,
    /// 1-based line of the first character.
    pub line: u32,
    /// 0-based character column of the first character.
    pub column: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange, line: u32, column: u32) -> Self {
        Self {
            kind,
            span,
            channel: kind.channel(),
            line,
            column,
        }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.span.start().into()
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.span.end().into()
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tracks line/column while walking the source front to back.
struct Cursor {
    line: u32,
    column: u32,
}

impl Cursor {
    fn advance(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }
}

/// Tokenizes source into a vector of span-based tokens covering every byte.
///
/// Post-processes the Logos output:
/// - Splits lexer error spans into one `Garbage` token per character
/// - Stamps each token with its line/column
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);
    let mut cursor = Cursor { line: 1, column: 0 };

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => {
                tokens.push(Token::new(
                    kind,
                    range_to_text_range(span.clone()),
                    cursor.line,
                    cursor.column,
                ));
                cursor.advance(&source[span]);
            }
            Err(()) => {
                for (offset, c) in source[span.clone()].char_indices() {
                    let start = span.start + offset;
                    tokens.push(Token::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(start..start + c.len_utf8()),
                        cursor.line,
                        cursor.column,
                    ));
                    cursor.advance(&source[start..start + c.len_utf8()]);
                }
            }
        }
    }

    tokens
}

/// Tokens separated by channel, each list still in source order.
#[derive(Debug, Clone, Default)]
pub struct Channels {
    pub default: Vec<Token>,
    pub hidden: Vec<Token>,
    pub error: Vec<Token>,
}

pub fn split_channels(tokens: &[Token]) -> Channels {
    let mut channels = Channels::default();
    for &token in tokens {
        match token.channel {
            Channel::Default => channels.default.push(token),
            Channel::Hidden => channels.hidden.push(token),
            Channel::Error => channels.error.push(token),
        }
    }
    channels
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
