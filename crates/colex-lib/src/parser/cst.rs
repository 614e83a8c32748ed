//! Syntax kinds for the expression language.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `ExprLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    /// Stray `[` that does not start a well-formed column reference.
    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token(",")]
    Comma,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("^")]
    Caret,

    #[token("==")]
    EqEq,

    #[token("!=")]
    NotEq,

    #[token("<")]
    Lt,

    #[token("<=")]
    LtEq,

    #[token(">")]
    Gt,

    #[token(">=")]
    GtEq,

    #[token("&&")]
    AndAnd,

    #[token("||")]
    OrOr,

    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    #[regex(r"'(?:[^'\\]|\\.)*'")]
    StringLiteral,

    /// String with no closing quote; runs to the end of input.
    #[regex(r#""(?:[^"\\]|\\.)*"#, allow_greedy = true)]
    #[regex(r"'(?:[^'\\]|\\.)*", allow_greedy = true)]
    UnterminatedString,

    #[regex(r"[0-9]+")]
    IntegerLiteral,

    #[regex(r"[0-9]+\.[0-9]+(?:[eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    FloatLiteral,

    #[token("true")]
    #[token("false")]
    BooleanLiteral,

    /// `[name]` lexed as a single token. `[]` is accepted here and rejected
    /// later by the semantic validator.
    #[regex(r"\[[A-Za-z_][A-Za-z0-9_]*\]")]
    #[token("[]")]
    ColumnRef,

    /// Uppercase-only names. Mixed case never lexes as a function.
    #[regex(r"[A-Z]+")]
    FunctionName,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// One unrecognized character.
    Garbage,

    /// Zero-width end-of-input marker, never produced by logos.
    Eof,

    // --- Node kinds (non-terminals) ---
    Root,
    LiteralExpr,
    ColumnRefExpr,
    FunctionCallExpr,
    ParenExpr,
    UnaryMinusExpr,
    PowerExpr,
    MulDivExpr,
    AddSubExpr,
    ComparisonExpr,
    AndExpr,
    OrExpr,
    Literal,
    ColumnReference,
    FunctionCall,
    ArgumentList,
    Error,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

/// Lexer channel a token is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Default,
    Hidden,
    Error,
}

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Garbage | Error)
    }

    #[inline]
    pub fn channel(self) -> Channel {
        match self {
            Whitespace => Channel::Hidden,
            Garbage => Channel::Error,
            _ => Channel::Default,
        }
    }

    /// Tokens the grammar never looks at. They are still attached to the tree.
    #[inline]
    pub fn is_skipped(self) -> bool {
        self.channel() != Channel::Default
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        token_sets::LITERALS.contains(self)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExprLang {}

impl Language for ExprLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<ExprLang>;
pub type SyntaxToken = rowan::SyntaxToken<ExprLang>;

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const LITERALS: TokenSet = TokenSet::new(&[
        StringLiteral,
        UnterminatedString,
        IntegerLiteral,
        FloatLiteral,
        BooleanLiteral,
    ]);

    pub const COMPARISON_OPS: TokenSet = TokenSet::new(&[EqEq, NotEq, Lt, LtEq, Gt, GtEq]);

    pub const OPERATORS: TokenSet = COMPARISON_OPS.union(TokenSet::new(&[
        Plus, Minus, Star, Slash, Caret, AndAnd, OrOr,
    ]));
}
