//! Logos-based lexer for threshold expressions
//!
//! Splits an expression into operator tokens and the text runs between
//! them. Longest match wins in logos, so `===` is never lexed as `==` + `=`.

use logos::Logos;
use text_size::TextSize;

use crate::syntax::Operator;

/// Token kinds produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `===`
    EqEqEq,
    /// `==`
    EqEq,
    /// `!=`
    BangEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// A lone `=`, not an operator
    Eq,
    /// A lone `!`, not an operator
    Bang,
    /// Anything between operators, whitespace included
    Text,
    Error,
}

impl TokenKind {
    /// The comparison operator this token spells, if any
    pub fn operator(self) -> Option<Operator> {
        let op = match self {
            Self::LtEq => Operator::LessEq,
            Self::GtEq => Operator::GreaterEq,
            Self::EqEqEq => Operator::StrictEq,
            Self::EqEq => Operator::LooseEq,
            Self::BangEq => Operator::NotEq,
            Self::Lt => Operator::Less,
            Self::Gt => Operator::Greater,
            Self::Eq | Self::Bang | Self::Text | Self::Error => return None,
        };
        Some(op)
    }

    /// Lone symbols that look like an operator but are not one
    pub fn is_stray_symbol(self) -> bool {
        matches!(self, Self::Eq | Self::Bang)
    }
}

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.inner.span().start as u32);

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    // =========================================================================
    // OPERATORS (multi-character before single-character)
    // =========================================================================
    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("===")]
    EqEqEq,

    #[token("==")]
    EqEq,

    #[token("!=")]
    BangEq,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    // =========================================================================
    // STRAY SYMBOLS
    // =========================================================================
    #[token("=")]
    Eq,

    #[token("!")]
    Bang,

    // =========================================================================
    // TEXT
    // =========================================================================
    #[regex(r"[^<>=!]+")]
    Text,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            LtEq => TokenKind::LtEq,
            GtEq => TokenKind::GtEq,
            EqEqEq => TokenKind::EqEqEq,
            EqEq => TokenKind::EqEq,
            BangEq => TokenKind::BangEq,
            Lt => TokenKind::Lt,
            Gt => TokenKind::Gt,
            Eq => TokenKind::Eq,
            Bang => TokenKind::Bang,
            Text => TokenKind::Text,
        }
    }
}
