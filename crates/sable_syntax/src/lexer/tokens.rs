//! Token types and the lexeme classifier.
//!
//! The scanner only cuts the source into lexemes; [`classify`] decides what each lexeme is, using
//! the registry-backed IDs for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the builder.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::Span;
use sable_core::lang::keywords::{self, KeywordId};
use sable_core::lang::operators::{self, OperatorId};
use sable_core::lang::punctuation::{self, PunctuationId};
use sable_core::lang::runes;

// ============================================================================
// LEXEMES
// ============================================================================

/// A raw slice of source text cut by the scanner, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub text: String,
    pub span: Span,
}

impl Lexeme {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self { text: text.into(), span }
    }

    /// The end-of-input sentinel at byte offset `at`.
    pub fn end(at: usize) -> Self {
        Self {
            text: String::new(),
            span: Span::new(at, at),
        }
    }

    pub fn is_end(&self) -> bool {
        self.text.is_empty()
    }
}

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the classifier.
///
/// ## Notes
/// - Keyword/operator/punctuation tokens carry stable IDs from `sable_core::lang`.
/// - Literal kinds describe the shape only; the text stays on the [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Literals ==========
    Int,
    Float,
    String,
    Char,

    // ========== Keyword / operator / punctuation (ID-based) ==========
    Operator(OperatorId),
    Punctuation(PunctuationId),
    Keyword(KeywordId),

    // ========== Identifiers ==========
    Ident,
    /// A lexeme that fits no other kind (e.g. `1.2.3` under the unchecked dot policy, or `+-`).
    Invalid,

    // ========== Special ==========
    Eof,
}

/// A classified lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn from_lexeme(lexeme: Lexeme) -> Self {
        Self {
            kind: classify(&lexeme.text),
            text: lexeme.text,
            span: lexeme.span,
        }
    }

    /// The `Eof` token at byte offset `at`.
    pub fn eof(at: usize) -> Self {
        Self::new(TokenKind::Eof, "", Span::new(at, at))
    }

    /// How the token reads in an error message.
    pub fn describe(&self) -> &str {
        match self.kind {
            TokenKind::Eof => "end of input",
            _ => &self.text,
        }
    }
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Classify a lexeme.
///
/// ## Notes
/// - Lookup order is keyword, operator, punctuation, then literal shape. The tables are disjoint, so the order only
///   matters for speed.
/// - The empty lexeme is the end-of-input sentinel and classifies as `Eof`.
pub fn classify(lexeme: &str) -> TokenKind {
    if lexeme.is_empty() {
        return TokenKind::Eof;
    }
    if let Some(id) = keywords::from_str(lexeme) {
        return TokenKind::Keyword(id);
    }
    if let Some(id) = operators::from_str(lexeme) {
        return TokenKind::Operator(id);
    }
    if let Some(id) = punctuation::from_str(lexeme) {
        return TokenKind::Punctuation(id);
    }
    if let Some(kind) = literal_kind(lexeme) {
        return kind;
    }
    if is_identifier(lexeme) {
        TokenKind::Ident
    } else {
        TokenKind::Invalid
    }
}

/// Whether `lexeme` is a well-formed, non-reserved identifier.
pub fn is_identifier(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    runes::is_ident_start(first) && chars.all(runes::is_ident_continue) && keyword_id(lexeme).is_none()
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}

fn literal_kind(lexeme: &str) -> Option<TokenKind> {
    let first = lexeme.chars().next()?;
    if runes::is_decimal(first) {
        if !lexeme.chars().all(|c| runes::is_decimal(c) || c == '.') {
            return None;
        }
        return Some(match lexeme.matches('.').count() {
            0 => TokenKind::Int,
            1 => TokenKind::Float,
            _ => TokenKind::Invalid,
        });
    }
    if is_quoted(lexeme, '"') {
        return Some(TokenKind::String);
    }
    if is_quoted(lexeme, '\'') {
        return Some(TokenKind::Char);
    }
    None
}

fn is_quoted(lexeme: &str, quote: char) -> bool {
    lexeme.len() >= 2 && lexeme.starts_with(quote) && lexeme.ends_with(quote)
}
