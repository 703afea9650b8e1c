//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the
//! scanner/builder: delimiters, separators and access markers.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use sable_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("("), Some(PunctuationId::LParen));
//! assert_eq!(punctuation::as_str(PunctuationId::Ellipsis), "...");
//! ```

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::registry::{Since, spelling_index};

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators like `,`, `;` and `:`.
    Separator,
    /// Selector access `.`.
    Access,
    /// Variadic marker `...`.
    Marker,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,

    // Separators
    Comma,
    Semicolon,
    Colon,

    Dot,
    Ellipsis,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
    pub since: Since,
}

/// Registry of all punctuation tokens, in [`PunctuationId`] order.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter),
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator),
    info(PunctuationId::Colon, ":", PunctuationCategory::Separator),
    info(PunctuationId::Dot, ".", PunctuationCategory::Access),
    info(PunctuationId::Ellipsis, "...", PunctuationCategory::Marker),
];

static INDEX: LazyLock<FxHashMap<&'static str, PunctuationId>> =
    LazyLock::new(|| spelling_index(PUNCTUATION.iter().map(|p| (p.canonical, p.id))));

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a punctuation token.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    &PUNCTUATION[id as usize]
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    INDEX.get(s).copied()
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        category,
        since: Since(0, 1),
    }
}
