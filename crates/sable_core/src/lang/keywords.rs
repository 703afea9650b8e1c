//! Define the reserved keyword vocabulary.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings,
//! categories and provenance.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact: `Func` and `func ` are not keywords.
//! - [`KEYWORDS`] is ordered by [`KeywordId`] discriminant, which lets [`info_for`] index directly.
//!
//! ## Examples
//! ```rust
//! use sable_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("import"), Some(KeywordId::Import));
//! assert_eq!(keywords::from_str("improt"), None);
//! assert_eq!(keywords::category(KeywordId::Struct), KeywordCategory::Type);
//! ```

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::registry::{Since, spelling_index};

/// Stable identifier for every reserved keyword.
///
/// ## Notes
/// - The canonical spelling is accessible via [`as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Break,
    Case,
    Chan,
    Const,
    Continue,
    Default,
    Defer,
    Else,
    Fallthrough,
    For,
    Func,
    Go,
    Goto,
    If,
    Import,
    Interface,
    Map,
    Package,
    Range,
    Return,
    Select,
    Struct,
    Switch,
    Type,
    Var,
}

/// High-level grouping for documentation and diagnostics.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Words that introduce a top-level declaration (`package`, `import`, `func`, …).
    Declaration,
    ControlFlow,
    /// Words that build composite types (`struct`, `map`, …).
    Type,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub since: Since,
}

/// Registry of all keywords, in [`KeywordId`] order.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow),
    info(KeywordId::Case, "case", KeywordCategory::ControlFlow),
    info(KeywordId::Chan, "chan", KeywordCategory::Type),
    info(KeywordId::Const, "const", KeywordCategory::Declaration),
    info(KeywordId::Continue, "continue", KeywordCategory::ControlFlow),
    info(KeywordId::Default, "default", KeywordCategory::ControlFlow),
    info(KeywordId::Defer, "defer", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::Fallthrough, "fallthrough", KeywordCategory::ControlFlow),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow),
    info(KeywordId::Func, "func", KeywordCategory::Declaration),
    info(KeywordId::Go, "go", KeywordCategory::ControlFlow),
    info(KeywordId::Goto, "goto", KeywordCategory::ControlFlow),
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Import, "import", KeywordCategory::Declaration),
    info(KeywordId::Interface, "interface", KeywordCategory::Type),
    info(KeywordId::Map, "map", KeywordCategory::Type),
    info(KeywordId::Package, "package", KeywordCategory::Declaration),
    info(KeywordId::Range, "range", KeywordCategory::ControlFlow),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    info(KeywordId::Select, "select", KeywordCategory::ControlFlow),
    info(KeywordId::Struct, "struct", KeywordCategory::Type),
    info(KeywordId::Switch, "switch", KeywordCategory::ControlFlow),
    info(KeywordId::Type, "type", KeywordCategory::Declaration),
    info(KeywordId::Var, "var", KeywordCategory::Declaration),
];

static INDEX: LazyLock<FxHashMap<&'static str, KeywordId>> =
    LazyLock::new(|| spelling_index(KEYWORDS.iter().map(|k| (k.canonical, k.id))));

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The associated [`KeywordInfo`] from [`KEYWORDS`].
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Lookup by spelling.
///
/// ## Parameters
/// - `s`: Candidate keyword spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    INDEX.get(s).copied()
}

/// Return `true` if `s` is a reserved word.
pub fn is_reserved(s: &str) -> bool {
    INDEX.contains_key(s)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        since: Since(0, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_in_discriminant_order() {
        for (i, k) in KEYWORDS.iter().enumerate() {
            assert_eq!(k.id as usize, i, "{:?} is out of order", k.id);
        }
    }

    #[test]
    fn every_keyword_round_trips() {
        assert_eq!(KEYWORDS.len(), 25);
        for k in KEYWORDS {
            assert_eq!(from_str(k.canonical), Some(k.id));
            assert_eq!(as_str(k.id), k.canonical);
            assert!(is_reserved(k.canonical));
        }
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        assert_eq!(from_str("Func"), None);
        assert_eq!(from_str("FUNC"), None);
        assert_eq!(from_str("func "), None);
        assert_eq!(from_str("improt"), None);
        assert_eq!(from_str(""), None);
        assert!(!is_reserved("main"));
    }

    #[test]
    fn declaration_keywords() {
        let decls: Vec<_> = KEYWORDS
            .iter()
            .filter(|k| k.category == KeywordCategory::Declaration)
            .map(|k| k.canonical)
            .collect();
        assert_eq!(decls, ["const", "func", "import", "package", "type", "var"]);
    }
}
