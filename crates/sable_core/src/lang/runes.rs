//! Rune classes.
//!
//! Every character the scanner may encounter belongs to at most one [`RuneClass`]. The predicates below are the
//! building blocks; [`RuneClass::of`] combines them into a single total classification.
//!
//! ## Notes
//! - Classification is ASCII-only. Anything outside the classes (including non-ASCII letters and `;`, `#`, `@`, …)
//!   is *unclassified* and makes the scanner fail outside of string/char literals.
//! - Identifier-continue is not a class of its own: it is `Letter` or `Decimal`.
//!
//! ## Examples
//! ```rust
//! use sable_core::lang::runes::{self, RuneClass};
//!
//! assert_eq!(RuneClass::of('x'), Some(RuneClass::Letter));
//! assert_eq!(RuneClass::of(';'), None);
//! assert!(runes::is_ident_continue('9'));
//! ```

use std::fmt;

/// The lexical class of a single rune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuneClass {
    /// `' '`, `'\t'`, `'\n'`, `'\r'`
    Space,
    /// `0`-`9`
    Decimal,
    /// ASCII letters and `_` (identifier start).
    Letter,
    /// Characters that combine into operators.
    Operator,
    /// Brackets, parentheses and braces.
    Brace,
    /// `"`
    StringQuote,
    /// `'`
    CharQuote,
    /// `.` and `,`
    DotLike,
}

impl RuneClass {
    /// Classify `c`, or return `None` if it belongs to no class.
    pub fn of(c: char) -> Option<RuneClass> {
        if is_space(c) {
            Some(RuneClass::Space)
        } else if is_decimal(c) {
            Some(RuneClass::Decimal)
        } else if is_ident_start(c) {
            Some(RuneClass::Letter)
        } else if is_operator(c) {
            Some(RuneClass::Operator)
        } else if is_brace(c) {
            Some(RuneClass::Brace)
        } else if is_string_quote(c) {
            Some(RuneClass::StringQuote)
        } else if is_char_quote(c) {
            Some(RuneClass::CharQuote)
        } else if is_dot_like(c) {
            Some(RuneClass::DotLike)
        } else {
            None
        }
    }
}

impl fmt::Display for RuneClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuneClass::Space => "whitespace",
            RuneClass::Decimal => "digit",
            RuneClass::Letter => "letter",
            RuneClass::Operator => "operator",
            RuneClass::Brace => "brace",
            RuneClass::StringQuote => "string quote",
            RuneClass::CharQuote => "char quote",
            RuneClass::DotLike => "separator",
        };
        f.write_str(name)
    }
}

pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

pub fn is_decimal(c: char) -> bool {
    c.is_ascii_digit()
}

/// Check if a character can start an identifier (ASCII-only).
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || is_decimal(c)
}

pub fn is_operator(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '%' | '&' | '|' | '~' | '^' | ':' | '=' | '>' | '<' | '!'
    )
}

pub fn is_brace(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | '{' | '}')
}

pub fn is_string_quote(c: char) -> bool {
    c == '"'
}

pub fn is_char_quote(c: char) -> bool {
    c == '\''
}

pub fn is_dot_like(c: char) -> bool {
    matches!(c, '.' | ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREDICATES: &[(RuneClass, fn(char) -> bool)] = &[
        (RuneClass::Space, is_space),
        (RuneClass::Decimal, is_decimal),
        (RuneClass::Letter, is_ident_start),
        (RuneClass::Operator, is_operator),
        (RuneClass::Brace, is_brace),
        (RuneClass::StringQuote, is_string_quote),
        (RuneClass::CharQuote, is_char_quote),
        (RuneClass::DotLike, is_dot_like),
    ];

    #[test]
    fn classes_are_mutually_exclusive() {
        for c in (0u8..=127).map(char::from) {
            let hits: Vec<_> = PREDICATES.iter().filter(|(_, p)| p(c)).map(|(class, _)| *class).collect();
            assert!(hits.len() <= 1, "{c:?} matched several classes: {hits:?}");
            assert_eq!(RuneClass::of(c), hits.first().copied(), "mismatch for {c:?}");
        }
    }

    #[test]
    fn unclassified_runes() {
        for c in [';', '#', '@', '$', '?', '`', '\\', 'é', 'π', '\0'] {
            assert_eq!(RuneClass::of(c), None, "{c:?} should be unclassified");
        }
    }

    #[test]
    fn ident_continue_covers_letters_and_digits() {
        assert!(is_ident_continue('_'));
        assert!(is_ident_continue('Z'));
        assert!(is_ident_continue('0'));
        assert!(!is_ident_start('0'));
        assert!(!is_ident_continue('-'));
    }

    #[test]
    fn every_operator_spelling_is_made_of_operator_runes() {
        use crate::lang::operators::OPERATORS;
        for op in OPERATORS {
            assert!(
                op.spelling.chars().all(is_operator),
                "operator {:?} contains a non-operator rune",
                op.spelling
            );
        }
    }
}
