//! Scanner states and the "after" transition table.
//!
//! ## Notes
//! - A state either accumulates the rune it is looking at or hands it to one of its *after* transitions, which
//!   flush the current lexeme and start the next one. [`ScanState::after`] is that table.
//! - `String`/`Char` never take after-transitions: they only end on their closing quote.
//! - `Brace`/`DotLike` hold exactly one rune and are flushed before the next rune is read.

use std::fmt;

use bitflags::bitflags;
use sable_core::lang::runes::RuneClass;

/// Current mode of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanState {
    /// Between lexemes.
    #[default]
    Space,
    Number,
    Char,
    String,
    Identifier,
    Operator,
    Brace,
    DotLike,
}

bitflags! {
    /// Set of states a scanner may move to when the current state cannot absorb a rune.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Transitions: u8 {
        const SPACE = 1 << 0;
        const NUMBER = 1 << 1;
        const CHAR = 1 << 2;
        const STRING = 1 << 3;
        const IDENTIFIER = 1 << 4;
        const OPERATOR = 1 << 5;
        const BRACE = 1 << 6;
        const DOT_LIKE = 1 << 7;
    }
}

impl Transitions {
    /// The flag for the state a rune of class `class` starts.
    pub fn for_class(class: RuneClass) -> Transitions {
        match class {
            RuneClass::Space => Transitions::SPACE,
            RuneClass::Decimal => Transitions::NUMBER,
            RuneClass::Letter => Transitions::IDENTIFIER,
            RuneClass::Operator => Transitions::OPERATOR,
            RuneClass::Brace => Transitions::BRACE,
            RuneClass::StringQuote => Transitions::STRING,
            RuneClass::CharQuote => Transitions::CHAR,
            RuneClass::DotLike => Transitions::DOT_LIKE,
        }
    }
}

impl ScanState {
    /// The state entered by a rune of class `class`.
    pub fn entered_by(class: RuneClass) -> ScanState {
        match class {
            RuneClass::Space => ScanState::Space,
            RuneClass::Decimal => ScanState::Number,
            RuneClass::Letter => ScanState::Identifier,
            RuneClass::Operator => ScanState::Operator,
            RuneClass::Brace => ScanState::Brace,
            RuneClass::StringQuote => ScanState::String,
            RuneClass::CharQuote => ScanState::Char,
            RuneClass::DotLike => ScanState::DotLike,
        }
    }

    /// After-transitions enabled in this state.
    ///
    /// Whitespace read in `Space`, `Brace` or `DotLike` is skipped and never looked up here.
    pub fn after(self) -> Transitions {
        match self {
            ScanState::Space | ScanState::Brace | ScanState::DotLike => Transitions::all().difference(Transitions::SPACE),
            ScanState::Identifier => {
                Transitions::SPACE | Transitions::OPERATOR | Transitions::BRACE | Transitions::DOT_LIKE
            }
            ScanState::Operator => {
                Transitions::SPACE | Transitions::CHAR | Transitions::STRING | Transitions::IDENTIFIER | Transitions::BRACE
            }
            ScanState::Number => Transitions::SPACE | Transitions::OPERATOR | Transitions::BRACE,
            ScanState::String | ScanState::Char => Transitions::empty(),
        }
    }

    /// Whether the scanner is inside a quoted literal.
    pub fn is_literal(self) -> bool {
        matches!(self, ScanState::String | ScanState::Char)
    }
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScanState::Space => "whitespace",
            ScanState::Number => "number",
            ScanState::Char => "char",
            ScanState::String => "string",
            ScanState::Identifier => "identifier",
            ScanState::Operator => "operator",
            ScanState::Brace => "brace",
            ScanState::DotLike => "separator",
        };
        f.write_str(name)
    }
}
