//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with basic metadata: a coarse kind
//! (arithmetic, comparison, assignment, …) and the binary precedence level.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact. The scanner glues consecutive operator runes into one
//!   lexeme, so a run like `+-` is simply not found here.
//! - Brackets and separators (`(`, `,`, `:`, `...`) live in [`crate::lang::punctuation`].
//!
//! ## Examples
//! ```rust
//! use sable_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("&^="), Some(OperatorId::AmpCaretEq));
//! assert_eq!(operators::precedence(OperatorId::Star), 5);
//! assert_eq!(operators::precedence(OperatorId::ColonEq), 0);
//! ```

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::registry::{Since, spelling_index};

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Bitwise
    Amp,
    Pipe,
    Caret,
    Tilde,
    Shl,
    Shr,
    AmpCaret,

    // Compound assignment
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    AmpEq,
    PipeEq,
    CaretEq,
    ShlEq,
    ShrEq,
    AmpCaretEq,

    // Logical
    AmpAmp,
    PipePipe,
    Bang,

    // Channel / increment
    Arrow,
    PlusPlus,
    MinusMinus,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Assignment
    Eq,
    ColonEq,
}

/// Coarse operator grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Arithmetic,
    Bitwise,
    Shift,
    Assignment,
    Logical,
    Comparison,
    /// `<-`, `++`, `--`
    Other,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `precedence` is the binary precedence level, 1 (loosest, `||`) through 5 (tightest, `*`).
///   Operators that never appear in binary position have precedence 0.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub kind: OperatorKind,
    pub precedence: u8,
    pub since: Since,
}

/// Registry of all operators, in [`OperatorId`] order.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", OperatorKind::Arithmetic, 4),
    op(OperatorId::Minus, "-", OperatorKind::Arithmetic, 4),
    op(OperatorId::Star, "*", OperatorKind::Arithmetic, 5),
    op(OperatorId::Slash, "/", OperatorKind::Arithmetic, 5),
    op(OperatorId::Percent, "%", OperatorKind::Arithmetic, 5),
    // Bitwise
    op(OperatorId::Amp, "&", OperatorKind::Bitwise, 5),
    op(OperatorId::Pipe, "|", OperatorKind::Bitwise, 4),
    op(OperatorId::Caret, "^", OperatorKind::Bitwise, 4),
    op(OperatorId::Tilde, "~", OperatorKind::Bitwise, 0),
    op(OperatorId::Shl, "<<", OperatorKind::Shift, 5),
    op(OperatorId::Shr, ">>", OperatorKind::Shift, 5),
    op(OperatorId::AmpCaret, "&^", OperatorKind::Bitwise, 5),
    // Compound assignment
    op(OperatorId::PlusEq, "+=", OperatorKind::Assignment, 0),
    op(OperatorId::MinusEq, "-=", OperatorKind::Assignment, 0),
    op(OperatorId::StarEq, "*=", OperatorKind::Assignment, 0),
    op(OperatorId::SlashEq, "/=", OperatorKind::Assignment, 0),
    op(OperatorId::PercentEq, "%=", OperatorKind::Assignment, 0),
    op(OperatorId::AmpEq, "&=", OperatorKind::Assignment, 0),
    op(OperatorId::PipeEq, "|=", OperatorKind::Assignment, 0),
    op(OperatorId::CaretEq, "^=", OperatorKind::Assignment, 0),
    op(OperatorId::ShlEq, "<<=", OperatorKind::Assignment, 0),
    op(OperatorId::ShrEq, ">>=", OperatorKind::Assignment, 0),
    op(OperatorId::AmpCaretEq, "&^=", OperatorKind::Assignment, 0),
    // Logical
    op(OperatorId::AmpAmp, "&&", OperatorKind::Logical, 2),
    op(OperatorId::PipePipe, "||", OperatorKind::Logical, 1),
    op(OperatorId::Bang, "!", OperatorKind::Logical, 0),
    // Channel / increment
    op(OperatorId::Arrow, "<-", OperatorKind::Other, 0),
    op(OperatorId::PlusPlus, "++", OperatorKind::Other, 0),
    op(OperatorId::MinusMinus, "--", OperatorKind::Other, 0),
    // Comparison
    op(OperatorId::EqEq, "==", OperatorKind::Comparison, 3),
    op(OperatorId::NotEq, "!=", OperatorKind::Comparison, 3),
    op(OperatorId::Lt, "<", OperatorKind::Comparison, 3),
    op(OperatorId::LtEq, "<=", OperatorKind::Comparison, 3),
    op(OperatorId::Gt, ">", OperatorKind::Comparison, 3),
    op(OperatorId::GtEq, ">=", OperatorKind::Comparison, 3),
    // Assignment
    op(OperatorId::Eq, "=", OperatorKind::Assignment, 0),
    op(OperatorId::ColonEq, ":=", OperatorKind::Assignment, 0),
];

static INDEX: LazyLock<FxHashMap<&'static str, OperatorId>> =
    LazyLock::new(|| spelling_index(OPERATORS.iter().map(|o| (o.spelling, o.id))));

/// Return the full metadata entry for an operator.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    &OPERATORS[id as usize]
}

/// Return the canonical spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

pub fn kind(id: OperatorId) -> OperatorKind {
    info_for(id).kind
}

/// Binary precedence level (0 when the operator is not binary).
pub fn precedence(id: OperatorId) -> u8 {
    info_for(id).precedence
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    INDEX.get(spelling).copied()
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str, kind: OperatorKind, precedence: u8) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        kind,
        precedence,
        since: Since(0, 1),
    }
}
