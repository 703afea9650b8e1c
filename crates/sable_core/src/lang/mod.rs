//! Language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: rune classes, reserved keywords,
//! operators and punctuation.
//!
//! The design goal is to avoid stringly-typed checks scattered across the scanner and builder.
//! Instead, callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up
//! spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The scanner/builder enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   classification, docs).
//!
//! ## Examples
//! ```rust
//! use sable_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("func"), Some(KeywordId::Func));
//! assert_eq!(keywords::as_str(KeywordId::Func), "func");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
pub mod runes;
