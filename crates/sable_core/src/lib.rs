//! Provide the canonical language vocabulary shared by the sable scanner, token classifier and builder.
//!
//! This crate is intentionally small and dependency-light. It answers two kinds of questions:
//! - "which class does this rune belong to?" ([`lang::runes`]), and
//! - "is this spelling reserved, and what is it?" ([`lang::keywords`], [`lang::operators`], [`lang::punctuation`]).
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no mutable global state, and no syntax-tree types.
//! - Spelling lookups go through hash indexes that are built once on first use, so classification of a lexeme is
//!   O(1) regardless of table size.

#![forbid(unsafe_code)]

pub mod lang;
