//! Syntax frontend for sable: scanner, token classifier, declaration builder, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by anything that needs to look at the
//! declaration-level shape of a source file (package clause, imports, function signatures).
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not do name resolution, type checking, or lowering.
//! - Vocabulary identity (keywords/operators/punctuation/rune classes) comes from `sable_core::lang` registries.
//! - Both phases fail fast: the first lexical or syntactic problem aborts the call with one structured error.
//!
//! ## Examples
//! ```rust
//! use sable_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("package main\nfunc main() {}\n").unwrap();
//! let file = parser::parse(&tokens).unwrap();
//! assert_eq!(file.package.name, "main");
//! assert_eq!(file.decls.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
