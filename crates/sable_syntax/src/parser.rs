//! Declaration builder for sable
//!
//! Consumes a classified token stream and builds the declaration-level [`File`] tree: the package
//! clause, `import`/`const`/`var` declarations (single or grouped) and function declarations with
//! their parameter and result lists.
//!
//! ## Examples
//!
//! ```rust
//! use sable_syntax::{lexer, parser};
//!
//! let source = "package main\nimport \"fmt\"\nfunc f(a, b int) int {}\n";
//! let tokens = lexer::lex(source).unwrap();
//! let file = parser::parse(&tokens).unwrap();
//! assert_eq!(file.decls.len(), 2);
//! ```

use crate::ast::*;
use crate::diagnostics::ParseError;
use crate::lexer::{Token, TokenKind};
use sable_core::lang::keywords::{self, KeywordId};
use sable_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
