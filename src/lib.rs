#![forbid(unsafe_code)]
//! sable: declaration-level front end for a Go-like language
//!
//! Turns source text into classified tokens and builds a declaration tree from them: the package
//! clause, `import`/`const`/`var` groups and function signatures. Expressions, statements and
//! semantic analysis are not part of this crate.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. Scanner and builder failures are
//!   returned as [`FrontendError`], never raised as panics.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a front-end bug (logic error), use `.expect("INVARIANT: reason")` with
//!   a clear explanation.
//!
//! ## Examples
//! ```rust
//! let file = sable::parse_source("package main\nimport \"fmt\"\n").unwrap();
//! assert_eq!(file.package.name, "main");
//!
//! let err = sable::parse_source("package main\nimprot x").unwrap_err();
//! assert_eq!(err.to_string(), "unexpected identifier: improt");
//! ```

pub mod frontend;

pub use frontend::ast;
pub use frontend::config;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;
pub use sable_core::lang;

pub use frontend::{FrontendError, parse_source, parse_source_with, render_diagnostic, render_graphical};
