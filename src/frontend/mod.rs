//! sable front end
//!
//! This module ties the syntax crate together for callers that start from source text:
//! - `lexer`: scanning and token classification
//! - `parser`: building the declaration tree from tokens
//! - `ast`: declaration tree definitions
//! - `config`: scanner options
//! - `diagnostics`: structured scan/build errors
//! - `report`: rendering an error against its source

// Syntax components are provided by the sable_syntax crate.
pub use sable_syntax::{ast, config, diagnostics, lexer, parser};

pub mod report;

pub use report::{render_diagnostic, render_graphical};

use miette::Diagnostic;
use thiserror::Error;

use sable_syntax::ast::{File, Span};
use sable_syntax::config::ScanConfig;
use sable_syntax::diagnostics::{LexError, ParseError};

/// Any failure on the way from source text to a [`File`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum FrontendError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

impl FrontendError {
    pub fn span(&self) -> Span {
        match self {
            FrontendError::Lex(err) => err.span(),
            FrontendError::Parse(err) => err.span(),
        }
    }
}

/// Scan and build `source` with the default scanner configuration.
///
/// ## Errors
/// - [`FrontendError::Lex`] for the first lexical error.
/// - [`FrontendError::Parse`] for the first syntax error.
pub fn parse_source(source: &str) -> Result<File, FrontendError> {
    parse_source_with(source, &ScanConfig::default())
}

#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_source_with(source: &str, config: &ScanConfig) -> Result<File, FrontendError> {
    let tokens = lexer::lex_with(source, config)?;
    let file = parser::parse(&tokens)?;
    tracing::debug!(decls = file.decls.len(), package = %file.package, "source built");
    Ok(file)
}
