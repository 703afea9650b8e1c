//! Structured errors for the scanner and the declaration builder.
//!
//! Both phases stop at the first problem, so each returns a single error value rather than a list.
//! Every variant carries the byte span of the offending text and a stable diagnostic code, which
//! lets callers render it with `miette` or with their own reporter.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::{ScanState, Token};

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.start..span.end).into()
    }
}

/// A lexical error. Scanning cannot continue past one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LexError {
    #[error("unexpected character {rune:?} while scanning {state}")]
    #[diagnostic(code(sable::lex::unexpected_rune))]
    UnexpectedRune {
        state: ScanState,
        rune: char,
        #[label("not allowed here")]
        span: Span,
    },

    #[error("numeric literal '{literal}' has more than one '.'")]
    #[diagnostic(code(sable::lex::multiple_dots))]
    MultipleDots {
        literal: String,
        #[label("second '.'")]
        span: Span,
    },

    #[error("unterminated {state} literal")]
    #[diagnostic(
        code(sable::lex::unterminated),
        help("add the closing quote before the end of the input")
    )]
    Unterminated {
        state: ScanState,
        #[label("literal starts here")]
        span: Span,
    },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedRune { span, .. }
            | LexError::MultipleDots { span, .. }
            | LexError::Unterminated { span, .. } => *span,
        }
    }
}

/// A syntax error raised by the declaration builder.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    #[error("expected 'package', found '{found}'")]
    #[diagnostic(
        code(sable::parse::expected_package),
        help("every source file starts with a package clause, e.g. `package main`")
    )]
    ExpectedPackage {
        found: String,
        #[label("package clause expected here")]
        span: Span,
    },

    #[error("expected {expected}, found '{found}'")]
    #[diagnostic(code(sable::parse::expected))]
    Expected {
        expected: String,
        found: String,
        #[label("here")]
        span: Span,
    },

    #[error("unexpected identifier: {found}")]
    #[diagnostic(
        code(sable::parse::unexpected_token),
        help("top-level declarations start with `import`, `const`, `var` or `func`")
    )]
    UnexpectedToken {
        found: String,
        #[label("not a declaration")]
        span: Span,
    },

    #[error("{construct} is not supported yet, found '{found}'")]
    #[diagnostic(code(sable::parse::unsupported))]
    Unsupported {
        construct: String,
        found: String,
        #[label("unsupported")]
        span: Span,
    },
}

impl ParseError {
    /// `expected` names what the builder wanted, quoted if it is literal text (`"')'"`).
    pub fn expected(expected: impl Into<String>, found: &Token) -> Self {
        ParseError::Expected {
            expected: expected.into(),
            found: found.describe().to_string(),
            span: found.span,
        }
    }

    pub fn expected_package(found: &Token) -> Self {
        ParseError::ExpectedPackage {
            found: found.describe().to_string(),
            span: found.span,
        }
    }

    pub fn unexpected(found: &Token) -> Self {
        ParseError::UnexpectedToken {
            found: found.describe().to_string(),
            span: found.span,
        }
    }

    pub fn unsupported(construct: impl Into<String>, found: &Token) -> Self {
        ParseError::Unsupported {
            construct: construct.into(),
            found: found.describe().to_string(),
            span: found.span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::ExpectedPackage { span, .. }
            | ParseError::Expected { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::Unsupported { span, .. } => *span,
        }
    }
}
