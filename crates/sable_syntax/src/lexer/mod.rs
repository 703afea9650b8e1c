//! Scanner for sable source text
//!
//! Splits the source into lexemes with a small table-driven state machine, then classifies each
//! lexeme into a [`Token`]:
//! - Identifiers and keywords
//! - Integer and float literals (digits with at most one `.`)
//! - String (`"..."`) and char (`'...'`) literals
//! - Runs of operator characters, braces, and `.`/`,`
//!
//! ## Module Structure
//!
//! - `state` - Scanner states and the after-transition table
//! - `tokens` - Lexeme and token types, and the classifier

mod state;
pub mod tokens;

pub use state::{ScanState, Transitions};
pub use tokens::{Lexeme, Token, TokenKind, classify, is_identifier, keyword_id};

use std::str::CharIndices;

use crate::ast::Span;
use crate::config::{DotPolicy, ScanConfig};
use crate::diagnostics::LexError;
use sable_core::lang::runes::{self, RuneClass};

// ============================================================================
// SCANNER STATE
// ----------------------------------------------------------------------------
// Scanner state diagram (simplified):
//
//            letter → [Identifier] ── space/opr/brace/dot ─┐
//  [Space] ─ digit  → [Number]     ── space/opr/brace ─────┤→ flush, next lexeme
//            opr    → [Operator]   ── space/quote/letter/brace ┘
//            quote  → [String/Char] ── closing quote → flush → [Space]
//            brace/dot → [Brace/DotLike] → flush (no input consumed) → [Space]
// ============================================================================

/// Scanner over a single source buffer.
///
/// Each call to [`Scanner::advance`] returns the next lexeme. Once the input is exhausted it keeps
/// returning the empty end sentinel ([`Lexeme::is_end`]). The first error is terminal: every later
/// call returns the same error.
pub struct Scanner<'a> {
    source: &'a str,
    chars: CharIndices<'a>,
    config: ScanConfig,
    state: ScanState,
    /// Lexeme under construction and its byte range.
    cur: String,
    cur_start: usize,
    cur_end: usize,
    /// Dots seen in the current numeric literal.
    dots: usize,
    failed: Option<LexError>,
    /// Set once the iterator has yielded its last item.
    fused: bool,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, ScanConfig::default())
    }

    pub fn with_config(source: &'a str, config: ScanConfig) -> Self {
        Self {
            source,
            chars: source.char_indices(),
            config,
            state: ScanState::Space,
            cur: String::new(),
            cur_start: 0,
            cur_end: 0,
            dots: 0,
            failed: None,
            fused: false,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Return the next lexeme, or the end sentinel once the input is exhausted.
    ///
    /// ## Errors
    /// - [`LexError::UnexpectedRune`] when a rune is not allowed in the current state.
    /// - [`LexError::MultipleDots`] for a second `.` in a number (strict dot policy only).
    /// - [`LexError::Unterminated`] when the input ends inside a string or char literal.
    pub fn advance(&mut self) -> Result<Lexeme, LexError> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }
        match self.scan() {
            Ok(lexeme) => {
                tracing::trace!(text = %lexeme.text, start = lexeme.span.start, "lexeme");
                Ok(lexeme)
            }
            Err(err) => {
                self.failed = Some(err.clone());
                Err(err)
            }
        }
    }

    fn scan(&mut self) -> Result<Lexeme, LexError> {
        loop {
            // Single-rune states flush before reading further.
            if matches!(self.state, ScanState::Brace | ScanState::DotLike) {
                self.state = ScanState::Space;
                if let Some(lexeme) = self.flush() {
                    return Ok(lexeme);
                }
                continue;
            }
            let Some((pos, c)) = self.chars.next() else {
                return self.finish();
            };
            if let Some(lexeme) = self.step(pos, c)? {
                return Ok(lexeme);
            }
        }
    }

    fn step(&mut self, pos: usize, c: char) -> Result<Option<Lexeme>, LexError> {
        match self.state {
            // Brace/DotLike are flushed in `scan` and behave like Space here.
            ScanState::Space | ScanState::Brace | ScanState::DotLike if runes::is_space(c) => Ok(None),
            ScanState::Space | ScanState::Brace | ScanState::DotLike => {
                self.after(pos, c, ScanState::Space.after())
            }
            ScanState::Identifier if runes::is_ident_continue(c) => {
                self.push(pos, c);
                Ok(None)
            }
            ScanState::Operator if runes::is_operator(c) => {
                self.push(pos, c);
                Ok(None)
            }
            ScanState::Number if runes::is_decimal(c) => {
                self.push(pos, c);
                Ok(None)
            }
            ScanState::Number if c == '.' => {
                self.dots += 1;
                if self.dots > 1 && self.config.dot_policy == DotPolicy::Single {
                    return Err(LexError::MultipleDots {
                        literal: format!("{}.", self.cur),
                        span: Span::new(pos, pos + 1),
                    });
                }
                self.push(pos, c);
                Ok(None)
            }
            ScanState::String | ScanState::Char => {
                self.push(pos, c);
                let closing = match self.state {
                    ScanState::String => runes::is_string_quote(c),
                    _ => runes::is_char_quote(c),
                };
                if closing {
                    self.state = ScanState::Space;
                    return Ok(self.flush());
                }
                Ok(None)
            }
            state => self.after(pos, c, state.after()),
        }
    }

    /// Try to leave the current state on `c`.
    ///
    /// Flushes the current lexeme and starts a new one seeded with `c`; whitespace is dropped.
    fn after(&mut self, pos: usize, c: char, allowed: Transitions) -> Result<Option<Lexeme>, LexError> {
        let class = self.class_of(c).filter(|class| allowed.contains(Transitions::for_class(*class)));
        let Some(class) = class else {
            return Err(LexError::UnexpectedRune {
                state: self.state,
                rune: c,
                span: Span::new(pos, pos + c.len_utf8()),
            });
        };
        let lexeme = self.flush();
        self.state = ScanState::entered_by(class);
        if class != RuneClass::Space {
            self.cur_start = pos;
            self.push(pos, c);
            if class == RuneClass::Decimal {
                self.dots = 0;
            }
        }
        Ok(lexeme)
    }

    fn class_of(&self, c: char) -> Option<RuneClass> {
        match RuneClass::of(c) {
            Some(RuneClass::CharQuote) if !self.config.char_literals => None,
            class => class,
        }
    }

    fn finish(&mut self) -> Result<Lexeme, LexError> {
        if self.state.is_literal() {
            return Err(LexError::Unterminated {
                state: self.state,
                span: Span::new(self.cur_start, self.cur_end),
            });
        }
        self.state = ScanState::Space;
        Ok(self.flush().unwrap_or_else(|| Lexeme::end(self.source.len())))
    }

    fn push(&mut self, pos: usize, c: char) {
        self.cur.push(c);
        self.cur_end = pos + c.len_utf8();
    }

    fn flush(&mut self) -> Option<Lexeme> {
        if self.cur.is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.cur);
        Some(Lexeme::new(text, Span::new(self.cur_start, self.cur_end)))
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Lexeme, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        match self.advance() {
            Ok(lexeme) if lexeme.is_end() => {
                self.fused = true;
                None
            }
            Ok(lexeme) => Some(Ok(lexeme)),
            Err(err) => {
                self.fused = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// Scan `source` into raw lexemes, without classification.
pub fn lexemes(source: &str) -> Result<Vec<Lexeme>, LexError> {
    Scanner::new(source).collect()
}

/// Scan and classify `source` with the default configuration.
///
/// The returned vector always ends with an `Eof` token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    lex_with(source, &ScanConfig::default())
}

/// Scan and classify `source` with an explicit configuration.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex_with(source: &str, config: &ScanConfig) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::with_config(source, *config);
    let mut tokens = Vec::new();
    loop {
        let lexeme = scanner.advance().inspect_err(|err| {
            tracing::debug!(error = %err, "scan failed");
        })?;
        if lexeme.is_end() {
            tokens.push(Token::eof(lexeme.span.start));
            return Ok(tokens);
        }
        tokens.push(Token::from_lexeme(lexeme));
    }
}

// ============================================================================
// TESTS
// ============================================================================
