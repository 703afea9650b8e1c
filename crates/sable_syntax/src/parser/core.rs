// Parser core type and the file-level entrypoint.
//
// This chunk defines the [`Parser`] type, its constructor and `build_file()`.
//
// ## Notes
// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
//   single module while avoiding a single “god file”.

/// Builder state over a classified token stream.
///
/// ## Notes
/// - The builder is single-pass and fails fast: the first unmet expectation is returned as a
///   [`ParseError`] and no partial tree is produced.
/// - Reading past the end of the stream keeps yielding an `Eof` token, so a stream without a
///   trailing `Eof` is handled the same as one with it.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    eof: Token,
}

impl<'a> Parser<'a> {
    /// Create a new builder for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `sable_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof = tokens.last().map_or_else(|| Token::eof(0), |last| Token::eof(last.span.end));
        Self { tokens, pos: 0, eof }
    }

    /// Index of the next unconsumed token.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Build a whole source file: `package <name>` followed by declarations up to `Eof`.
    ///
    /// ## Errors
    /// - [`ParseError::ExpectedPackage`] if the first token is not `package`.
    /// - Any error from [`Parser::build_decl`].
    pub fn build_file(&mut self) -> Result<File, ParseError> {
        if !self.check_keyword(KeywordId::Package) {
            return Err(ParseError::expected_package(self.peek()));
        }
        self.advance();
        let package = self.ident("package name")?;

        let mut decls = Vec::new();
        while !self.is_at_end() {
            decls.push(self.build_decl()?);
        }
        Ok(File { package, decls })
    }
}
