/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout the builder:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords and punctuation
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return the current token without consuming it.
    pub fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// Consume the current token and return it.
    ///
    /// ## Notes
    /// - `Eof` is never consumed; advancing at the end returns it again.
    pub fn advance(&mut self) -> &Token {
        let tokens = self.tokens;
        match tokens.get(self.pos) {
            Some(token) if !token.is_eof() => {
                self.pos += 1;
                tracing::trace!(text = %token.text, pos = self.pos, "advance");
                token
            }
            _ => self.peek(),
        }
    }

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the given punctuation or fail with `expected` naming it.
    fn expect_punct(&mut self, id: PunctuationId, expected: &str) -> Result<&Token, ParseError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(ParseError::expected(expected, self.peek()))
        }
    }
}
