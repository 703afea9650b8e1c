/// Miscellaneous parser utilities.
///
/// This chunk contains small shared helpers that don’t cleanly fit into “decl”, “stmts”
/// or “types” (identifier and literal consumption, span bookkeeping).
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    /// Consume an identifier; `what` names it in the error.
    fn ident(&mut self, what: &str) -> Result<Ident, ParseError> {
        let token = self.peek();
        if !token.is_ident() {
            return Err(ParseError::expected(what, token));
        }
        let ident = Ident::new(token.text.clone(), token.span);
        self.advance();
        Ok(ident)
    }

    fn string_literal(&mut self, what: &str) -> Result<BasicLit, ParseError> {
        let token = self.peek();
        if token.kind != TokenKind::String {
            return Err(ParseError::expected(what, token));
        }
        let lit = BasicLit {
            kind: token.kind,
            value: token.text.clone(),
            span: token.span,
        };
        self.advance();
        Ok(lit)
    }

    /// End offset of the last consumed token.
    fn last_end(&self) -> usize {
        self.tokens[..self.pos].last().map_or(0, |token| token.span.end)
    }
}
