/// Statement parsing.
///
/// Only the block skeleton exists: braces are matched, and any statement inside them is
/// reported as unsupported.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn block_stmt(&mut self) -> Result<BlockStmt, ParseError> {
        self.expect_punct(PunctuationId::LBrace, "'{'")?;
        if self.is_at_end() {
            return Err(ParseError::expected("'}'", self.peek()));
        }
        if !self.check_punct(PunctuationId::RBrace) {
            return Err(ParseError::unsupported("statement", self.peek()));
        }
        self.advance();
        Ok(BlockStmt::default())
    }
}
