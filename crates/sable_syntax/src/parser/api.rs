/// Build a [`File`] from a token stream.
///
/// This is the main public entrypoint for the builder.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `sable_syntax::lexer`.
///
/// ## Errors
/// Returns the first [`ParseError`] encountered.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<File, ParseError> {
    Parser::new(tokens).build_file().inspect_err(|err| {
        tracing::debug!(error = %err, "parse failed");
    })
}
