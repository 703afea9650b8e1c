/// Declaration parsing methods.
///
/// This chunk is responsible for parsing top-level declarations: general declarations
/// (`import`, `const`, `var`) in their single and grouped forms, and function declarations.
///
/// ## Notes
/// - `build_decl` returns a [`Spanned<Decl>`] covering the keyword through the last consumed token.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// Build one top-level declaration.
    ///
    /// ## Errors
    /// - [`ParseError::UnexpectedToken`] if the current token does not start a declaration.
    pub fn build_decl(&mut self) -> Result<Spanned<Decl>, ParseError> {
        let start = self.peek().span.start;
        let decl = match self.peek().keyword_id() {
            Some(keyword @ (KeywordId::Import | KeywordId::Const | KeywordId::Var)) => {
                Decl::Gen(self.gen_decl(keyword)?)
            }
            Some(KeywordId::Func) => Decl::Func(self.func_decl()?),
            _ if self.is_at_end() => return Err(ParseError::expected("declaration", self.peek())),
            _ => return Err(ParseError::unexpected(self.peek())),
        };
        let span = Span::new(start, self.last_end());
        tracing::debug!(
            keyword = keywords::as_str(decl.keyword()),
            start = span.start,
            end = span.end,
            "declaration built"
        );
        Ok(Spanned::new(decl, span))
    }

    /// `import "a"` or `import ( "a" "b" )`; same shapes for `const` and `var`.
    fn gen_decl(&mut self, keyword: KeywordId) -> Result<GenDecl, ParseError> {
        self.advance();
        if !self.match_punct(PunctuationId::LParen) {
            let spec = self.spec(keyword)?;
            return Ok(GenDecl {
                keyword,
                grouped: false,
                specs: vec![spec],
            });
        }

        let mut specs = Vec::new();
        while !self.match_punct(PunctuationId::RParen) {
            if self.is_at_end() {
                return Err(ParseError::expected("')'", self.peek()));
            }
            specs.push(self.spec(keyword)?);
        }
        Ok(GenDecl {
            keyword,
            grouped: true,
            specs,
        })
    }

    fn spec(&mut self, keyword: KeywordId) -> Result<Spec, ParseError> {
        match keyword {
            KeywordId::Import => Ok(Spec::Import(self.import_spec()?)),
            _ => Err(ParseError::unsupported(
                format!("{} declaration body", keywords::as_str(keyword)),
                self.peek(),
            )),
        }
    }

    /// `[name | "."] "path"`
    fn import_spec(&mut self) -> Result<ImportSpec, ParseError> {
        let name = if self.peek().is_ident() {
            Some(self.ident("import name")?)
        } else if self.check_punct(PunctuationId::Dot) {
            let span = self.advance().span;
            Some(Ident::new(".", span))
        } else {
            None
        };
        let path = self.string_literal("import path")?;
        Ok(ImportSpec { name, path })
    }

    /// `func name(params) results { }`
    fn func_decl(&mut self) -> Result<FuncDecl, ParseError> {
        self.advance();
        let name = self.ident("function name")?;
        let ty = self.func_type()?;
        let body = self.block_stmt()?;
        Ok(FuncDecl { name, ty, body })
    }
}
