/// Signature parsing: function types and field lists.
impl<'a> Parser<'a> {
    // ========================================================================
    // Signatures
    // ========================================================================

    /// `(params) results`, where results is `(list)`, a bare type, or nothing before `{`.
    fn func_type(&mut self) -> Result<FuncType, ParseError> {
        self.expect_punct(PunctuationId::LParen, "'('")?;
        let params = self.field_list()?;
        self.expect_punct(PunctuationId::RParen, "')'")?;

        let results = if self.match_punct(PunctuationId::LParen) {
            let results = self.field_list()?;
            self.expect_punct(PunctuationId::RParen, "')'")?;
            results
        } else if self.check_punct(PunctuationId::LBrace) {
            FieldList::default()
        } else if self.peek().is_ident() {
            let ty = self.ident("result type")?;
            FieldList {
                fields: vec![Field::unnamed(ty)],
            }
        } else {
            return Err(ParseError::expected("'{' or result type", self.peek()));
        };
        Ok(FuncType { params, results })
    }

    /// Comma-separated `name [type]` entries, up to (not including) `)`.
    ///
    /// ## Notes
    /// - If no entry has a type, every entry is a type (`(int, error)`).
    /// - Otherwise bare names attach to the next typed entry: `a, b int, c string` is two fields.
    ///   Bare names after the last typed entry are an error.
    fn field_list(&mut self) -> Result<FieldList, ParseError> {
        let mut entries: Vec<(Ident, Option<Ident>)> = Vec::new();
        while !self.check_punct(PunctuationId::RParen) {
            if !entries.is_empty() {
                self.expect_punct(PunctuationId::Comma, "',' or ')'")?;
                // trailing comma
                if self.check_punct(PunctuationId::RParen) {
                    break;
                }
            }
            let name = self.ident("parameter")?;
            let ty = if self.peek().is_ident() {
                Some(self.ident("parameter type")?)
            } else {
                None
            };
            entries.push((name, ty));
        }

        if entries.iter().all(|(_, ty)| ty.is_none()) {
            let fields = entries.into_iter().map(|(ty, _)| Field::unnamed(ty)).collect();
            return Ok(FieldList { fields });
        }

        let mut fields = Vec::new();
        let mut names = Vec::new();
        for (name, ty) in entries {
            names.push(name);
            if let Some(ty) = ty {
                fields.push(Field {
                    names: std::mem::take(&mut names),
                    ty,
                });
            }
        }
        if !names.is_empty() {
            return Err(ParseError::expected("parameter type", self.peek()));
        }
        Ok(FieldList { fields })
    }
}
