#[cfg(test)]
/// Builder unit tests.
///
/// These tests focus on the grouping rules (grouped declarations, multi-name fields) and on the
/// exact error each malformed form produces.
mod tests {
    use super::*;
    use crate::lexer;

    fn parse_str(source: &str) -> Result<File, ParseError> {
        let tokens = lexer::lex(source).expect("test source should scan");
        parse(&tokens)
    }

    fn only_func(file: &File) -> &FuncDecl {
        match file.decls.as_slice() {
            [Spanned { node: Decl::Func(func), .. }] => func,
            other => panic!("expected a single function, got {other:?}"),
        }
    }

    fn names(field: &Field) -> Vec<&str> {
        field.names.iter().map(|n| n.name.as_str()).collect()
    }

    #[test]
    fn test_package_only() {
        let file = parse_str("package main").unwrap();
        assert_eq!(file.package.name, "main");
        assert_eq!(file.package.span, Span::new(8, 12));
        assert!(file.decls.is_empty());
    }

    #[test]
    fn test_import_and_function() {
        let file = parse_str("package main\nimport \"fmt\"\nfunc f(a, b int) int { }").unwrap();
        assert_eq!(file.decls.len(), 2);

        let Decl::Gen(import) = &file.decls[0].node else {
            panic!("expected import, got {:?}", file.decls[0].node);
        };
        assert_eq!(import.keyword, KeywordId::Import);
        assert!(!import.grouped);
        let [Spec::Import(spec)] = import.specs.as_slice() else {
            panic!("expected one import spec");
        };
        assert_eq!(spec.path.value, "\"fmt\"");
        assert_eq!(spec.path.unquoted(), "fmt");
        assert_eq!(file.decls[0].span, Span::new(13, 25));

        let Decl::Func(func) = &file.decls[1].node else {
            panic!("expected function");
        };
        assert_eq!(func.name.name, "f");
        assert_eq!(func.ty.params.fields.len(), 1);
        assert_eq!(names(&func.ty.params.fields[0]), ["a", "b"]);
        assert_eq!(func.ty.params.fields[0].ty.name, "int");
        assert_eq!(func.ty.results.fields.len(), 1);
        assert!(func.ty.results.fields[0].names.is_empty());
        assert_eq!(func.ty.results.fields[0].ty.name, "int");
    }

    #[test]
    fn test_grouped_import_consumes_closing_paren() {
        let tokens = lexer::lex("import (\"a\"\n\"b\")").unwrap();
        let mut parser = Parser::new(&tokens);
        let decl = parser.build_decl().unwrap();
        let Decl::Gen(gen_decl) = decl.node else {
            panic!("expected general declaration");
        };
        assert!(gen_decl.grouped);
        assert_eq!(gen_decl.specs.len(), 2);
        assert_eq!(parser.position(), tokens.len() - 1);
        assert!(parser.peek().is_eof());
    }

    #[test]
    fn test_import_names() {
        let file = parse_str("package p\nimport (f \"fmt\"\n. \"math\"\n_ \"os\")").unwrap();
        let Decl::Gen(gen_decl) = &file.decls[0].node else {
            panic!("expected import");
        };
        let aliases: Vec<_> = gen_decl
            .specs
            .iter()
            .map(|Spec::Import(spec)| spec.name.as_ref().map(|n| n.name.as_str()))
            .collect();
        assert_eq!(aliases, [Some("f"), Some("."), Some("_")]);
    }

    #[test]
    fn test_misspelled_keyword() {
        let tokens = lexer::lex("improt x").unwrap();
        let err = Parser::new(&tokens).build_decl().unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref found, .. } if found == "improt"));
        assert_eq!(err.to_string(), "unexpected identifier: improt");
    }

    #[test]
    fn test_missing_package_clause() {
        let err = parse_str("func main() {}").unwrap_err();
        assert_eq!(err.to_string(), "expected 'package', found 'func'");
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.to_string(), "expected 'package', found 'end of input'");
    }

    #[test]
    fn test_unnamed_parameters_and_results() {
        let file = parse_str("package p\nfunc f(int, string) (int, error) {}").unwrap();
        let func = only_func(&file);
        let params: Vec<_> = func.ty.params.fields.iter().map(|f| f.ty.name.as_str()).collect();
        assert_eq!(params, ["int", "string"]);
        assert!(func.ty.params.fields.iter().all(|f| f.names.is_empty()));
        assert_eq!(func.ty.results.fields.len(), 2);
    }

    #[test]
    fn test_named_groups() {
        let file = parse_str("package p\nfunc f(a, b int, c string) (n int, err error) {}").unwrap();
        let func = only_func(&file);
        let params = &func.ty.params.fields;
        assert_eq!(params.len(), 2);
        assert_eq!(names(&params[0]), ["a", "b"]);
        assert_eq!(names(&params[1]), ["c"]);
        assert_eq!(params[1].ty.name, "string");
        assert_eq!(names(&func.ty.results.fields[1]), ["err"]);
    }

    #[test]
    fn test_no_params_no_results() {
        let file = parse_str("package p\nfunc main() {}").unwrap();
        let func = only_func(&file);
        assert!(func.ty.params.is_empty());
        assert!(func.ty.results.is_empty());
        assert!(func.body.stmts.is_empty());
    }

    #[test]
    fn test_trailing_comma() {
        let file = parse_str("package p\nfunc f(a int,) {}").unwrap();
        assert_eq!(only_func(&file).ty.params.fields.len(), 1);
    }

    #[test]
    fn test_dangling_names_need_a_type() {
        let err = parse_str("package p\nfunc f(a int, b) {}").unwrap_err();
        assert!(
            matches!(err, ParseError::Expected { ref expected, ref found, .. } if expected == "parameter type" && found == ")"),
            "{err:?}"
        );
    }

    #[test]
    fn test_bad_result() {
        let err = parse_str("package p\nfunc f() \"x\" {}").unwrap_err();
        assert_eq!(err.to_string(), "expected '{' or result type, found '\"x\"'");
    }

    #[test]
    fn test_unclosed_group() {
        let err = parse_str("package p\nimport (\"a\"").unwrap_err();
        assert!(matches!(err, ParseError::Expected { ref expected, .. } if expected == "')'"));
        assert_eq!(err.to_string(), "expected ')', found 'end of input'");
    }

    #[test]
    fn test_import_needs_path() {
        let err = parse_str("package p\nimport x y").unwrap_err();
        assert_eq!(err.to_string(), "expected import path, found 'y'");
    }

    #[test]
    fn test_const_and_var_bodies_are_unsupported() {
        let err = parse_str("package p\nconst x = 1").unwrap_err();
        assert!(
            matches!(err, ParseError::Unsupported { ref construct, ref found, .. } if construct == "const declaration body" && found == "x")
        );
        let err = parse_str("package p\nvar (x int)").unwrap_err();
        assert!(matches!(err, ParseError::Unsupported { ref construct, .. } if construct == "var declaration body"));
    }

    #[test]
    fn test_empty_groups() {
        let file = parse_str("package p\nconst ()\nvar ()\nimport ()").unwrap();
        let keywords: Vec<_> = file.decls.iter().map(|d| d.node.keyword()).collect();
        assert_eq!(keywords, [KeywordId::Const, KeywordId::Var, KeywordId::Import]);
        for decl in &file.decls {
            let Decl::Gen(gen_decl) = &decl.node else {
                panic!("expected general declaration");
            };
            assert!(gen_decl.grouped && gen_decl.specs.is_empty());
        }
    }

    #[test]
    fn test_statements_are_unsupported() {
        let err = parse_str("package p\nfunc f() { x }").unwrap_err();
        assert!(matches!(err, ParseError::Unsupported { ref construct, ref found, .. } if construct == "statement" && found == "x"));
    }

    #[test]
    fn test_unclosed_block() {
        let err = parse_str("package p\nfunc f() {").unwrap_err();
        assert_eq!(err.to_string(), "expected '}', found 'end of input'");
    }

    #[test]
    fn test_advance_stops_at_eof() {
        let tokens = lexer::lex("package").unwrap();
        let mut parser = Parser::new(&tokens);
        assert!(parser.advance().kind.is_keyword(KeywordId::Package));
        assert!(parser.advance().is_eof());
        assert!(parser.advance().is_eof());
        assert_eq!(parser.position(), 1);
    }

    #[test]
    fn test_stream_without_eof() {
        let tokens = lexer::lex("package main").unwrap();
        let without_eof = &tokens[..tokens.len() - 1];
        let file = parse(without_eof).unwrap();
        assert_eq!(file.package.name, "main");
    }

    #[test]
    fn test_error_messages_snapshot() {
        let messages: Vec<String> = [
            "main",
            "package 1",
            "package p\nfunc (",
            "package p\nfunc f(a b c) {}",
            "package p\nimport (f)",
        ]
        .iter()
        .map(|source| parse_str(source).unwrap_err().to_string())
        .collect();
        insta::assert_snapshot!(
            messages.join(" / "),
            @"expected 'package', found 'main' / expected package name, found '1' / expected function name, found '(' / expected ',' or ')', found 'c' / expected import path, found ')'"
        );
    }

    #[test]
    fn test_rendering_rebuilds_the_same_tree() {
        let source = "package p\nimport (f \"fmt\"\n\"os\")\nfunc f(a, b int, c string) (n int, err error) {}\nfunc g() int {}";
        let file = parse_str(source).unwrap();
        let rendered = file.to_string();
        let again = parse_str(&rendered).unwrap();
        assert_eq!(again.to_string(), rendered);
        assert_eq!(again.decls.len(), file.decls.len());
    }
}
