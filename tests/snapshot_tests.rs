//! Snapshot tests for lexeme streams, token kinds and rendered declaration trees.
//!
//! Multi-line renderings are flattened with ` | ` (indentation dropped) so every snapshot stays on one line.

use sable::lexer;

fn lexeme_line(source: &str) -> String {
    lexer::lexemes(source)
        .expect("source should scan")
        .into_iter()
        .map(|l| l.text)
        .collect::<Vec<_>>()
        .join(" ")
}

fn kind_line(source: &str) -> String {
    lexer::lex(source)
        .expect("source should scan")
        .iter()
        .map(|t| format!("{:?}", t.kind))
        .collect::<Vec<_>>()
        .join(" ")
}

fn rendered(source: &str) -> String {
    let file = sable::parse_source(source).expect("source should build");
    file.to_string().lines().map(str::trim).collect::<Vec<_>>().join(" | ")
}

#[test]
fn lexemes_of_a_small_program() {
    insta::assert_snapshot!(
        lexeme_line("package main\nimport \"fmt\"\nfunc main() { fmt.Println(\"hi\", 1.5) }"),
        @r#"package main import "fmt" func main ( ) { fmt . Println ( "hi" , 1.5 ) }"#
    );
}

#[test]
fn lexemes_of_operators() {
    insta::assert_snapshot!(lexeme_line("a:=b<<=c&^d<-ch"), @"a := b <<= c &^ d <- ch");
}

#[test]
fn token_kinds() {
    insta::assert_snapshot!(
        kind_line("func f(x int) 'c'"),
        @"Keyword(Func) Ident Punctuation(LParen) Ident Ident Punctuation(RParen) Char Eof"
    );
}

#[test]
fn rendered_imports() {
    insta::assert_snapshot!(
        rendered("package main\nimport (\n  f \"fmt\"\n  \"os\"\n)\nimport \"io\""),
        @r#"package main | import ( | f "fmt" | "os" | ) | import "io""#
    );
}

#[test]
fn rendered_functions() {
    insta::assert_snapshot!(
        rendered("package main\nfunc a(){}\nfunc b(x,y int,s string)(int,error){}\nfunc c(n int) (r int) {}"),
        @"package main | func a() {} | func b(x, y int, s string) (int, error) {} | func c(n int) (r int) {}"
    );
}
