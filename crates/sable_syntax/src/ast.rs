//! Abstract Syntax Tree definitions for the declaration level.
//!
//! The tree covers what the builder understands today: the package clause, `import`/`const`/`var`
//! groups and function declarations with their parameter and result lists. Every node is owned
//! by its parent; there are no shared or back references.
//!
//! The `Display` impls render a node back to compact source text that scans and builds to the
//! same tree.

use std::fmt;

use sable_core::lang::keywords::{self, KeywordId};

use crate::lexer::TokenKind;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Root of the tree: one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub package: Ident,
    pub decls: Vec<Spanned<Decl>>,
}

/// Top-level declarations
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    /// `import`, `const` or `var`
    Gen(GenDecl),
    Func(FuncDecl),
}

impl Decl {
    /// The keyword that introduced this declaration.
    pub fn keyword(&self) -> KeywordId {
        match self {
            Decl::Gen(gen_decl) => gen_decl.keyword,
            Decl::Func(_) => KeywordId::Func,
        }
    }
}

// ============================================================================
// General declarations
// ============================================================================

/// `import "fmt"` or `import ( "a" "b" )`, and the same shapes for `const`/`var`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenDecl {
    pub keyword: KeywordId,
    /// Whether the specs were written inside parentheses.
    pub grouped: bool,
    pub specs: Vec<Spec>,
}

/// One entry of a general declaration.
///
/// Only import specs exist so far. Constant and variable specs will join as their own variants
/// once their grammar is built; until then the builder reports them as unsupported.
#[derive(Debug, Clone, PartialEq)]
pub enum Spec {
    Import(ImportSpec),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpec {
    /// Optional local name: `import f "fmt"`.
    pub name: Option<Ident>,
    pub path: BasicLit,
}

// ============================================================================
// Functions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub name: Ident,
    pub ty: FuncType,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FuncType {
    pub params: FieldList,
    pub results: FieldList,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldList {
    pub fields: Vec<Field>,
}

impl FieldList {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// `a, b int` or a bare `int`.
///
/// ## Notes
/// - `names` is empty for type-only fields (unnamed parameters and the bare single-result form).
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub names: Vec<Ident>,
    pub ty: Ident,
}

impl Field {
    pub fn unnamed(ty: Ident) -> Self {
        Self { names: Vec::new(), ty }
    }
}

// ============================================================================
// Statements
// ============================================================================

/// `{ ... }`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStmt {
    pub stmts: Vec<Stmt>,
}

/// Statements.
///
/// Intentionally uninhabited: the statement grammar is not built yet, so a block can only be
/// empty. New statement kinds are added here as variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {}

// ============================================================================
// Leaves
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self { name: name.into(), span }
    }
}

/// A literal as written in source, delimiters included (`"fmt"`, `'a'`, `3.14`).
#[derive(Debug, Clone, PartialEq)]
pub struct BasicLit {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl BasicLit {
    /// The literal text without its surrounding quotes, for string and char literals.
    pub fn unquoted(&self) -> &str {
        match self.kind {
            TokenKind::String => self.value.trim_start_matches('"').trim_end_matches('"'),
            TokenKind::Char => self.value.trim_start_matches('\'').trim_end_matches('\''),
            _ => &self.value,
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", keywords::as_str(KeywordId::Package), self.package)?;
        for decl in &self.decls {
            writeln!(f, "{}", decl.node)?;
        }
        Ok(())
    }
}

impl fmt::Display for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decl::Gen(gen_decl) => gen_decl.fmt(f),
            Decl::Func(func) => func.fmt(f),
        }
    }
}

impl fmt::Display for GenDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = keywords::as_str(self.keyword);
        if !self.grouped {
            // A non-grouped declaration always carries exactly one spec.
            return match self.specs.first() {
                Some(spec) => write!(f, "{keyword} {spec}"),
                None => write!(f, "{keyword} ()"),
            };
        }
        write!(f, "{keyword} (")?;
        for spec in &self.specs {
            write!(f, "\n\t{spec}")?;
        }
        if self.specs.is_empty() {
            f.write_str(")")
        } else {
            f.write_str("\n)")
        }
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spec::Import(spec) => spec.fmt(f),
        }
    }
}

impl fmt::Display for ImportSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name} ")?;
        }
        write!(f, "{}", self.path)
    }
}

impl fmt::Display for FuncDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{} {}",
            keywords::as_str(KeywordId::Func),
            self.name,
            self.ty,
            self.body
        )
    }
}

impl fmt::Display for FuncType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.params)?;
        match self.results.fields.as_slice() {
            [] => Ok(()),
            [single] if single.names.is_empty() => write!(f, " {single}"),
            _ => write!(f, " ({})", self.results),
        }
    }
}

impl fmt::Display for FieldList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}")?;
        }
        if self.names.is_empty() {
            write!(f, "{}", self.ty)
        } else {
            write!(f, " {}", self.ty)
        }
    }
}

impl fmt::Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stmts.as_slice() {
            [] => f.write_str("{}"),
            [stmt, ..] => match *stmt {},
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for BasicLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
