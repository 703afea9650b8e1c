//! Plain-text error rendering with source context.
//!
//! Produces a compact report pointing at the offending text:
//!
//! ```text
//! error[sable::parse::unexpected_token]: unexpected identifier: improt
//!   --> main.sb:2:1
//!    |
//!  2 | improt x
//!    | ^^^^^^
//!    = help: top-level declarations start with `import`, `const`, `var` or `func`
//! ```

use std::fmt::Write as _;

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, NamedSource, Report};

use super::FrontendError;

/// Render `error` against `source` as a multi-line report (no colors).
pub fn render_diagnostic(file_name: &str, source: &str, error: &FrontendError) -> String {
    let span = error.span();
    let (line_num, col_num, line_text) = line_info(source, span.start);

    let mut out = String::new();
    match error.code() {
        Some(code) => {
            let _ = writeln!(out, "error[{code}]: {error}");
        }
        None => {
            let _ = writeln!(out, "error: {error}");
        }
    }
    let _ = writeln!(out, "  --> {file_name}:{line_num}:{col_num}");

    let width = line_num.to_string().len();
    let _ = writeln!(out, " {:>width$} |", "");
    let _ = writeln!(out, " {line_num:>width$} | {line_text}");

    // Underline up to the end of the span or of the line, whichever comes first.
    let start = floor_boundary(source, span.start);
    let line_end = source[start..].find('\n').map_or(source.len(), |i| start + i);
    let end = floor_boundary(source, span.end.clamp(start, line_end));
    let underline = source[start..end].chars().count().max(1);
    let _ = writeln!(
        out,
        " {:>width$} | {}{}",
        "",
        " ".repeat(col_num - 1),
        "^".repeat(underline)
    );

    if let Some(help) = error.help() {
        let _ = writeln!(out, " {:>width$} = help: {help}", "");
    }
    out
}

/// Render `error` with miette's graphical handler (unicode, no colors).
///
/// Falls back to [`render_diagnostic`] if the span cannot be read from `source`.
pub fn render_graphical(file_name: &str, source: &str, error: &FrontendError) -> String {
    let report = Report::new(error.clone()).with_source_code(NamedSource::new(file_name, source.to_string()));
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut out = String::new();
    if handler.render_report(&mut out, &*report).is_err() {
        return render_diagnostic(file_name, source, error);
    }
    out
}

/// Largest char boundary in `source` at or before `offset`.
fn floor_boundary(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Get line number, column number (in characters, 1-based), and line text for a byte offset.
fn line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = floor_boundary(source, offset);
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_num = source[..line_start].matches('\n').count() + 1;

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let line_text = &source[line_start..line_end];
    let col_num = source[line_start..offset].chars().count() + 1;

    (line_num, col_num, line_text)
}
