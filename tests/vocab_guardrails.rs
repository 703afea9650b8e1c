use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use sable_core::lang::{keywords, operators, punctuation};

/// Guardrail against reintroducing stringly-typed vocabulary checks.
///
/// This is intentionally a **coarse** safety net. It looks for suspicious patterns like `== "func"` or
/// `match text.as_str() { "import" => ... }` in Rust source files where we expect callers to go through
/// `sable_core::lang` registries (or the ID-carrying `TokenKind`) instead.
///
/// Notes:
/// - We allow occurrences in `crates/sable_core/src/lang/**` (registries themselves) and in tests.
/// - This is not meant to be perfect; it’s meant to catch “oops I added a string match”.
#[test]
fn no_new_stringly_vocab_checks_in_rust_sources() {
    let root = repo_root();
    let spellings = vocabulary_spellings();
    let mut offenders: Vec<(PathBuf, usize, String)> = Vec::new();

    let targets = [root.join("src"), root.join("crates")];
    for dir in targets {
        if dir.exists() {
            scan_dir(&root, &dir, &spellings, &mut offenders);
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::new();
        msg.push_str("Found potential stringly-typed vocabulary checks. Prefer sable_core registries.\n\n");
        for (path, line_no, line) in offenders.into_iter().take(80) {
            msg.push_str(&format!(
                "- {}:{}: {}\n",
                path.strip_prefix(&root).unwrap_or(&path).display(),
                line_no,
                line.trim()
            ));
        }
        panic!("{msg}");
    }
}

#[test]
fn scanner_detects_string_matches() {
    let spellings = vocabulary_spellings();
    assert!(is_suspicious_line(r#"    if text == "func" {"#, &spellings));
    assert!(is_suspicious_line(r#"        ":=" => Some(Assign),"#, &spellings));
    assert!(!is_suspicious_line(r#"    // text == "func""#, &spellings));
    assert!(!is_suspicious_line(r#"    if kind.is_keyword(KeywordId::Func) {"#, &spellings));
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn vocabulary_spellings() -> Vec<&'static str> {
    // Keywords, operators and punctuation: everything the classifier resolves through a registry.
    let mut set: BTreeSet<&'static str> = BTreeSet::new();

    for k in keywords::KEYWORDS {
        set.insert(k.canonical);
    }
    for o in operators::OPERATORS {
        set.insert(o.spelling);
    }
    for p in punctuation::PUNCTUATION {
        set.insert(p.canonical);
    }

    set.into_iter().collect()
}

fn is_allowed_file(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    if !rel.ends_with(".rs") {
        return true;
    }
    // Registries define the spellings; allow them.
    if rel.starts_with("crates/sable_core/src/lang/") {
        return true;
    }
    // Tests can mention spellings directly.
    if rel.starts_with("tests/") || rel.contains("/tests/") || rel.ends_with("/tests.rs") {
        return true;
    }
    false
}

fn scan_dir(root: &Path, dir: &Path, spellings: &[&'static str], offenders: &mut Vec<(PathBuf, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan_dir(root, &path, spellings, offenders);
            continue;
        }
        if is_allowed_file(root, &path) {
            continue;
        }
        let Ok(contents) = fs::read_to_string(&path) else {
            continue;
        };
        for (idx, line) in contents.lines().enumerate() {
            if is_suspicious_line(line, spellings) {
                offenders.push((path.clone(), idx + 1, line.to_string()));
            }
        }
    }
}

fn is_suspicious_line(line: &str, spellings: &[&'static str]) -> bool {
    // Avoid false positives in comments/docstrings.
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") {
        return false;
    }

    // Only flag explicit equality checks or match arms for known vocabulary spellings.
    for s in spellings {
        let eq = format!("== \"{s}\"");
        let arm = format!("\"{s}\" =>");
        if line.contains(&eq) || line.contains(&arm) {
            return true;
        }
    }

    false
}
