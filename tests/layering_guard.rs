//! Layering guardrails for the workspace crates.
//!
//! `sable_core` is pure vocabulary and sits at the bottom: it must not depend on the syntax crate (or on
//! the facade). `sable_syntax` must not depend on the facade. These tests scan the member manifests and
//! fail if a forbidden crate appears in `[dependencies]`.

/// Return the crate names listed in the `[dependencies]` table of `manifest`.
fn main_dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut deps = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            deps.push(name.trim().to_string());
        }
    }
    deps
}

#[test]
fn core_does_not_depend_on_syntax_or_facade() {
    let deps = main_dependencies(include_str!("../crates/sable_core/Cargo.toml"));
    for forbidden in ["sable_syntax", "sable"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`{forbidden}` must not appear in sable_core's [dependencies]"
        );
    }
}

#[test]
fn syntax_does_not_depend_on_facade() {
    let deps = main_dependencies(include_str!("../crates/sable_syntax/Cargo.toml"));
    assert!(deps.iter().any(|d| d == "sable_core"));
    assert!(!deps.iter().any(|d| d == "sable"), "`sable` must not appear in sable_syntax's [dependencies]");
}
