//! Integration Test: Headless Ledger Core
//!
//! **Policy**: `ledger-core` MUST NOT depend on any terminal or UI crate.
//! Surfaces translate input into `UserEvent`s; the core never sees a key code.

use std::fs;

use architectural_enforcement::{find_violations, workspace_root};

const UI_CRATES: &[&str] = &["ratatui", "crossterm"];

#[test]
fn test_core_sources_do_not_use_ui_crates() {
    let violations = find_violations(&["ledger/core/src"], UI_CRATES);

    if !violations.is_empty() {
        eprintln!("\nUI crates referenced from ledger-core:\n");
        for violation in &violations {
            eprintln!("  {violation}");
        }
        panic!(
            "\nFound {} UI reference(s) in ledger-core. Move them to the tui crate.",
            violations.len()
        );
    }
}

#[test]
fn test_core_manifest_has_no_ui_dependencies() {
    let manifest = fs::read_to_string(workspace_root().join("ledger/core/Cargo.toml"))
        .expect("ledger-core Cargo.toml should exist");

    for name in UI_CRATES {
        assert!(
            !manifest.contains(name),
            "ledger-core must not depend on {name}"
        );
    }
}

#[test]
fn test_core_sources_are_found() {
    // Guard against the walk silently checking nothing
    let files = architectural_enforcement::rust_files("ledger/core/src");
    assert!(files.iter().any(|p| p.ends_with("ledger.rs")));
}
