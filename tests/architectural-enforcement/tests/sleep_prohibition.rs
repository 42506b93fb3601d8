//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code MUST NOT sleep. The TUI redraws in response to
//! terminal events, never on a timer.

use architectural_enforcement::find_violations;

#[test]
fn test_no_sleep_in_production_code() {
    let violations = find_violations(
        &["ledger/core/src", "tui/src"],
        &["thread::sleep", "tokio::time::sleep", "sleep("],
    );

    if !violations.is_empty() {
        eprintln!("\nsleep() calls found in production code:\n");
        for violation in &violations {
            eprintln!("  {violation}");
        }
        panic!("\nFound {} sleep violation(s).", violations.len());
    }
}
