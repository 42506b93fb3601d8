//! Integration Test: No Network I/O
//!
//! **Policy**: Friends and balances live in memory for the life of the
//! process. Avatar URLs are shown as text and never fetched.
//!
//! Production code MUST NOT open sockets or pull in an HTTP client.

use architectural_enforcement::find_violations;

const PRODUCTION_DIRS: &[&str] = &["ledger/core/src", "tui/src"];

#[test]
fn test_no_network_io_in_production_code() {
    let violations = find_violations(
        PRODUCTION_DIRS,
        &["std::net", "tokio::net", "reqwest", "hyper::"],
    );

    if !violations.is_empty() {
        eprintln!("\nNetwork I/O found in production code:\n");
        for violation in &violations {
            eprintln!("  {violation}");
        }
        panic!("\nFound {} network I/O violation(s).", violations.len());
    }
}
