//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - The ledger core stays headless (no terminal crates)
//! - No network I/O anywhere; balances live in memory
//! - No sleep() calls in production code
//!
//! The helpers here walk production sources and hand back the lines that are
//! actual code, so each test only states what it forbids.

use std::fs;
use std::path::{Path, PathBuf};

/// Root of the workspace, two levels above this crate
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

/// Every `.rs` file under `dir` (relative to the workspace root)
pub fn rust_files(dir: &str) -> Vec<PathBuf> {
    let root = workspace_root().join(dir);
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// A line of production code
#[derive(Debug)]
pub struct CodeLine {
    /// File the line came from
    pub path: PathBuf,
    /// 1-based line number
    pub number: usize,
    /// Line text with any trailing `//` comment removed
    pub code: String,
}

impl std::fmt::Display for CodeLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} - {}", self.path.display(), self.number, self.code.trim())
    }
}

/// Production code lines of every file under `dir`
///
/// Comment lines are dropped, and everything from the first `#[cfg(test)]`
/// onwards is skipped (test modules sit at the bottom of each file).
pub fn production_lines(dir: &str) -> Vec<CodeLine> {
    let mut lines = Vec::new();

    for path in rust_files(dir) {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim_start();
            if trimmed.starts_with("#[cfg(test)]") {
                break;
            }
            if trimmed.starts_with("//") {
                continue;
            }

            let code = strip_line_comment(line).to_string();
            lines.push(CodeLine {
                path: path.clone(),
                number: idx + 1,
                code,
            });
        }
    }

    lines
}

/// `line` without a trailing `//` comment
///
/// A `//` inside a string literal (such as a URL) is kept as code.
pub fn strip_line_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut in_string = false;
    let mut escaped = false;

    for (idx, &byte) in bytes.iter().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'/' if bytes.get(idx + 1) == Some(&b'/') => return &line[..idx],
            _ => {}
        }
    }

    line
}

/// Lines under `dirs` containing any of `patterns`
pub fn find_violations(dirs: &[&str], patterns: &[&str]) -> Vec<CodeLine> {
    dirs.iter()
        .flat_map(|dir| production_lines(dir))
        .filter(|line| patterns.iter().any(|p| line.code.contains(p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_comment() {
        assert_eq!(strip_line_comment("let x = 1; // note"), "let x = 1; ");
        assert_eq!(strip_line_comment("let x = 1;"), "let x = 1;");
    }

    #[test]
    fn test_url_in_string_is_code() {
        let line = r#"let url = "https://i.pravatar.cc/48"; std::net::TcpStream::connect(url);"#;
        let code = strip_line_comment(line);
        assert_eq!(code, line);
        assert!(code.contains("std::net"));
    }

    #[test]
    fn test_comment_after_string() {
        let line = r#"let s = "a//b"; // trailing"#;
        assert_eq!(strip_line_comment(line), r#"let s = "a//b"; "#);
    }

    #[test]
    fn test_escaped_quote_in_string() {
        let line = r#"let s = "say \"//\" here"; reqwest::get(s)"#;
        assert!(strip_line_comment(line).contains("reqwest"));
    }
}
