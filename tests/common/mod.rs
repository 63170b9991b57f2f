//! Common test utilities and helpers
//!
//! Shared setup for the CLI integration tests: a binary handle that runs
//! inside a scratch project, and helpers for reading the deferred report.

pub mod fixtures;

use assert_cmd::Command;
use std::path::Path;

/// The deferr binary, run from `project` with logging disabled
pub fn deferr_in(project: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_deferr"));
    cmd.current_dir(project).env_remove("RUST_LOG");
    cmd
}

/// Output with ANSI escape sequences removed
#[allow(dead_code)]
pub fn plain_text(bytes: &[u8]) -> String {
    console::strip_ansi_codes(&String::from_utf8_lossy(bytes)).into_owned()
}

/// The line of `text` that starts with `prefix`
#[allow(dead_code)]
pub fn line_starting_with<'a>(text: &'a str, prefix: &str) -> &'a str {
    text.lines()
        .find(|l| l.starts_with(prefix))
        .unwrap_or_else(|| panic!("no line starting with {prefix:?} in:\n{text}"))
}
