//! Completions command implementation
//!
//! Handles the `deferr completions` command which generates shell
//! completion scripts for bash, zsh, fish, etc.

use clap::Command;
use clap_complete::{generate, Shell};

/// Write the completion script for `shell` to stdout
///
/// The caller passes the CLI definition (built from the derive in `main.rs`
/// via `CommandFactory`), so completions never drift from the real flags.
///
/// # Examples
///
/// ```bash
/// deferr completions bash > /etc/bash_completion.d/deferr
/// deferr completions zsh > ~/.zfunc/_deferr
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut Command) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, &mut std::io::stdout());
}
