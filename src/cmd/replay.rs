//! Replay command implementation
//!
//! Handles `deferr replay`, called from the outer pipeline's completion
//! hook to print a pending report at the very end of the build log.

use anyhow::Result;
use std::env;
use std::path::Path;

use crate::reporter::Reporter;

/// Print the pending report verbatim; nothing happens if there is none
pub fn cmd_replay(file: Option<&Path>) -> Result<()> {
    let project_root = env::current_dir()?;
    let reporter = Reporter::from_project(&project_root)?;

    reporter.replay(file)?;
    Ok(())
}
