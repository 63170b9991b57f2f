//! Clear command implementation
//!
//! Handles `deferr clear`. Nothing distinguishes a fresh report from one
//! left behind by a previous run, so pipelines call this when a run starts.

use anyhow::Result;
use console::style;
use std::env;
use std::path::Path;

use crate::fmt::{display_path, CHECKMARK, INFO};
use crate::reporter::Reporter;

/// Remove a pending report
pub fn cmd_clear(file: Option<&Path>) -> Result<()> {
    let project_root = env::current_dir()?;
    let reporter = Reporter::from_project(&project_root)?;
    let path = reporter.files().resolve_exception(file).to_path_buf();

    if reporter.clear(file)? {
        println!("{} Cleared {}", CHECKMARK, display_path(&path));
    } else {
        println!(
            "{} {}",
            INFO,
            style(format!("No pending report at {}", display_path(&path))).dim()
        );
    }

    Ok(())
}
