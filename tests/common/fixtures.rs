//! Test fixture helpers for creating scratch projects

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a project with an initialized `.deferr/` state directory
///
/// # Returns
///
/// A tuple of (TempDir, PathBuf to the default deferred report) - the TempDir must be kept alive
pub fn create_project() -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let state_dir = temp_dir.path().join(".deferr");
    fs::create_dir(&state_dir)?;
    Ok((temp_dir, state_dir.join("exception.log")))
}

/// Creates a project with a `.deferr.toml` containing `config`
pub fn create_project_with_config(config: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    let (temp_dir, exception) = create_project()?;
    fs::write(temp_dir.path().join(".deferr.toml"), config)?;
    Ok((temp_dir, exception))
}

/// Creates a project without a state directory
pub fn create_bare_project() -> anyhow::Result<TempDir> {
    Ok(TempDir::new()?)
}
