//! Init command implementation
//!
//! Handles `deferr init`, which writes a default `.deferr.toml` and creates
//! the hidden state directory deferred reports are written into.

use anyhow::{Context, Result};
use console::style;
use std::env;
use std::path::Path;

use crate::config::{self, ConfigFile, ConfigLoader};
use crate::fmt::{display_path, CHECKMARK, INFO};
use crate::infra::{FileSystem, RealFileSystem};

/// Initialize deferr in the current directory
pub fn cmd_init() -> Result<()> {
    let project_root = env::current_dir()?;
    init_project(&project_root)
}

/// Initialize deferr in `project_root`
///
/// An existing config file is left untouched; the state directory is
/// created either way.
///
/// # Examples
///
/// ```
/// use deferr::cmd::init::init_project;
///
/// let dir = tempfile::tempdir().unwrap();
/// init_project(dir.path())?;
///
/// assert!(dir.path().join(".deferr.toml").exists());
/// assert!(dir.path().join(".deferr").is_dir());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_project(project_root: &Path) -> Result<()> {
    init_project_with_fs(project_root, &RealFileSystem)
}

/// Initialize deferr with a custom filesystem implementation
pub fn init_project_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<()> {
    let config = if ConfigLoader::exists_with_fs(project_root, fs) {
        println!(
            "{} Config file already exists: {}",
            INFO,
            style(config::CONFIG_FILE_NAME).cyan()
        );
        ConfigLoader::load_with_fs(project_root, fs)?
    } else {
        let config = ConfigFile::default();
        ConfigLoader::save_with_fs(&config, project_root, fs)?;
        println!(
            "{} Created {}",
            CHECKMARK,
            style(config::CONFIG_FILE_NAME).cyan()
        );
        config
    };

    let files = config.known_files(project_root);
    let report_dir = files
        .exception
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(&files.state_dir);
    fs.create_dir_all(report_dir)
        .with_context(|| format!("Failed to create {}", report_dir.display()))?;

    println!(
        "{} Deferred reports go to {}",
        CHECKMARK,
        display_path(&files.exception)
    );
    println!(
        "   {}",
        style("Run 'deferr replay' when your pipeline finishes to print them.").dim()
    );

    Ok(())
}
