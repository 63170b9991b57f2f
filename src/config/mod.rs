//! Configuration for deferr
//!
//! This module provides:
//! - `.deferr.toml` config file support
//! - Resolution of config values into the reporter's known file locations

pub mod file;
pub mod loader;

pub use file::{ConfigFile, ReportSettings, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
