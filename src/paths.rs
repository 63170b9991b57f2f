//! Known file locations
//!
//! The reporter never looks up its log path from ambient process state.
//! A [`KnownFiles`] registry is resolved once (usually from the project
//! root and `.deferr.toml`) and handed to the reporter at construction.

use std::path::{Path, PathBuf};

/// Hidden state directory, relative to the project root
pub const STATE_DIR: &str = ".deferr";

/// File name of the deferred report inside the state directory
pub const EXCEPTION_FILE_NAME: &str = "exception.log";

/// Relative path used when no registry has been supplied
pub const FALLBACK_EXCEPTION_FILE: &str = ".deferr/exception.log";

/// Registry of the well-known paths the reporter reads and writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownFiles {
    /// Hidden state directory (`<root>/.deferr`)
    pub state_dir: PathBuf,
    /// Deferred report location (`<root>/.deferr/exception.log`)
    pub exception: PathBuf,
}

impl KnownFiles {
    /// Standard layout under `project_root`
    ///
    /// # Examples
    ///
    /// ```
    /// use deferr::paths::KnownFiles;
    /// use std::path::Path;
    ///
    /// let files = KnownFiles::for_root(Path::new("/work/project"));
    /// assert_eq!(files.exception, Path::new("/work/project/.deferr/exception.log"));
    /// ```
    pub fn for_root(project_root: &Path) -> Self {
        let state_dir = project_root.join(STATE_DIR);
        let exception = state_dir.join(EXCEPTION_FILE_NAME);
        Self {
            state_dir,
            exception,
        }
    }

    /// Hardcoded relative layout for callers outside a configured project
    pub fn fallback() -> Self {
        Self {
            state_dir: PathBuf::from(STATE_DIR),
            exception: PathBuf::from(FALLBACK_EXCEPTION_FILE),
        }
    }

    /// Replace the deferred report location, keeping the state directory
    pub fn with_exception(mut self, exception: impl Into<PathBuf>) -> Self {
        self.exception = exception.into();
        self
    }

    /// Pick the per-call override if given, else the registry path
    pub fn resolve_exception<'a>(&'a self, explicit: Option<&'a Path>) -> &'a Path {
        explicit.unwrap_or(&self.exception)
    }
}

impl Default for KnownFiles {
    fn default() -> Self {
        Self::fallback()
    }
}
