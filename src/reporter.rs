//! Raising and replaying deferred reports
//!
//! A failing pipeline step hands a [`DiagnosticReport`] to
//! [`Reporter::raise`]. The report is rendered once, then either written to
//! the deferred log file or printed right away, and the caller gets back a
//! [`ReportError`] to propagate. A later stage of the build calls
//! [`Reporter::replay`] to print whatever is pending at the end of the log.
//!
//! The log holds one report at a time. Writes truncate, so the last writer
//! wins and nothing distinguishes a fresh report from one left by an earlier
//! run. Callers that care call [`Reporter::clear`] when a run starts.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::ConfigLoader;
use crate::error::ReportError;
use crate::infra::{FileSystem, RealFileSystem};
use crate::paths::KnownFiles;
use crate::report::{render, DiagnosticReport, RenderOptions};
use crate::term::WidthPolicy;

/// Where a raised report goes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Delivery {
    /// Write to the registry's deferred log file
    #[default]
    Deferred,
    /// Write to a specific log file
    DeferredTo(PathBuf),
    /// Print to the console now
    Immediate,
}

impl Delivery {
    /// Deferred (optionally to `path`) or immediate, from CLI-style flags
    pub fn from_flags(immediate: bool, path: Option<PathBuf>) -> Self {
        match (immediate, path) {
            (true, _) => Self::Immediate,
            (false, Some(path)) => Self::DeferredTo(path),
            (false, None) => Self::Deferred,
        }
    }
}

/// Rendering settings the reporter is built with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReporterSettings {
    /// Cosmetic options passed to the renderer
    pub render: RenderOptions,
    /// How the frame width is chosen at raise time
    pub width: WidthPolicy,
}

/// Formats, stores and replays diagnostic reports
pub struct Reporter<FS: FileSystem = RealFileSystem> {
    settings: ReporterSettings,
    files: KnownFiles,
    fs: FS,
}

impl Reporter<RealFileSystem> {
    /// Reporter on the real filesystem
    pub fn new(settings: ReporterSettings, files: KnownFiles) -> Self {
        Self::with_fs(settings, files, RealFileSystem)
    }

    /// Reporter for the project in the current directory, honoring `.deferr.toml`
    pub fn from_current_dir() -> Result<Self> {
        let project_root = std::env::current_dir()?;
        Self::from_project(&project_root)
    }

    /// Reporter for the project at `project_root`, honoring `.deferr.toml`
    pub fn from_project(project_root: &Path) -> Result<Self> {
        let config = ConfigLoader::load(project_root)?;
        let settings = ReporterSettings {
            render: config.report.render_options(),
            width: config.report.width_policy(),
        };
        Ok(Self::new(settings, config.known_files(project_root)))
    }

    /// Like [`from_project`](Self::from_project), but a config that cannot be
    /// loaded falls back to the default settings and `.deferr/exception.log`
    ///
    /// A failing step must still get its report out, so a broken
    /// `.deferr.toml` is logged and otherwise ignored here.
    pub fn from_project_or_default(project_root: &Path) -> Self {
        Self::from_project(project_root).unwrap_or_else(|err| {
            log::warn!("ignoring project config: {err:#}");
            Self::new(ReporterSettings::default(), KnownFiles::for_root(project_root))
        })
    }
}

impl<FS: FileSystem> Reporter<FS> {
    /// Reporter with a custom filesystem implementation
    pub fn with_fs(settings: ReporterSettings, files: KnownFiles, fs: FS) -> Self {
        Self {
            settings,
            files,
            fs,
        }
    }

    /// Settings this reporter renders with
    pub fn settings(&self) -> &ReporterSettings {
        &self.settings
    }

    /// Mutable access to the render settings, e.g. to honor a CLI flag
    pub fn settings_mut(&mut self) -> &mut ReporterSettings {
        &mut self.settings
    }

    /// Known file locations this reporter was given
    pub fn files(&self) -> &KnownFiles {
        &self.files
    }

    /// Render `report` at the width the settings resolve to right now
    pub fn render_report(&self, report: &DiagnosticReport) -> String {
        let width = self.settings.width.resolve();
        render(report, &self.settings.render, width)
    }

    /// Write rendered text to `path`, replacing anything already there
    ///
    /// Missing parent directories are not created.
    pub fn persist(&self, text: &str, path: &Path) -> io::Result<()> {
        log::debug!("writing deferred report to {}", path.display());
        self.fs.write(path, text)
    }

    /// Write rendered text (or a stored report's raw bytes) to `out`
    pub fn emit<W: Write>(&self, bytes: &[u8], out: &mut W) -> io::Result<()> {
        out.write_all(bytes)?;
        out.flush()
    }

    /// Deliver `report` and return the failure to propagate
    ///
    /// Immediate delivery prints to stdout. The result is always an error:
    /// [`ReportError::Workflow`] when the report was delivered, or the I/O
    /// error that stopped it.
    ///
    /// # Examples
    ///
    /// ```
    /// use deferr::paths::KnownFiles;
    /// use deferr::report::DiagnosticReport;
    /// use deferr::reporter::{Delivery, Reporter, ReporterSettings};
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let files = KnownFiles::for_root(dir.path()).with_exception(dir.path().join("exception.log"));
    /// let reporter = Reporter::new(ReporterSettings::default(), files);
    ///
    /// let err = reporter.raise(&DiagnosticReport::new("division by zero"), Delivery::Deferred);
    /// assert_eq!(err.to_string(), "division by zero");
    /// assert!(reporter.has_pending(None));
    /// ```
    pub fn raise(&self, report: &DiagnosticReport, delivery: Delivery) -> ReportError {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.raise_to(report, delivery, &mut out)
    }

    /// [`raise`](Self::raise) with immediate output going to `out`
    pub fn raise_to<W: Write>(
        &self,
        report: &DiagnosticReport,
        delivery: Delivery,
        out: &mut W,
    ) -> ReportError {
        let text = self.render_report(report);
        let message = report.message().to_string();

        let delivered = match &delivery {
            Delivery::Immediate => {
                log::debug!("printing report immediately");
                self.emit(text.as_bytes(), out).map_err(|source| ReportError::Emit {
                    message: message.clone(),
                    source,
                })
            }
            Delivery::Deferred => self.persist_or_fail(&text, &self.files.exception, &message),
            Delivery::DeferredTo(path) => self.persist_or_fail(&text, path, &message),
        };

        match delivered {
            Ok(()) => ReportError::Workflow { message },
            Err(err) => {
                log::warn!("report could not be delivered: {err}");
                err
            }
        }
    }

    fn persist_or_fail(&self, text: &str, path: &Path, message: &str) -> Result<(), ReportError> {
        self.persist(text, path)
            .map_err(|source| ReportError::Persist {
                path: path.to_path_buf(),
                message: message.to_string(),
                source,
            })
    }

    /// Print the pending report to stdout, if there is one
    ///
    /// Returns whether anything was printed. The file is left in place.
    pub fn replay(&self, path: Option<&Path>) -> Result<bool, ReportError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.replay_to(path, &mut out)
    }

    /// [`replay`](Self::replay) writing to `out`
    pub fn replay_to<W: Write>(
        &self,
        path: Option<&Path>,
        out: &mut W,
    ) -> Result<bool, ReportError> {
        let path = self.files.resolve_exception(path);

        let contents = match self.fs.read(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no pending report at {}", path.display());
                return Ok(false);
            }
            Err(source) => {
                return Err(ReportError::Replay {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        log::info!("replaying report from {}", path.display());
        self.emit(&contents, out)
            .map_err(|source| ReportError::Replay {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(true)
    }

    /// Whether a deferred report is waiting at `path` (or the registry path)
    pub fn has_pending(&self, path: Option<&Path>) -> bool {
        self.fs.exists(self.files.resolve_exception(path))
    }

    /// Remove a pending report; returns whether one was removed
    pub fn clear(&self, path: Option<&Path>) -> Result<bool, ReportError> {
        let path = self.files.resolve_exception(path);

        match self.fs.remove_file(path) {
            Ok(()) => {
                log::info!("cleared pending report at {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(ReportError::Clear {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
