#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! deferr library
//!
//! Deferred error reporting for long-running build pipelines. When a step
//! fails, its diagnostic is rendered into a framed block and either printed
//! immediately or stored in a well-known log file, so a completion hook can
//! print it once more at the very end of the build output.
//!
//! # Basic Example
//!
//! Rendering a report without touching the disk:
//!
//! ```
//! use deferr::report::{render, DiagnosticReport, RenderOptions};
//!
//! let report = DiagnosticReport::new("division by zero")
//!     .script("foo.py")
//!     .rule("bar");
//! let options = RenderOptions { styled: false, ..Default::default() };
//!
//! let text = render(&report, &options, 60);
//! assert!(text.contains("Rule: bar in `workflow/rules/bar.smk`"));
//! assert!(text.contains("Context: N/A"));
//! ```
//!
//! # Advanced Example: Deferred Report and Replay
//!
//! ```
//! use deferr::paths::KnownFiles;
//! use deferr::report::DiagnosticReport;
//! use deferr::reporter::{Delivery, Reporter, ReporterSettings};
//! use deferr::term::WidthPolicy;
//! use tempfile::TempDir;
//!
//! let workspace = TempDir::new().unwrap();
//! let files = KnownFiles::for_root(workspace.path());
//! std::fs::create_dir_all(&files.state_dir).unwrap();
//!
//! let settings = ReporterSettings { width: WidthPolicy::Fixed(60), ..Default::default() };
//! let reporter = Reporter::new(settings, files);
//!
//! // The failing step records its report and still fails
//! let err = reporter.raise(&DiagnosticReport::new("division by zero"), Delivery::Deferred);
//! assert!(err.is_delivered());
//!
//! // At the end of the build, the completion hook prints it
//! let mut log = Vec::new();
//! assert!(reporter.replay_to(None, &mut log).unwrap());
//! assert!(String::from_utf8(log).unwrap().contains("division by zero"));
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Error types and CLI error formatting
pub mod error;
/// Shared console output helpers
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Known file locations
pub mod paths;
/// Diagnostic reports and rendering
pub mod report;
/// Raising, replaying and clearing reports
pub mod reporter;
/// Terminal width detection
pub mod term;
