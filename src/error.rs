//! Error types for report delivery
//!
//! Raising a report always ends in a [`ReportError`]: either the workflow
//! failure itself (the report was delivered) or an I/O failure that kept it
//! from being delivered. [`ErrorFormatter`] turns any error reaching the CLI
//! into colored output and a process exit code.
//!
//! # Examples
//!
//! ```no_run
//! use deferr::report::DiagnosticReport;
//! use deferr::reporter::{Delivery, Reporter};
//!
//! let reporter = Reporter::from_current_dir()?;
//! let err = reporter.raise(&DiagnosticReport::new("division by zero"), Delivery::Deferred);
//! eprintln!("step failed: {err}");
//! std::process::exit(err.exit_code());
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Failures produced while raising, replaying or clearing reports
#[derive(Error, Debug)]
pub enum ReportError {
    /// The workflow step failed; its report was delivered
    #[error("{message}")]
    Workflow {
        /// Detailed error message of the report
        message: String,
    },

    /// The report could not be written to its deferred location
    #[error("could not write deferred report to {}: {message}", path.display())]
    Persist {
        /// Target log file
        path: PathBuf,
        /// Detailed error message of the report that was lost
        message: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// The report could not be written to the console
    #[error("could not print report: {message}")]
    Emit {
        /// Detailed error message of the report that was lost
        message: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// A pending report exists but could not be read or printed
    #[error("could not replay report from {}", path.display())]
    Replay {
        /// Log file being replayed
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// A pending report could not be removed
    #[error("could not clear report at {}", path.display())]
    Clear {
        /// Log file being removed
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl ReportError {
    /// Detailed message of the failed workflow step, when one is attached
    pub fn workflow_message(&self) -> Option<&str> {
        match self {
            Self::Workflow { message }
            | Self::Persist { message, .. }
            | Self::Emit { message, .. } => Some(message),
            Self::Replay { .. } | Self::Clear { .. } => None,
        }
    }

    /// Whether the report reached its destination
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Workflow { .. })
    }

    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use deferr::error::ReportError;
    /// use std::path::PathBuf;
    ///
    /// let error = ReportError::Persist {
    ///     path: PathBuf::from(".deferr/exception.log"),
    ///     message: "boom".to_string(),
    ///     source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    /// };
    ///
    /// assert!(error.suggestion().unwrap().contains("deferr init"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Workflow { .. } => None,
            Self::Persist { path, source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some(format!(
                    "Create the directory for {} (run 'deferr init') or pass --file",
                    path.display()
                )),
                _ => Some(format!(
                    "Check that {} is writable, or report immediately with --now",
                    path.display()
                )),
            },
            Self::Emit { .. } => Some("Check that standard output is still open".to_string()),
            Self::Replay { path, .. } | Self::Clear { path, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                path.display()
            )),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// A delivered workflow failure exits with 1; delivery problems use
    /// EX_IOERR from sysexits.h.
    ///
    /// # Examples
    ///
    /// ```
    /// use deferr::error::ReportError;
    ///
    /// let error = ReportError::Workflow { message: "boom".to_string() };
    /// assert_eq!(error.exit_code(), 1);
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Workflow { .. } => 1,
            Self::Persist { .. } => 74, // EX_IOERR
            Self::Emit { .. } => 74,
            Self::Replay { .. } => 74,
            Self::Clear { .. } => 74,
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and a suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(report_error) = error.downcast_ref::<ReportError>() {
            if let Some(suggestion) = report_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(report_error) = error.downcast_ref::<ReportError>() {
            report_error.exit_code()
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn io_error(kind: io::ErrorKind) -> io::Error {
        io::Error::new(kind, "test")
    }

    #[test]
    fn test_workflow_error_displays_message_only() {
        let err = ReportError::Workflow {
            message: "division by zero".to_string(),
        };

        assert_eq!(err.to_string(), "division by zero");
        assert_eq!(err.workflow_message(), Some("division by zero"));
        assert!(err.is_delivered());
        assert!(err.suggestion().is_none());
    }

    #[test]
    fn test_persist_error_keeps_workflow_message() {
        let err = ReportError::Persist {
            path: PathBuf::from("missing/exception.log"),
            message: "division by zero".to_string(),
            source: io_error(io::ErrorKind::NotFound),
        };

        assert!(err.to_string().contains("missing/exception.log"));
        assert!(err.to_string().contains("division by zero"));
        assert_eq!(err.workflow_message(), Some("division by zero"));
        assert!(!err.is_delivered());
    }

    #[test]
    fn test_persist_permission_error_suggests_immediate_mode() {
        let err = ReportError::Persist {
            path: PathBuf::from("exception.log"),
            message: "boom".to_string(),
            source: io_error(io::ErrorKind::PermissionDenied),
        };

        let suggestion = err.suggestion().expect("Persist should have suggestion");
        assert!(suggestion.contains("--now"));
    }

    #[test]
    fn test_replay_and_clear_have_no_workflow_message() {
        let replay = ReportError::Replay {
            path: PathBuf::from("a.log"),
            source: io_error(io::ErrorKind::PermissionDenied),
        };
        let clear = ReportError::Clear {
            path: PathBuf::from("a.log"),
            source: io_error(io::ErrorKind::PermissionDenied),
        };

        assert!(replay.workflow_message().is_none());
        assert!(clear.workflow_message().is_none());
        assert!(replay.suggestion().unwrap().contains("a.log"));
    }

    #[test]
    fn test_exit_codes_follow_conventions() {
        let workflow = ReportError::Workflow {
            message: "x".to_string(),
        };
        let emit = ReportError::Emit {
            message: "x".to_string(),
            source: io_error(io::ErrorKind::BrokenPipe),
        };

        assert_eq!(workflow.exit_code(), 1);
        assert_eq!(emit.exit_code(), 74);
    }

    #[test]
    fn test_formatter_includes_cause_chain_and_help() {
        let err = anyhow::Error::new(ReportError::Persist {
            path: PathBuf::from("exception.log"),
            message: "boom".to_string(),
            source: io_error(io::ErrorKind::NotFound),
        });

        let text = console::strip_ansi_codes(&ErrorFormatter::format(&err)).into_owned();
        assert!(text.starts_with("error: could not write deferred report"));
        assert!(text.contains("caused by: test"));
        assert!(text.contains("help:"));
        assert_eq!(ErrorFormatter::exit_code(&err), 74);
    }

    #[test]
    fn test_formatter_exit_code_for_foreign_error_is_generic() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(ErrorFormatter::exit_code(&err), 1);
    }
}
