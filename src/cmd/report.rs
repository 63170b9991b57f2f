//! Report command implementation
//!
//! Handles `deferr report`, which a failing pipeline step calls to record
//! its failure. The command always fails: it exits non-zero once the report
//! has been delivered, so the step that invoked it still fails.

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::report::DiagnosticReport;
use crate::reporter::{Delivery, Reporter};

/// Arguments of `deferr report`
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    /// Detailed error message
    pub message: String,
    /// Failing script
    pub script: Option<String>,
    /// Failing rule
    pub rule: Option<String>,
    /// Extra context
    pub context: Option<String>,
    /// One-line summary (default brief when `None`)
    pub brief: Option<String>,
    /// Print now instead of deferring
    pub now: bool,
    /// Deferred log file override
    pub file: Option<PathBuf>,
    /// Disable ANSI emphasis
    pub plain: bool,
}

impl ReportArgs {
    fn to_report(&self) -> DiagnosticReport {
        let report = DiagnosticReport::new(self.message.clone())
            .with_script(self.script.clone())
            .with_rule(self.rule.clone())
            .with_context(self.context.clone());
        match &self.brief {
            Some(brief) => report.brief(brief.clone()),
            None => report,
        }
    }
}

/// Record a failure and return it as an error
///
/// An unusable `.deferr.toml` does not stop delivery; the report is raised
/// with default settings instead.
///
/// # Examples
///
/// ```no_run
/// use deferr::cmd::{cmd_report, ReportArgs};
///
/// let args = ReportArgs {
///     message: "division by zero".to_string(),
///     script: Some("foo.py".to_string()),
///     rule: Some("bar".to_string()),
///     ..Default::default()
/// };
/// let err = cmd_report(&args).unwrap_err();
/// assert_eq!(err.to_string(), "division by zero");
/// ```
pub fn cmd_report(args: &ReportArgs) -> Result<()> {
    let project_root = env::current_dir()?;
    let mut reporter = Reporter::from_project_or_default(&project_root);
    if args.plain {
        reporter.settings_mut().render.styled = false;
    }

    let delivery = Delivery::from_flags(args.now, args.file.clone());
    Err(reporter.raise(&args.to_report(), delivery).into())
}
