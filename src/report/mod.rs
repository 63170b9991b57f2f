//! Diagnostic reports and their text rendering
//!
//! A [`DiagnosticReport`] is built at the moment a pipeline step fails and
//! rendered into a framed block by [`render`]. Rendering is pure: the same
//! report, options and width always give the same bytes, which is what lets
//! a deferred report replay exactly as it would have printed.

mod layout;

pub use layout::{hline, render, title_line, RenderOptions};

/// Marker shown in place of an omitted optional field
pub const NOT_APPLICABLE: &str = "N/A";

/// Summary used when the caller does not provide one
pub const DEFAULT_BRIEF: &str = "An error occurred while executing your workflow.";

/// A single failure, as shown to the user
///
/// # Examples
///
/// ```
/// use deferr::report::DiagnosticReport;
///
/// let report = DiagnosticReport::new("division by zero")
///     .script("foo.py")
///     .rule("bar");
///
/// assert_eq!(report.message(), "division by zero");
/// assert_eq!(report.rule_name(), Some("bar"));
/// assert!(report.context_text().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticReport {
    brief: String,
    message: String,
    script: Option<String>,
    rule: Option<String>,
    context: Option<String>,
}

impl DiagnosticReport {
    /// New report carrying `message` and the default brief
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            brief: DEFAULT_BRIEF.to_string(),
            message: message.into(),
            script: None,
            rule: None,
            context: None,
        }
    }

    /// Set the one-line summary
    pub fn brief(mut self, brief: impl Into<String>) -> Self {
        self.brief = brief.into();
        self
    }

    /// Name the script that failed
    pub fn script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    /// Name the rule (build step) that failed
    pub fn rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Attach free-text context
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Set or clear the script from an optional value
    pub fn with_script(mut self, script: Option<String>) -> Self {
        self.script = script;
        self
    }

    /// Set or clear the rule from an optional value
    pub fn with_rule(mut self, rule: Option<String>) -> Self {
        self.rule = rule;
        self
    }

    /// Set or clear the context from an optional value
    pub fn with_context(mut self, context: Option<String>) -> Self {
        self.context = context;
        self
    }

    /// Detailed error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// One-line summary
    pub fn brief_text(&self) -> &str {
        &self.brief
    }

    /// Failing script, if any
    pub fn script_name(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Failing rule, if any
    pub fn rule_name(&self) -> Option<&str> {
        self.rule.as_deref()
    }

    /// Extra context, if any
    pub fn context_text(&self) -> Option<&str> {
        self.context.as_deref()
    }
}
