//! Framed text rendering of a [`DiagnosticReport`]

use console::Style;

use super::{DiagnosticReport, NOT_APPLICABLE};

/// Cosmetic settings for the rendered block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Tool name shown (upper-cased) in the title
    pub tool_name: String,
    /// Directory that scripts are annotated with
    pub scripts_dir: String,
    /// Directory that rule files are annotated with
    pub rules_dir: String,
    /// Extension of rule files (without the dot)
    pub rule_extension: String,
    /// Wrap the title and labels in ANSI bold sequences
    pub styled: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tool_name: "deferr".to_string(),
            scripts_dir: "workflow/scripts".to_string(),
            rules_dir: "workflow/rules".to_string(),
            rule_extension: "smk".to_string(),
            styled: true,
        }
    }
}

impl RenderOptions {
    fn emphasize(&self, text: &str) -> String {
        Style::new()
            .black()
            .bold()
            .force_styling(self.styled)
            .apply_to(text)
            .to_string()
    }

    fn annotate_script(&self, script: &str) -> String {
        format!("`{}`", join_repo_path(&self.scripts_dir, script))
    }

    fn annotate_rule(&self, rule: &str) -> String {
        let file = format!("{rule}.{}", self.rule_extension);
        format!("{rule} in `{}`", join_repo_path(&self.rules_dir, &file))
    }
}

/// Horizontal rule spanning `width` columns
pub fn hline(width: usize) -> String {
    "*".repeat(width)
}

/// `<TOOL> ERROR`, padded with spaces on both sides to sit roughly centered
///
/// # Examples
///
/// ```
/// use deferr::report::title_line;
///
/// let title = title_line("deferr", 40);
/// assert_eq!(title.trim(), "DEFERR ERROR");
/// assert_eq!(title.len(), 12 + 2 * 12);
/// ```
pub fn title_line(tool_name: &str, width: usize) -> String {
    let title = format!("{} ERROR", tool_name.to_uppercase());
    let pad = " ".repeat((width.saturating_sub(title.chars().count()) / 2).saturating_sub(2));
    format!("{pad}{title}{pad}")
}

/// Render `report` into the framed diagnostic block
///
/// The output always ends with a newline. Optional fields that were not
/// supplied show as `N/A`.
///
/// # Examples
///
/// ```
/// use deferr::report::{render, DiagnosticReport, RenderOptions};
///
/// let options = RenderOptions { styled: false, ..Default::default() };
/// let text = render(&DiagnosticReport::new("division by zero").script("foo.py"), &options, 40);
///
/// assert!(text.contains("Script: `workflow/scripts/foo.py`"));
/// assert!(text.contains("Rule: N/A"));
/// assert!(text.contains("division by zero"));
/// ```
pub fn render(report: &DiagnosticReport, options: &RenderOptions, width: usize) -> String {
    let hline = hline(width);
    let title = options.emphasize(&title_line(&options.tool_name, width));

    let rule = report
        .rule_name()
        .map_or_else(|| NOT_APPLICABLE.to_string(), |r| options.annotate_rule(r));
    let script = report
        .script_name()
        .map_or_else(|| NOT_APPLICABLE.to_string(), |s| options.annotate_script(s));
    let context = report.context_text().unwrap_or(NOT_APPLICABLE);

    format!(
        "\n{hline}\n\n{title}\n\n{hline}\n\n\
         {} {}\n\
         {} {rule}\n\
         {} {script}\n\n\
         {} {context}\n\n\
         {}\n\n\
         {}\n\
         {hline}\n",
        options.emphasize("Error:"),
        report.brief_text(),
        options.emphasize("Rule:"),
        options.emphasize("Script:"),
        options.emphasize("Context:"),
        options.emphasize("Detailed error message:"),
        report.message(),
    )
}

fn join_repo_path(dir: &str, file: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{dir}/{file}")
    }
}
