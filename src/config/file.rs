//! Configuration file data structures

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::paths::KnownFiles;
use crate::report::RenderOptions;
use crate::term::{WidthPolicy, DEFAULT_FALLBACK_WIDTH};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".deferr.toml";

/// deferr configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// How reports are rendered and where they are stored
    #[serde(default)]
    pub report: ReportSettings,
}

/// `[report]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ReportSettings {
    /// Name shown in the report title
    pub tool_name: String,

    /// Directory scripts are annotated with
    pub scripts_dir: String,

    /// Directory rule files are annotated with
    pub rules_dir: String,

    /// Extension of rule files
    pub rule_extension: String,

    /// Width used when stdout is not a terminal
    pub fallback_width: usize,

    /// Fixed width, disables terminal detection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,

    /// Emit ANSI emphasis around the title and labels
    pub styled: bool,

    /// Deferred report location, relative to the project root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception_file: Option<PathBuf>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        let render = RenderOptions::default();
        Self {
            tool_name: render.tool_name,
            scripts_dir: render.scripts_dir,
            rules_dir: render.rules_dir,
            rule_extension: render.rule_extension,
            fallback_width: DEFAULT_FALLBACK_WIDTH,
            width: None,
            styled: render.styled,
            exception_file: None,
        }
    }
}

impl ReportSettings {
    /// Validate width settings
    pub fn validate(&self) -> Result<()> {
        if self.fallback_width == 0 {
            anyhow::bail!("fallback-width must be greater than 0");
        }
        if self.width == Some(0) {
            anyhow::bail!("width must be greater than 0");
        }
        if self.tool_name.trim().is_empty() {
            anyhow::bail!("tool-name cannot be empty");
        }
        Ok(())
    }

    /// Cosmetic settings for the renderer
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            tool_name: self.tool_name.clone(),
            scripts_dir: self.scripts_dir.clone(),
            rules_dir: self.rules_dir.clone(),
            rule_extension: self.rule_extension.clone(),
            styled: self.styled,
        }
    }

    /// Width policy: a fixed width wins over detection
    pub fn width_policy(&self) -> WidthPolicy {
        match self.width {
            Some(width) => WidthPolicy::Fixed(width),
            None => WidthPolicy::Detect {
                fallback: self.fallback_width,
            },
        }
    }
}

impl ConfigFile {
    /// Known file locations for a project rooted at `project_root`
    ///
    /// # Examples
    ///
    /// ```
    /// use deferr::config::ConfigFile;
    /// use std::path::Path;
    ///
    /// let mut config = ConfigFile::default();
    /// config.report.exception_file = Some("logs/failure.log".into());
    ///
    /// let files = config.known_files(Path::new("/work"));
    /// assert_eq!(files.exception, Path::new("/work/logs/failure.log"));
    /// ```
    pub fn known_files(&self, project_root: &Path) -> KnownFiles {
        let files = KnownFiles::for_root(project_root);
        match &self.report.exception_file {
            Some(path) => files.with_exception(project_root.join(path)),
            None => files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::loader::ConfigLoader;
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_report_settings_default_matches_renderer_defaults() {
        let settings = ReportSettings::default();

        assert_eq!(settings.render_options(), RenderOptions::default());
        assert_eq!(settings.fallback_width, DEFAULT_FALLBACK_WIDTH);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_width_policy_prefers_fixed_width() {
        let settings = ReportSettings {
            width: Some(100),
            ..Default::default()
        };
        assert_eq!(settings.width_policy(), WidthPolicy::Fixed(100));

        let settings = ReportSettings {
            fallback_width: 60,
            ..Default::default()
        };
        assert_eq!(
            settings.width_policy(),
            WidthPolicy::Detect { fallback: 60 }
        );
    }

    #[test]
    fn test_validate_rejects_zero_widths() {
        let zero_fallback = ReportSettings {
            fallback_width: 0,
            ..Default::default()
        };
        let zero_width = ReportSettings {
            width: Some(0),
            ..Default::default()
        };

        assert!(zero_fallback.validate().is_err());
        assert!(zero_width.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_tool_name() {
        let settings = ReportSettings {
            tool_name: "  ".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_known_files_default_layout() {
        let config = ConfigFile::default();
        let files = config.known_files(Path::new("/proj"));

        assert_eq!(files, KnownFiles::for_root(Path::new("/proj")));
    }

    #[test]
    fn test_config_file_save_and_load_preserves_values() {
        let temp_dir = TempDir::new().unwrap();

        let config = ConfigFile {
            report: ReportSettings {
                tool_name: "showyourwork".to_string(),
                width: Some(72),
                styled: false,
                exception_file: Some(PathBuf::from("build/exception.log")),
                ..Default::default()
            },
        };

        ConfigLoader::save(&config, temp_dir.path()).unwrap();
        let loaded = ConfigLoader::load(temp_dir.path()).unwrap();

        assert_eq!(loaded, config);
    }
}
