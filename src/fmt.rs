//! Shared console output helpers

use console::Emoji;

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Render a path the way command output shows it
///
/// # Examples
///
/// ```
/// use deferr::fmt::display_path;
/// use std::path::Path;
///
/// assert_eq!(display_path(Path::new(".deferr/exception.log")), "`.deferr/exception.log`");
/// ```
pub fn display_path(path: &std::path::Path) -> String {
    format!("`{}`", path.display())
}
