//! Terminal width detection for report framing

use console::Term;

/// Width used when stdout is not a terminal (pipes, files, CI logs)
pub const DEFAULT_FALLBACK_WIDTH: usize = 80;

/// How the reporter picks the width of the framing rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthPolicy {
    /// Query stdout, falling back to the given width when that fails
    Detect {
        /// Columns to use without a terminal
        fallback: usize,
    },
    /// Always use this many columns
    Fixed(usize),
}

impl WidthPolicy {
    /// Resolve the policy to a column count
    pub fn resolve(&self) -> usize {
        match *self {
            Self::Detect { fallback } => terminal_width(fallback),
            Self::Fixed(width) => width,
        }
    }
}

impl Default for WidthPolicy {
    fn default() -> Self {
        Self::Detect {
            fallback: DEFAULT_FALLBACK_WIDTH,
        }
    }
}

/// Current width of the terminal attached to stdout, or `fallback`
pub fn terminal_width(fallback: usize) -> usize {
    match Term::stdout().size_checked() {
        Some((_rows, cols)) if cols > 0 => usize::from(cols),
        _ => {
            log::debug!("stdout is not a terminal, using fallback width {fallback}");
            fallback
        }
    }
}
