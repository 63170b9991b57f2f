//! Command handlers for the deferr CLI
//!
//! Each submodule handles a specific CLI command.

pub mod clear;
pub mod completions;
pub mod init;
pub mod replay;
pub mod report;

pub use clear::cmd_clear;
pub use completions::cmd_completions;
pub use init::cmd_init;
pub use replay::cmd_replay;
pub use report::{cmd_report, ReportArgs};
