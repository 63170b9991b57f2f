use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use deferr::cmd::{self, ReportArgs};
use std::path::PathBuf;
use std::process;

/// Deferred error reports for long-running builds
///
/// deferr records the failure of a pipeline step and prints it again,
/// nicely framed, once the whole build has finished.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a failure (always exits non-zero)
    Report {
        /// Detailed error message
        message: String,

        /// Script that failed
        #[arg(short, long)]
        script: Option<String>,

        /// Rule (build step) that failed
        #[arg(short, long)]
        rule: Option<String>,

        /// Extra context for the failure
        #[arg(short, long)]
        context: Option<String>,

        /// One-line summary of the failure
        #[arg(short, long)]
        brief: Option<String>,

        /// Print the report now instead of deferring it
        #[arg(long)]
        now: bool,

        /// Deferred report file (defaults to .deferr/exception.log)
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Disable bold styling in the report
        #[arg(long)]
        plain: bool,
    },

    /// Print the pending report, if any
    Replay {
        /// Deferred report file (defaults to .deferr/exception.log)
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Remove the pending report, if any
    Clear {
        /// Deferred report file (defaults to .deferr/exception.log)
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Initialize deferr configuration
    Init,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Report {
            message,
            script,
            rule,
            context,
            brief,
            now,
            file,
            plain,
        }) => cmd::cmd_report(&ReportArgs {
            message,
            script,
            rule,
            context,
            brief,
            now,
            file,
            plain,
        }),
        Some(Commands::Replay { file }) => cmd::cmd_replay(file.as_deref()),
        Some(Commands::Clear { file }) => cmd::cmd_clear(file.as_deref()),
        Some(Commands::Init) => cmd::cmd_init(),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(shell, &mut Cli::command());
            Ok(())
        }
        None => {
            println!("deferr v{}", env!("CARGO_PKG_VERSION"));
            println!("Deferred error reports for long-running builds\n");
            println!("Usage: deferr <COMMAND>\n");
            println!("Commands:");
            println!("  report   Record a failure (always exits non-zero)");
            println!("  replay   Print the pending report, if any");
            println!("  clear    Remove the pending report, if any");
            println!("  init     Initialize deferr configuration");
            println!("\nRun 'deferr <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use deferr::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
