mod commands;
mod progress;
mod summary;

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use scrollstitch_core::error::StitchError;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

#[derive(Parser)]
#[command(
    name = "scrollstitch",
    about = "Join overlapping screenshots of a scrolling window into one image"
)]
#[command(version)]
struct Cli {
    /// Enable verbose output (same as --log-level debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Logging level
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stitch a folder of screenshots into one image
    Join(commands::join::JoinArgs),
    /// Print or save the default stitch config as TOML
    Config(commands::config::ConfigArgs),
}

/// Exit status for a pair whose best match score is above the threshold.
const EXIT_ALIGNMENT_FAILURE: u8 = 1;
/// Exit status for every other failure.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(cli.log_level.directive())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Join(args) => commands::join::run(args),
        Commands::Config(args) => commands::config::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let status = exit_status(&err);
            if status == EXIT_ALIGNMENT_FAILURE {
                eprintln!("Error when computing best match for image: {err:#}");
            } else {
                eprintln!("Error: {err:#}");
            }
            ExitCode::from(status)
        }
    }
}

/// Maps a failed run to its process exit status, looking through any added context.
fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<StitchError>() {
        Some(StitchError::AlignmentFailure { .. }) => EXIT_ALIGNMENT_FAILURE,
        _ => EXIT_ERROR,
    }
}
