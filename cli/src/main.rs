//! # shastream CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shastream_cli::check::{run_check, CheckArgs};
use shastream_cli::sum::{run_sum, SumArgs};
use shastream_cli::text::{run_text, TextArgs};

/// Streaming SHA-256 digests of files, stdin and strings.
#[derive(Parser, Debug)]
#[command(name = "shastream", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the SHA-256 digest of each file (or stdin).
    Sum(SumArgs),

    /// Print the SHA-256 digest of each string operand.
    Text(TextArgs),

    /// Verify files against a checksum list.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level; logs go to stderr so stdout stays parseable.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    tracing::debug!("shastream v{} starting", env!("CARGO_PKG_VERSION"));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match cli.command {
        Commands::Sum(args) => run_sum(&args, &mut out),
        Commands::Text(args) => run_text(&args, &mut out),
        Commands::Check(args) => run_check(&args, &mut out),
    };
    let result = result.and_then(|code| {
        out.flush()?;
        Ok(code)
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
