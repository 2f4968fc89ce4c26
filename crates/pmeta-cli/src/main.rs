//! # pmeta CLI entry point
//!
//! Parses command-line arguments, installs the tracing subscriber, and
//! dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use pmeta_cli::logging::{self, LogFormat};
use pmeta_cli::show::{run_show, ShowArgs};
use pmeta_cli::validate::{run_validate, ValidateArgs};
use pmeta_cli::vocab::{run_vocab, VocabArgs};
use pmeta_cli::EXIT_ERROR;

/// Platform metadata toolchain.
///
/// Validates `META.yml` files against the fixed vocabularies, lists those
/// vocabularies, and prints parsed metadata as JSON.
#[derive(Parser, Debug)]
#[command(name = "pmeta", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Format of log lines written to stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load and validate platform metadata files.
    Validate(ValidateArgs),

    /// List the allowed values of the fixed vocabularies.
    Vocab(VocabArgs),

    /// Print parsed platform metadata as JSON.
    Show(ShowArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_format);
    tracing::debug!("pmeta CLI starting");

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Vocab(args) => run_vocab(&args),
        Commands::Show(args) => run_show(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
