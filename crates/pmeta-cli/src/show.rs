//! # Show Subcommand
//!
//! Loads a metadata file and prints the parsed structure as pretty JSON.
//! Violations are logged but do not change the output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use pmeta_schema::Loader;

use crate::EXIT_OK;

/// Arguments for the `pmeta show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Metadata file, or platform directory containing META.yml.
    pub path: PathBuf,
}

/// Execute the show subcommand.
pub fn run_show(args: &ShowArgs) -> Result<u8> {
    let loaded = Loader::new().load_file(&args.path)?;
    let rendered = serde_json::to_string_pretty(&loaded.metadata)
        .context("failed to render metadata as JSON")?;
    println!("{rendered}");
    Ok(EXIT_OK)
}
