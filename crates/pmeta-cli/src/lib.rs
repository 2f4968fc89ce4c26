//! # pmeta-cli: CLI Tool for Platform Metadata
//!
//! Provides the `pmeta` command-line interface.
//!
//! ## Subcommands
//!
//! - `pmeta validate`: Load and validate one or more metadata files.
//! - `pmeta vocab`: List the allowed values of the fixed vocabularies.
//! - `pmeta show`: Print parsed metadata as JSON.
//!
//! ```bash
//! pmeta validate platforms/northwind
//! pmeta validate --strict --json platforms/*/META.yml
//! pmeta vocab kubernetes_type
//! ```

pub mod logging;
pub mod show;
pub mod validate;
pub mod vocab;

/// Exit code: every input passed.
pub const EXIT_OK: u8 = 0;
/// Exit code: at least one input had violations.
pub const EXIT_INVALID: u8 = 1;
/// Exit code: an input could not be read or parsed.
pub const EXIT_ERROR: u8 = 2;
