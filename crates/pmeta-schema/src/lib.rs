//! # pmeta-schema: Platform Metadata Schema & Validation
//!
//! Loads a platform's `META.yml`, checks its constrained fields against the
//! fixed vocabularies in `pmeta-core`, and reports what it finds.
//!
//! ## Data Model (`metadata`)
//!
//! [`PlatformMetadata`] and its nested records. Pure data, populated by
//! `serde_yaml`; absent, blank and null keys all load as empty values.
//!
//! ## Validation (`validate`)
//!
//! [`PlatformMetadata::validate`] runs every check, pushes each
//! [`Violation`] into a [`ViolationSink`], and returns a coarse pass/fail
//! result carrying the full [`ValidationReport`].
//!
//! ## Loading (`load`)
//!
//! [`load`] composes deserialization and validation. Parse failures are
//! errors; validation failures are logged and the parsed structure is
//! returned anyway. [`Loader`] exposes the same operation with a chosen
//! [`LoadPolicy`] and sink.
//!
//! ## Crate Policy
//!
//! - Depends only on `pmeta-core` internally.
//! - No I/O besides [`Loader::load_file`]; no shared mutable state. Loads
//!   are independent and may run concurrently.

pub mod choice;
pub mod error;
pub mod load;
pub mod metadata;
mod serde_helpers;
pub mod validate;

pub use choice::Choice;
pub use error::{MetadataError, MetadataResult, ValidationError};
pub use load::{load, metadata_path, platform_label, LoadPolicy, LoadedMetadata, Loader};
pub use metadata::{PlatformMetadata, ProviderDetails, METADATA_FILE};
pub use validate::{RecordingSink, TracingSink, ValidationReport, Violation, ViolationSink};
