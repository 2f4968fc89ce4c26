//! # Error Types
//!
//! Two independent failure classes:
//!
//! - [`MetadataError::Parse`]: the bytes are not a metadata document at
//!   all. Fatal to a load; no structure is returned.
//! - [`ValidationError`]: the document parsed but one or more constrained
//!   fields hold unrecognized values. Non-fatal under the default lenient
//!   policy; surfaced as [`MetadataError::Invalid`] only in strict mode.

use thiserror::Error;

use crate::validate::ValidationReport;

/// Outcome of validating an already-parsed structure.
#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    /// At least one constrained field holds an unrecognized value.
    #[error("invalid value")]
    InvalidValue(ValidationReport),
}

impl ValidationError {
    /// The violations behind this error.
    pub fn report(&self) -> &ValidationReport {
        match self {
            Self::InvalidValue(report) => report,
        }
    }
}

impl From<ValidationError> for ValidationReport {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidValue(report) => report,
        }
    }
}

/// Error while loading a metadata file.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// The content could not be deserialized.
    #[error("{label} metadata: unable to unmarshal config ({source})")]
    Parse {
        /// Label of the platform being loaded.
        label: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The content parsed but failed validation under the strict policy.
    #[error("{label}: metadata file seems to be invalid and with unsupported keys/values ({source})")]
    Invalid {
        /// Label of the platform being loaded.
        label: String,
        #[source]
        source: ValidationError,
    },

    /// The metadata file could not be read.
    #[error("cannot read metadata file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for load results.
pub type MetadataResult<T> = Result<T, MetadataError>;
