//! # Error Types
//!
//! Errors raised by the vocabulary layer. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.

use thiserror::Error;

/// Top-level error type for `pmeta-core`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PmetaError {
    /// A string is not a member of the named vocabulary.
    #[error("unknown {vocabulary}: {value:?}")]
    UnknownTerm {
        /// Name of the vocabulary that was consulted (e.g. `region`).
        vocabulary: &'static str,
        /// The rejected input, verbatim.
        value: String,
    },

    /// No vocabulary is registered under the requested name.
    #[error("unknown vocabulary {0:?}")]
    UnknownVocabulary(String),
}
