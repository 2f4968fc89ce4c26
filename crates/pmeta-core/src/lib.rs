//! # pmeta-core: Foundational Types for Platform Metadata
//!
//! Every managed platform is described by a `META.yml` file. A handful of
//! its fields may only hold values drawn from a fixed vocabulary: the
//! customer region, the infrastructure provider, the product name, and so
//! on. This crate defines each of those vocabularies once, as a closed enum,
//! together with the exact external string each variant maps to.
//!
//! ## Key Design Principles
//!
//! 1. **One enum per vocabulary.** `Region`, `InfraProvider`, `RemoteAccess`,
//!    `ProductName`, `License`, `SupportLevel`, `SecretsProvider`, `OsName`,
//!    `KubernetesType`. Adding a member forces every exhaustive `match` to
//!    handle it.
//!
//! 2. **Exact string mapping.** Parsing is case-sensitive with no trimming or
//!    normalization: `"aws"` is a provider, `"AWS"` is not.
//!
//! 3. **Uniform access through [`Vocabulary`].** Validation code is written
//!    once, generically, against the trait.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `pmeta-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod vocabulary;

pub use error::PmetaError;
pub use vocabulary::{
    InfraProvider, KubernetesType, License, OsName, ProductName, Region, RemoteAccess,
    SecretsProvider, SupportLevel, Vocabulary, values_of, VOCABULARY_NAMES,
};
