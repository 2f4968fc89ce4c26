//! # Load Entry Point
//!
//! Deserializes raw `META.yml` bytes into a [`PlatformMetadata`] and runs
//! validation over the result.
//!
//! Parse failures are fatal. Validation failures are not, under the default
//! [`LoadPolicy::Lenient`]: each violation is reported through the sink, a
//! summary is logged at error level, and the parsed structure is still
//! returned so callers can proceed with best-effort data. Under
//! [`LoadPolicy::Strict`] the same condition becomes [`MetadataError::Invalid`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{MetadataError, MetadataResult};
use crate::metadata::{PlatformMetadata, METADATA_FILE};
use crate::validate::{TracingSink, ValidationReport, ViolationSink};

/// What a load does with a document that parses but fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Log the violations and return the metadata anyway.
    #[default]
    Lenient,
    /// Reject the document.
    Strict,
}

/// Parsed metadata together with the violations found in it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedMetadata {
    pub metadata: PlatformMetadata,
    pub report: ValidationReport,
}

impl LoadedMetadata {
    /// Whether every constrained field holds a recognized value.
    pub fn is_valid(&self) -> bool {
        self.report.is_empty()
    }
}

/// Loads metadata documents with a fixed policy and violation sink.
///
/// Each call is independent; the loader holds no state besides its sink.
#[derive(Debug, Default)]
pub struct Loader<S = TracingSink> {
    policy: LoadPolicy,
    sink: S,
}

impl Loader<TracingSink> {
    /// A lenient loader that logs violations through `tracing`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: ViolationSink> Loader<S> {
    /// Use `policy` for subsequent loads.
    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the violation sink.
    pub fn with_sink<T: ViolationSink>(self, sink: T) -> Loader<T> {
        Loader {
            policy: self.policy,
            sink,
        }
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Deserialize `contents` and validate the result.
    ///
    /// `label` names the platform in every emitted message and error.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Parse`] if `contents` cannot be deserialized;
    /// the validator is not run. Under [`LoadPolicy::Strict`], returns
    /// [`MetadataError::Invalid`] if validation finds any violation.
    pub fn load(&mut self, label: &str, contents: &[u8]) -> MetadataResult<LoadedMetadata> {
        let metadata = parse(label, contents).map_err(|err| {
            tracing::error!("{err}");
            err
        })?;

        let report = match metadata.validate(label, &mut self.sink) {
            Ok(()) => ValidationReport::default(),
            Err(source) => {
                let report = source.report().clone();
                let err = MetadataError::Invalid {
                    label: label.to_string(),
                    source,
                };
                tracing::error!(violations = report.len(), "{err}");
                if self.policy == LoadPolicy::Strict {
                    return Err(err);
                }
                report
            }
        };

        tracing::debug!(
            platform = label,
            environments = metadata.environments.len(),
            valid = report.is_empty(),
            "loaded platform metadata"
        );

        Ok(LoadedMetadata { metadata, report })
    }

    /// Read and load a metadata file.
    ///
    /// `path` is either the metadata file itself or a platform directory
    /// containing [`METADATA_FILE`]. The label is the platform directory
    /// name.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Io`] if the file cannot be read, otherwise
    /// the same errors as [`Loader::load`].
    pub fn load_file(&mut self, path: &Path) -> MetadataResult<LoadedMetadata> {
        let file = metadata_path(path);
        let contents = std::fs::read(&file).map_err(|source| MetadataError::Io {
            path: file.display().to_string(),
            source,
        })?;
        self.load(&platform_label(&file), &contents)
    }
}

/// Deserialize and validate `contents`, logging violations through `tracing`.
///
/// Validation failures are logged but never returned: the parsed structure
/// comes back whenever deserialization succeeds.
///
/// # Errors
///
/// Returns [`MetadataError::Parse`] if `contents` cannot be deserialized.
pub fn load(label: &str, contents: &[u8]) -> MetadataResult<PlatformMetadata> {
    Loader::new().load(label, contents).map(|loaded| loaded.metadata)
}

/// Resolve a platform directory to its metadata file; other paths are
/// returned unchanged.
pub fn metadata_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(METADATA_FILE)
    } else {
        path.to_path_buf()
    }
}

/// Label for a metadata file: its parent directory's name, which by
/// convention is the platform name.
pub fn platform_label(file: &Path) -> String {
    file.parent()
        .and_then(|dir| dir.file_name())
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| file.display().to_string())
}

fn parse(label: &str, contents: &[u8]) -> MetadataResult<PlatformMetadata> {
    let parse_err = |source| MetadataError::Parse {
        label: label.to_string(),
        source,
    };

    // Only the first document of a multi-document stream is decoded.
    let Some(document) = serde_yaml::Deserializer::from_slice(contents).next() else {
        return serde_yaml::from_slice::<serde_yaml::Value>(contents)
            .map(|_| PlatformMetadata::default())
            .map_err(parse_err);
    };

    // An empty or comment-only document carries no keys at all.
    let probe = serde_yaml::Value::deserialize(document).map_err(parse_err)?;
    if probe.is_null() {
        return Ok(PlatformMetadata::default());
    }
    match serde_yaml::Deserializer::from_slice(contents).next() {
        Some(document) => PlatformMetadata::deserialize(document).map_err(parse_err),
        None => Ok(PlatformMetadata::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::RecordingSink;

    const VALID: &str = "
customer: {region: EMEA}
infra: {provider: azure, remote_access: rdp}
product: {name: iris, license: demo, support_level: none}
secrets: {provider: aws}
";

    #[test]
    fn test_empty_document_loads_as_default() {
        let mut loader = Loader::new().with_sink(RecordingSink::new());
        let loaded = loader.load("ptf", b"").unwrap();
        assert_eq!(loaded.metadata, PlatformMetadata::default());
        assert_eq!(loaded.report.len(), 7);
    }

    #[test]
    fn test_comment_only_document_loads_as_default() {
        let loaded = Loader::new()
            .with_sink(RecordingSink::new())
            .load("ptf", b"# nothing here\n")
            .unwrap();
        assert_eq!(loaded.metadata, PlatformMetadata::default());
    }

    #[test]
    fn test_parse_error_message() {
        let err = load("acme", b"customer: [unterminated").unwrap_err();
        assert!(matches!(err, MetadataError::Parse { .. }));
        assert!(err
            .to_string()
            .starts_with("acme metadata: unable to unmarshal config ("));
    }

    #[test]
    fn test_only_first_document_is_decoded() {
        let contents = format!("{VALID}---\ncustomer: {{region: APAC}}\n");
        let mut loader = Loader::new().with_sink(RecordingSink::new());
        let loaded = loader.load("acme", contents.as_bytes()).unwrap();
        assert!(loaded.is_valid());
        assert_eq!(loaded.metadata.customer.region.as_str(), "EMEA");
    }

    #[test]
    fn test_syntax_error_in_first_document_is_a_parse_error() {
        let err = load("acme", b"customer: [\n---\ncustomer: {}\n").unwrap_err();
        assert!(matches!(err, MetadataError::Parse { .. }));
    }

    #[test]
    fn test_wrong_shape_is_a_parse_error() {
        let err = load("acme", b"environments: 12\n").unwrap_err();
        assert!(matches!(err, MetadataError::Parse { .. }));
    }

    #[test]
    fn test_lenient_returns_metadata_despite_violations() {
        let contents = VALID.replace("EMEA", "MARS");
        let mut loader = Loader::new().with_sink(RecordingSink::new());
        let loaded = loader.load("acme", contents.as_bytes()).unwrap();
        assert!(!loaded.is_valid());
        assert_eq!(loaded.metadata.customer.region.as_str(), "MARS");
        assert_eq!(loader.sink().lines().len(), 1);
    }

    #[test]
    fn test_strict_rejects_violations() {
        let contents = VALID.replace("rdp", "telnet");
        let mut loader = Loader::new()
            .with_policy(LoadPolicy::Strict)
            .with_sink(RecordingSink::new());
        let err = loader.load("acme", contents.as_bytes()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "acme: metadata file seems to be invalid and with unsupported keys/values (invalid value)"
        );
        match err {
            MetadataError::Invalid { source, .. } => {
                let report = ValidationReport::from(source);
                assert_eq!(report.violations()[0].value, "telnet");
            }
            other => panic!("expected Invalid, got {other}"),
        }
        assert_eq!(loader.into_sink().lines().len(), 1);
    }

    #[test]
    fn test_strict_accepts_valid() {
        let mut loader = Loader::new()
            .with_policy(LoadPolicy::Strict)
            .with_sink(RecordingSink::new());
        assert_eq!(loader.policy(), LoadPolicy::Strict);
        assert!(loader.load("acme", VALID.as_bytes()).unwrap().is_valid());
    }

    #[test]
    fn test_metadata_path_resolves_directories() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path();
        assert_eq!(metadata_path(dir), dir.join(METADATA_FILE));
        let file = Path::new("/nonexistent/acme/META.yml");
        assert_eq!(metadata_path(file), file);
    }

    #[test]
    fn test_platform_label_is_parent_directory() {
        assert_eq!(platform_label(Path::new("/srv/platforms/acme/META.yml")), "acme");
        assert_eq!(platform_label(Path::new("META.yml")), "META.yml");
    }
}
