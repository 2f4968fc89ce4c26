//! # Metadata Validation
//!
//! Checks every constrained field of a [`PlatformMetadata`] against its
//! fixed vocabulary and reports every violation, not just the first.
//!
//! ## Rules
//!
//! Seven platform-wide fields are required to hold a recognized value; a
//! blank value is reported as "empty or invalid":
//!
//! | Path | Field | Vocabulary |
//! |------|-------|------------|
//! | `customer.region` | customer region | [`Region`] |
//! | `infra.provider` | infra provider | [`InfraProvider`] |
//! | `infra.remote_access` | infra remote access | [`RemoteAccess`] |
//! | `product.name` | product name | [`ProductName`] |
//! | `product.license` | product license | [`License`] |
//! | `product.support_level` | product support level | [`SupportLevel`] |
//! | `secrets.provider` | secrets provider | [`SecretsProvider`] |
//!
//! Then, for every environment in source order, the OS name and the
//! Kubernetes type are checked only when non-blank. A blank value there
//! means "not specified" and is never a violation.
//!
//! Free-text fields (country, currency, domains, secret suffixes) are not
//! checked.
//!
//! ## Reporting
//!
//! Violations are returned as a [`ValidationReport`] and also pushed, in
//! order, into a caller-supplied [`ViolationSink`]. [`TracingSink`] logs one
//! warning per violation:
//!
//! ```text
//! <label>: empty or invalid <field> in metadata file: '<value>'
//! ```

use std::fmt;

use pmeta_core::{
    InfraProvider, KubernetesType, License, OsName, ProductName, Region, RemoteAccess,
    SecretsProvider, SupportLevel, Vocabulary,
};
use serde::Serialize;

use crate::choice::Choice;
use crate::error::ValidationError;
use crate::metadata::PlatformMetadata;

/// One constrained field holding an unrecognized (or required-but-blank) value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Key path of the field in the metadata file, e.g. `environments[1].os.name`.
    pub path: String,
    /// Human description of the field, e.g. `OS name`.
    pub field: &'static str,
    /// The offending value, verbatim. Empty when a required field is blank.
    pub value: String,
    /// The values that would have been accepted.
    pub expected: Vec<&'static str>,
}

impl Violation {
    fn new<T: Vocabulary>(path: impl Into<String>, field: &'static str, value: &str) -> Self {
        Self {
            path: path.into(),
            field,
            value: value.to_string(),
            expected: T::values(),
        }
    }

    /// The log line for this violation, prefixed with the platform label.
    pub fn message(&self, label: &str) -> String {
        format!(
            "{label}: empty or invalid {} in metadata file: '{}'",
            self.field, self.value
        )
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  {}: '{}' is not one of [{}]",
            self.path,
            self.value,
            self.expected.join(", ")
        )
    }
}

/// Ordered collection of violations found in one metadata document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations, in check order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }

    /// Flag `choice` unless it holds a recognized member.
    fn require<T: Vocabulary>(&mut self, choice: &Choice<T>, path: &str, field: &'static str) {
        if !choice.is_known() {
            self.violations
                .push(Violation::new::<T>(path, field, choice.as_str()));
        }
    }

    /// Flag `choice` only when it is non-blank and unrecognized.
    fn optional<T: Vocabulary>(&mut self, choice: &Choice<T>, path: String, field: &'static str) {
        if let Choice::Unknown(raw) = choice {
            self.violations.push(Violation::new::<T>(path, field, raw));
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// Receives violations as validation finds them.
pub trait ViolationSink {
    /// Called once per violation, in check order.
    fn report(&mut self, label: &str, violation: &Violation);
}

impl<S: ViolationSink + ?Sized> ViolationSink for &mut S {
    fn report(&mut self, label: &str, violation: &Violation) {
        (**self).report(label, violation);
    }
}

/// Logs each violation as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ViolationSink for TracingSink {
    fn report(&mut self, label: &str, violation: &Violation) {
        tracing::warn!(
            platform = label,
            path = %violation.path,
            "{}",
            violation.message(label)
        );
    }
}

/// Keeps the rendered message of each violation.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    lines: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl ViolationSink for RecordingSink {
    fn report(&mut self, label: &str, violation: &Violation) {
        self.lines.push(violation.message(label));
    }
}

impl PlatformMetadata {
    /// Collect every violation without reporting anything.
    pub fn violations(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        report.require::<Region>(&self.customer.region, "customer.region", "customer region");
        report.require::<InfraProvider>(&self.infra.provider, "infra.provider", "infra provider");
        report.require::<RemoteAccess>(
            &self.infra.remote_access,
            "infra.remote_access",
            "infra remote access",
        );
        report.require::<ProductName>(&self.product.name, "product.name", "product name");
        report.require::<License>(&self.product.license, "product.license", "product license");
        report.require::<SupportLevel>(
            &self.product.support_level,
            "product.support_level",
            "product support level",
        );
        report.require::<SecretsProvider>(
            &self.secrets.provider,
            "secrets.provider",
            "secrets provider",
        );

        for (i, env) in self.environments.iter().enumerate() {
            report.optional::<OsName>(
                &env.os.name,
                format!("environments[{i}].os.name"),
                "OS name",
            );
            report.optional::<KubernetesType>(
                &env.kubernetes.kind,
                format!("environments[{i}].kubernetes.type"),
                "Kubernetes provider type",
            );
        }

        report
    }

    /// Validate every constrained field, pushing each violation into `sink`.
    ///
    /// `label` identifies the platform in reported messages only.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] carrying the full report if
    /// any field failed. All checks run regardless of earlier failures.
    pub fn validate(
        &self,
        label: &str,
        sink: &mut dyn ViolationSink,
    ) -> Result<(), ValidationError> {
        let report = self.violations();
        for violation in &report {
            sink.report(label, violation);
        }
        if report.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::InvalidValue(report))
        }
    }
}
