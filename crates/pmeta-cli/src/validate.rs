//! # Validate Subcommand
//!
//! Loads each given metadata file (or platform directory) and reports
//! the vocabulary violations found in it.
//!
//! Violations are logged as warnings by the loader and also summarized on
//! stdout, either as text or as a JSON array with one entry per input.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;

use pmeta_schema::{
    metadata_path, platform_label, LoadPolicy, Loader, MetadataError, TracingSink,
    ValidationReport,
};

use crate::{EXIT_ERROR, EXIT_INVALID, EXIT_OK};

/// Arguments for the `pmeta validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Metadata files, or platform directories containing META.yml.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Treat violations as load failures instead of warnings.
    #[arg(long)]
    pub strict: bool,

    /// Platform label used in messages. Defaults to the platform directory name.
    /// Only valid with a single PATH.
    #[arg(long)]
    pub label: Option<String>,

    /// Print the report as JSON on stdout.
    #[arg(long)]
    pub json: bool,
}

/// Result of validating one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
    Error,
}

/// Per-input outcome, as printed in the JSON report.
#[derive(Debug, Serialize)]
pub struct Outcome {
    pub platform: String,
    pub path: PathBuf,
    pub status: Status,
    pub violations: ValidationReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every input passes, 1 when any input has
/// violations, 2 when any input could not be read or parsed.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    if args.label.is_some() && args.paths.len() > 1 {
        bail!("--label can only be used with a single PATH");
    }

    let policy = if args.strict {
        LoadPolicy::Strict
    } else {
        LoadPolicy::Lenient
    };
    let mut loader = Loader::new().with_policy(policy);

    let outcomes: Vec<Outcome> = args
        .paths
        .iter()
        .map(|path| validate_one(&mut loader, path, args.label.as_deref()))
        .collect();

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&outcomes).context("failed to render JSON report")?;
        println!("{rendered}");
    } else {
        print_text(&outcomes);
    }

    Ok(exit_code(&outcomes))
}

/// Load and validate a single input, capturing every failure in the outcome.
pub fn validate_one(loader: &mut Loader<TracingSink>, path: &Path, label: Option<&str>) -> Outcome {
    let file = metadata_path(path);
    let platform = label
        .map(str::to_string)
        .unwrap_or_else(|| platform_label(&file));

    let result = match label {
        Some(label) => std::fs::read(&file)
            .map_err(|source| MetadataError::Io {
                path: file.display().to_string(),
                source,
            })
            .and_then(|contents| loader.load(label, &contents)),
        None => loader.load_file(&file),
    };

    let (status, violations, error) = match result {
        Ok(loaded) if loaded.is_valid() => (Status::Pass, loaded.report, None),
        Ok(loaded) => (Status::Fail, loaded.report, None),
        Err(MetadataError::Invalid { source, .. }) => (Status::Fail, source.into(), None),
        Err(err) => (Status::Error, ValidationReport::default(), Some(err.to_string())),
    };

    Outcome {
        platform,
        path: file,
        status,
        violations,
        error,
    }
}

fn print_text(outcomes: &[Outcome]) {
    for outcome in outcomes {
        match outcome.status {
            Status::Pass => println!("PASS {} ({})", outcome.platform, outcome.path.display()),
            Status::Fail => {
                println!(
                    "FAIL {} ({}): {} violation(s)",
                    outcome.platform,
                    outcome.path.display(),
                    outcome.violations.len()
                );
                println!("{}", outcome.violations);
            }
            Status::Error => println!(
                "ERROR {} ({}): {}",
                outcome.platform,
                outcome.path.display(),
                outcome.error.as_deref().unwrap_or("unknown error")
            ),
        }
    }

    let passed = outcomes.iter().filter(|o| o.status == Status::Pass).count();
    println!("Platforms: {}/{} passed", passed, outcomes.len());
}

/// Most severe status across all inputs, as an exit code.
pub fn exit_code(outcomes: &[Outcome]) -> u8 {
    if outcomes.iter().any(|o| o.status == Status::Error) {
        EXIT_ERROR
    } else if outcomes.iter().any(|o| o.status == Status::Fail) {
        EXIT_INVALID
    } else {
        EXIT_OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "
customer: {region: CALA}
infra: {provider: gcp, remote_access: customer-vpn}
product: {name: brio, license: subscription, support_level: starter}
secrets: {provider: aws}
";

    fn write_platform(root: &Path, name: &str, contents: &str) -> PathBuf {
        let dir = root.join(name);
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("META.yml"), contents).unwrap();
        dir
    }

    #[test]
    fn test_validate_one_pass() {
        let root = tempfile::tempdir().unwrap();
        let dir = write_platform(root.path(), "andes", VALID);
        let outcome = validate_one(&mut Loader::new(), &dir, None);
        assert_eq!(outcome.status, Status::Pass);
        assert_eq!(outcome.platform, "andes");
        assert!(outcome.violations.is_empty());
    }

    #[test]
    fn test_validate_one_fail_lenient_and_strict() {
        let root = tempfile::tempdir().unwrap();
        let dir = write_platform(root.path(), "andes", &VALID.replace("brio", "bryo"));

        let lenient = validate_one(&mut Loader::new(), &dir, None);
        assert_eq!(lenient.status, Status::Fail);
        assert_eq!(lenient.violations.len(), 1);

        let mut strict = Loader::new().with_policy(LoadPolicy::Strict);
        let outcome = validate_one(&mut strict, &dir, None);
        assert_eq!(outcome.status, Status::Fail);
        assert_eq!(outcome.violations.violations()[0].value, "bryo");
    }

    #[test]
    fn test_validate_one_label_override() {
        let root = tempfile::tempdir().unwrap();
        let dir = write_platform(root.path(), "andes", VALID);
        let outcome = validate_one(&mut Loader::new(), &dir, Some("custom"));
        assert_eq!(outcome.platform, "custom");
        assert_eq!(outcome.status, Status::Pass);
    }

    #[test]
    fn test_validate_one_errors() {
        let root = tempfile::tempdir().unwrap();
        let missing = validate_one(&mut Loader::new(), &root.path().join("nope"), None);
        assert_eq!(missing.status, Status::Error);

        let dir = write_platform(root.path(), "broken", "customer: [");
        let broken = validate_one(&mut Loader::new(), &dir, None);
        assert_eq!(broken.status, Status::Error);
        assert!(broken
            .error
            .unwrap()
            .contains("broken metadata: unable to unmarshal config"));
    }

    #[test]
    fn test_exit_code_takes_most_severe() {
        let outcome = |status| Outcome {
            platform: String::new(),
            path: PathBuf::new(),
            status,
            violations: ValidationReport::default(),
            error: None,
        };
        assert_eq!(exit_code(&[]), EXIT_OK);
        assert_eq!(exit_code(&[outcome(Status::Pass)]), EXIT_OK);
        assert_eq!(
            exit_code(&[outcome(Status::Pass), outcome(Status::Fail)]),
            EXIT_INVALID
        );
        assert_eq!(
            exit_code(&[outcome(Status::Fail), outcome(Status::Error)]),
            EXIT_ERROR
        );
    }

    #[test]
    fn test_outcome_json_shape() {
        let root = tempfile::tempdir().unwrap();
        let dir = write_platform(root.path(), "andes", &VALID.replace("CALA", "LATAM"));
        let outcome = validate_one(&mut Loader::new(), &dir, None);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "fail");
        assert_eq!(json["platform"], "andes");
        assert_eq!(json["violations"][0]["path"], "customer.region");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_label_with_many_paths_rejected() {
        let args = ValidateArgs {
            paths: vec![PathBuf::from("a"), PathBuf::from("b")],
            strict: false,
            label: Some("x".to_string()),
            json: false,
        };
        assert!(run_validate(&args).is_err());
    }
}
