//! End-to-end runs of the `pmeta` binary against platform directories.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const VALID: &str = "
customer: {name: Acme, region: EMEA}
infra: {provider: ovh, remote_access: bastion}
product: {name: iris, license: perpetual, support_level: plus}
secrets: {provider: aws}
environments:
  - tag: prod
    os: {name: Debian}
    kubernetes: {type: auto}
";

fn platform(root: &TempDir, name: &str, contents: &str) -> PathBuf {
    let dir = root.path().join(name);
    fs::create_dir(&dir).expect("platform dir");
    fs::write(dir.join("META.yml"), contents).expect("META.yml");
    dir
}

fn pmeta(args: &[&str], paths: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pmeta"))
        .args(args)
        .args(paths)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("run pmeta")
}

#[test]
fn validate_passing_platform() {
    let root = TempDir::new().unwrap();
    let acme = platform(&root, "acme", VALID);
    let output = pmeta(&["validate"], &[&acme]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0), "stdout={stdout}");
    assert!(stdout.contains("PASS acme"));
    assert!(stdout.contains("Platforms: 1/1 passed"));
}

#[test]
fn validate_reports_violations_on_stderr_and_stdout() {
    let root = TempDir::new().unwrap();
    let acme = platform(&root, "acme", VALID);
    let beta = platform(&root, "beta", &VALID.replace("auto}", "nomad}"));
    let output = pmeta(&["validate"], &[&acme, &beta]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("FAIL beta"));
    assert!(stdout.contains("Platforms: 1/2 passed"));
    assert!(stderr
        .contains("beta: empty or invalid Kubernetes provider type in metadata file: 'nomad'"));
}

#[test]
fn validate_json_report() {
    let root = TempDir::new().unwrap();
    let acme = platform(&root, "acme", &VALID.replace("EMEA", "emea"));
    let output = pmeta(&["validate", "--json"], &[&acme]);
    assert_eq!(output.status.code(), Some(1));

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let first = &payload[0];
    assert_eq!(first["platform"], "acme");
    assert_eq!(first["status"], "fail");
    assert_eq!(first["violations"][0]["value"], "emea");
}

#[test]
fn validate_unparseable_platform_exits_2() {
    let root = TempDir::new().unwrap();
    let broken = platform(&root, "broken", "customer: {region: EMEA");
    let output = pmeta(&["validate"], &[&broken]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stdout).contains("ERROR broken"));
}

#[test]
fn show_prints_parsed_metadata() {
    let root = TempDir::new().unwrap();
    let acme = platform(&root, "acme", VALID);
    let output = pmeta(&["show"], &[&acme]);
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(payload["customer"]["region"], "EMEA");
    assert_eq!(payload["environments"][0]["kubernetes"]["type"], "auto");
}

#[test]
fn vocab_lists_values() {
    let output = pmeta(&["vocab", "remote_access"], &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|l| l == "bastion"));

    let output = pmeta(&["vocab", "colour"], &[]);
    assert_eq!(output.status.code(), Some(2));
}
