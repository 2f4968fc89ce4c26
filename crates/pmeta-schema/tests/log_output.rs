//! The log lines emitted while loading, captured through a scoped
//! `tracing` subscriber.

use std::io;
use std::sync::{Arc, Mutex};

use pmeta_schema::load;
use tracing_subscriber::fmt::MakeWriter;

const VALID: &str = "
customer: {region: APAC}
infra: {provider: ovh, remote_access: netgate}
product: {name: atlas, license: perpetual, support_level: ultimate}
secrets: {provider: aws}
";

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with warn-and-above events written to the returned buffer.
fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let buffer = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, buffer.lines())
}

#[test]
fn test_valid_document_logs_nothing() {
    let (result, lines) = capture(|| load("zenith", VALID.as_bytes()));
    assert!(result.is_ok());
    assert!(lines.is_empty(), "{lines:?}");
}

#[test]
fn test_lenient_load_logs_warning_and_summary() {
    let contents = VALID.replace("APAC", "MARS");
    let (result, lines) = capture(|| load("zenith", contents.as_bytes()));

    assert_eq!(result.unwrap().customer.region.as_str(), "MARS");
    assert_eq!(lines.len(), 2, "{lines:?}");

    let warnings: Vec<&String> = lines.iter().filter(|l| l.contains("WARN")).collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0]
        .contains("zenith: empty or invalid customer region in metadata file: 'MARS'"));

    let errors: Vec<&String> = lines.iter().filter(|l| l.contains("ERROR")).collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains(
        "zenith: metadata file seems to be invalid and with unsupported keys/values (invalid value)"
    ));
}

#[test]
fn test_parse_failure_logs_one_error() {
    let (result, lines) = capture(|| load("zenith", b"customer: {region: APAC"));
    assert!(result.is_err());
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].contains("ERROR"));
    assert!(lines[0].contains("zenith metadata: unable to unmarshal config ("));
}
