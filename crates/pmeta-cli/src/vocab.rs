//! # Vocab Subcommand
//!
//! Lists the allowed values of the fixed vocabularies, one per line.

use anyhow::Result;
use clap::Args;

use pmeta_core::{values_of, VOCABULARY_NAMES};

use crate::EXIT_OK;

/// Arguments for the `pmeta vocab` subcommand.
#[derive(Args, Debug)]
pub struct VocabArgs {
    /// Vocabulary to list (e.g. `region`, `kubernetes_type`). Lists all when omitted.
    pub field: Option<String>,
}

/// Execute the vocab subcommand.
pub fn run_vocab(args: &VocabArgs) -> Result<u8> {
    print!("{}", render(args.field.as_deref())?);
    Ok(EXIT_OK)
}

/// Render one vocabulary as a bare value list, or every vocabulary under
/// its name.
pub fn render(field: Option<&str>) -> Result<String> {
    let mut out = String::new();
    match field {
        Some(name) => {
            for value in values_of(name)? {
                out.push_str(value);
                out.push('\n');
            }
        }
        None => {
            for name in VOCABULARY_NAMES {
                out.push_str(&format!("{name}: {}\n", values_of(name)?.join(", ")));
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_single_vocabulary() {
        let out = render(Some("support_level")).unwrap();
        assert_eq!(out, "none\nstarter\nplus\nultimate\n");
    }

    #[test]
    fn render_all_vocabularies() {
        let out = render(None).unwrap();
        assert_eq!(out.lines().count(), VOCABULARY_NAMES.len());
        assert!(out.starts_with("region: US-WEST, US-EAST, CALA, EMEA, APAC\n"));
        assert!(out.contains("secrets_provider: aws\n"));
    }

    #[test]
    fn render_unknown_vocabulary() {
        let err = render(Some("color")).unwrap_err();
        assert!(err.to_string().contains("color"));
    }
}
