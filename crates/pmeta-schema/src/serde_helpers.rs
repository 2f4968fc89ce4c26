//! Deserialization helpers that give every field a visible zero value.
//!
//! Metadata files are written by hand. Keys are routinely left blank
//! (`region:`) or spelled as an explicit null (`aws: ~`), and version-like
//! fields are often unquoted (`version: 1.20`). These helpers make all of
//! those load the same way a missing key does.

use serde::{de, Deserialize, Deserializer};

/// Read a scalar as text. Null and blank become the empty string; unquoted
/// numbers and booleans keep their source spelling.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read a nested block or sequence, treating an explicit null as absent.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read a boolean flag, treating an explicit null as `false`.
///
/// YAML 1.1 spellings (`yes`, `no`, `on`, `off`, `y`, `n`) are accepted in
/// the usual casings, since hand-written files still use them.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Text(String),
    }

    match Option::<RawFlag>::deserialize(deserializer)? {
        None => Ok(false),
        Some(RawFlag::Bool(value)) => Ok(value),
        Some(RawFlag::Text(raw)) => parse_flag(&raw)
            .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(&raw), &"a boolean")),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw {
        "y" | "Y" | "yes" | "Yes" | "YES" | "on" | "On" | "ON" | "true" | "True" | "TRUE" => {
            Some(true)
        }
        "n" | "N" | "no" | "No" | "NO" | "off" | "Off" | "OFF" | "false" | "False" | "FALSE" => {
            Some(false)
        }
        _ => None,
    }
}
