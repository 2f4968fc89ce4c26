//! # Constrained Fields
//!
//! A metadata field drawn from a fixed vocabulary can be in one of three
//! states, and validation needs to tell them apart:
//!
//! - **unset**: blank or absent in the source file;
//! - **known**: a recognized member of the vocabulary;
//! - **unknown**: any other non-empty string, kept verbatim.
//!
//! [`Choice`] captures that distinction at the deserialization boundary so
//! unrecognized values never fail the parse. Whether a blank value is
//! acceptable is a validation-time decision.

use std::fmt;

use pmeta_core::Vocabulary;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field whose non-empty values should belong to vocabulary `T`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    /// Blank or absent.
    Unset,
    /// A recognized member.
    Known(T),
    /// A non-empty string outside the vocabulary, verbatim.
    Unknown(String),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T: Vocabulary> Choice<T> {
    /// Classify a raw string. Only the empty string counts as unset.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Unset;
        }
        match raw.parse::<T>() {
            Ok(member) => Self::Known(member),
            Err(_) => Self::Unknown(raw.to_string()),
        }
    }

    /// The recognized member, if any.
    pub fn known(&self) -> Option<T> {
        match self {
            Self::Known(member) => Some(*member),
            _ => None,
        }
    }

    /// The source text: empty when unset.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unset => "",
            Self::Known(member) => member.as_str(),
            Self::Unknown(raw) => raw,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl<T: Vocabulary> From<T> for Choice<T> {
    fn from(member: T) -> Self {
        Self::Known(member)
    }
}

impl<T: Vocabulary> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: Vocabulary> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, T: Vocabulary> Deserialize<'de> for Choice<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = crate::serde_helpers::text(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
