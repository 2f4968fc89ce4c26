//! # Fixed Vocabularies
//!
//! Each constrained metadata field draws its value from one of the closed
//! sets below. The strings are exact and case-sensitive; nothing is trimmed
//! or folded before comparison.
//!
//! | Vocabulary | Members |
//! |------------|---------|
//! | `region` | US-WEST, US-EAST, CALA, EMEA, APAC |
//! | `provider` | aws, ali, gcp, azure, ovh, onprem, kowabunga |
//! | `remote_access` | netgate, netgate-na, netgate-emea, netgate-apac, customer-vpn, bastion, rdp |
//! | `product` | galaxy, flex, pyramid, amberfin, mediacortex, cubeng, brio, control-tower, iris, atlas, kvirt |
//! | `license` | perpetual, subscription, demo |
//! | `support_level` | none, starter, plus, ultimate |
//! | `secrets_provider` | aws |
//! | `os` | Ubuntu, Debian, RedHat, Centos, AmazonLinux2 |
//! | `kubernetes_type` | auto, eks, ack, aks, gke, oks, atlas |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PmetaError;

/// A closed set of recognized strings for one metadata field.
pub trait Vocabulary:
    Copy + Eq + fmt::Debug + fmt::Display + FromStr<Err = PmetaError> + 'static
{
    /// Short identifier of the vocabulary (e.g. `region`).
    const NAME: &'static str;

    /// Every member, in declaration order.
    fn all() -> &'static [Self];

    /// The exact external string for this member.
    fn as_str(&self) -> &'static str;

    /// The allowed strings, in declaration order.
    fn values() -> Vec<&'static str> {
        Self::all().iter().map(|v| v.as_str()).collect()
    }

    /// Whether `value` is a member, compared exactly.
    fn contains(value: &str) -> bool {
        Self::from_str(value).is_ok()
    }
}

/// Declares a vocabulary enum together with its string mapping, `FromStr`,
/// `Display`, and string-based serde impls.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $ty:ident as $name:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $ty {
            $( $(#[$vmeta])* $variant, )+
        }

        impl Vocabulary for $ty {
            const NAME: &'static str = $name;

            fn all() -> &'static [Self] {
                &[$( Self::$variant, )+]
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }
        }

        impl FromStr for $ty {
            type Err = PmetaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok(Self::$variant), )+
                    other => Err(PmetaError::UnknownTerm {
                        vocabulary: $name,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

vocabulary! {
    /// Geographic region the customer is attached to.
    pub enum Region as "region" {
        UsWest => "US-WEST",
        UsEast => "US-EAST",
        /// Caribbean and Latin America.
        Cala => "CALA",
        Emea => "EMEA",
        Apac => "APAC",
    }
}

vocabulary! {
    /// Infrastructure provider hosting the platform.
    pub enum InfraProvider as "provider" {
        Aws => "aws",
        Alibaba => "ali",
        Google => "gcp",
        Azure => "azure",
        Ovh => "ovh",
        OnPrem => "onprem",
        /// Kowabunga private cloud.
        Kowabunga => "kowabunga",
    }
}

vocabulary! {
    /// How operators reach the platform.
    pub enum RemoteAccess as "remote_access" {
        Netgate => "netgate",
        NetgateNa => "netgate-na",
        NetgateEmea => "netgate-emea",
        NetgateApac => "netgate-apac",
        CustomerVpn => "customer-vpn",
        Bastion => "bastion",
        Rdp => "rdp",
    }
}

vocabulary! {
    /// Product deployed on the platform.
    pub enum ProductName as "product" {
        Galaxy => "galaxy",
        Flex => "flex",
        Pyramid => "pyramid",
        Amberfin => "amberfin",
        MediaCortex => "mediacortex",
        CubeNg => "cubeng",
        /// Brio InStream.
        Brio => "brio",
        ControlTower => "control-tower",
        Iris => "iris",
        Atlas => "atlas",
        /// KVM virtualization.
        Kvirt => "kvirt",
    }
}

vocabulary! {
    /// Commercial license model.
    pub enum License as "license" {
        Perpetual => "perpetual",
        Subscription => "subscription",
        Demo => "demo",
    }
}

vocabulary! {
    /// Contracted support tier.
    pub enum SupportLevel as "support_level" {
        None => "none",
        Starter => "starter",
        Plus => "plus",
        Ultimate => "ultimate",
    }
}

vocabulary! {
    /// Backend holding the platform secrets. Only AWS Secrets Manager today.
    pub enum SecretsProvider as "secrets_provider" {
        Aws => "aws",
    }
}

vocabulary! {
    /// Operating system distribution of an environment.
    pub enum OsName as "os" {
        Ubuntu => "Ubuntu",
        Debian => "Debian",
        RedHat => "RedHat",
        Centos => "Centos",
        AmazonLinux2 => "AmazonLinux2",
    }
}

vocabulary! {
    /// Kubernetes flavour backing an environment.
    pub enum KubernetesType as "kubernetes_type" {
        Auto => "auto",
        /// AWS Elastic Kubernetes Service.
        Eks => "eks",
        /// Alibaba Container Service for Kubernetes.
        Ack => "ack",
        /// Azure Kubernetes Service.
        Aks => "aks",
        /// Google Kubernetes Engine.
        Gke => "gke",
        /// OVH Managed Kubernetes Service.
        Oks => "oks",
        Atlas => "atlas",
    }
}

/// Identifiers of every vocabulary, in table order.
pub const VOCABULARY_NAMES: [&str; 9] = [
    Region::NAME,
    InfraProvider::NAME,
    RemoteAccess::NAME,
    ProductName::NAME,
    License::NAME,
    SupportLevel::NAME,
    SecretsProvider::NAME,
    OsName::NAME,
    KubernetesType::NAME,
];

/// Look up the allowed strings of a vocabulary by its identifier.
pub fn values_of(name: &str) -> Result<Vec<&'static str>, PmetaError> {
    let values = match name {
        "region" => Region::values(),
        "provider" => InfraProvider::values(),
        "remote_access" => RemoteAccess::values(),
        "product" => ProductName::values(),
        "license" => License::values(),
        "support_level" => SupportLevel::values(),
        "secrets_provider" => SecretsProvider::values(),
        "os" => OsName::values(),
        "kubernetes_type" => KubernetesType::values(),
        other => return Err(PmetaError::UnknownVocabulary(other.to_string())),
    };
    Ok(values)
}
