//! # Platform Metadata Data Model
//!
//! The in-memory form of a platform's `META.yml`. Top-level keys map one to
//! one onto the fields of [`PlatformMetadata`]:
//!
//! ```text
//! PlatformMetadata
//! ├── customer      (name, region, country)
//! ├── infra         (cc, cost, provider, dch, remote_access, satellite)
//! ├── aws / azure / kowabunga   (provider-specific extensions)
//! ├── requirements  (ansible, terraform)
//! ├── product       (name, license, support_level, monitored)
//! ├── secrets       (provider, sm, id, naming suffixes)
//! └── environments  [tag, name, os, kubernetes, flex, pyramid, ...]
//! ```
//!
//! These types are plain data: they are populated by the deserializer and
//! never mutated afterwards. Every field has a visible zero value, so a
//! missing key, a blank key, and an explicit null all load identically.
//! Unrecognized keys are ignored.
//!
//! Fields drawn from a fixed vocabulary are typed [`Choice`], which keeps
//! unrecognized strings instead of failing the parse. Checking them is the
//! job of [`crate::validate`].

use pmeta_core::{
    InfraProvider, KubernetesType, License, OsName, ProductName, Region, RemoteAccess,
    SecretsProvider, SupportLevel,
};
use serde::{Deserialize, Serialize};

use crate::choice::Choice;
use crate::serde_helpers::{flag, nullable, text};

/// Conventional file name of a platform's metadata file.
pub const METADATA_FILE: &str = "META.yml";

/// Default suffix of the Ansible Vault key secret.
pub const VAULT_KEY_SUFFIX_DEFAULT: &str = "ansible_vault";
/// Default suffix of the SOPS key creation-date secret.
pub const SOPS_CREATED_AT_SUFFIX_DEFAULT: &str = "sops_created_at";
/// Default suffix of the SOPS public key secret.
pub const SOPS_PUBLIC_KEY_SUFFIX_DEFAULT: &str = "sops_public_key";
/// Default suffix of the SOPS secret key secret.
pub const SOPS_SECRET_KEY_SUFFIX_DEFAULT: &str = "sops_secret_key";

// ---------------------------------------------------------------------------
// Root
// ---------------------------------------------------------------------------

/// Root definition of a managed platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformMetadata {
    #[serde(deserialize_with = "nullable")]
    pub customer: Customer,
    #[serde(deserialize_with = "nullable")]
    pub infra: Infra,
    #[serde(deserialize_with = "nullable")]
    pub aws: AwsInfra,
    #[serde(deserialize_with = "nullable")]
    pub azure: AzureInfra,
    #[serde(deserialize_with = "nullable")]
    pub kowabunga: KowabungaInfra,
    #[serde(deserialize_with = "nullable")]
    pub requirements: Requirements,
    #[serde(deserialize_with = "nullable")]
    pub product: Product,
    #[serde(deserialize_with = "nullable")]
    pub secrets: Secrets,
    /// Environments in source order.
    #[serde(deserialize_with = "nullable")]
    pub environments: Vec<Environment>,
}

/// The provider-specific infrastructure block selected by `infra.provider`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProviderDetails<'a> {
    Aws(&'a AwsInfra),
    Azure(&'a AzureInfra),
    Kowabunga(&'a KowabungaInfra),
}

impl PlatformMetadata {
    /// The one provider extension block that is meaningful for this platform.
    ///
    /// All three blocks are always present structurally; only the block
    /// matching a recognized `infra.provider` carries information. Providers
    /// without an extension block, and unset or unrecognized providers,
    /// yield `None`.
    pub fn provider_details(&self) -> Option<ProviderDetails<'_>> {
        match self.infra.provider.known()? {
            InfraProvider::Aws => Some(ProviderDetails::Aws(&self.aws)),
            InfraProvider::Azure => Some(ProviderDetails::Azure(&self.azure)),
            InfraProvider::Kowabunga => Some(ProviderDetails::Kowabunga(&self.kowabunga)),
            InfraProvider::Alibaba
            | InfraProvider::Google
            | InfraProvider::Ovh
            | InfraProvider::OnPrem => None,
        }
    }

    /// First environment carrying `tag`.
    pub fn environment(&self, tag: &str) -> Option<&Environment> {
        self.environments.iter().find(|e| e.tag == tag)
    }

    /// Active environments, in source order.
    pub fn active_environments(&self) -> impl Iterator<Item = &Environment> {
        self.environments.iter().filter(|e| e.active)
    }
}

// ---------------------------------------------------------------------------
// Customer & infrastructure
// ---------------------------------------------------------------------------

/// Customer-specific information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    #[serde(deserialize_with = "text")]
    pub name: String,
    pub region: Choice<Region>,
    /// Free text; not checked against any vocabulary.
    #[serde(deserialize_with = "text")]
    pub country: String,
}

/// Infrastructure-specific information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Infra {
    #[serde(rename = "cc", deserialize_with = "text")]
    pub cost_center: String,
    #[serde(deserialize_with = "nullable")]
    pub cost: Cost,
    pub provider: Choice<InfraProvider>,
    #[serde(rename = "dch", deserialize_with = "flag")]
    pub is_dch: bool,
    pub remote_access: Choice<RemoteAccess>,
    #[serde(deserialize_with = "text")]
    pub remote_details: String,
    #[serde(rename = "satellite", deserialize_with = "flag")]
    pub is_satellite: bool,
}

/// Running cost of the infrastructure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cost {
    #[serde(deserialize_with = "nullable")]
    pub price: f64,
    #[serde(deserialize_with = "text")]
    pub currency: String,
}

/// AWS-specific infrastructure details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsInfra {
    #[serde(deserialize_with = "text")]
    pub region: String,
    #[serde(deserialize_with = "text")]
    pub role_arn: String,
}

/// Azure-specific infrastructure details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AzureInfra {
    #[serde(deserialize_with = "text")]
    pub resource_group: String,
}

/// Kowabunga private-cloud details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KowabungaInfra {
    /// Admin API endpoint, e.g. `http://kowabunga.admin.example:8080`.
    #[serde(deserialize_with = "text")]
    pub endpoint: String,
    #[serde(deserialize_with = "text")]
    pub owner: String,
    #[serde(deserialize_with = "text")]
    pub email: String,
    #[serde(deserialize_with = "text")]
    pub region: String,
    #[serde(deserialize_with = "text")]
    pub zone: String,
}

// ---------------------------------------------------------------------------
// Tooling requirements
// ---------------------------------------------------------------------------

/// Tool versions the platform's automation depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirements {
    #[serde(deserialize_with = "nullable")]
    pub ansible: AnsibleRequirement,
    #[serde(deserialize_with = "nullable")]
    pub terraform: TerraformRequirement,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnsibleRequirement {
    #[serde(deserialize_with = "text")]
    pub min_version: String,
    #[serde(deserialize_with = "text")]
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerraformRequirement {
    #[serde(deserialize_with = "text")]
    pub version: String,
}

// ---------------------------------------------------------------------------
// Product & secrets
// ---------------------------------------------------------------------------

/// Product-related information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub name: Choice<ProductName>,
    pub license: Choice<License>,
    pub support_level: Choice<SupportLevel>,
    #[serde(deserialize_with = "nullable")]
    pub monitored: Monitoring,
}

/// Monitoring status of the product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Monitoring {
    #[serde(deserialize_with = "flag")]
    pub enabled: bool,
    #[serde(deserialize_with = "flag")]
    pub control_tower: bool,
}

/// Secrets management information.
///
/// The naming suffixes are optional overrides; use the accessor methods to
/// get the effective value with defaults applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Secrets {
    pub provider: Choice<SecretsProvider>,
    #[serde(rename = "sm", deserialize_with = "nullable")]
    pub secrets_manager: SecretsManager,
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "text")]
    pub vault_key_suffix: String,
    #[serde(deserialize_with = "text")]
    pub sops_created_at_suffix: String,
    #[serde(deserialize_with = "text")]
    pub sops_public_key_suffix: String,
    #[serde(deserialize_with = "text")]
    pub sops_secret_key_suffix: String,
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

impl Secrets {
    pub fn vault_key_suffix(&self) -> &str {
        or_default(&self.vault_key_suffix, VAULT_KEY_SUFFIX_DEFAULT)
    }

    pub fn sops_created_at_suffix(&self) -> &str {
        or_default(&self.sops_created_at_suffix, SOPS_CREATED_AT_SUFFIX_DEFAULT)
    }

    pub fn sops_public_key_suffix(&self) -> &str {
        or_default(&self.sops_public_key_suffix, SOPS_PUBLIC_KEY_SUFFIX_DEFAULT)
    }

    pub fn sops_secret_key_suffix(&self) -> &str {
        or_default(&self.sops_secret_key_suffix, SOPS_SECRET_KEY_SUFFIX_DEFAULT)
    }
}

/// AWS Secrets Manager settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretsManager {
    #[serde(deserialize_with = "text")]
    pub region: String,
    #[serde(deserialize_with = "text")]
    pub role_arn: String,
    #[serde(deserialize_with = "flag")]
    pub custom_profile: bool,
}

// ---------------------------------------------------------------------------
// Environments
// ---------------------------------------------------------------------------

/// One deployment environment of the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    #[serde(deserialize_with = "text")]
    pub tag: String,
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
    #[serde(deserialize_with = "flag")]
    pub active: bool,
    #[serde(deserialize_with = "text")]
    pub version: String,
    #[serde(deserialize_with = "nullable")]
    pub fqdn: Fqdn,
    #[serde(deserialize_with = "nullable")]
    pub os: OperatingSystem,
    #[serde(deserialize_with = "nullable")]
    pub inventory: Inventory,
    #[serde(rename = "statuspage", deserialize_with = "nullable")]
    pub status_page: StatusPage,
    #[serde(deserialize_with = "nullable")]
    pub pagerduty: PagerDuty,
    #[serde(deserialize_with = "nullable")]
    pub kubernetes: Kubernetes,
    #[serde(deserialize_with = "nullable")]
    pub security: Security,
    #[serde(deserialize_with = "nullable")]
    pub flex: FlexDeployment,
    #[serde(deserialize_with = "nullable")]
    pub pyramid: PyramidDeployment,
}

/// Public domain of an environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fqdn {
    #[serde(deserialize_with = "text")]
    pub prefix: String,
    #[serde(deserialize_with = "text")]
    pub domain: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingSystem {
    pub name: Choice<OsName>,
    #[serde(deserialize_with = "text")]
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventory {
    /// Hosts are listed statically rather than discovered.
    #[serde(rename = "static", deserialize_with = "flag")]
    pub is_static: bool,
}

/// Status page integration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusPage {
    #[serde(deserialize_with = "flag")]
    pub enabled: bool,
    #[serde(deserialize_with = "text")]
    pub page_id: String,
    #[serde(deserialize_with = "text")]
    pub component_id: String,
}

/// PagerDuty on-call integration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerDuty {
    #[serde(deserialize_with = "flag")]
    pub enabled: bool,
    #[serde(deserialize_with = "text")]
    pub service_id: String,
}

/// Container orchestration of an environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kubernetes {
    #[serde(deserialize_with = "flag")]
    pub enabled: bool,
    #[serde(rename = "type")]
    pub kind: Choice<KubernetesType>,
    #[serde(deserialize_with = "text")]
    pub version: String,
    #[serde(deserialize_with = "text")]
    pub cluster: String,
    #[serde(deserialize_with = "nullable")]
    pub controller: KubernetesController,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KubernetesController {
    #[serde(deserialize_with = "text")]
    pub endpoint: String,
    #[serde(deserialize_with = "text")]
    pub master: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Security {
    /// Environment is patched against CVE-2021-44228.
    #[serde(deserialize_with = "flag")]
    pub log4j_cve: bool,
}

/// Flex product deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexDeployment {
    #[serde(deserialize_with = "nullable")]
    pub urls: ServiceUrls,
    #[serde(deserialize_with = "nullable")]
    pub transcode: FlexTranscode,
    #[serde(deserialize_with = "flag")]
    pub dbaas: bool,
    #[serde(deserialize_with = "flag")]
    pub lbaas: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexTranscode {
    #[serde(deserialize_with = "flag")]
    pub enabled: bool,
    #[serde(deserialize_with = "flag")]
    pub k8s_fsp: bool,
}

/// Pyramid product deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PyramidDeployment {
    #[serde(deserialize_with = "nullable")]
    pub urls: ServiceUrls,
    #[serde(deserialize_with = "flag")]
    pub dbaas: bool,
    #[serde(deserialize_with = "flag")]
    pub lbaas: bool,
}

/// Service endpoints exposed by a product deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceUrls {
    #[serde(deserialize_with = "text")]
    pub core: String,
    #[serde(deserialize_with = "text")]
    pub xymon: String,
    #[serde(deserialize_with = "text")]
    pub grafana: String,
    #[serde(deserialize_with = "text")]
    pub kibana: String,
    #[serde(deserialize_with = "text")]
    pub prometheus: String,
    #[serde(deserialize_with = "text")]
    pub alertmanager: String,
}
