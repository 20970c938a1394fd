//! Profile selection per reconciled field
//!
//! A suppression config maps field keys to the normalization profile their
//! documents need. It is parsed from TOML:
//!
//! ```toml
//! default_profile = "whitespace-only"
//!
//! [fields]
//! "policy.0.xml_content" = "entity-aware"
//! "api_policy.*" = "entity-aware"
//! ```
//!
//! Keys ending in `*` match any field key with that prefix. Exact keys win
//! over patterns; among patterns the longest prefix wins.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::profile::NormalizationProfile;

const WILDCARD: char = '*';

/// Field key to profile mapping parsed from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuppressConfig {
    /// Profile for fields without an explicit entry
    #[serde(default)]
    pub default_profile: NormalizationProfile,

    /// Per-field profiles, keyed by exact field key or `prefix*` pattern
    #[serde(default)]
    pub fields: BTreeMap<String, NormalizationProfile>,
}

impl SuppressConfig {
    /// Parse a config from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use policy_content::{NormalizationProfile, SuppressConfig};
    ///
    /// let config = SuppressConfig::parse(r#"
    /// [fields]
    /// "policy.0.xml_content" = "entity-aware"
    /// "#).unwrap();
    ///
    /// assert_eq!(
    ///     config.profile_for("policy.0.xml_content"),
    ///     NormalizationProfile::EntityAware
    /// );
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let config: SuppressConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Read and parse a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(?path, "Loading suppression config");
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Field wiring for the API Management service resource.
    ///
    /// `policy.0.xml_content` is compared with the whitespace-only profile.
    /// `xml_link` is never compared: the service downloads the link and
    /// reports the content under `xml_content`. Fields that carry escaped
    /// interpolations need an explicit `entity-aware` entry.
    pub fn api_management() -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(
            "policy.0.xml_content".to_string(),
            NormalizationProfile::WhitespaceOnly,
        );
        Self {
            default_profile: NormalizationProfile::WhitespaceOnly,
            fields,
        }
    }

    /// Resolve the profile for a field key
    pub fn profile_for(&self, field_key: &str) -> NormalizationProfile {
        if let Some(profile) = self.fields.get(field_key) {
            return *profile;
        }

        self.fields
            .iter()
            .filter_map(|(pattern, profile)| {
                let prefix = pattern.strip_suffix(WILDCARD)?;
                field_key
                    .starts_with(prefix)
                    .then_some((prefix.len(), *profile))
            })
            .max_by_key(|(len, _)| *len)
            .map_or(self.default_profile, |(_, profile)| profile)
    }

    /// Merge another config into this one
    ///
    /// `other` takes precedence: its default profile replaces ours unless it
    /// is the default, and its field entries override ours.
    pub fn merge(&mut self, other: &SuppressConfig) {
        if other.default_profile != NormalizationProfile::default() {
            self.default_profile = other.default_profile;
        }
        for (key, profile) in &other.fields {
            self.fields.insert(key.clone(), *profile);
        }
    }
}
