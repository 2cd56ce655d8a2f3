//! # Portal configuration — `portal.toml`
//!
//! Build-time configuration for the web client, read from `portal.toml`
//! at the repository root and embedded into the binary.
//!
//! ```toml
//! [service]
//! url = "https://portal.example.edu"
//! publishable_key = "public-anon-key"
//!
//! [admin]
//! emails = ["registrar@x.edu"]
//! ```
//!
//! A missing or malformed file is equivalent to [`PortalConfig::default`]:
//! no service endpoint and an empty admin allow-list.

use serde::{Deserialize, Serialize};

use crate::allowlist::AdminAllowList;

/// Top-level configuration stored in `portal.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

/// Hosted service endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the hosted identity/data service.
    #[serde(default)]
    pub url: String,
    /// Publishable API key sent with every request. Not a secret; actual
    /// authorization is enforced service-side.
    #[serde(default)]
    pub publishable_key: String,
}

/// Admin allow-list section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub emails: Vec<String>,
}

impl PortalConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portal.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Build the admin allow-list from the configured emails.
    pub fn admin_allow_list(&self) -> AdminAllowList {
        AdminAllowList::new(self.admin.emails.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip() {
        let mut config = PortalConfig::default();
        config.service.url = "https://portal.example.edu".to_string();
        config.service.publishable_key = "anon".to_string();
        config.admin.emails = vec!["registrar@x.edu".to_string()];

        let text = config.to_toml().unwrap();
        let loaded = PortalConfig::from_toml(&text).unwrap();
        assert_eq!(loaded, config);
        assert!(loaded.admin_allow_list().contains("REGISTRAR@x.edu"));
    }

    #[test]
    fn missing_sections_default() {
        let loaded = PortalConfig::from_toml("").unwrap();
        assert_eq!(loaded, PortalConfig::default());
        assert!(loaded.admin_allow_list().is_empty());

        let loaded =
            PortalConfig::from_toml("[service]\nurl = \"https://portal.example.edu\"\n").unwrap();
        assert_eq!(loaded.service.url, "https://portal.example.edu");
        assert!(loaded.service.publishable_key.is_empty());
        assert!(loaded.admin.emails.is_empty());
    }
}
