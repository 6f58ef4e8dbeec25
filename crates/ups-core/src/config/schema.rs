//! Manifest schema for ups.toml
//!
//! A manifest declares the `cf` binary to use and, per space, the
//! user-provided services that should exist there:
//!
//! ```toml
//! [cf]
//! binary = "cf"
//!
//! [[space]]
//! name = "dev"
//!
//! [[space.service]]
//! name = "db-creds"
//! credentials = { username = "admin" }
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{Credentials, ServiceDescriptor, ServicePayload, Space};

/// Root structure of ups.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// CLI settings
    #[serde(default)]
    pub cf: CfSettings,

    /// Spaces, in declaration order
    #[serde(default, rename = "space")]
    pub spaces: Vec<SpaceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CfSettings {
    /// Path or name of the cf executable
    #[serde(default = "default_cf_binary")]
    pub binary: String,
}

impl Default for CfSettings {
    fn default() -> Self {
        Self {
            binary: default_cf_binary(),
        }
    }
}

fn default_cf_binary() -> String {
    "cf".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceEntry {
    pub name: String,

    /// User-provided services, in declaration order
    #[serde(default, rename = "service")]
    pub services: Vec<ServiceEntry>,
}

/// One user-provided service as written in the manifest.
///
/// Only one payload field is expected; when several are set, credentials
/// win over the syslog drain, which wins over the route service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syslog_drain_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_service_url: Option<String>,
}

impl From<ServiceEntry> for ServiceDescriptor {
    fn from(entry: ServiceEntry) -> Self {
        let payload = ServicePayload::from_fields(
            entry.credentials,
            entry.syslog_drain_url,
            entry.route_service_url,
        );
        ServiceDescriptor::new(entry.name, payload)
    }
}

impl From<&ServiceDescriptor> for ServiceEntry {
    fn from(service: &ServiceDescriptor) -> Self {
        let mut entry = ServiceEntry {
            name: service.name.clone(),
            ..Default::default()
        };
        match &service.payload {
            ServicePayload::Credentials(credentials) => {
                entry.credentials = Some(credentials.clone())
            }
            ServicePayload::SyslogDrain(url) => entry.syslog_drain_url = Some(url.clone()),
            ServicePayload::RouteService(url) => entry.route_service_url = Some(url.clone()),
        }
        entry
    }
}

impl From<SpaceEntry> for Space {
    fn from(entry: SpaceEntry) -> Self {
        Space::new(
            entry.name,
            entry.services.into_iter().map(Into::into).collect(),
        )
    }
}

impl From<&Space> for SpaceEntry {
    fn from(space: &Space) -> Self {
        SpaceEntry {
            name: space.name.clone(),
            services: space.services.iter().map(Into::into).collect(),
        }
    }
}

impl ManifestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a space by name and convert it to the deploy model.
    pub fn space(&self, name: &str) -> Option<Space> {
        self.spaces
            .iter()
            .find(|space| space.name == name)
            .cloned()
            .map(Into::into)
    }

    pub fn space_names(&self) -> Vec<&str> {
        self.spaces.iter().map(|space| space.name.as_str()).collect()
    }

    /// Validate the manifest
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut seen_spaces = HashSet::new();
        for space in &self.spaces {
            if space.name.trim().is_empty() {
                anyhow::bail!("Space name cannot be empty");
            }
            if !seen_spaces.insert(space.name.as_str()) {
                anyhow::bail!("Duplicate space '{}'", space.name);
            }

            let mut seen_services = HashSet::new();
            for service in &space.services {
                if service.name.trim().is_empty() {
                    anyhow::bail!("Service name cannot be empty in space '{}'", space.name);
                }
                if !seen_services.insert(service.name.as_str()) {
                    anyhow::bail!(
                        "Duplicate service '{}' in space '{}'",
                        service.name,
                        space.name
                    );
                }
                warn_on_unparsable_urls(&space.name, service);
            }
        }
        Ok(())
    }
}

fn warn_on_unparsable_urls(space: &str, service: &ServiceEntry) {
    let urls = [
        ("syslog_drain_url", service.syslog_drain_url.as_deref()),
        ("route_service_url", service.route_service_url.as_deref()),
    ];
    for (field, value) in urls {
        let Some(value) = value else { continue };
        if value.is_empty() {
            continue;
        }
        if let Err(err) = url::Url::parse(value) {
            tracing::warn!(
                space,
                service = %service.name,
                field,
                "Value '{}' is not a valid URL ({}); passing it through unchanged",
                value,
                err
            );
        }
    }
}
