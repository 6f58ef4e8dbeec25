//! List command: spaces and services declared in the manifest.

use serde::Serialize;

use crate::config::ManifestStore;
use crate::model::Space;

#[derive(Debug, Clone, Serialize)]
pub struct ServiceSummary {
    pub name: String,
    pub kind: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpaceSummary {
    pub name: String,
    pub services: Vec<ServiceSummary>,
}

impl From<&Space> for SpaceSummary {
    fn from(space: &Space) -> Self {
        Self {
            name: space.name.clone(),
            services: space
                .services
                .iter()
                .map(|svc| ServiceSummary {
                    name: svc.name.clone(),
                    kind: svc.payload.kind_label(),
                })
                .collect(),
        }
    }
}

#[derive(Debug)]
pub struct ListCommand {
    store: ManifestStore,
}

impl ListCommand {
    pub fn new(store: ManifestStore) -> Self {
        Self { store }
    }

    /// List one space, or every space when `space` is `None`.
    pub fn execute(&self, space: Option<&str>) -> anyhow::Result<Vec<SpaceSummary>> {
        let manifest = self.store.load()?;
        match space {
            Some(name) => {
                let space = manifest
                    .space(name)
                    .ok_or_else(|| anyhow::anyhow!("Space '{}' is not declared", name))?;
                Ok(vec![SpaceSummary::from(&space)])
            }
            None => Ok(manifest
                .spaces
                .iter()
                .cloned()
                .map(|entry| SpaceSummary::from(&Space::from(entry)))
                .collect()),
        }
    }
}
