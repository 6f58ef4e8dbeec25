//! Service inventory of a deployment target.

use super::service::ServiceDescriptor;
use crate::error::{DeployError, Result};

/// A named space and the user-provided services declared for it.
///
/// Services keep declaration order; deploying everything follows it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Space {
    pub name: String,
    pub services: Vec<ServiceDescriptor>,
}

impl Space {
    pub fn new(name: impl Into<String>, services: Vec<ServiceDescriptor>) -> Self {
        Self {
            name: name.into(),
            services,
        }
    }

    pub fn find_by_name(&self, name: &str) -> Result<&ServiceDescriptor> {
        self.services
            .iter()
            .find(|svc| svc.name == name)
            .ok_or_else(|| DeployError::NotFound {
                name: name.to_string(),
                space: self.name.clone(),
            })
    }
}
