//! Create-or-update reconciliation of user-provided services.

use serde::Serialize;

use crate::deploy::command::{CommandVerb, ServiceCommand};
use crate::deploy::executor::CommandExecutor;
use crate::deploy::sink::ErrorSink;
use crate::error::Result;
use crate::model::{ServiceDescriptor, Space};

pub const NOT_FOUND_MESSAGE: &str = "UPS not found";
pub const CREATE_UPDATE_MESSAGE: &str = "Error creating/updating UPS";

/// How a single service ended up after a deploy pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Created,
    Updated,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOutcome {
    pub name: String,
    pub status: OutcomeStatus,
}

/// Resolve which services of a space to deploy.
///
/// An empty request selects every service in declaration order. Otherwise
/// names are looked up in request order and the first unknown name fails the
/// whole resolution.
pub fn resolve_targets<'a, S>(
    space: &'a Space,
    requested: &[S],
) -> Result<Vec<&'a ServiceDescriptor>>
where
    S: AsRef<str>,
{
    if requested.is_empty() {
        return Ok(space.services.iter().collect());
    }

    requested
        .iter()
        .map(|name| space.find_by_name(name.as_ref()))
        .collect()
}

/// Pushes user-provided services through a [`CommandExecutor`].
#[derive(Debug)]
pub struct Deployer<E> {
    executor: E,
}

impl<E: CommandExecutor> Deployer<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn create_service(&self, service: &ServiceDescriptor) -> Result<()> {
        self.run(CommandVerb::Create, service)
    }

    pub fn update_service(&self, service: &ServiceDescriptor) -> Result<()> {
        self.run(CommandVerb::Update, service)
    }

    /// Deploy the requested services of a space, or all of them.
    ///
    /// Each service is created, and updated if creation fails. A service whose
    /// update also fails is reported to `sink` and the batch continues. An
    /// unknown requested name is reported and nothing is issued.
    pub fn deploy<S>(
        &self,
        space: &Space,
        requested: &[S],
        sink: &mut dyn ErrorSink,
    ) -> Vec<ServiceOutcome>
    where
        S: AsRef<str>,
    {
        let targets = match resolve_targets(space, requested) {
            Ok(targets) => targets,
            Err(err) => {
                sink.report(NOT_FOUND_MESSAGE, err);
                return Vec::new();
            }
        };

        tracing::debug!(
            space = %space.name,
            count = targets.len(),
            "Deploying user provided services"
        );

        targets
            .into_iter()
            .map(|service| ServiceOutcome {
                name: service.name.clone(),
                status: self.reconcile(service, sink),
            })
            .collect()
    }

    fn reconcile(&self, service: &ServiceDescriptor, sink: &mut dyn ErrorSink) -> OutcomeStatus {
        let create_err = match self.create_service(service) {
            Ok(()) => {
                tracing::info!(service = %service.name, "Created user provided service");
                return OutcomeStatus::Created;
            }
            Err(err) => err,
        };
        tracing::warn!(
            service = %service.name,
            error = %create_err,
            "Create failed, falling back to update"
        );

        match self.update_service(service) {
            Ok(()) => {
                tracing::info!(service = %service.name, "Updated user provided service");
                OutcomeStatus::Updated
            }
            Err(err) => {
                sink.report(CREATE_UPDATE_MESSAGE, err);
                OutcomeStatus::Failed
            }
        }
    }

    fn run(&self, verb: CommandVerb, service: &ServiceDescriptor) -> Result<()> {
        let command = ServiceCommand::for_service(verb, service)?;
        tracing::debug!(kind = service.payload.kind_label(), "cf {}", command);
        self.executor.execute(&command)?;
        Ok(())
    }
}
