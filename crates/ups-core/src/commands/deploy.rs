//! Deploy command implementation.
//!
//! Loads the manifest, picks a space and pushes its user-provided services
//! through the deploy engine.

use serde::Serialize;

use crate::config::{ManifestConfig, ManifestStore};
use crate::deploy::{
    CfCliExecutor, CommandExecutor, Deployer, DryRunExecutor, ErrorCollector, ServiceOutcome,
};

/// Options for the deploy command
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Space to deploy
    pub space: String,
    /// Services to deploy; empty means all
    pub services: Vec<String>,
    /// Log commands instead of running them
    pub dry_run: bool,
    /// Overrides the cf binary from the manifest
    pub cf_binary: Option<String>,
}

impl DeployOptions {
    pub fn new(space: impl Into<String>) -> Self {
        Self {
            space: space.into(),
            services: Vec::new(),
            dry_run: false,
            cf_binary: None,
        }
    }

    /// Restrict the deploy to these services
    pub fn with_services(mut self, services: &[String]) -> Self {
        self.services = services.to_vec();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_cf_binary(mut self, binary: impl Into<String>) -> Self {
        self.cf_binary = Some(binary.into());
        self
    }
}

/// A failure reported by the engine, flattened for output.
#[derive(Debug, Clone, Serialize)]
pub struct DeployFailure {
    pub message: String,
    pub error: String,
}

/// Report from a deploy run
#[derive(Debug, Clone, Serialize)]
pub struct DeployReport {
    pub space: String,
    pub outcomes: Vec<ServiceOutcome>,
    pub failures: Vec<DeployFailure>,
}

impl DeployReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

#[derive(Debug)]
pub struct DeployCommand {
    store: ManifestStore,
}

impl DeployCommand {
    pub fn new(store: ManifestStore) -> Self {
        Self { store }
    }

    /// Execute the deploy with the executor implied by the options
    pub fn execute(&self, options: &DeployOptions) -> anyhow::Result<DeployReport> {
        let manifest = self.store.load()?;
        if options.dry_run {
            return self.deploy_space(&manifest, options, &DryRunExecutor::new());
        }

        let binary = options
            .cf_binary
            .clone()
            .unwrap_or_else(|| manifest.cf.binary.clone());
        self.deploy_space(&manifest, options, &CfCliExecutor::new(binary))
    }

    /// Execute the deploy against a caller-supplied executor
    pub fn execute_with(
        &self,
        options: &DeployOptions,
        executor: &dyn CommandExecutor,
    ) -> anyhow::Result<DeployReport> {
        let manifest = self.store.load()?;
        self.deploy_space(&manifest, options, executor)
    }

    fn deploy_space(
        &self,
        manifest: &ManifestConfig,
        options: &DeployOptions,
        executor: &dyn CommandExecutor,
    ) -> anyhow::Result<DeployReport> {
        let space = manifest.space(&options.space).ok_or_else(|| {
            anyhow::anyhow!(
                "Space '{}' is not declared in {}",
                options.space,
                self.store.manifest_path().display()
            )
        })?;

        let deployer = Deployer::new(executor);
        let mut collector = ErrorCollector::new();
        let outcomes = deployer.deploy(&space, &options.services, &mut collector);

        let failures = collector
            .into_errors()
            .into_iter()
            .map(|(message, error)| DeployFailure {
                message,
                error: error.to_string(),
            })
            .collect();

        Ok(DeployReport {
            space: space.name,
            outcomes,
            failures,
        })
    }
}
