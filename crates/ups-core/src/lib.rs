//! ups-manager core library
//!
//! Reconciles the user-provided services declared for a Cloud Foundry space
//! with the live space by driving the `cf` CLI: every service is created,
//! or updated when creation fails.

pub mod commands;
pub mod config;
pub mod deploy;
pub mod error;
pub mod model;

/// Re-exports of commonly used types
pub mod prelude {
    // Model
    pub use crate::model::{Credentials, ServiceDescriptor, ServicePayload, Space};

    // Deploy
    pub use crate::deploy::{
        CfCliExecutor, CommandExecutor, CommandVerb, Deployer, DryRunExecutor, ErrorCollector,
        ErrorSink, OutcomeStatus, ServiceCommand, ServiceOutcome,
    };

    // Errors
    pub use crate::error::{DeployError, ExecutionError};

    // Configuration
    pub use crate::config::{ManifestConfig, ManifestStore};
}
