//! Deploy coordination: target resolution, command building and execution.

pub mod command;
pub mod engine;
pub mod executor;
pub mod sink;

pub use command::{CommandVerb, ServiceCommand};
pub use engine::{
    CREATE_UPDATE_MESSAGE, Deployer, NOT_FOUND_MESSAGE, OutcomeStatus, ServiceOutcome,
    resolve_targets,
};
pub use executor::{CfCliExecutor, CommandExecutor, DryRunExecutor};
pub use sink::{ErrorCollector, ErrorSink};
