//! High-level commands for ups-manager operations.
//!
//! These are the entry points frontends call: they load the manifest,
//! wire up an executor and hand back reports ready for printing.

pub mod deploy;
pub mod list;

pub use deploy::{DeployCommand, DeployFailure, DeployOptions, DeployReport};
pub use list::{ListCommand, ServiceSummary, SpaceSummary};
