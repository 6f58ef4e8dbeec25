//! Argument construction for `cf` user-provided service commands.

use std::fmt;

use crate::error::Result;
use crate::model::{ServiceDescriptor, ServicePayload};

/// `cf` command used to push a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandVerb {
    /// `cf create-user-provided-service`
    Create,
    /// `cf update-user-provided-service`
    Update,
}

impl CommandVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandVerb::Create => "cups",
            CommandVerb::Update => "uups",
        }
    }
}

impl fmt::Display for CommandVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully built CLI invocation: `<verb> <service> <flag> <value>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCommand {
    pub verb: CommandVerb,
    pub service: String,
    pub flag: &'static str,
    pub value: String,
}

impl ServiceCommand {
    /// Build the command for a descriptor.
    ///
    /// Credentials go through `-p` wrapped in single quotes, syslog drains
    /// through `-l` and route services through `-r`.
    pub fn for_service(verb: CommandVerb, service: &ServiceDescriptor) -> Result<Self> {
        let payload = service.serialized_payload()?;
        let (flag, value) = match service.payload {
            ServicePayload::Credentials(_) => ("-p", format!("'{}'", payload)),
            ServicePayload::SyslogDrain(_) => ("-l", payload.into_owned()),
            ServicePayload::RouteService(_) => ("-r", payload.into_owned()),
        };

        Ok(Self {
            verb,
            service: service.name.clone(),
            flag,
            value,
        })
    }

    pub fn args(&self) -> [&str; 4] {
        [self.verb.as_str(), &self.service, self.flag, &self.value]
    }
}

impl fmt::Display for ServiceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args().join(" "))
    }
}
