//! A single user-provided service binding.

use std::borrow::Cow;

use super::credentials::{Credentials, serialize_credentials};
use crate::error::Result;

/// What a user-provided service carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServicePayload {
    /// Arbitrary credential pairs.
    Credentials(Credentials),
    /// Log forwarding endpoint.
    SyslogDrain(String),
    /// Route service endpoint.
    RouteService(String),
}

impl ServicePayload {
    /// Pick the payload from loosely populated fields.
    ///
    /// Non-empty credentials win, then a non-empty syslog drain URL. Anything
    /// else is treated as a route service, including an empty one.
    pub fn from_fields(
        credentials: Option<Credentials>,
        syslog_drain_url: Option<String>,
        route_service_url: Option<String>,
    ) -> Self {
        match (credentials, syslog_drain_url) {
            (Some(credentials), _) if !credentials.is_empty() => Self::Credentials(credentials),
            (_, Some(url)) if !url.is_empty() => Self::SyslogDrain(url),
            _ => Self::RouteService(route_service_url.unwrap_or_default()),
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Credentials(_) => "credentials",
            Self::SyslogDrain(_) => "syslog",
            Self::RouteService(_) => "route-service",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub name: String,
    pub payload: ServicePayload,
}

impl ServiceDescriptor {
    pub fn new(name: impl Into<String>, payload: ServicePayload) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// A descriptor built from credential pairs.
    ///
    /// No pairs at all yields an empty route service, following
    /// [`ServicePayload::from_fields`].
    pub fn credentials<K, V>(
        name: impl Into<String>,
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let credentials = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::new(name, ServicePayload::from_fields(Some(credentials), None, None))
    }

    pub fn syslog_drain(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(name, ServicePayload::SyslogDrain(url.into()))
    }

    pub fn route_service(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(name, ServicePayload::RouteService(url.into()))
    }

    /// The string handed to the CLI for this payload.
    ///
    /// Credentials are serialized; URLs are passed through as-is.
    pub fn serialized_payload(&self) -> Result<Cow<'_, str>> {
        match &self.payload {
            ServicePayload::Credentials(credentials) => {
                Ok(Cow::Owned(serialize_credentials(credentials)?))
            }
            ServicePayload::SyslogDrain(url) | ServicePayload::RouteService(url) => {
                Ok(Cow::Borrowed(url))
            }
        }
    }
}
