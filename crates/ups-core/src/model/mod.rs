//! User-provided service descriptors and the spaces that hold them.

pub mod credentials;
pub mod service;
pub mod space;

pub use credentials::{Credentials, serialize_credentials};
pub use service::{ServiceDescriptor, ServicePayload};
pub use space::Space;
