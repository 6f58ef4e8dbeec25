//! Canonical credential encoding.

use std::collections::BTreeMap;

use crate::error::Result;

/// Credential pairs of a user-provided service.
///
/// Backed by a `BTreeMap` so iteration, and therefore serialization, is
/// always in key order.
pub type Credentials = BTreeMap<String, String>;

/// Encode credentials as compact JSON with sorted keys.
pub fn serialize_credentials(credentials: &Credentials) -> Result<String> {
    Ok(serde_json::to_string(credentials)?)
}
