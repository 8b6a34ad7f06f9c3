//! Identifier codec.
//!
//! Entity identifiers are opaque 128-bit values. Everywhere outside the
//! store (URLs, JSON bodies, key paths) they travel as lowercase hex, two
//! characters per byte.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::ID_LEN;

/// Encode raw identifier bytes as lowercase hex.
///
/// ```
/// use catalog_core::id::encode;
///
/// assert_eq!(encode(&[0x00, 0xab, 0x10]), "00ab10");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string back into identifier bytes.
///
/// Fails with [`CoreError::MalformedIdentifier`] when the string has an odd
/// length or contains a non-hex character.
pub fn decode(s: &str) -> Result<Vec<u8>, CoreError> {
    hex::decode(s).map_err(|e| CoreError::MalformedIdentifier(format!("'{s}': {e}")))
}

/// A 128-bit entity identifier.
///
/// Generated once at creation and never changed. Serializes as its hex form
/// so binary identifiers never leave the service.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct EntityId([u8; ID_LEN]);

impl EntityId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().into_bytes())
    }

    pub const fn from_bytes(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    /// Parse from the hex form, requiring exactly [`ID_LEN`] bytes.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let bytes = decode(s)?;
        let bytes: [u8; ID_LEN] = bytes.try_into().map_err(|b: Vec<u8>| {
            CoreError::MalformedIdentifier(format!(
                "'{s}': expected {ID_LEN} bytes, got {}",
                b.len()
            ))
        })?;
        Ok(Self(bytes))
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(&self.0))
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({self})")
    }
}

impl FromStr for EntityId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for EntityId {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}
