//! Typed identifier for stored records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

/// Key of a stored item: a 128-bit UUID with the canonical hyphenated string
/// form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generate a fresh random (v4) key. Storage adapters call this at insert
    /// time; prefer fixed keys in tests for determinism.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an externally supplied identifier string. Fails with
    /// [`ModelError::InvalidId`] carrying the offending input when the
    /// length or format does not match a UUID.
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        Uuid::try_parse(raw)
            .map(Self)
            .map_err(|_| ModelError::InvalidId(raw.to_string()))
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for ItemId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<ItemId> for Uuid {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

/// Implemented by records addressed by an [`ItemId`]. Storage adapters use it
/// to read and assign keys; the key is never changed once assigned.
pub trait Keyed {
    fn id(&self) -> Option<ItemId>;
    fn with_id(self, id: ItemId) -> Self;
}
