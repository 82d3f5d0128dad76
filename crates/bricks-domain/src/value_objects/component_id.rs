//! Component identifiers

use crate::constants::ID_SEPARATOR;
use crate::value_objects::Tag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Deterministic component id: `lower(tag) + ":" + hash(target)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Build the id of a target with the given tag and content hash
    pub fn new(tag: Tag, hash: &str) -> Self {
        Self(format!("{}{}{}", tag.id_prefix(), ID_SEPARATOR, hash))
    }

    /// Content hash part of the id
    pub fn hash(&self) -> &str {
        self.0
            .split_once(ID_SEPARATOR)
            .map(|(_, hash)| hash)
            .unwrap_or(&self.0)
    }

    /// The full id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComponentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&ComponentId> for String {
    fn from(id: &ComponentId) -> Self {
        id.0.clone()
    }
}

impl From<ComponentId> for String {
    fn from(id: ComponentId) -> Self {
        id.0
    }
}
