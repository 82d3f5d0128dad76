//! Component metadata

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Descriptive metadata attached to a component
///
/// Writes merge into the stored metadata until both `name` and `description`
/// are present. From then on the metadata is frozen and further writes are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Human readable name
    pub name: Option<String>,
    /// What the component is for
    pub description: Option<String>,
    /// Free-form attributes
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, Value>,
}

impl Metadata {
    /// Metadata with a name and a description
    pub fn new<N: Into<String>, D: Into<String>>(name: N, description: D) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            attributes: BTreeMap::new(),
        }
    }

    /// Set the name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a free-form attribute
    pub fn with_attribute<K: Into<String>>(mut self, key: K, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// All required fields are supplied
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.description.is_some()
    }

    /// Merge `other` into `self` unless `self` is already complete
    ///
    /// Returns whether anything was written.
    pub fn merge(&mut self, other: Metadata) -> bool {
        if self.is_complete() {
            return false;
        }
        if let Some(name) = other.name {
            self.name = Some(name);
        }
        if let Some(description) = other.description {
            self.description = Some(description);
        }
        self.attributes.extend(other.attributes);
        true
    }
}
