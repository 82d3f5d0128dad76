//! Dependency proxy handed to service factories

use crate::di::instance_cache::Instance;
use bricks_domain::{ComponentId, Error, Result};
use std::any::type_name;
use std::collections::HashMap;
use std::sync::Arc;

/// Resolved dependencies of one service resolution
///
/// Lookups are checked when they happen: asking for a key that was not
/// declared fails with `MissingDependency` naming the key, at the point the
/// factory asks for it.
pub struct Dependencies {
    service: ComponentId,
    resolved: HashMap<String, Instance>,
}

impl Dependencies {
    pub(crate) fn new(service: ComponentId, resolved: HashMap<String, Instance>) -> Self {
        Self { service, resolved }
    }

    /// The dependency registered under `key`
    pub fn get<T: ?Sized + Send + Sync + 'static>(&self, key: &str) -> Result<Arc<T>> {
        let instance = self
            .resolved
            .get(key)
            .ok_or_else(|| Error::missing_dependency(key, &self.service))?;
        downcast::<T>(instance, key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.resolved.contains_key(key)
    }

    /// Resolved keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.resolved.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Id of the service being built
    pub fn service(&self) -> &ComponentId {
        &self.service
    }
}

impl std::fmt::Debug for Dependencies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dependencies")
            .field("service", &self.service)
            .field("keys", &self.keys())
            .finish()
    }
}

/// Recover the `Arc<T>` stored in an instance
pub(crate) fn downcast<T: ?Sized + Send + Sync + 'static>(
    instance: &Instance,
    key: &str,
) -> Result<Arc<T>> {
    instance
        .downcast_ref::<Arc<T>>()
        .cloned()
        .ok_or_else(|| Error::DependencyTypeMismatch {
            key: key.to_string(),
            expected: type_name::<T>().to_string(),
        })
}
