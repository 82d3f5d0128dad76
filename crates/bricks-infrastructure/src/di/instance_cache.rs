//! Resolved instance storage

use bricks_domain::ComponentId;
use dashmap::DashMap;
use std::any::Any;
use std::sync::Arc;

/// Type-erased resolved instance
///
/// The concrete value is always an `Arc<T>` boxed into the `Any`, so unsized
/// implementations (`dyn Trait`) round-trip through the cache.
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Instances resolved for one container definition, keyed by component id
#[derive(Default)]
pub struct InstanceCache {
    instances: DashMap<ComponentId, Instance>,
}

impl InstanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ComponentId) -> Option<Instance> {
        self.instances.get(id).map(|entry| entry.value().clone())
    }

    /// Store `instance` unless another one was stored first; returns the stored one
    pub fn get_or_insert(&self, id: ComponentId, instance: Instance) -> Instance {
        self.instances.entry(id).or_insert(instance).value().clone()
    }

    /// Cached ids, sorted
    pub fn ids(&self) -> Vec<ComponentId> {
        let mut ids: Vec<ComponentId> = self.instances.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl std::fmt::Debug for InstanceCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceCache")
            .field("instances", &self.ids())
            .finish()
    }
}
