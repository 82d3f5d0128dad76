//! Process-wide pools
//!
//! A [`Registry`] owns everything that outlives a single container:
//!
//! | Pool | Key | Bound |
//! |------|-----|-------|
//! | Tag registry | component id | unbounded |
//! | Adapter registry | hash of the factory source | unbounded |
//! | Definition pool | container definition hash, then its services and bindings | FIFO, `definition_pool_capacity` |
//! | Dependency-shape cache | service id | FIFO, `shape_cache_capacity` |
//!
//! Registries are plain values shared through `Arc`, so tests build their own
//! instead of resetting a global. [`Registry::global`] exists for code that
//! wants a single process-wide instance.

use crate::config::RegistryConfig;
use crate::di::adapter::AdapterCore;
use crate::di::instance_cache::InstanceCache;
use crate::di::pool::FifoPool;
use crate::di::service::ServiceCore;
use bricks_domain::identity::{Component, IntoTarget, TagRegistry, component};
use bricks_domain::{ComponentId, ContentHasher, Result, Sha256ContentHasher, Tag};
use dashmap::DashMap;
use serde::Serialize;
use std::any::TypeId;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use tracing::{debug, trace, warn};

static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();

type PooledDefinition = (Arc<DefinitionKey>, Arc<InstanceCache>);

/// Owner of the tag registry and the three container pools
pub struct Registry {
    tags: Arc<TagRegistry>,
    adapters: DashMap<String, Vec<Arc<AdapterCore>>>,
    definitions: Mutex<FifoPool<String, Vec<PooledDefinition>>>,
    shapes: Mutex<FifoPool<ComponentId, Arc<[String]>>>,
}

impl Registry {
    /// Registry with default capacities and the SHA-256 hasher
    pub fn new() -> Self {
        Self::from_config(&RegistryConfig::default())
    }

    /// Registry sized from configuration
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::build(
            Arc::new(Sha256ContentHasher::new()),
            config.definition_pool_capacity,
            config.shape_cache_capacity,
        )
    }

    /// Registry with a custom content hasher and default capacities
    pub fn with_hasher(hasher: Arc<dyn ContentHasher>) -> Self {
        let config = RegistryConfig::default();
        Self::build(
            hasher,
            config.definition_pool_capacity,
            config.shape_cache_capacity,
        )
    }

    fn build(
        hasher: Arc<dyn ContentHasher>,
        definition_pool_capacity: usize,
        shape_cache_capacity: usize,
    ) -> Self {
        Self {
            tags: Arc::new(TagRegistry::with_hasher(hasher)),
            adapters: DashMap::new(),
            definitions: Mutex::new(FifoPool::new(definition_pool_capacity)),
            shapes: Mutex::new(FifoPool::new(shape_cache_capacity)),
        }
    }

    /// Lazily created process-wide registry
    pub fn global() -> Arc<Registry> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Registry::new())))
    }

    pub fn tags(&self) -> &Arc<TagRegistry> {
        &self.tags
    }

    /// Tag a function or object through this registry
    pub fn component<T: IntoTarget>(&self, tag: Tag, target: T) -> Result<Component> {
        component(&self.tags, tag, target)
    }

    pub fn definition_pool_capacity(&self) -> usize {
        lock(&self.definitions).capacity()
    }

    /// Shared adapter for `hash`, or the one built by `create`
    ///
    /// An entry is reused only when both the source text and the produced
    /// type match. Equal hashes over different sources are a collision and
    /// get their own adapter.
    pub(crate) fn dedup_adapter<F>(
        &self,
        hash: &str,
        source: &str,
        output: TypeId,
        create: F,
    ) -> Result<Arc<AdapterCore>>
    where
        F: FnOnce() -> Result<Arc<AdapterCore>>,
    {
        let mut bucket = self.adapters.entry(hash.to_string()).or_default();
        if let Some(existing) = bucket
            .iter()
            .find(|core| core.source() == source && core.output() == output)
        {
            trace!(hash, "Adapter deduplicated");
            return Ok(Arc::clone(existing));
        }
        if bucket.iter().any(|core| core.source() != source) {
            warn!(hash, "Adapter hash collision between different factory sources");
        }
        let created = create()?;
        debug!(id = %created.id(), "Registered adapter");
        bucket.push(Arc::clone(&created));
        Ok(created)
    }

    /// Instance cache for a definition, pooling it on first use
    ///
    /// Definitions are pooled by hash. Two definitions that hash equal but
    /// differ in `key` are a collision and each get their own cache.
    pub(crate) fn acquire_definition(
        &self,
        hash: &str,
        key: &Arc<DefinitionKey>,
    ) -> Arc<InstanceCache> {
        let mut definitions = lock(&self.definitions);
        if let Some(bucket) = definitions.get_mut(&hash.to_string()) {
            if let Some((_, cache)) = bucket.iter().find(|(pooled, _)| pooled == key) {
                return Arc::clone(cache);
            }
            warn!(definition = hash, "Container definition hash collision");
            let cache = Arc::new(InstanceCache::new());
            bucket.push((Arc::clone(key), Arc::clone(&cache)));
            return cache;
        }
        let cache = Arc::new(InstanceCache::new());
        let entry = vec![(Arc::clone(key), Arc::clone(&cache))];
        if let Some((evicted, _)) = definitions.insert(hash.to_string(), entry) {
            debug!(definition = %evicted, "Evicted oldest container definition");
        }
        cache
    }

    /// Pooled cache for a definition without pooling it
    pub(crate) fn peek_definition(
        &self,
        hash: &str,
        key: &Arc<DefinitionKey>,
    ) -> Option<Arc<InstanceCache>> {
        lock(&self.definitions)
            .get(&hash.to_string())?
            .iter()
            .find(|(pooled, _)| pooled == key)
            .map(|(_, cache)| Arc::clone(cache))
    }

    /// Dependency keys a service consumes, memoized per service id
    pub(crate) fn required_keys(&self, service: &ServiceCore) -> Arc<[String]> {
        let (keys, evicted) = lock(&self.shapes).get_or_insert_with(service.id().clone(), || {
            trace!(service = %service.id(), "Analyzed dependency shape");
            service.dependencies().keys().map(str::to_string).collect()
        });
        if let Some((evicted, _)) = evicted {
            debug!(service = %evicted, "Evicted oldest dependency shape");
        }
        keys
    }

    /// Empty the adapter registry, definition pool and shape cache
    ///
    /// Meant for test isolation. Component records in the tag registry are
    /// kept.
    pub fn clear(&self) {
        let mut definitions = lock(&self.definitions);
        let mut shapes = lock(&self.shapes);
        self.adapters.clear();
        definitions.clear();
        shapes.clear();
        debug!("Registry pools cleared");
    }

    /// Read-only view of the pools
    pub fn snapshot(&self) -> RegistrySnapshot {
        let mut adapters: Vec<ComponentId> = self
            .adapters
            .iter()
            .flat_map(|bucket| {
                bucket
                    .value()
                    .iter()
                    .map(|core| core.id().clone())
                    .collect::<Vec<_>>()
            })
            .collect();
        adapters.sort();
        let definitions = lock(&self.definitions).keys().cloned().collect();
        let shapes = lock(&self.shapes)
            .iter()
            .map(|(id, keys)| (id.clone(), keys.to_vec()))
            .collect();
        RegistrySnapshot {
            components: self.tags.len(),
            adapters,
            definitions,
            shapes,
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("components", &self.tags.len())
            .field("adapters", &self.adapters.len())
            .field("definitions", &lock(&self.definitions).len())
            .finish()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// What a container definition is made of, compared beyond its hash
///
/// Services are identified by id, source and dependency keys; bindings by
/// port id, adapter source and produced type.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DefinitionKey {
    services: Vec<(ComponentId, String, Vec<String>)>,
    bindings: Vec<(ComponentId, String, TypeId)>,
}

impl DefinitionKey {
    pub(crate) fn new(
        services: &[Arc<ServiceCore>],
        bindings: &BTreeMap<ComponentId, Arc<AdapterCore>>,
    ) -> Self {
        Self {
            services: services
                .iter()
                .map(|core| {
                    (
                        core.id().clone(),
                        core.source().to_string(),
                        core.dependencies().keys().map(str::to_string).collect(),
                    )
                })
                .collect(),
            bindings: bindings
                .iter()
                .map(|(port, adapter)| {
                    (port.clone(), adapter.source().to_string(), adapter.output())
                })
                .collect(),
        }
    }
}

/// Snapshot returned by [`Registry::snapshot`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrySnapshot {
    /// Number of component records
    pub components: usize,
    /// Registered adapter ids, sorted
    pub adapters: Vec<ComponentId>,
    /// Pooled definition hashes, oldest first
    pub definitions: Vec<String>,
    /// Memoized dependency keys per service
    pub shapes: BTreeMap<ComponentId, Vec<String>>,
}
