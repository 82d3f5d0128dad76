//! Immutable dependency-injection container
//!
//! Every builder verb returns a new [`Container`]. Instances are cached per
//! container definition (the services added plus the port bindings), and that
//! cache lives in the registry's definition pool: two containers built
//! independently with the same definition share resolved instances.

use crate::di::adapter::{Adapter, AdapterCore};
use crate::di::definition::{Definition, DefinitionKind};
use crate::di::dependencies::{Dependencies, downcast};
use crate::di::instance_cache::{Instance, InstanceCache};
use crate::di::port::Port;
use crate::di::registry::{DefinitionKey, Registry};
use crate::di::service::{Dependency, Service, ServiceCore};
use bricks_domain::{ComponentId, Content, Error, Result, Tag};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};
use tracing::{debug, trace};

/// Services and bindings resolved against a shared registry
#[derive(Clone)]
pub struct Container {
    registry: Arc<Registry>,
    services: Arc<Vec<Arc<ServiceCore>>>,
    bindings: Arc<BTreeMap<ComponentId, Arc<AdapterCore>>>,
    definition_hash: String,
    key: Arc<DefinitionKey>,
    cache: Arc<OnceLock<Arc<InstanceCache>>>,
}

impl Container {
    /// Empty container
    pub fn new(registry: &Arc<Registry>) -> Self {
        Self::with_definition(registry, Arc::default(), Arc::default())
    }

    fn with_definition(
        registry: &Arc<Registry>,
        services: Arc<Vec<Arc<ServiceCore>>>,
        bindings: Arc<BTreeMap<ComponentId, Arc<AdapterCore>>>,
    ) -> Self {
        let definition = Content::object([
            (
                "services",
                Content::strings(services.iter().map(|core| core.id().as_str())),
            ),
            (
                "bindings",
                Content::object(
                    bindings
                        .iter()
                        .map(|(port, adapter)| (port.as_str(), Content::from(adapter.id().as_str()))),
                ),
            ),
        ]);
        let definition_hash = registry.tags().hash(&definition);
        let key = Arc::new(DefinitionKey::new(&services, &bindings));
        Self {
            registry: Arc::clone(registry),
            services,
            bindings,
            definition_hash,
            key,
            cache: Arc::new(OnceLock::new()),
        }
    }

    /// Container with `service` added; adding a service twice changes nothing
    pub fn add<T: ?Sized + Send + Sync + 'static>(&self, service: &Service<T>) -> Self {
        if self.contains_service(service.id()) {
            return self.clone();
        }
        let mut services = (*self.services).clone();
        services.push(Arc::clone(service.core()));
        Self::with_definition(&self.registry, Arc::new(services), Arc::clone(&self.bindings))
    }

    /// Container with `port` bound to `adapter`; the last bind wins
    pub fn bind<T: ?Sized + Send + Sync + 'static>(
        &self,
        port: &Port<T>,
        adapter: &Adapter<T>,
    ) -> Self {
        let mut bindings = (*self.bindings).clone();
        bindings.insert(port.id().clone(), Arc::clone(adapter.core()));
        Self::with_definition(&self.registry, Arc::clone(&self.services), Arc::new(bindings))
    }

    /// Replace the adapter of an already bound port
    ///
    /// Fails with `CannotOverrideUnboundPort` when `port` has no binding. The
    /// result has the definition of the new binding, so the instance built by
    /// the replaced adapter is never returned from it.
    pub fn override_port<T: ?Sized + Send + Sync + 'static>(
        &self,
        port: &Port<T>,
        adapter: &Adapter<T>,
    ) -> Result<Self> {
        if !self.bindings.contains_key(port.id()) {
            return Err(Error::CannotOverrideUnboundPort {
                port: port.id().to_string(),
            });
        }
        debug!(port = %port.id(), adapter = %adapter.id(), "Overriding port binding");
        Ok(self.bind(port, adapter))
    }

    /// Resolve a port or service
    ///
    /// Ports go through their bound adapter; services have their declared
    /// dependencies resolved first, in declaration order. Results are cached
    /// per definition. Anything else fails with `InvalidDefinitionType`.
    pub fn get<D: Definition + ?Sized>(&self, definition: &D) -> Result<Arc<D::Output>> {
        let envelope = definition.envelope();
        let instance = match definition.kind() {
            DefinitionKind::Port(id) => self.resolve_port(id)?,
            DefinitionKind::Service(core) => self.resolve_service(core)?,
            DefinitionKind::Other => {
                return Err(Error::InvalidDefinitionType {
                    id: envelope.id().to_string(),
                    tag: envelope.tag().to_string(),
                });
            }
        };
        downcast::<D::Output>(&instance, envelope.id().as_str())
    }

    /// Same services and bindings with a fresh, private instance cache
    ///
    /// The cleared container does not touch the pooled cache, so this
    /// container and any other container sharing its definition keep their
    /// instances.
    pub fn clear_cache(&self) -> Self {
        Self {
            cache: Arc::new(OnceLock::from(Arc::new(InstanceCache::new()))),
            ..self.clone()
        }
    }

    /// Snapshot of services, bindings and cached instances
    pub fn describe(&self) -> ContainerDescription {
        let instances = self
            .cache
            .get()
            .cloned()
            .or_else(|| self.registry.peek_definition(&self.definition_hash, &self.key))
            .map(|cache| cache.ids())
            .unwrap_or_default();
        ContainerDescription {
            id: self.id(),
            definition_hash: self.definition_hash.clone(),
            services: self.services.iter().map(|core| core.id().clone()).collect(),
            bindings: self
                .bindings
                .iter()
                .map(|(port, adapter)| (port.clone(), adapter.id().clone()))
                .collect(),
            instances,
        }
    }

    /// Hash of the services and bindings
    pub fn definition_hash(&self) -> &str {
        &self.definition_hash
    }

    pub fn id(&self) -> ComponentId {
        ComponentId::new(Tag::Container, &self.definition_hash)
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn contains_service(&self, id: &ComponentId) -> bool {
        self.services.iter().any(|core| core.id() == id)
    }

    pub fn is_bound(&self, port: &ComponentId) -> bool {
        self.bindings.contains_key(port)
    }

    fn instances(&self) -> Arc<InstanceCache> {
        Arc::clone(self.cache.get_or_init(|| {
            self.registry
                .acquire_definition(&self.definition_hash, &self.key)
        }))
    }

    fn resolve_port(&self, port: &ComponentId) -> Result<Instance> {
        let adapter = self
            .bindings
            .get(port)
            .ok_or_else(|| Error::no_adapter_bound(port))?;
        let cache = self.instances();
        if let Some(instance) = cache.get(port) {
            trace!(port = %port, "Port instance cache hit");
            return Ok(instance);
        }
        trace!(port = %port, adapter = %adapter.id(), "Instantiating adapter");
        Ok(cache.get_or_insert(port.clone(), adapter.instantiate()))
    }

    fn resolve_service(&self, service: &Arc<ServiceCore>) -> Result<Instance> {
        let cache = self.instances();
        if let Some(instance) = cache.get(service.id()) {
            trace!(service = %service.id(), "Service instance cache hit");
            return Ok(instance);
        }

        let keys = self.registry.required_keys(service);
        let mut resolved = HashMap::with_capacity(keys.len());
        for key in keys.iter() {
            let Some(dependency) = service.dependencies().get(key) else {
                continue;
            };
            let instance = match dependency {
                Dependency::Port(port) => self.resolve_port(port)?,
                Dependency::Service(inner) => {
                    if !self.contains_service(inner.id()) {
                        return Err(Error::missing_dependency(key.as_str(), service.id()));
                    }
                    self.resolve_service(inner)?
                }
            };
            resolved.insert(key.clone(), instance);
        }

        trace!(service = %service.id(), "Instantiating service");
        let dependencies = Dependencies::new(service.id().clone(), resolved);
        let instance = service.instantiate(&dependencies)?;
        Ok(cache.get_or_insert(service.id().clone(), instance))
    }
}

/// Start an empty container
pub fn container(registry: &Arc<Registry>) -> Container {
    Container::new(registry)
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("definition_hash", &self.definition_hash)
            .field("services", &self.services.len())
            .field("bindings", &self.bindings.len())
            .finish()
    }
}

/// Snapshot returned by [`Container::describe`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerDescription {
    pub id: ComponentId,
    pub definition_hash: String,
    /// Service ids in the order they were added
    pub services: Vec<ComponentId>,
    /// Port id to adapter id
    pub bindings: BTreeMap<ComponentId, ComponentId>,
    /// Ids with a cached instance, sorted
    pub instances: Vec<ComponentId>,
}
