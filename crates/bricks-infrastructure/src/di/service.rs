//! Services: factories over a named dependency map

use crate::di::dependencies::Dependencies;
use crate::di::instance_cache::Instance;
use crate::di::port::Port;
use crate::di::registry::Registry;
use bricks_domain::identity::Envelope;
use bricks_domain::{Category, ComponentId, Content, Result, Tag};
use std::marker::PhantomData;
use std::ops::Deref;
use std::sync::Arc;

type ServiceFactory = Box<dyn Fn(&Dependencies) -> Result<Instance> + Send + Sync>;

/// A declared dependency of a service
#[derive(Clone)]
pub enum Dependency {
    /// Resolved through the adapter bound to the port
    Port(ComponentId),
    /// Resolved by building the service; it must be added to the container
    Service(Arc<ServiceCore>),
}

impl Dependency {
    pub fn id(&self) -> &ComponentId {
        match self {
            Dependency::Port(id) => id,
            Dependency::Service(core) => core.id(),
        }
    }
}

impl std::fmt::Debug for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dependency::Port(id) => f.debug_tuple("Port").field(id).finish(),
            Dependency::Service(core) => f.debug_tuple("Service").field(core.id()).finish(),
        }
    }
}

/// Named dependencies of a service, in declaration order
#[derive(Debug, Clone, Default)]
pub struct DependencySpec {
    entries: Vec<(String, Dependency)>,
}

impl DependencySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Depend on a port under `key`
    pub fn port<T: ?Sized>(self, key: &str, port: &Port<T>) -> Self {
        self.with(key, Dependency::Port(port.id().clone()))
    }

    /// Depend on another service under `key`
    pub fn service<T: ?Sized>(self, key: &str, service: &Service<T>) -> Self {
        self.with(key, Dependency::Service(Arc::clone(&service.core)))
    }

    /// Declaring a key twice keeps the first position and the last dependency
    fn with(mut self, key: &str, dependency: Dependency) -> Self {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = dependency,
            None => self.entries.push((key.to_string(), dependency)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Dependency> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, dependency)| dependency)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Dependency)> {
        self.entries.iter().map(|(k, d)| (k.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Type-erased service
pub struct ServiceCore {
    envelope: Envelope,
    source: String,
    dependencies: DependencySpec,
    factory: ServiceFactory,
}

impl ServiceCore {
    pub fn id(&self) -> &ComponentId {
        self.envelope.id()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn dependencies(&self) -> &DependencySpec {
        &self.dependencies
    }

    pub(crate) fn instantiate(&self, dependencies: &Dependencies) -> Result<Instance> {
        (self.factory)(dependencies)
    }
}

/// Component built from other ports and services
///
/// Identity is the hash of the dependency keys and the factory source. The
/// factory receives a [`Dependencies`] proxy; reading a key that was not
/// declared fails at that point with `MissingDependency`.
pub struct Service<T: ?Sized> {
    core: Arc<ServiceCore>,
    _output: PhantomData<fn() -> Arc<T>>,
}

impl<T: ?Sized + Send + Sync + 'static> Service<T> {
    pub fn new<F>(
        registry: &Registry,
        dependencies: DependencySpec,
        source: &str,
        factory: F,
    ) -> Result<Self>
    where
        F: Fn(&Dependencies) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        let content = Content::object([
            ("dependencies", Content::strings(dependencies.keys())),
            ("factory", Content::function(source)),
        ]);
        let record = registry
            .tags()
            .register(Tag::Service, Category::Function, &content)?;
        let envelope = Envelope::new(record, Arc::clone(registry.tags()));
        envelope.add_children(dependencies.iter().map(|(_, dependency)| dependency.id()));

        Ok(Self {
            core: Arc::new(ServiceCore {
                envelope,
                source: source.to_string(),
                dependencies,
                factory: Box::new(move |deps: &Dependencies| {
                    factory(deps).map(|built| Arc::new(built) as Instance)
                }),
            }),
            _output: PhantomData,
        })
    }

    pub fn dependencies(&self) -> &DependencySpec {
        self.core.dependencies()
    }

    pub(crate) fn core(&self) -> &Arc<ServiceCore> {
        &self.core
    }
}

/// Declare a service
pub fn service<T, F>(
    registry: &Registry,
    dependencies: DependencySpec,
    source: &str,
    factory: F,
) -> Result<Service<T>>
where
    T: ?Sized + Send + Sync + 'static,
    F: Fn(&Dependencies) -> Result<Arc<T>> + Send + Sync + 'static,
{
    Service::new(registry, dependencies, source, factory)
}

/// Declare a service whose identity uses the closure's own source text
///
/// ```ignore
/// let greeter = service!(&registry, DependencySpec::new().port("logger", &logger), |deps: &Dependencies| {
///     let logger = deps.get::<dyn Logger>("logger")?;
///     Ok(Arc::new(Greeter { logger }))
/// })?;
/// ```
#[macro_export]
macro_rules! service {
    ($registry:expr, $dependencies:expr, $factory:expr) => {
        $crate::di::Service::new($registry, $dependencies, stringify!($factory), $factory)
    };
}

impl<T: ?Sized> Clone for Service<T> {
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
            _output: PhantomData,
        }
    }
}

impl<T: ?Sized> Deref for Service<T> {
    type Target = Envelope;

    fn deref(&self) -> &Envelope {
        &self.core.envelope
    }
}

impl<T: ?Sized> std::fmt::Debug for Service<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Service")
            .field("id", self.core.id())
            .field("dependencies", &self.core.dependencies)
            .finish()
    }
}
