//! Adapters: deduplicated factories implementing a port

use crate::di::instance_cache::Instance;
use crate::di::registry::Registry;
use bricks_domain::identity::Envelope;
use bricks_domain::{Category, ComponentId, Content, Result, Tag};
use std::any::TypeId;
use std::marker::PhantomData;
use std::ops::Deref;
use std::sync::Arc;

type AdapterFactory = Box<dyn Fn() -> Instance + Send + Sync>;

/// Type-erased adapter shared through the adapter registry
pub struct AdapterCore {
    envelope: Envelope,
    source: String,
    output: TypeId,
    factory: AdapterFactory,
}

impl AdapterCore {
    pub fn id(&self) -> &ComponentId {
        self.envelope.id()
    }

    /// Factory source text the adapter is identified by
    pub fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn output(&self) -> TypeId {
        self.output
    }

    pub(crate) fn instantiate(&self) -> Instance {
        (self.factory)()
    }
}

/// Zero-argument factory producing an implementation of `T`
///
/// Identity is the hash of the factory source. Building two adapters from the
/// same source returns the same shared adapter. Use the
/// [`adapter!`](crate::adapter) macro to capture a closure's source text.
pub struct Adapter<T: ?Sized> {
    core: Arc<AdapterCore>,
    _output: PhantomData<fn() -> Arc<T>>,
}

impl<T: ?Sized + Send + Sync + 'static> Adapter<T> {
    pub fn new<F>(registry: &Registry, source: &str, factory: F) -> Result<Self>
    where
        F: Fn() -> Arc<T> + Send + Sync + 'static,
    {
        let hash = registry.tags().hash(&Content::function(source));
        let core = registry.dedup_adapter(&hash, source, TypeId::of::<Arc<T>>(), || {
            let record = registry
                .tags()
                .register_hash(Tag::Adapter, Category::Function, &hash)?;
            Ok(Arc::new(AdapterCore {
                envelope: Envelope::new(record, Arc::clone(registry.tags())),
                source: source.to_string(),
                output: TypeId::of::<Arc<T>>(),
                factory: Box::new(move || Arc::new(factory()) as Instance),
            }))
        })?;
        Ok(Self {
            core,
            _output: PhantomData,
        })
    }

    pub fn source(&self) -> &str {
        self.core.source()
    }

    /// Both handles point at the same registered adapter
    pub fn is_same(&self, other: &Adapter<T>) -> bool {
        Arc::ptr_eq(&self.core, &other.core)
    }

    pub(crate) fn core(&self) -> &Arc<AdapterCore> {
        &self.core
    }
}

/// Build (or reuse) the adapter for `factory`
pub fn adapter<T, F>(registry: &Registry, source: &str, factory: F) -> Result<Adapter<T>>
where
    T: ?Sized + Send + Sync + 'static,
    F: Fn() -> Arc<T> + Send + Sync + 'static,
{
    Adapter::new(registry, source, factory)
}

/// Build an adapter whose identity is the closure's own source text
///
/// ```ignore
/// let console = adapter!(&registry, || Arc::new(ConsoleLogger) as Arc<dyn Logger>)?;
/// ```
#[macro_export]
macro_rules! adapter {
    ($registry:expr, $factory:expr) => {
        $crate::di::Adapter::new($registry, stringify!($factory), $factory)
    };
}

impl<T: ?Sized> Clone for Adapter<T> {
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
            _output: PhantomData,
        }
    }
}

impl<T: ?Sized> Deref for Adapter<T> {
    type Target = Envelope;

    fn deref(&self) -> &Envelope {
        &self.core.envelope
    }
}

impl<T: ?Sized> std::fmt::Debug for Adapter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Adapter")
            .field("id", self.core.id())
            .field("source", &self.core.source)
            .finish()
    }
}
