//! Ports: capability declarations without behavior

use crate::di::registry::Registry;
use bricks_domain::identity::Envelope;
use bricks_domain::{Category, Content, Result, Tag};
use std::any::type_name;
use std::marker::PhantomData;
use std::ops::Deref;
use std::sync::Arc;
use uuid::Uuid;

/// Declaration of a capability implemented by adapters
///
/// `T` is the implementation shape, usually `dyn Trait`. A port has no
/// factory; the container resolves it through the adapter bound to it.
pub struct Port<T: ?Sized> {
    envelope: Envelope,
    _shape: PhantomData<fn() -> Arc<T>>,
}

impl<T: ?Sized + Send + Sync + 'static> Port<T> {
    /// Fresh port, distinct from every other port
    pub fn new(registry: &Registry) -> Result<Self> {
        let marker = Uuid::new_v4().to_string();
        Self::register(
            registry,
            Content::object([
                ("marker", Content::from(marker)),
                ("shape", Content::from(type_name::<T>())),
            ]),
        )
    }

    /// Port identified by `name` and its shape; the same pair yields the same id
    pub fn named(registry: &Registry, name: &str) -> Result<Self> {
        Self::register(
            registry,
            Content::object([
                ("name", Content::from(name)),
                ("shape", Content::from(type_name::<T>())),
            ]),
        )
    }

    fn register(registry: &Registry, content: Content) -> Result<Self> {
        let record = registry
            .tags()
            .register(Tag::Port, Category::Object, &content)?;
        Ok(Self {
            envelope: Envelope::new(record, Arc::clone(registry.tags())),
            _shape: PhantomData,
        })
    }

    /// Type name of the implementation shape
    pub fn shape(&self) -> &'static str {
        type_name::<T>()
    }
}

/// Declare a fresh port
pub fn port<T: ?Sized + Send + Sync + 'static>(registry: &Registry) -> Result<Port<T>> {
    Port::new(registry)
}

impl<T: ?Sized> Clone for Port<T> {
    fn clone(&self) -> Self {
        Self {
            envelope: self.envelope.clone(),
            _shape: PhantomData,
        }
    }
}

impl<T: ?Sized> Deref for Port<T> {
    type Target = Envelope;

    fn deref(&self) -> &Envelope {
        &self.envelope
    }
}

impl<T: ?Sized> std::fmt::Debug for Port<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Port").field("id", self.envelope.id()).finish()
    }
}
