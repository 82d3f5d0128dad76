//! Component envelopes
//!
//! An [`Envelope`] is the capability surface every tagged construct exposes:
//! metadata, snapshots, trees and children. Non-injectable components can
//! also be made traceable and given a sub type; injectable components expose
//! their injection id instead. The two capability sets are exclusive.

use crate::error::{Error, Result};
use crate::identity::record::{ComponentInfo, ComponentRecord};
use crate::identity::registry::TagRegistry;
use crate::identity::target::{IntoTarget, Target};
use crate::identity::trace::traced;
use crate::identity::tree::ComponentTree;
use crate::value_objects::{Category, ComponentId, Metadata, Tag};
use serde_json::Value;
use std::ops::Deref;
use std::sync::Arc;

/// Shared handle on a registered component
#[derive(Clone)]
pub struct Envelope {
    record: Arc<ComponentRecord>,
    registry: Arc<TagRegistry>,
}

impl Envelope {
    pub fn new(record: Arc<ComponentRecord>, registry: Arc<TagRegistry>) -> Self {
        Self { record, registry }
    }

    pub fn id(&self) -> &ComponentId {
        self.record.id()
    }

    pub fn tag(&self) -> Tag {
        self.record.tag()
    }

    pub fn category(&self) -> Category {
        self.record.category()
    }

    pub fn record(&self) -> &Arc<ComponentRecord> {
        &self.record
    }

    /// Write metadata; inert once name and description are both set
    pub fn meta(&self, meta: Metadata) -> &Self {
        self.record.set_meta(meta);
        self
    }

    pub fn info(&self) -> ComponentInfo {
        self.record.info()
    }

    /// This component and its children, stopping at ids already on the path
    pub fn tree(&self) -> Result<ComponentTree> {
        ComponentTree::build(&self.registry, &self.record)
    }

    /// Append child ids; a component may list itself
    pub fn add_children<'a, I>(&self, ids: I) -> &Self
    where
        I: IntoIterator<Item = &'a ComponentId>,
    {
        self.record.add_children(ids);
        self
    }

    /// Route calls through the tracer
    pub fn traceable(&self) -> Result<&Self> {
        self.require_plain("traceable")?;
        self.record.mark_traceable();
        Ok(self)
    }

    /// Set the sub type; the first one set is kept
    pub fn sub_type<S: Into<String>>(&self, name: S) -> Result<&Self> {
        self.require_plain("subType")?;
        self.record.set_sub_type(name.into());
        Ok(self)
    }

    /// Id under which the container injects this component
    pub fn injectable(&self) -> Result<&ComponentId> {
        if !self.record.is_injectable() {
            return Err(Error::capability_unavailable(self.tag().as_str(), "injectable"));
        }
        Ok(self.record.id())
    }

    fn require_plain(&self, capability: &str) -> Result<()> {
        if self.record.is_injectable() {
            return Err(Error::capability_unavailable(self.tag().as_str(), capability));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Envelope")
            .field("id", self.id())
            .field("tag", &self.tag())
            .finish()
    }
}

/// A tagged function or object
#[derive(Debug, Clone)]
pub struct Component {
    envelope: Envelope,
    target: Target,
}

impl Component {
    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Invoke a function target, traced when the component is traceable
    pub fn call(&self, input: Value) -> Result<Value> {
        match &self.target {
            Target::Function(callable) if self.envelope.record.is_traceable() => {
                Ok(traced(&self.envelope.record, || callable.call(input)))
            }
            Target::Function(callable) => Ok(callable.call(input)),
            Target::Object(_) => Err(Error::NotCallable {
                id: self.id().to_string(),
            }),
        }
    }
}

impl Deref for Component {
    type Target = Envelope;

    fn deref(&self) -> &Envelope {
        &self.envelope
    }
}

/// Tag `target` and return its envelope
///
/// The id is `lower(tag):hash(target)`. Calling this twice with structurally
/// identical targets returns envelopes over the same record. Fails with
/// `InvalidTarget` for anything but a function or plain object and with
/// `AlreadyRegistered` when the target already carries another tag.
pub fn component<T: IntoTarget>(
    registry: &Arc<TagRegistry>,
    tag: Tag,
    target: T,
) -> Result<Component> {
    let target = target.into_target()?;
    let record = registry.register(tag, target.category(), &target.content())?;
    Ok(Component {
        envelope: Envelope::new(record, Arc::clone(registry)),
        target,
    })
}
