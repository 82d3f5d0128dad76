//! What a container can be asked to resolve

use crate::di::adapter::Adapter;
use crate::di::port::Port;
use crate::di::service::{Service, ServiceCore};
use bricks_domain::identity::{Component, Envelope};
use bricks_domain::ComponentId;
use std::any::Any;
use std::sync::Arc;

/// How the container resolves a definition
pub enum DefinitionKind<'a> {
    /// Through the adapter bound to this port id
    Port(&'a ComponentId),
    /// By running the service factory
    Service(&'a Arc<ServiceCore>),
    /// Not resolvable
    Other,
}

/// Anything that can be passed to [`Container::get`](crate::di::Container::get)
pub trait Definition {
    /// Type handed back by a successful resolution
    type Output: ?Sized + Send + Sync + 'static;

    fn envelope(&self) -> &Envelope;

    fn kind(&self) -> DefinitionKind<'_>;
}

impl<T: ?Sized + Send + Sync + 'static> Definition for Port<T> {
    type Output = T;

    fn envelope(&self) -> &Envelope {
        self
    }

    fn kind(&self) -> DefinitionKind<'_> {
        DefinitionKind::Port(self.id())
    }
}

impl<T: ?Sized + Send + Sync + 'static> Definition for Service<T> {
    type Output = T;

    fn envelope(&self) -> &Envelope {
        self
    }

    fn kind(&self) -> DefinitionKind<'_> {
        DefinitionKind::Service(self.core())
    }
}

impl<T: ?Sized + Send + Sync + 'static> Definition for Adapter<T> {
    type Output = T;

    fn envelope(&self) -> &Envelope {
        self
    }

    fn kind(&self) -> DefinitionKind<'_> {
        DefinitionKind::Other
    }
}

impl Definition for Component {
    type Output = dyn Any + Send + Sync;

    fn envelope(&self) -> &Envelope {
        Component::envelope(self)
    }

    fn kind(&self) -> DefinitionKind<'_> {
        DefinitionKind::Other
    }
}

impl Definition for Envelope {
    type Output = dyn Any + Send + Sync;

    fn envelope(&self) -> &Envelope {
        self
    }

    fn kind(&self) -> DefinitionKind<'_> {
        DefinitionKind::Other
    }
}
