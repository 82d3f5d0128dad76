//! Component identity layer
//!
//! | Item | Description |
//! |------|-------------|
//! | [`component`] | Tag a function or object and register its identity |
//! | [`TagRegistry`] | Owner of every component record |
//! | [`Envelope`] | Capability surface shared by all tagged constructs |
//! | [`ComponentTree`] | Cycle-safe rendering of a component and its children |

pub mod envelope;
pub mod record;
pub mod registry;
pub mod target;
pub mod trace;
pub mod tree;

pub use envelope::{Component, Envelope, component};
pub use record::{ComponentInfo, ComponentRecord};
pub use registry::TagRegistry;
pub use target::{Callable, Function, IntoTarget, Target};
pub use tree::ComponentTree;
