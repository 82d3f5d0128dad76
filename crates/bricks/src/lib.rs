//! # Bricks
//!
//! Content-addressed component identity and an immutable dependency-injection
//! container.
//!
//! Every function or object tagged as a component gets an id derived from its
//! content, so identical definitions share identity. Ports, adapters and
//! services are components too; containers bind ports to adapters and resolve
//! services lazily, caching instances per container definition.
//!
//! ## Example
//!
//! ```ignore
//! use bricks::prelude::*;
//! use std::sync::Arc;
//!
//! trait Logger: Send + Sync {
//!     fn log(&self, message: &str);
//! }
//!
//! struct ConsoleLogger;
//!
//! impl Logger for ConsoleLogger {
//!     fn log(&self, message: &str) {
//!         println!("{message}");
//!     }
//! }
//!
//! let registry = Arc::new(Registry::new());
//! let logger = port::<dyn Logger>(&registry)?;
//! let console = adapter!(&registry, || Arc::new(ConsoleLogger) as Arc<dyn Logger>)?;
//! let app = container(&registry).bind(&logger, &console);
//! app.get(&logger)?.log("ready");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - tags, content hashing, component records and envelopes
//! - `infrastructure` - ports, adapters, services, containers, registry
//!   pools, configuration and logging

/// Domain layer - component identity
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use bricks_domain::*;
}

/// Infrastructure layer - DI, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use bricks_infrastructure::*;
}

/// Everything needed to declare components and wire containers
pub mod prelude {
    pub use bricks_domain::identity::{Callable, Component, Envelope, component};
    pub use bricks_domain::{ComponentId, Error, Metadata, Result, Tag, callable};
    pub use bricks_infrastructure::di::{
        Adapter, Container, Dependencies, DependencySpec, Port, Registry, Service, port,
    };
    pub use bricks_infrastructure::{adapter, container, service};
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use bricks_infrastructure::di::{Container, Registry, container, port};
pub use bricks_infrastructure::logging::init_logging;
pub use bricks_infrastructure::{adapter, service};
