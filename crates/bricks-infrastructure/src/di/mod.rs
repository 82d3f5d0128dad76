//! # Dependency Injection
//!
//! Ports, adapters and services resolved by immutable containers.
//!
//! | Type | Role |
//! |------|------|
//! | [`Port`] | Capability declaration, resolved through a bound adapter |
//! | [`Adapter`] | Zero-argument factory, deduplicated by source hash |
//! | [`Service`] | Factory over named dependencies |
//! | [`Container`] | Immutable set of services and bindings |
//! | [`Registry`] | Tag registry plus the adapter, definition and shape pools |
//!
//! ```ignore
//! let registry = Arc::new(Registry::new());
//! let logger = port::<dyn Logger>(&registry)?;
//! let console = adapter!(&registry, || Arc::new(ConsoleLogger) as Arc<dyn Logger>)?;
//! let app = container(&registry).bind(&logger, &console);
//! app.get(&logger)?.log("ready");
//! ```

pub mod adapter;
pub mod container;
pub mod definition;
pub mod dependencies;
pub mod instance_cache;
pub mod pool;
pub mod port;
pub mod registry;
pub mod service;

pub use adapter::{Adapter, AdapterCore, adapter};
pub use container::{Container, ContainerDescription, container};
pub use definition::{Definition, DefinitionKind};
pub use dependencies::Dependencies;
pub use instance_cache::{Instance, InstanceCache};
pub use pool::FifoPool;
pub use port::{Port, port};
pub use registry::{Registry, RegistrySnapshot};
pub use service::{Dependency, DependencySpec, Service, ServiceCore, service};
