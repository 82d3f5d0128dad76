//! Error handling types
//!
//! Every failure of the component and container layers is a variant of
//! [`Error`]. Each variant carries a namespaced key (see [`Error::key`]) and a
//! human readable message. These are configuration mistakes, not transient
//! failures, so nothing in this workspace retries on them.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Bricks
#[derive(Error, Debug)]
pub enum Error {
    /// Component target is neither a function nor a plain object
    #[error("Invalid target: {message}")]
    InvalidTarget {
        /// Why the target was rejected
        message: String,
    },

    /// Target already registered under a different tag
    #[error("Component {id} is already registered with tag {existing}, cannot register it as {requested}")]
    AlreadyRegistered {
        /// Id computed for the rejected registration
        id: String,
        /// Tag the target was first registered with
        existing: String,
        /// Tag of the rejected registration
        requested: String,
    },

    /// Lookup of an unknown component id
    #[error("Component not found: {id}")]
    ComponentNotFound {
        /// The id that was looked up
        id: String,
    },

    /// Port requested without any bound adapter
    #[error("No adapter bound for port {port}")]
    NoAdapterBound {
        /// Id of the unbound port
        port: String,
    },

    /// Override of a port that was never bound
    #[error("Cannot override port {port}: no adapter is bound to it")]
    CannotOverrideUnboundPort {
        /// Id of the unbound port
        port: String,
    },

    /// Service factory accessed a dependency that was not resolved
    #[error("Missing dependency \"{key}\" for service {service}")]
    MissingDependency {
        /// Dependency key the factory asked for
        key: String,
        /// Id of the service being resolved
        service: String,
    },

    /// Container asked to resolve something that is neither a port nor a service
    #[error("Invalid definition type: {id} is tagged {tag}, expected Port or Service")]
    InvalidDefinitionType {
        /// Id of the offending definition
        id: String,
        /// Its tag
        tag: String,
    },

    /// Dependency resolved but with a different implementation type
    #[error("Dependency \"{key}\" is not of type {expected}")]
    DependencyTypeMismatch {
        /// Dependency key
        key: String,
        /// Requested type name
        expected: String,
    },

    /// Capability not offered by the component's tag group
    #[error("Capability {capability} is not available for {tag} components")]
    CapabilityUnavailable {
        /// Tag of the component
        tag: String,
        /// Capability that was requested
        capability: String,
    },

    /// Component target cannot be invoked
    #[error("Component {id} is not callable")]
    NotCallable {
        /// Id of the component
        id: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Namespaced key identifying the error kind
    pub fn key(&self) -> &'static str {
        match self {
            Self::InvalidTarget { .. } => "component.invalid_target",
            Self::AlreadyRegistered { .. } => "component.already_registered",
            Self::ComponentNotFound { .. } => "component.not_found",
            Self::CapabilityUnavailable { .. } => "component.capability_unavailable",
            Self::NotCallable { .. } => "component.not_callable",
            Self::NoAdapterBound { .. } => "container.no_adapter_bound",
            Self::CannotOverrideUnboundPort { .. } => "container.cannot_override_unbound_port",
            Self::MissingDependency { .. } => "container.missing_dependency",
            Self::InvalidDefinitionType { .. } => "container.invalid_definition_type",
            Self::DependencyTypeMismatch { .. } => "container.dependency_type_mismatch",
            Self::Configuration { .. } => "config.invalid",
        }
    }

    /// Create an invalid target error
    pub fn invalid_target<S: Into<String>>(message: S) -> Self {
        Self::InvalidTarget {
            message: message.into(),
        }
    }

    /// Create a component not found error
    pub fn component_not_found<S: Into<String>>(id: S) -> Self {
        Self::ComponentNotFound { id: id.into() }
    }

    /// Create a no adapter bound error
    pub fn no_adapter_bound<S: Into<String>>(port: S) -> Self {
        Self::NoAdapterBound { port: port.into() }
    }

    /// Create a missing dependency error
    pub fn missing_dependency<K: Into<String>, S: Into<String>>(key: K, service: S) -> Self {
        Self::MissingDependency {
            key: key.into(),
            service: service.into(),
        }
    }

    /// Create a capability unavailable error
    pub fn capability_unavailable<T: Into<String>, C: Into<String>>(tag: T, capability: C) -> Self {
        Self::CapabilityUnavailable {
            tag: tag.into(),
            capability: capability.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
