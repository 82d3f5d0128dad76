//! Component targets

use crate::error::{Error, Result};
use crate::value_objects::{Category, Content};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Function wrapped by a component
pub type Function = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// A function together with the source text that identifies it
///
/// Use the [`callable!`](crate::callable) macro to capture the source text of
/// a closure automatically.
#[derive(Clone)]
pub struct Callable {
    source: String,
    function: Function,
}

impl Callable {
    pub fn new<S, F>(source: S, function: F) -> Self
    where
        S: Into<String>,
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self {
            source: source.into(),
            function: Arc::new(function),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn call(&self, input: Value) -> Value {
        (self.function)(input)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Wrap a closure into a [`Callable`] whose source is the closure's own text
#[macro_export]
macro_rules! callable {
    ($function:expr) => {
        $crate::identity::Callable::new(stringify!($function), $function)
    };
}

/// What a component wraps: a function or a plain object
#[derive(Debug, Clone)]
pub enum Target {
    Function(Callable),
    Object(Map<String, Value>),
}

impl Target {
    pub fn category(&self) -> Category {
        match self {
            Target::Function(_) => Category::Function,
            Target::Object(_) => Category::Object,
        }
    }

    /// Hashable description of the target
    pub fn content(&self) -> Content {
        match self {
            Target::Function(callable) => Content::function(callable.source()),
            Target::Object(map) => Content::from(&Value::Object(map.clone())),
        }
    }
}

/// Conversion into a component target, rejecting anything that is not a
/// function or a plain object
pub trait IntoTarget {
    fn into_target(self) -> Result<Target>;
}

impl IntoTarget for Target {
    fn into_target(self) -> Result<Target> {
        Ok(self)
    }
}

impl IntoTarget for Callable {
    fn into_target(self) -> Result<Target> {
        Ok(Target::Function(self))
    }
}

impl IntoTarget for Map<String, Value> {
    fn into_target(self) -> Result<Target> {
        Ok(Target::Object(self))
    }
}

impl IntoTarget for Value {
    fn into_target(self) -> Result<Target> {
        match self {
            Value::Object(map) => Ok(Target::Object(map)),
            other => Err(Error::invalid_target(format!(
                "expected a function or a plain object, got {}",
                value_kind(&other)
            ))),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
