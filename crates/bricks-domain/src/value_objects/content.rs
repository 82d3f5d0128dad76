//! Hashable content model
//!
//! [`Content`] is the input of the content hasher. It mirrors JSON with one
//! extra case, [`Content::Function`], which carries the source text of a
//! function. Object keys live in a `BTreeMap`, so key order never reaches the
//! hash.

use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// Structural description of a hashable value
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Null,
    Bool(bool),
    Number(Number),
    Str(String),
    /// Function identified by its source text
    Function(String),
    Array(Vec<Content>),
    Object(BTreeMap<String, Content>),
}

impl Content {
    /// Function content from its source text
    pub fn function<S: Into<String>>(source: S) -> Self {
        Content::Function(source.into())
    }

    /// Object content from key/value pairs
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Content)>,
    {
        Content::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Array of strings, kept in the given order
    pub fn strings<S, I>(items: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        Content::Array(items.into_iter().map(|s| Content::Str(s.into())).collect())
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Str(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Str(value)
    }
}

impl From<bool> for Content {
    fn from(value: bool) -> Self {
        Content::Bool(value)
    }
}

impl From<i64> for Content {
    fn from(value: i64) -> Self {
        Content::Number(value.into())
    }
}

impl From<u64> for Content {
    fn from(value: u64) -> Self {
        Content::Number(value.into())
    }
}

impl From<Vec<Content>> for Content {
    fn from(value: Vec<Content>) -> Self {
        Content::Array(value)
    }
}

impl From<&Value> for Content {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Content::Null,
            Value::Bool(b) => Content::Bool(*b),
            Value::Number(n) => Content::Number(n.clone()),
            Value::String(s) => Content::Str(s.clone()),
            Value::Array(items) => Content::Array(items.iter().map(Content::from).collect()),
            Value::Object(map) => Content::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Content::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for Content {
    fn from(value: Value) -> Self {
        Content::from(&value)
    }
}
