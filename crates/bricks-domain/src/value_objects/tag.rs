//! Component tags and categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of tags a component can carry
///
/// Tags are split in two groups. Non-injectable tags mark domain building
/// blocks (values, events, rules...). Injectable tags mark the pieces the
/// container wires together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tag {
    Rule,
    Object,
    Builder,
    Criteria,
    Value,
    Event,
    Specification,
    Aggregate,
    Schema,
    Command,
    Query,
    Port,
    Adapter,
    Service,
    Container,
}

impl Tag {
    /// Every tag, non-injectable ones first
    pub const ALL: [Tag; 15] = [
        Tag::Rule,
        Tag::Object,
        Tag::Builder,
        Tag::Criteria,
        Tag::Value,
        Tag::Event,
        Tag::Specification,
        Tag::Aggregate,
        Tag::Schema,
        Tag::Command,
        Tag::Query,
        Tag::Port,
        Tag::Adapter,
        Tag::Service,
        Tag::Container,
    ];

    /// Tag name as written in component ids and messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Rule => "Rule",
            Tag::Object => "Object",
            Tag::Builder => "Builder",
            Tag::Criteria => "Criteria",
            Tag::Value => "Value",
            Tag::Event => "Event",
            Tag::Specification => "Specification",
            Tag::Aggregate => "Aggregate",
            Tag::Schema => "Schema",
            Tag::Command => "Command",
            Tag::Query => "Query",
            Tag::Port => "Port",
            Tag::Adapter => "Adapter",
            Tag::Service => "Service",
            Tag::Container => "Container",
        }
    }

    /// Whether components with this tag participate in dependency injection
    pub fn is_injectable(&self) -> bool {
        matches!(self, Tag::Port | Tag::Adapter | Tag::Service | Tag::Container)
    }

    /// Prefix used in component ids (`lower(tag)`)
    pub fn id_prefix(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of the target a component wraps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Function,
    Object,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Function => f.write_str("function"),
            Category::Object => f.write_str("object"),
        }
    }
}
