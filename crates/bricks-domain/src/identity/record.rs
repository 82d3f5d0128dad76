//! Component records and their snapshots

use crate::value_objects::{Category, ComponentId, Metadata, Tag};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Registered identity of a component
///
/// Records are shared (`Arc`) between every envelope built for the same
/// target. Id, tag and category never change; metadata and sub type are
/// write-once, children are append-only.
#[derive(Debug)]
pub struct ComponentRecord {
    id: ComponentId,
    tag: Tag,
    category: Category,
    sub_type: OnceLock<String>,
    traceable: AtomicBool,
    meta: Mutex<Metadata>,
    children: Mutex<Vec<ComponentId>>,
}

impl ComponentRecord {
    pub(crate) fn new(id: ComponentId, tag: Tag, category: Category) -> Self {
        Self {
            id,
            tag,
            category,
            sub_type: OnceLock::new(),
            traceable: AtomicBool::new(false),
            meta: Mutex::new(Metadata::default()),
            children: Mutex::new(Vec::new()),
        }
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_injectable(&self) -> bool {
        self.tag.is_injectable()
    }

    pub fn is_traceable(&self) -> bool {
        self.traceable.load(Ordering::Acquire)
    }

    pub fn sub_type(&self) -> Option<&str> {
        self.sub_type.get().map(String::as_str)
    }

    /// Current metadata, `None` until something was written
    pub fn meta(&self) -> Option<Metadata> {
        let meta = lock(&self.meta);
        (*meta != Metadata::default()).then(|| meta.clone())
    }

    /// Child ids in insertion order
    pub fn children_ids(&self) -> Vec<ComponentId> {
        lock(&self.children).clone()
    }

    pub(crate) fn mark_traceable(&self) {
        self.traceable.store(true, Ordering::Release);
    }

    /// First sub type wins; returns whether this call set it
    pub(crate) fn set_sub_type(&self, name: String) -> bool {
        self.sub_type.set(name).is_ok()
    }

    pub(crate) fn set_meta(&self, meta: Metadata) -> bool {
        lock(&self.meta).merge(meta)
    }

    /// Append children, skipping ids already listed
    pub(crate) fn add_children<'a, I>(&self, ids: I)
    where
        I: IntoIterator<Item = &'a ComponentId>,
    {
        let mut children = lock(&self.children);
        for id in ids {
            if !children.contains(id) {
                children.push(id.clone());
            }
        }
    }

    /// Frozen snapshot of the record
    pub fn info(&self) -> ComponentInfo {
        ComponentInfo {
            id: self.id.clone(),
            tag: self.tag,
            category: self.category,
            sub_type: self.sub_type().map(str::to_string),
            traceable: self.is_traceable(),
            injectable: self.is_injectable(),
            meta: self.meta(),
            children_ids: self.children_ids(),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Read-only snapshot of a [`ComponentRecord`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInfo {
    pub id: ComponentId,
    pub tag: Tag,
    pub category: Category,
    pub sub_type: Option<String>,
    pub traceable: bool,
    pub injectable: bool,
    pub meta: Option<Metadata>,
    pub children_ids: Vec<ComponentId>,
}
