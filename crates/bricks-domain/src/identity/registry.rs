//! Tag registry
//!
//! Owns every [`ComponentRecord`] and enforces that a target (by content
//! hash) is only ever registered under one tag.

use crate::error::{Error, Result};
use crate::hashing::Sha256ContentHasher;
use crate::identity::record::ComponentRecord;
use crate::identity::tree::ComponentTree;
use crate::ports::ContentHasher;
use crate::value_objects::{Category, ComponentId, Content, Tag};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use tracing::debug;

/// Registry of component identities
pub struct TagRegistry {
    hasher: Arc<dyn ContentHasher>,
    records: DashMap<ComponentId, Arc<ComponentRecord>>,
    claims: DashMap<String, Tag>,
}

impl TagRegistry {
    /// Registry using the SHA-256 content hasher
    pub fn new() -> Self {
        Self::with_hasher(Arc::new(Sha256ContentHasher::new()))
    }

    /// Registry using a custom hasher
    pub fn with_hasher(hasher: Arc<dyn ContentHasher>) -> Self {
        Self {
            hasher,
            records: DashMap::new(),
            claims: DashMap::new(),
        }
    }

    pub fn hasher(&self) -> &Arc<dyn ContentHasher> {
        &self.hasher
    }

    /// Hash content with this registry's hasher
    pub fn hash(&self, content: &Content) -> String {
        self.hasher.hash(content)
    }

    /// Register `content` under `tag`, or return the existing record
    pub fn register(
        &self,
        tag: Tag,
        category: Category,
        content: &Content,
    ) -> Result<Arc<ComponentRecord>> {
        let hash = self.hash(content);
        self.register_hash(tag, category, &hash)
    }

    /// Register an already computed content hash under `tag`
    pub fn register_hash(
        &self,
        tag: Tag,
        category: Category,
        hash: &str,
    ) -> Result<Arc<ComponentRecord>> {
        let id = ComponentId::new(tag, hash);
        match self.claims.entry(hash.to_string()) {
            Entry::Occupied(claim) if *claim.get() != tag => {
                return Err(Error::AlreadyRegistered {
                    id: id.to_string(),
                    existing: claim.get().to_string(),
                    requested: tag.to_string(),
                });
            }
            Entry::Occupied(_) => {}
            Entry::Vacant(claim) => {
                claim.insert(tag);
            }
        }

        let record = self
            .records
            .entry(id.clone())
            .or_insert_with(|| {
                debug!(id = %id, tag = %tag, "Registered component");
                Arc::new(ComponentRecord::new(id.clone(), tag, category))
            })
            .clone();
        Ok(record)
    }

    /// Record registered under `id`
    pub fn get(&self, id: &ComponentId) -> Option<Arc<ComponentRecord>> {
        self.records.get(id).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, id: &ComponentId) -> bool {
        self.records.contains_key(id)
    }

    /// Tree rooted at the component registered under `id`
    pub fn tree(&self, id: &ComponentId) -> Result<ComponentTree> {
        let record = self
            .get(id)
            .ok_or_else(|| Error::component_not_found(id))?;
        ComponentTree::build(self, &record)
    }

    /// All registered ids, sorted
    pub fn ids(&self) -> Vec<ComponentId> {
        let mut ids: Vec<ComponentId> = self.records.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Forget every record and tag claim
    pub fn clear(&self) {
        self.records.clear();
        self.claims.clear();
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TagRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagRegistry")
            .field("records", &self.records.len())
            .finish()
    }
}
