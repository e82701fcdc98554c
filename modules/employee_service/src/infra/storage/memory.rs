//! In-memory repository implementation

use crate::domain::repository::{Entity, Repository};
use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::RwLock;
use uuid::Uuid;

/// Process-local store keyed by entity id, iterated in insertion order
///
/// Every operation takes the lock once, so mutations are atomic per key.
pub struct InMemoryRepository<T: Entity> {
    data: RwLock<IndexMap<Uuid, T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(IndexMap::new()),
        }
    }

    /// Create a repository pre-populated with `data`
    ///
    /// A later entity with an already seen id replaces the earlier one.
    pub fn with_data(data: impl IntoIterator<Item = T>) -> Self {
        let data = data.into_iter().map(|e| (e.id(), e)).collect();
        Self {
            data: RwLock::new(data),
        }
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>> {
        Ok(self.data.read().values().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<T>> {
        Ok(self.data.read().get(&id).cloned())
    }

    async fn create(&self, entity: T) -> Result<T> {
        self.data.write().insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: Uuid, entity: T) -> Result<Option<T>> {
        let mut data = self.data.write();
        match data.get_mut(&id) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(Some(entity))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        // shift_remove keeps the remaining entities in insertion order
        Ok(self.data.write().shift_remove(&id).is_some())
    }
}
