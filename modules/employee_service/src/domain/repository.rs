//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage.

use crate::contract::Employee;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// A stored record keyed by a unique identifier
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}

impl Entity for Employee {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Identifier-keyed store for any entity type
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// All stored entities in insertion order
    async fn get_all(&self) -> Result<Vec<T>>;

    /// Find an entity by identifier
    async fn get_by_id(&self, id: Uuid) -> Result<Option<T>>;

    /// Store a new entity
    async fn create(&self, entity: T) -> Result<T>;

    /// Replace the entity stored under `id`; `None` when `id` is unknown
    async fn update(&self, id: Uuid, entity: T) -> Result<Option<T>>;

    /// Remove the entity stored under `id`, returning whether one was removed
    async fn delete(&self, id: Uuid) -> Result<bool>;
}
