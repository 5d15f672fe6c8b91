//! Storage port consumed by the service layer.

use async_trait::async_trait;

use models::ItemId;

use crate::errors::ServiceError;

/// Abstract storage operations for one resource type. The service depends on
/// nothing else for persistence; implementations must be safe for concurrent
/// invocation and are responsible for serializing conflicting writes.
#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Send + Sync,
{
    /// Return the full collection. An empty store yields an empty vec, not an
    /// error.
    async fn get_all(&self) -> Result<Vec<E>, ServiceError>;

    /// Return the entity at `id`, or [`ServiceError::NotFound`].
    async fn get_by_id(&self, id: ItemId) -> Result<E, ServiceError>;

    /// Store a new entity and return it with a freshly assigned key. The key
    /// must not collide with any stored one.
    async fn insert(&self, item: E) -> Result<E, ServiceError>;

    /// Replace the entity at `id` in place, or [`ServiceError::NotFound`] if
    /// absent.
    async fn update(&self, id: ItemId, item: E) -> Result<(), ServiceError>;

    /// Delete the entity at `id`, or [`ServiceError::NotFound`] if absent.
    async fn remove(&self, id: ItemId) -> Result<(), ServiceError>;
}
