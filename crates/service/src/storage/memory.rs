use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use models::{ItemId, Keyed};

use crate::errors::ServiceError;
use crate::repository::Repository;

/// Map-backed repository with no persistence. Default backend for tests and
/// local development.
#[derive(Default)]
pub struct InMemoryRepository<E> {
    inner: RwLock<HashMap<ItemId, E>>,
}

impl<E> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl<E> Repository<E> for InMemoryRepository<E>
where
    E: Keyed + Clone + Send + Sync,
{
    async fn get_all(&self) -> Result<Vec<E>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.values().cloned().collect())
    }

    async fn get_by_id(&self, id: ItemId) -> Result<E, ServiceError> {
        let map = self.inner.read().await;
        map.get(&id).cloned().ok_or(ServiceError::NotFound)
    }

    async fn insert(&self, item: E) -> Result<E, ServiceError> {
        let mut map = self.inner.write().await;
        let mut id = ItemId::new();
        while map.contains_key(&id) {
            id = ItemId::new();
        }
        let item = item.with_id(id);
        map.insert(id, item.clone());
        Ok(item)
    }

    async fn update(&self, id: ItemId, item: E) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        if !map.contains_key(&id) {
            return Err(ServiceError::NotFound);
        }
        // The stored record always carries the addressed key, whatever the
        // payload claimed.
        map.insert(id, item.with_id(id));
        Ok(())
    }

    async fn remove(&self, id: ItemId) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        match map.remove(&id) {
            Some(_) => Ok(()),
            None => Err(ServiceError::NotFound),
        }
    }
}
