use std::{collections::HashMap, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, sync::RwLock};

use models::{ItemId, Keyed};

use crate::errors::ServiceError;
use crate::repository::Repository;

/// JSON file-backed repository.
///
/// Keeps the full collection in memory and persists it to a single JSON file
/// after every write. Intended for lightweight deployments where a database
/// is overkill; the file is the only durable state.
pub struct JsonFileRepository<E> {
    inner: RwLock<HashMap<ItemId, E>>,
    file_path: PathBuf,
}

impl<E> JsonFileRepository<E>
where
    E: Keyed + Clone + Serialize + DeserializeOwned + Send + Sync,
{
    /// Initialize the store from a path. Creates the file with an empty map
    /// if missing; a corrupt file starts empty rather than failing startup.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let map: HashMap<ItemId, E> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => {
                let empty: HashMap<ItemId, E> = HashMap::new();
                let data = serde_json::to_vec(&empty)
                    .map_err(|e| ServiceError::Storage(e.to_string()))?;
                fs::write(&file_path, data)
                    .await
                    .map_err(|e| ServiceError::Storage(e.to_string()))?;
                empty
            }
        };

        Ok(Arc::new(Self {
            inner: RwLock::new(map),
            file_path,
        }))
    }

    async fn save(&self) -> Result<(), ServiceError> {
        let map = self.inner.read().await;
        let data =
            serde_json::to_vec(&*map).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl<E> Repository<E> for JsonFileRepository<E>
where
    E: Keyed + Clone + Serialize + DeserializeOwned + Send + Sync,
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
        let stored = {
            let mut map = self.inner.write().await;
            let mut id = ItemId::new();
            while map.contains_key(&id) {
                id = ItemId::new();
            }
            let item = item.with_id(id);
            map.insert(id, item.clone());
            item
        };
        self.save().await?;
        Ok(stored)
    }

    async fn update(&self, id: ItemId, item: E) -> Result<(), ServiceError> {
        {
            let mut map = self.inner.write().await;
            if !map.contains_key(&id) {
                return Err(ServiceError::NotFound);
            }
            map.insert(id, item.with_id(id));
        }
        self.save().await
    }

    async fn remove(&self, id: ItemId) -> Result<(), ServiceError> {
        {
            let mut map = self.inner.write().await;
            if map.remove(&id).is_none() {
                return Err(ServiceError::NotFound);
            }
        }
        self.save().await
    }
}
