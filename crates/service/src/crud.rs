//! Generic CRUD orchestration between a transport adapter and a storage port.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde_json::json;

use models::{ItemId, ModelError};

use crate::errors::ServiceError;
use crate::logger::{LogFields, Logger};
use crate::repository::Repository;

/// Static messages identifying which operation failed.
pub const FAILED_TO_PARSE_ID: &str = "failed to parse identifier";
pub const FAILED_TO_GET_ALL: &str = "failed to get all items";
pub const FAILED_TO_GET_BY_ID: &str = "failed to get by id";
pub const FAILED_TO_CREATE: &str = "failed to create item";
pub const FAILED_TO_UPDATE: &str = "failed to update item";
pub const FAILED_TO_DELETE: &str = "failed to delete item";

/// Field names attached to failure records.
pub const ID_FIELD: &str = "id";
pub const ITEM_FIELD: &str = "item";

/// Orchestrates one resource's CRUD operations: parse any external
/// identifier, delegate to the repository, and on failure log once and
/// propagate the error unchanged. Holds no per-call state; safe to share and
/// call concurrently.
pub struct CrudService<E, R, L> {
    repo: Arc<R>,
    log: Arc<L>,
    _entity: PhantomData<fn() -> E>,
}

impl<E, R, L> CrudService<E, R, L>
where
    E: Clone + Serialize + Send + Sync,
    R: Repository<E>,
    L: Logger,
{
    pub fn new(repo: Arc<R>, log: Arc<L>) -> Self {
        Self {
            repo,
            log,
            _entity: PhantomData,
        }
    }

    pub async fn get_all(&self) -> Result<Vec<E>, ServiceError> {
        self.repo.get_all().await.map_err(|err| {
            self.log.error(&err, FAILED_TO_GET_ALL, Vec::new());
            err
        })
    }

    pub async fn get_one_by_id(&self, raw_id: &str) -> Result<E, ServiceError> {
        let id = self.parse_id(raw_id)?;
        self.repo.get_by_id(id).await.map_err(|err| {
            self.log
                .error(&err, FAILED_TO_GET_BY_ID, vec![(ID_FIELD, json!(id))]);
            err
        })
    }

    pub async fn create(&self, item: E) -> Result<E, ServiceError> {
        self.repo.insert(item.clone()).await.map_err(|err| {
            self.log
                .error(&err, FAILED_TO_CREATE, vec![(ITEM_FIELD, field(&item))]);
            err
        })
    }

    pub async fn update(&self, raw_id: &str, item: E) -> Result<(), ServiceError> {
        let id = self.parse_id(raw_id)?;
        self.repo.update(id, item.clone()).await.map_err(|err| {
            self.log.error(
                &err,
                FAILED_TO_UPDATE,
                vec![(ID_FIELD, json!(id)), (ITEM_FIELD, field(&item))],
            );
            err
        })
    }

    pub async fn delete(&self, raw_id: &str) -> Result<(), ServiceError> {
        let id = self.parse_id(raw_id)?;
        self.repo.remove(id).await.map_err(|err| {
            self.log
                .error(&err, FAILED_TO_DELETE, vec![(ID_FIELD, json!(id))]);
            err
        })
    }

    /// Validate an external identifier before any storage access. A parse
    /// failure is logged with the offending string and short-circuits the
    /// operation.
    fn parse_id(&self, raw: &str) -> Result<ItemId, ServiceError> {
        ItemId::parse(raw).map_err(|err: ModelError| {
            let err = ServiceError::from(err);
            self.log
                .error(&err, FAILED_TO_PARSE_ID, vec![(ID_FIELD, json!(raw))]);
            err
        })
    }
}

/// Render a contextual value for a failure record. Best-effort: a payload
/// that cannot serialize logs as null rather than failing the operation.
fn field(value: &impl Serialize) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}
