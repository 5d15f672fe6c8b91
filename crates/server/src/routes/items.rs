use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use models::Item;
use service::{
    storage::JsonFileRepository, CrudService, ServiceError, TracingLogger,
};

use crate::errors::JsonApiError;

pub type ItemService = CrudService<Item, JsonFileRepository<Item>, TracingLogger>;

#[derive(Clone)]
pub struct AppState {
    pub items: Arc<ItemService>,
}

/// List all stored items.
pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<Item>>, JsonApiError> {
    let items = state.items.get_all().await?;
    Ok(Json(items))
}

/// Fetch one item by id.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, JsonApiError> {
    let item = state.items.get_one_by_id(&id).await?;
    Ok(Json(item))
}

/// Create an item from the request body. Payload validation runs before the
/// service is invoked.
pub async fn create_item(
    State(state): State<AppState>,
    Json(input): Json<Item>,
) -> Result<Json<Item>, JsonApiError> {
    input.validate().map_err(ServiceError::from)?;
    let created = state.items.create(input).await?;
    Ok(Json(created))
}

/// Replace the item at the given id.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<Item>,
) -> Result<StatusCode, JsonApiError> {
    input.validate().map_err(ServiceError::from)?;
    state.items.update(&id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete the item at the given id.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    state.items.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
