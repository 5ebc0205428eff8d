//! Handlers for the item resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ledgerline_core::types::DbId;
use ledgerline_db::models::item::{CreateItem, Item, ItemEcho, UpdateItem};
use ledgerline_db::repositories::ItemRepo;

use crate::error::AppResult;
use crate::extract::{JsonBody, PathParam};
use crate::state::AppState;

/// GET /v1/items
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    let items = ItemRepo::list(&state.pool).await?;
    Ok(Json(items))
}

/// POST /v1/item/create
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateItem>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let item = ItemRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /v1/item/get/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Item>> {
    let item = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| state.not_found("Item", id))?;
    Ok(Json(item))
}

/// PUT /v1/item/update/{id}
///
/// Responds with the submitted values; the row is not read back.
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateItem>,
) -> AppResult<Json<ItemEcho>> {
    let matched = ItemRepo::update(&state.pool, id, &input).await?;
    if !matched && state.config.strict_not_found {
        return Err(state.not_found("Item", id));
    }
    Ok(Json(input.echo(id)))
}

/// DELETE /v1/item/delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Item>> {
    let item = ItemRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| state.not_found("Item", id))?;
    Ok(Json(item))
}
