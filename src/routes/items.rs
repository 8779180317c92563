use axum::extract::{Path, State};
use axum::Json;
use sqlx::PgPool;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::ItemProjection;

pub async fn add_item(
    State(pool): State<PgPool>,
    Json(req): Json<ItemProjection>,
) -> AppResult<Json<ItemProjection>> {
    let item = db::items::insert(&pool, &req).await?;
    tracing::debug!("Added item {} ({})", item.id, item.item_name);
    Ok(Json(ItemProjection::from(item)))
}

pub async fn view_items(State(pool): State<PgPool>) -> AppResult<Json<Vec<ItemProjection>>> {
    let items = db::items::list(&pool).await?;
    Ok(Json(items.into_iter().map(ItemProjection::from).collect()))
}

pub async fn search_by_id(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> AppResult<Json<ItemProjection>> {
    let item = db::items::find_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))?;
    Ok(Json(ItemProjection::from(item)))
}

pub async fn search_by_location(
    State(pool): State<PgPool>,
    Path(location_id): Path<i32>,
) -> AppResult<Json<Vec<ItemProjection>>> {
    // No match is an empty list, never an error.
    let items = db::items::find_by_location(&pool, location_id).await?;
    Ok(Json(items.into_iter().map(ItemProjection::from).collect()))
}

pub async fn search_by_name(
    State(pool): State<PgPool>,
    Path(item_name): Path<String>,
) -> AppResult<Json<Vec<ItemProjection>>> {
    let items = db::items::find_by_name(&pool, &item_name).await?;
    Ok(Json(items.into_iter().map(ItemProjection::from).collect()))
}

/// Replaces all five writable fields unconditionally; there is no partial
/// update and no ownership check on this route, matching the legacy API.
pub async fn update_item(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(req): Json<ItemProjection>,
) -> AppResult<Json<ItemProjection>> {
    let item = db::items::update(&pool, id, &req)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))?;
    Ok(Json(ItemProjection::from(item)))
}

pub async fn delete_item(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> AppResult<&'static str> {
    if !db::items::delete(&pool, id).await? {
        return Err(AppError::NotFound(format!("Item {} not found", id)));
    }
    tracing::debug!("Deleted item {}", id);
    Ok("Item deleted")
}
