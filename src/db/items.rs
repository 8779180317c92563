use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::{Item, ItemProjection};

pub async fn insert(pool: &PgPool, item: &ItemProjection) -> AppResult<Item> {
    let created: Item = sqlx::query_as(
        "INSERT INTO item (item_name, description, picture, created_by, location_id) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id, item_name, description, picture, created_on, created_by, updated_on, location_id",
    )
    .bind(&item.item_name)
    .bind(&item.description)
    .bind(&item.picture)
    .bind(item.created_by)
    .bind(item.location_id)
    .fetch_one(pool)
    .await?;
    Ok(created)
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> AppResult<Option<Item>> {
    let item: Option<Item> = sqlx::query_as(
        "SELECT id, item_name, description, picture, created_on, created_by, updated_on, location_id \
         FROM item WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(item)
}

pub async fn list(pool: &PgPool) -> AppResult<Vec<Item>> {
    let items: Vec<Item> = sqlx::query_as(
        "SELECT id, item_name, description, picture, created_on, created_by, updated_on, location_id \
         FROM item ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(items)
}

/// Full-table scan on location_id; no secondary index at this scale.
pub async fn find_by_location(pool: &PgPool, location_id: i32) -> AppResult<Vec<Item>> {
    let items: Vec<Item> = sqlx::query_as(
        "SELECT id, item_name, description, picture, created_on, created_by, updated_on, location_id \
         FROM item WHERE location_id = $1 ORDER BY id",
    )
    .bind(location_id)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

/// Exact match on item_name, same scan caveat as [`find_by_location`].
pub async fn find_by_name(pool: &PgPool, item_name: &str) -> AppResult<Vec<Item>> {
    let items: Vec<Item> = sqlx::query_as(
        "SELECT id, item_name, description, picture, created_on, created_by, updated_on, location_id \
         FROM item WHERE item_name = $1 ORDER BY id",
    )
    .bind(item_name)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

/// Overwrites all five writable fields in one statement; the store stamps
/// updated_on. Returns None when no row has the given id.
pub async fn update(pool: &PgPool, id: i32, item: &ItemProjection) -> AppResult<Option<Item>> {
    let updated: Option<Item> = sqlx::query_as(
        "UPDATE item \
         SET item_name = $1, description = $2, picture = $3, created_by = $4, location_id = $5, \
             updated_on = now() \
         WHERE id = $6 \
         RETURNING id, item_name, description, picture, created_on, created_by, updated_on, location_id",
    )
    .bind(&item.item_name)
    .bind(&item.description)
    .bind(&item.picture)
    .bind(item.created_by)
    .bind(item.location_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(updated)
}

/// Returns false when no row had the given id.
pub async fn delete(pool: &PgPool, id: i32) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM item WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
