//! Repository for the `items` table.

use ledgerline_core::types::DbId;
use sqlx::PgPool;

use crate::models::item::{CreateItem, Item, UpdateItem};

/// Columns returned by point operations (no `updated_at`).
const COLUMNS: &str = "id, item_name, cost, price, sort, created_at, deleted_at";

/// Columns returned by listing.
const LIST_COLUMNS: &str = "id, item_name, cost, price, sort, created_at, updated_at, deleted_at";

/// Provides CRUD operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateItem) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (item_name, cost, price, sort)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let item = sqlx::query_as::<_, Item>(&query)
            .bind(&input.item_name)
            .bind(input.cost)
            .bind(input.price)
            .bind(input.sort)
            .fetch_one(pool)
            .await?;
        tracing::debug!(item_id = item.id, "Item created");
        Ok(item)
    }

    /// Find an item by ID. Soft-deleted rows are still returned.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all items that are not soft-deleted, in storage order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {LIST_COLUMNS} FROM items WHERE deleted_at IS NULL");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// Overwrite an item's mutable fields. Returns `true` if the row exists.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateItem) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE items SET item_name = $2, cost = $3, price = $4, sort = $5
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.item_name)
        .bind(input.cost)
        .bind(input.price)
        .bind(input.sort)
        .execute(pool)
        .await?;
        tracing::debug!(item_id = id, rows = result.rows_affected(), "Item updated");
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete an active item, returning the marked row.
    ///
    /// Returns `None` if no active item has the given `id`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET deleted_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        let deleted = sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        if deleted.is_some() {
            tracing::debug!(item_id = id, "Item soft-deleted");
        }
        Ok(deleted)
    }
}
