//! Item entity model and DTOs.

use ledgerline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An item row from the `items` table.
///
/// Point operations (create, get, delete) return the creation timestamp
/// only; `updated_at` is populated by listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub item_name: String,
    pub cost: f64,
    pub price: f64,
    pub sort: i32,
    pub created_at: Timestamp,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating a new item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    pub item_name: String,
    pub cost: f64,
    pub price: f64,
    pub sort: i32,
}

/// DTO for overwriting an item's mutable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItem {
    pub item_name: String,
    pub cost: f64,
    pub price: f64,
    pub sort: i32,
}

impl UpdateItem {
    pub fn echo(&self, id: DbId) -> ItemEcho {
        ItemEcho {
            id,
            item_name: self.item_name.clone(),
            cost: self.cost,
            price: self.price,
            sort: self.sort,
        }
    }
}

/// Values written by an update, echoed back without re-reading the row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemEcho {
    pub id: DbId,
    pub item_name: String,
    pub cost: f64,
    pub price: f64,
    pub sort: i32,
}
