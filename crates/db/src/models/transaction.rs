//! Transaction entity model and DTOs.

use ledgerline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A transaction row from the `transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: DbId,
    pub customer_id: DbId,
    pub item_id: DbId,
    pub qty: i32,
    pub amount: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating a new transaction.
///
/// `customer_id` and `item_id` are not checked here; the foreign keys on
/// `transactions` reject dangling references.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransaction {
    pub customer_id: DbId,
    pub item_id: DbId,
    pub qty: i32,
    pub amount: f64,
}

/// DTO for updating a transaction.
///
/// Only `qty` and `amount` are written. The customer and item ids are
/// accepted so they can be echoed back; they are never stored.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTransaction {
    #[serde(default)]
    pub customer_id: DbId,
    #[serde(default)]
    pub item_id: DbId,
    pub qty: i32,
    pub amount: f64,
}

impl UpdateTransaction {
    pub fn echo(&self, id: DbId) -> TransactionEcho {
        TransactionEcho {
            id,
            customer_id: self.customer_id,
            item_id: self.item_id,
            qty: self.qty,
            amount: self.amount,
        }
    }
}

/// Values supplied to an update, echoed back without re-reading the row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionEcho {
    pub id: DbId,
    pub customer_id: DbId,
    pub item_id: DbId,
    pub qty: i32,
    pub amount: f64,
}
