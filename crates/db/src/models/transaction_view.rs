//! Joined transaction view and its filter.

use ledgerline_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One row of `transaction_details` joined with its customer and item.
///
/// Read-only; rebuilt by every query.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TransactionView {
    pub id: DbId,
    pub customer_id: DbId,
    pub customer_name: String,
    pub item_id: DbId,
    pub item_name: String,
    pub qty: i32,
    pub price: f64,
    pub amount: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// Optional equality constraints for the joined view.
///
/// A `None` field imposes no constraint. Present fields are AND-combined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub id: Option<DbId>,
    pub customer_name: Option<String>,
    pub item_name: Option<String>,
}

impl TransactionFilter {
    /// Build a filter from raw request values.
    ///
    /// An id of `0` and empty names mean "absent".
    pub fn new(id: DbId, customer_name: &str, item_name: &str) -> Self {
        Self {
            id: (id != 0).then_some(id),
            customer_name: (!customer_name.is_empty()).then(|| customer_name.to_string()),
            item_name: (!item_name.is_empty()).then(|| item_name.to_string()),
        }
    }

    /// `true` when no constraint is present.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.customer_name.is_none() && self.item_name.is_none()
    }
}
