//! Customer entity model and DTOs.

use ledgerline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A customer row from the `customers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub customer_name: String,
    pub balance: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating a new customer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomer {
    pub customer_name: String,
    pub balance: f64,
}

/// DTO for overwriting a customer's mutable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCustomer {
    pub customer_name: String,
    pub balance: f64,
}

impl UpdateCustomer {
    /// The response body for a successful update: the input, keyed by `id`.
    pub fn echo(&self, id: DbId) -> CustomerEcho {
        CustomerEcho {
            id,
            customer_name: self.customer_name.clone(),
            balance: self.balance,
        }
    }
}

/// Values written by an update, echoed back without re-reading the row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerEcho {
    pub id: DbId,
    pub customer_name: String,
    pub balance: f64,
}
