//! Repository for the `transactions` table.

use ledgerline_core::types::DbId;
use sqlx::PgPool;

use crate::models::transaction::{CreateTransaction, Transaction, UpdateTransaction};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, customer_id, item_id, qty, amount, created_at, updated_at, deleted_at";

/// Provides CRUD operations for transactions.
///
/// No read here filters on `deleted_at`.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Insert a new transaction, returning the created row.
    ///
    /// A missing customer or item is reported by the storage engine as a
    /// foreign-key violation.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO transactions (customer_id, item_id, qty, amount)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let transaction = sqlx::query_as::<_, Transaction>(&query)
            .bind(input.customer_id)
            .bind(input.item_id)
            .bind(input.qty)
            .bind(input.amount)
            .fetch_one(pool)
            .await?;
        tracing::debug!(
            transaction_id = transaction.id,
            customer_id = transaction.customer_id,
            item_id = transaction.item_id,
            "Transaction created"
        );
        Ok(transaction)
    }

    /// Find a transaction by ID, soft-deleted or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Transaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM transactions WHERE id = $1");
        sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every transaction, including soft-deleted ones.
    pub async fn list(pool: &PgPool) -> Result<Vec<Transaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM transactions");
        sqlx::query_as::<_, Transaction>(&query)
            .fetch_all(pool)
            .await
    }

    /// Set `qty` and `amount` and refresh `updated_at`.
    ///
    /// Returns `true` if the row exists. Customer and item ids in `input`
    /// are ignored.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTransaction,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE transactions SET qty = $2, amount = $3, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(input.qty)
        .bind(input.amount)
        .execute(pool)
        .await?;
        tracing::debug!(transaction_id = id, rows = result.rows_affected(), "Transaction updated");
        Ok(result.rows_affected() > 0)
    }

    /// Mark a transaction deleted. A missing id is a no-op, not an error.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        let result = sqlx::query("UPDATE transactions SET deleted_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        tracing::debug!(
            transaction_id = id,
            rows = result.rows_affected(),
            "Transaction soft-deleted"
        );
        Ok(())
    }
}
