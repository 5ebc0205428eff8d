//! Repository for the `customers` table.

use ledgerline_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{CreateCustomer, Customer, UpdateCustomer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, customer_name, balance, created_at, updated_at, deleted_at";

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (customer_name, balance)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let customer = sqlx::query_as::<_, Customer>(&query)
            .bind(&input.customer_name)
            .bind(input.balance)
            .fetch_one(pool)
            .await?;
        tracing::debug!(customer_id = customer.id, "Customer created");
        Ok(customer)
    }

    /// Find a customer by ID. Soft-deleted rows are still returned.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all customers that are not soft-deleted, in storage order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE deleted_at IS NULL");
        sqlx::query_as::<_, Customer>(&query).fetch_all(pool).await
    }

    /// Overwrite a customer's name and balance.
    ///
    /// Returns `true` if a row with the given `id` exists. The row is not
    /// read back.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCustomer,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE customers SET customer_name = $2, balance = $3
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.customer_name)
        .bind(input.balance)
        .execute(pool)
        .await?;
        tracing::debug!(customer_id = id, rows = result.rows_affected(), "Customer updated");
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete an active customer, returning the marked row.
    ///
    /// Returns `None` if no active customer has the given `id`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customers SET deleted_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        let deleted = sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        if deleted.is_some() {
            tracing::debug!(customer_id = id, "Customer soft-deleted");
        }
        Ok(deleted)
    }
}
