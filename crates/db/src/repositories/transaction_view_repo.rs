//! Query builder for the joined transaction view.
//!
//! Both reads join `transaction_details` with `customers` and `items` using
//! inner joins, so a detail row whose customer or item is missing or
//! soft-deleted drops out of the result. The transaction's own `deleted_at`
//! is not filtered.

use sqlx::PgPool;

use crate::models::transaction_view::{TransactionFilter, TransactionView};

/// Base SELECT shared by the unfiltered and filtered reads.
const VIEW_SELECT: &str = "SELECT \
         tv.id, \
         tv.customer_id, \
         c.customer_name, \
         tv.item_id, \
         i.item_name, \
         tv.qty, \
         tv.price, \
         tv.amount, \
         tv.created_at, \
         tv.updated_at, \
         tv.deleted_at \
     FROM transaction_details tv \
     INNER JOIN customers c ON tv.customer_id = c.id AND c.deleted_at IS NULL \
     INNER JOIN items i ON tv.item_id = i.id AND i.deleted_at IS NULL";

/// Provides the joined read views over transactions.
pub struct TransactionViewRepo;

impl TransactionViewRepo {
    /// Every detail row that joins to a live customer and item.
    pub async fn list_details(pool: &PgPool) -> Result<Vec<TransactionView>, sqlx::Error> {
        sqlx::query_as::<_, TransactionView>(VIEW_SELECT)
            .fetch_all(pool)
            .await
    }

    /// Detail rows narrowed by the constraints present in `filter`.
    ///
    /// Values are bound positionally in the same order
    /// [`filter_query`] numbers them.
    pub async fn filter(
        pool: &PgPool,
        filter: &TransactionFilter,
    ) -> Result<Vec<TransactionView>, sqlx::Error> {
        let query = filter_query(filter);
        tracing::debug!(?filter, %query, "Filtering transaction details");

        let mut q = sqlx::query_as::<_, TransactionView>(&query);

        if let Some(id) = filter.id {
            q = q.bind(id);
        }
        if let Some(ref customer_name) = filter.customer_name {
            q = q.bind(customer_name);
        }
        if let Some(ref item_name) = filter.item_name {
            q = q.bind(item_name);
        }

        q.fetch_all(pool).await
    }
}

/// Render the SQL for `filter`, with one `$n` placeholder per present field.
///
/// Placeholders are numbered in the order id, customer name, item name,
/// skipping absent fields.
pub fn filter_query(filter: &TransactionFilter) -> String {
    if filter.is_empty() {
        return VIEW_SELECT.to_string();
    }

    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx: u32 = 1;

    if filter.id.is_some() {
        conditions.push(format!("tv.id = ${bind_idx}"));
        bind_idx += 1;
    }

    if filter.customer_name.is_some() {
        conditions.push(format!("c.customer_name = ${bind_idx}"));
        bind_idx += 1;
    }

    if filter.item_name.is_some() {
        conditions.push(format!("i.item_name = ${bind_idx}"));
    }

    format!("{VIEW_SELECT} WHERE {}", conditions.join(" AND "))
}
