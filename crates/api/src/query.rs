//! Query parameter types for API handlers.

use ledgerline_core::error::CoreError;
use ledgerline_core::types::DbId;
use ledgerline_db::models::transaction_view::TransactionFilter;
use serde::Deserialize;

/// Query parameters for `GET /v1/transaction/filter`
/// (`?id=&customer_name=&item_name=`).
///
/// Every parameter is optional and an empty value counts as absent.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionFilterParams {
    pub id: Option<String>,
    pub customer_name: Option<String>,
    pub item_name: Option<String>,
}

impl TransactionFilterParams {
    /// Parse the raw parameters into a [`TransactionFilter`].
    ///
    /// Fails with a validation error if `id` is present but not an integer.
    pub fn into_filter(self) -> Result<TransactionFilter, CoreError> {
        let id: DbId = match self.id.as_deref() {
            None | Some("") => 0,
            Some(raw) => raw
                .parse()
                .map_err(|_| CoreError::Validation("Invalid transaction ID".into()))?,
        };

        Ok(TransactionFilter::new(
            id,
            self.customer_name.as_deref().unwrap_or_default(),
            self.item_name.as_deref().unwrap_or_default(),
        ))
    }
}
