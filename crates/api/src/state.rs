use std::sync::Arc;

use ledgerline_core::error::CoreError;
use ledgerline_core::types::DbId;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, passed to every repository call.
    pub pool: ledgerline_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// The error reported when a point lookup or delete matches no row.
    ///
    /// Without `STRICT_NOT_FOUND` this is the storage-level
    /// `RowNotFound` error (500); with it, a 404.
    pub fn not_found(&self, entity: &'static str, id: DbId) -> AppError {
        if self.config.strict_not_found {
            AppError::Core(CoreError::NotFound { entity, id })
        } else {
            AppError::Database(sqlx::Error::RowNotFound)
        }
    }
}
