//! Route definitions for transactions and the joined views.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::transaction;
use crate::state::AppState;

/// ```text
/// GET    /transactions               -> list
/// POST   /transaction/create         -> create
/// PUT    /transaction/update/{id}    -> update
/// DELETE /transaction/delete/{id}    -> delete
/// GET    /transaction/get/{id}       -> get_by_id
/// GET    /transaction/details        -> details
/// GET    /transaction/filter         -> filter
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(transaction::list))
        .route("/transaction/create", post(transaction::create))
        .route("/transaction/update/{id}", put(transaction::update))
        .route("/transaction/delete/{id}", delete(transaction::delete))
        .route("/transaction/get/{id}", get(transaction::get_by_id))
        .route("/transaction/details", get(transaction::details))
        .route("/transaction/filter", get(transaction::filter))
}
